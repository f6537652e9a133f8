use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use slidescope_core::payload::load_payload;
use slidescope_core::summary::summarize;

use crate::summary::{print_cell_counts, print_patient};

#[derive(Args)]
pub struct InfoArgs {
    /// Payload JSON file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let payload = load_payload(&args.file)
        .with_context(|| format!("Failed to load payload {}", args.file.display()))?;

    print_patient(&payload.patient);
    print_cell_counts(&summarize(&payload.detections));
    Ok(())
}
