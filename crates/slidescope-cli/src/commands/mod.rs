pub mod config;
pub mod info;
pub mod project;
pub mod sweep;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use slidescope_core::config::ViewerConfig;
use slidescope_core::geometry::{Point, Size};
use slidescope_core::io::image_io::read_dimensions;
use slidescope_core::payload::{load_payload, SlidePayload};
use tracing::debug;

/// Inputs shared by commands that lay out a slide.
#[derive(Args)]
pub struct SlideArgs {
    /// Payload JSON with patient data and detections
    #[arg(long)]
    pub payload: Option<PathBuf>,

    /// Slide image; its intrinsic size is read from the file
    #[arg(long, conflicts_with = "image_size")]
    pub image: Option<PathBuf>,

    /// Intrinsic image size as WIDTHxHEIGHT, when no image file is given
    #[arg(long, value_parser = parse_size)]
    pub image_size: Option<Size>,

    /// Container size as WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size, default_value = "800x600")]
    pub container: Size,

    /// Viewer config TOML
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SlideArgs {
    pub fn intrinsic_size(&self) -> Result<Size> {
        match (&self.image, self.image_size) {
            (Some(path), _) => read_dimensions(path)
                .with_context(|| format!("Failed to read image {}", path.display())),
            (None, Some(size)) => Ok(size),
            // Without an image the container doubles as the intrinsic size.
            (None, None) => Ok(self.container),
        }
    }

    pub fn payload(&self) -> Result<SlidePayload> {
        match &self.payload {
            Some(path) => load_payload(path)
                .with_context(|| format!("Failed to load payload {}", path.display())),
            None => Ok(SlidePayload::default()),
        }
    }

    pub fn viewer_config(&self) -> Result<ViewerConfig> {
        load_config(self.config.as_deref())
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    let Some(path) = path else {
        return Ok(ViewerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: ViewerConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    let config = config.validated()?;
    debug!(path = %path.display(), ?config, "Loaded viewer config");
    Ok(config)
}

pub fn parse_size(s: &str) -> Result<Size> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let size = Size::new(w.trim().parse()?, h.trim().parse()?);
    if !size.is_measured() {
        bail!("size must be positive, got '{s}'");
    }
    Ok(size)
}

pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("expected X,Y, got '{s}'"))?;
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
}
