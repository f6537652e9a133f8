mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "slidescope", about = "Slide detection viewer toolkit")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show patient metadata and cell counts from a payload
    Info(commands::info::InfoArgs),
    /// Project detections for a single pointer position
    Project(commands::project::ProjectArgs),
    /// Sweep the pointer across the container and report magnifier hits
    Sweep(commands::sweep::SweepArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Project(args) => commands::project::run(args),
        Commands::Sweep(args) => commands::sweep::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
