//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod geocode;
pub mod serve;
pub mod validate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Geocode addresses and sanity-check Vietnamese coordinates
#[derive(Parser)]
#[command(name = "vn-geocoder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Geocode an address to coordinates
    Geocode(geocode::GeocodeArgs),

    /// Reverse geocode coordinates to addresses
    Reverse(geocode::ReverseArgs),

    /// Check coordinates for plausibility (offline)
    Validate(validate::ValidateArgs),

    /// Great-circle distance between two points
    Distance(validate::DistanceArgs),

    /// Manage configuration
    Config(config::ConfigArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),
}

/// Initialize logging to stderr, honoring RUST_LOG
fn init_logging(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI
pub async fn run() -> crate::error::Result<()> {
    let cli = Cli::parse();

    init_logging(match cli.command {
        Commands::Serve(_) => "info",
        _ => "warn",
    });

    match cli.command {
        Commands::Geocode(args) => geocode::run_geocode(args).await,
        Commands::Reverse(args) => geocode::run_reverse(args).await,
        Commands::Validate(args) => validate::run_validate(args),
        Commands::Distance(args) => validate::run_distance(args),
        Commands::Config(args) => config::run(args),
        Commands::Serve(args) => serve::run(args).await,
    }
}
