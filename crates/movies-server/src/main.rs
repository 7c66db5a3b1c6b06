//! Movies catalog server
//!
//! Read-only HTTP API over a films / persons / genres search index with a
//! cache-aside layer in front of it.

// Force-link movies-providers so its linkme registrations are included
extern crate movies_providers;

use clap::Parser;
use movies_server::run;

/// Command line interface for the Movies catalog
#[derive(Parser, Debug)]
#[command(name = "movies")]
#[command(about = "Movies catalog - cached search API over films, persons and genres")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
