//! Retro Radio - a terminal radio that prints Cantopop recommendations.
//!
//! Pick an artist type and an era, press print, and a generative model
//! suggests twenty Cantonese pop songs. Each song gets album artwork from
//! the iTunes Search API before the list is printed as a receipt.

pub mod artwork;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod radio;
pub mod receipt;
pub mod recommend;
#[cfg(test)]
pub mod test_utils;
pub mod traits;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging (stderr, so receipts on stdout stay clean)
    let default_level = if args.verbose {
        "retro_radio=debug"
    } else {
        "retro_radio=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
