//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `tune`: one press of the print button
//! - `radio`: the interactive radio (default when no command is given)
//! - `config`: inspect or create the config file

mod config;
mod radio;
mod tune;

use std::path::PathBuf;
use std::time::Duration;

use chrono::Local;
use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::artwork::ItunesClient;
use crate::config::{Config, api_key_from_env};
use crate::error::Error;
use crate::model::{ArtistType, Era, Selection, Song};
use crate::radio::Radio;
use crate::receipt;
use crate::recommend::GeminiClient;

pub use config::cmd_config;
pub use radio::cmd_radio;
pub use tune::cmd_tune;

/// Retro Radio CLI
#[derive(Parser)]
#[command(author, version, about = "Tune in to a receipt of Cantopop classics", long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Gemini API key (or set GEMINI_API_KEY / API_KEY)
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print one receipt and exit
    Tune {
        /// Artist type on the knob
        #[arg(short, long, value_enum)]
        artist: Option<ArtistType>,
        /// Era on the slider
        #[arg(short, long, value_enum)]
        era: Option<Era>,
        /// Print the song list as JSON instead of a receipt
        #[arg(long)]
        json: bool,
        /// Print the receipt at once
        #[arg(long)]
        no_animation: bool,
    },
    /// Interactive radio: turn the knob, slide the era, press print
    Radio,
    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Settings resolved once at startup and shared by every command.
pub struct AppContext {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
}

impl AppContext {
    /// Load the config file and resolve the API key.
    pub fn from_cli(cli: &Cli) -> Self {
        let config_path = cli.config.clone().or_else(crate::config::config_path);
        let config = match &config_path {
            Some(path) => crate::config::load_from(path),
            None => crate::config::load(),
        };
        let flag = cli.api_key.clone().filter(|k| !k.trim().is_empty());
        let explicit = flag.or_else(api_key_from_env);
        let api_key = config.resolve_api_key(explicit.as_deref());

        Self {
            config,
            config_path,
            api_key,
        }
    }

    /// Build a radio wired to the real APIs.
    pub fn build_radio(
        &self,
        selection: Selection,
    ) -> Result<Radio<GeminiClient, ItunesClient>, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let recommender = GeminiClient::new(api_key, &self.config.model)?;
        let artwork = ItunesClient::new(&self.config.artwork)?;
        Ok(Radio::new(
            selection,
            recommender,
            artwork,
            self.config.artwork.placeholder_size,
        ))
    }

    fn print_delay(&self, animate: bool) -> Duration {
        if animate {
            Duration::from_millis(self.config.display.print_delay_ms)
        } else {
            Duration::ZERO
        }
    }
}

/// Run the command line.
///
/// With no subcommand the interactive radio starts.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;
    let ctx = AppContext::from_cli(cli);

    match &cli.command {
        Some(Commands::Tune {
            artist,
            era,
            json,
            no_animation,
        }) => cmd_tune(&rt, &ctx, *artist, *era, *json, !*no_animation),
        Some(Commands::Config { init }) => cmd_config(&ctx, *init),
        Some(Commands::Radio) | None => cmd_radio(&rt, &ctx),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Feed a receipt for `songs` out to stdout.
pub(crate) async fn print_receipt(
    songs: &[Song],
    selection: Selection,
    width: usize,
    delay: Duration,
) -> std::io::Result<()> {
    let lines = receipt::render(songs, selection, Local::now(), width);
    let mut out = std::io::stdout();
    receipt::print_lines(&mut out, &lines, delay).await
}
