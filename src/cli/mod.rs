//! Command-line interface for the radio.
//!
//! One-shot tuning, the interactive radio, and config inspection.

mod commands;

pub use commands::{Cli, run_command};
