//! Inspect or create the config file.

use crate::config::{self, Config, mask_secret};
use crate::error::ResultExt;

use super::AppContext;

/// Print the effective configuration, optionally writing a default file.
pub fn cmd_config(ctx: &AppContext, init: bool) -> anyhow::Result<()> {
    match &ctx.config_path {
        Some(path) if init && path.exists() => {
            println!("Config already exists at {:?}, leaving it alone.", path);
        }
        Some(path) if init => {
            config::save_to(&Config::default(), path).with_context("writing default config")?;
            println!("✓ Wrote default config to {:?}", path);
        }
        Some(path) => println!("Config file: {:?}", path),
        None => println!("Config file: (no config directory on this system)"),
    }

    let c = &ctx.config;
    println!();
    println!("API key:     {}", describe_key(ctx.api_key.as_deref()));
    println!(
        "Model:       {} ({} songs)",
        c.model.name, c.model.song_count
    );
    println!("Model URL:   {}", c.model.base_url);
    println!(
        "Artwork:     {} ({}px)",
        c.artwork.search_url, c.artwork.size
    );
    println!("Dial:        {}", c.radio.selection());
    println!(
        "Receipt:     {} columns, {}ms per line",
        c.display.width, c.display.print_delay_ms
    );
    Ok(())
}

fn describe_key(key: Option<&str>) -> String {
    match key {
        Some(k) => format!("✓ {}", mask_secret(k)),
        None => format!("✗ not set ({})", config::API_KEY_ENV_VARS.join(" / ")),
    }
}
