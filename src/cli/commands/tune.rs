//! One-shot tuning: print a single receipt and exit.

use tokio::runtime::Runtime;

use crate::error::{Error, ResultExt};
use crate::model::{ArtistType, Era, Selection};
use crate::radio::{TUNING_ALERT, TuneOutcome};

use super::{AppContext, print_receipt};

/// Press print once with the given (or configured) dial settings.
pub fn cmd_tune(
    rt: &Runtime,
    ctx: &AppContext,
    artist: Option<ArtistType>,
    era: Option<Era>,
    json: bool,
    animate: bool,
) -> anyhow::Result<()> {
    let mut selection = ctx.config.radio.selection();
    if let Some(artist) = artist {
        selection.artist_type = artist;
    }
    if let Some(era) = era {
        selection.era = era;
    }

    rt.block_on(tune_once(ctx, selection, json, animate))
}

async fn tune_once(
    ctx: &AppContext,
    selection: Selection,
    json: bool,
    animate: bool,
) -> anyhow::Result<()> {
    let radio = ctx.build_radio(selection)?;

    if !json {
        eprintln!("📻 Tuning in to {}...", selection);
    }

    match radio.generate().await {
        Ok(TuneOutcome::Tuned { selection, songs }) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&songs)?);
            } else {
                print_receipt(
                    &songs,
                    selection,
                    ctx.config.display.width,
                    ctx.print_delay(animate),
                )
                .await
                .with_context("printing receipt")?;
            }
            Ok(())
        }
        Ok(TuneOutcome::Busy) => Ok(()),
        Err(e) => {
            eprintln!("{TUNING_ALERT}");
            Err(Error::Request(e).into())
        }
    }
}
