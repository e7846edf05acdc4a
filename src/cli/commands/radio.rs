//! Interactive radio.
//!
//! Reads one command per line from stdin. Printing runs on its own task so
//! the dial stays responsive; pressing print again while tuning is ignored.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;

use crate::artwork::ItunesClient;
use crate::model::{ArtistType, Era};
use crate::radio::{Phase, Radio, RadioState, TUNING_ALERT, TuneOutcome};
use crate::recommend::GeminiClient;

use super::{AppContext, print_receipt};

const HELP: &str = "\
Commands:
  knob          turn the artist knob (男歌手 → 女歌手 → 樂隊/組合)
  era <era>     set the era slider (80s, 90s, 00s)
  slide <0-2>   move the era slider to a position
  print         tune in and print a receipt
  show          reprint the last receipt
  status        show the dial and printer state
  help          this text
  quit          switch off";

/// One line of listener input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadioCommand {
    Knob,
    Era(Era),
    Slide(usize),
    Print,
    Show,
    Status,
    Help,
    Quit,
}

/// Parse a line of input. Empty lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<RadioCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let cmd = match (head.to_lowercase().as_str(), arg) {
        ("knob" | "k", None) => RadioCommand::Knob,
        ("era" | "e", Some(era)) => RadioCommand::Era(era.parse()?),
        ("era" | "e", None) => return Err("usage: era <80s|90s|00s>".to_string()),
        ("slide" | "s", Some(pos)) => match pos.parse::<usize>() {
            Ok(p) if p <= 2 => RadioCommand::Slide(p),
            _ => return Err("usage: slide <0|1|2>".to_string()),
        },
        ("slide" | "s", None) => return Err("usage: slide <0|1|2>".to_string()),
        ("print" | "p" | "tune", None) => RadioCommand::Print,
        ("show", None) => RadioCommand::Show,
        ("status", None) => RadioCommand::Status,
        ("help" | "?", None) => RadioCommand::Help,
        ("quit" | "q" | "exit" | "off", None) => RadioCommand::Quit,
        (other, _) => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(cmd))
}

type LiveRadio = Radio<GeminiClient, ItunesClient>;

/// Run the interactive radio until `quit`, EOF or Ctrl-C.
pub fn cmd_radio(rt: &Runtime, ctx: &AppContext) -> anyhow::Result<()> {
    let radio = Arc::new(ctx.build_radio(ctx.config.radio.selection())?);
    let width = ctx.config.display.width;
    let delay = ctx.print_delay(true);

    rt.block_on(run_radio(radio, width, delay))
}

async fn run_radio(radio: Arc<LiveRadio>, width: usize, delay: Duration) -> anyhow::Result<()> {
    println!("📻 Retro Radio is on. Type 'help' for controls.");
    print_status(&radio.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        match cmd {
            RadioCommand::Knob => {
                let artist = radio.turn_knob();
                println!("Knob → {} ({}°)", artist.label(), artist.rotation());
            }
            RadioCommand::Era(era) => {
                radio.set_era(era);
                println!("Era → {}", era);
            }
            RadioCommand::Slide(pos) => {
                let era = Era::from_slider(pos);
                radio.set_era(era);
                println!("Era → {}", era);
            }
            RadioCommand::Print => press_print(radio.clone(), width, delay),
            RadioCommand::Show => {
                let state = radio.snapshot();
                if state.visible_songs().is_empty() {
                    println!("Nothing printed yet. Type 'print'.");
                } else {
                    print_receipt(state.visible_songs(), state.selection, width, delay).await?;
                }
            }
            RadioCommand::Status => print_status(&radio.snapshot()),
            RadioCommand::Help => println!("{HELP}"),
            RadioCommand::Quit => break,
        }
    }

    println!("📻 Off.");
    Ok(())
}

/// Start a generation cycle in the background.
fn press_print(radio: Arc<LiveRadio>, width: usize, delay: Duration) {
    if radio.phase() == Phase::Loading {
        println!("Still tuning...");
        return;
    }

    tokio::spawn(async move {
        println!("Tuning in to {}...", radio.selection());
        match radio.generate().await {
            Ok(TuneOutcome::Tuned { selection, songs }) => {
                if let Err(e) = print_receipt(&songs, selection, width, delay).await {
                    tracing::error!("Failed to print receipt: {}", e);
                }
            }
            Ok(TuneOutcome::Busy) => println!("Still tuning..."),
            Err(_) => println!("{TUNING_ALERT}"),
        }
    });
}

fn print_status(state: &RadioState) {
    let printer = match state.phase {
        Phase::Idle => "idle",
        Phase::Loading => "tuning",
        Phase::Ready => "printed",
    };
    let positions: Vec<String> = ArtistType::ALL
        .iter()
        .map(|a| {
            if *a == state.selection.artist_type {
                format!("[{}]", a.label())
            } else {
                a.label().to_string()
            }
        })
        .collect();
    let slider: Vec<String> = Era::ALL
        .iter()
        .map(|e| {
            if e.slider_position() == state.selection.era.slider_position() {
                format!("[{}]", e.label())
            } else {
                e.label().to_string()
            }
        })
        .collect();
    println!(
        "Knob: {}  Era: {}  Printer: {} ({} songs)",
        positions.join(" "),
        slider.join(" "),
        printer,
        state.visible_songs().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("knob"), Ok(Some(RadioCommand::Knob)));
        assert_eq!(parse_command("  PRINT "), Ok(Some(RadioCommand::Print)));
        assert_eq!(parse_command("q"), Ok(Some(RadioCommand::Quit)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn test_parse_era_and_slider() {
        assert_eq!(
            parse_command("era 00s"),
            Ok(Some(RadioCommand::Era(Era::TwoThousands)))
        );
        assert_eq!(parse_command("slide 0"), Ok(Some(RadioCommand::Slide(0))));
        assert!(parse_command("slide 3").is_err());
        assert!(parse_command("era 70s").is_err());
        assert!(parse_command("era").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = parse_command("volume 11").unwrap_err();
        assert!(err.contains("volume"));
    }
}
