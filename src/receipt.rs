//! Receipt rendering.
//!
//! Songs are laid out like a till receipt: a header with the dial settings
//! and print time, one numbered entry per song, and a footer with the item
//! count and running time. Printing feeds the lines out one at a time.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::model::{Selection, Song};

const TITLE: &str = "RETRO RADIO 港樂電台";
const FAREWELL: &str = "THANK YOU FOR LISTENING";

/// Render the receipt for `songs` at `width` columns.
pub fn render(
    songs: &[Song],
    selection: Selection,
    printed_at: DateTime<Local>,
    width: usize,
) -> Vec<String> {
    let width = width.max(24);
    let mut lines = Vec::with_capacity(songs.len() * 3 + 8);

    lines.push("=".repeat(width));
    lines.push(center(TITLE, width));
    lines.push(center(
        &format!("{} · {}", selection, printed_at.format("%Y-%m-%d %H:%M")),
        width,
    ));
    lines.push("-".repeat(width));

    for (i, song) in songs.iter().enumerate() {
        let number = format!("{:02} ", i + 1);
        lines.push(spread(
            &format!("{number}{}", song.title),
            &song.duration,
            width,
        ));
        lines.push(truncate(
            &format!("   {} · {} ({})", song.artist, song.album, song.year),
            width,
        ));
        if let Some(url) = &song.cover_url {
            lines.push(truncate(&format!("   ♪ {url}"), width));
        }
    }

    lines.push("-".repeat(width));
    lines.push(spread(
        &format!("ITEMS {}", songs.len()),
        &format!("TOTAL {}", format_total(total_duration(songs))),
        width,
    ));
    lines.push(center(FAREWELL, width));
    lines.push("=".repeat(width));
    lines
}

/// Sum of all parseable song durations.
pub fn total_duration(songs: &[Song]) -> Duration {
    songs.iter().filter_map(Song::duration_parsed).sum()
}

/// `M:SS`, or `H:MM:SS` past an hour.
pub fn format_total(total: Duration) -> String {
    let secs = total.as_secs();
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

/// Write lines to `out`, pausing `delay` between them.
pub async fn print_lines<W: Write>(
    out: &mut W,
    lines: &[String],
    delay: Duration,
) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
        out.flush()?;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
    Ok(())
}

/// Terminal columns a string occupies. CJK and fullwidth characters take two.
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6
        | 0x20000..=0x3FFFD => 2,
        _ => 1,
    }
}

/// Cut `s` to at most `width` columns, marking the cut with `…`.
fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = char_width(c);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn center(s: &str, width: usize) -> String {
    let s = truncate(s, width);
    let pad = width.saturating_sub(display_width(&s)) / 2;
    format!("{}{}", " ".repeat(pad), s)
}

/// `left` flush left, `right` flush right, at least one space between.
fn spread(left: &str, right: &str, width: usize) -> String {
    let right_w = display_width(right);
    let left = truncate(left, width.saturating_sub(right_w + 1).max(1));
    let gap = width.saturating_sub(display_width(&left) + right_w).max(1);
    format!("{left}{}{right}", " ".repeat(gap))
}
