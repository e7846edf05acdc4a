//! Core data models for the radio.
//!
//! Defines the primary entities: [`Song`] and the listener's [`Selection`]
//! (an [`ArtistType`] on the knob and an [`Era`] on the slider).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A recommended song as printed on the receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Song title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Release year, as reported by the model
    pub year: String,
    /// Album title
    pub album: String,
    /// Length in `MM:SS`
    pub duration: String,
    /// Free-form description of the cover, when the model provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_description: Option<String>,
    /// Artwork URL, filled in by the artwork enricher
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

impl Song {
    /// Parse `duration` into a [`Duration`].
    ///
    /// Accepts `M:SS`, `MM:SS` and `H:MM:SS`. Returns `None` for anything else.
    pub fn duration_parsed(&self) -> Option<Duration> {
        let parts: Vec<&str> = self.duration.trim().split(':').collect();
        let nums: Option<Vec<u64>> = parts.iter().map(|p| p.parse::<u64>().ok()).collect();
        let secs = match nums?.as_slice() {
            [m, s] if *s < 60 => m * 60 + s,
            [h, m, s] if *m < 60 && *s < 60 => h * 3600 + m * 60 + s,
            _ => return None,
        };
        Some(Duration::from_secs(secs))
    }
}

/// Kind of performer selected on the knob.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArtistType {
    #[default]
    Male,
    Female,
    Band,
}

impl ArtistType {
    /// Knob positions in order.
    pub const ALL: [ArtistType; 3] = [ArtistType::Male, ArtistType::Female, ArtistType::Band];

    /// Cantonese label shown on the dial and sent to the model.
    pub fn label(self) -> &'static str {
        match self {
            ArtistType::Male => "男歌手",
            ArtistType::Female => "女歌手",
            ArtistType::Band => "樂隊/組合",
        }
    }

    /// Next knob position, wrapping back to the first.
    pub fn next(self) -> Self {
        match self {
            ArtistType::Male => ArtistType::Female,
            ArtistType::Female => ArtistType::Band,
            ArtistType::Band => ArtistType::Male,
        }
    }

    /// Knob rotation in degrees (120° per position).
    pub fn rotation(self) -> u16 {
        match self {
            ArtistType::Male => 0,
            ArtistType::Female => 120,
            ArtistType::Band => 240,
        }
    }
}

impl fmt::Display for ArtistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ArtistType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "男歌手" => Ok(ArtistType::Male),
            "female" | "女歌手" => Ok(ArtistType::Female),
            "band" | "group" | "樂隊/組合" => Ok(ArtistType::Band),
            other => Err(format!(
                "unknown artist type '{other}' (male, female, band)"
            )),
        }
    }
}

/// Decade bucket selected on the slider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Era {
    #[serde(rename = "80s")]
    #[value(name = "80s")]
    Eighties,
    #[default]
    #[serde(rename = "90s")]
    #[value(name = "90s")]
    Nineties,
    #[serde(rename = "00s")]
    #[value(name = "00s")]
    TwoThousands,
}

impl Era {
    /// Slider stops in order.
    pub const ALL: [Era; 3] = [Era::Eighties, Era::Nineties, Era::TwoThousands];

    pub fn label(self) -> &'static str {
        match self {
            Era::Eighties => "80s",
            Era::Nineties => "90s",
            Era::TwoThousands => "00s",
        }
    }

    /// Slider position (0..=2).
    pub fn slider_position(self) -> usize {
        match self {
            Era::Eighties => 0,
            Era::Nineties => 1,
            Era::TwoThousands => 2,
        }
    }

    /// Era for a slider position. Anything past the last stop clamps to 00s.
    pub fn from_slider(position: usize) -> Self {
        match position {
            0 => Era::Eighties,
            1 => Era::Nineties,
            _ => Era::TwoThousands,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "80s" | "80" | "1980s" => Ok(Era::Eighties),
            "90s" | "90" | "1990s" => Ok(Era::Nineties),
            "00s" | "00" | "2000s" => Ok(Era::TwoThousands),
            other => Err(format!("unknown era '{other}' (80s, 90s, 00s)")),
        }
    }
}

/// What the listener has dialled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub artist_type: ArtistType,
    pub era: Era,
}

impl Selection {
    pub fn new(artist_type: ArtistType, era: Era) -> Self {
        Self { artist_type, era }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.artist_type.label(), self.era.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song_with_duration(duration: &str) -> Song {
        Song {
            title: "t".to_string(),
            artist: "a".to_string(),
            year: "1990".to_string(),
            album: "b".to_string(),
            duration: duration.to_string(),
            cover_description: None,
            cover_url: None,
        }
    }

    #[test]
    fn test_knob_cycles_through_all_positions() {
        let mut t = ArtistType::Male;
        let mut seen = vec![t];
        for _ in 0..2 {
            t = t.next();
            seen.push(t);
        }
        assert_eq!(seen, ArtistType::ALL.to_vec());
        assert_eq!(t.next(), ArtistType::Male);
    }

    #[test]
    fn test_knob_rotation() {
        assert_eq!(ArtistType::Male.rotation(), 0);
        assert_eq!(ArtistType::Band.rotation(), 240);
    }

    #[test]
    fn test_era_slider_roundtrip() {
        for era in Era::ALL {
            assert_eq!(Era::from_slider(era.slider_position()), era);
        }
        assert_eq!(Era::from_slider(7), Era::TwoThousands);
    }

    #[test]
    fn test_parse_selection_values() {
        assert_eq!("Female".parse::<ArtistType>().unwrap(), ArtistType::Female);
        assert_eq!("樂隊/組合".parse::<ArtistType>().unwrap(), ArtistType::Band);
        assert_eq!("2000s".parse::<Era>().unwrap(), Era::TwoThousands);
        assert!("70s".parse::<Era>().is_err());
        assert!("choir".parse::<ArtistType>().is_err());
    }

    #[test]
    fn test_default_selection() {
        let sel = Selection::default();
        assert_eq!(sel.artist_type, ArtistType::Male);
        assert_eq!(sel.era, Era::Nineties);
        assert_eq!(sel.to_string(), "男歌手 / 90s");
    }

    #[test]
    fn test_song_serializes_camel_case() {
        let mut song = song_with_duration("4:05");
        song.cover_url = Some("https://example.com/a.jpg".to_string());
        let json = serde_json::to_string(&song).unwrap();
        assert!(json.contains("\"coverUrl\""));
        assert!(!json.contains("coverDescription"));
    }

    #[test]
    fn test_era_serde_names() {
        let json = serde_json::to_string(&Era::TwoThousands).unwrap();
        assert_eq!(json, "\"00s\"");
        let era: Era = serde_json::from_str("\"80s\"").unwrap();
        assert_eq!(era, Era::Eighties);
    }

    #[test]
    fn test_duration_parsing() {
        assert_eq!(
            song_with_duration("4:05").duration_parsed(),
            Some(Duration::from_secs(245))
        );
        assert_eq!(
            song_with_duration("1:02:03").duration_parsed(),
            Some(Duration::from_secs(3723))
        );
        assert_eq!(song_with_duration("4:75").duration_parsed(), None);
        assert_eq!(song_with_duration("about four").duration_parsed(), None);
    }
}
