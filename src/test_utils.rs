//! Test fixtures shared across modules.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{song, songs};
//!
//! let one = song("紅日");
//! let twenty = songs(20);
//! ```

use crate::model::Song;

/// A song with the given title and plausible values elsewhere.
pub fn song(title: &str) -> Song {
    Song {
        title: title.to_string(),
        artist: format!("{title} Artist"),
        year: "1992".to_string(),
        album: format!("{title} Album"),
        duration: "4:00".to_string(),
        cover_description: None,
        cover_url: None,
    }
}

/// `count` songs titled `Song 01`, `Song 02`, ...
pub fn songs(count: usize) -> Vec<Song> {
    (1..=count).map(|i| song(&format!("Song {i:02}"))).collect()
}
