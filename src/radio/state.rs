//! Radio state: what is dialled in and what the receipt shows.

use crate::model::{ArtistType, Era, Selection, Song};

/// Where the radio is in a generation cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Snapshot-able radio state.
///
/// `songs` is only ever replaced wholesale with a fully enriched list.
#[derive(Debug, Clone, Default)]
pub struct RadioState {
    pub selection: Selection,
    pub phase: Phase,
    /// Whether the receipt is out of the printer
    pub printed: bool,
    pub songs: Vec<Song>,
}

impl RadioState {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            ..Default::default()
        }
    }

    /// Songs visible to the listener: the receipt only shows once printed.
    pub fn visible_songs(&self) -> &[Song] {
        if self.printed { &self.songs } else { &[] }
    }

    /// Advance the knob one position.
    pub fn turn_knob(&mut self) -> ArtistType {
        self.selection.artist_type = self.selection.artist_type.next();
        self.tear_off();
        self.selection.artist_type
    }

    /// Move the era slider.
    pub fn set_era(&mut self, era: Era) {
        self.selection.era = era;
        self.tear_off();
    }

    /// A changed selection hides the old receipt. Loading is left alone.
    fn tear_off(&mut self) {
        self.printed = false;
        if self.phase == Phase::Ready {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::songs;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = RadioState::new(Selection::default());
        assert_eq!(state.phase, Phase::Idle);
        assert!(!state.printed);
        assert!(state.visible_songs().is_empty());
    }

    #[test]
    fn test_knob_hides_receipt() {
        let mut state = RadioState {
            phase: Phase::Ready,
            printed: true,
            songs: songs(3),
            ..Default::default()
        };
        assert_eq!(state.visible_songs().len(), 3);

        assert_eq!(state.turn_knob(), ArtistType::Female);
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.visible_songs().is_empty());
        // Songs are retained, just not shown
        assert_eq!(state.songs.len(), 3);
    }

    #[test]
    fn test_slider_during_loading_keeps_loading() {
        let mut state = RadioState {
            phase: Phase::Loading,
            ..Default::default()
        };
        state.set_era(Era::Eighties);
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(state.selection.era, Era::Eighties);
    }
}
