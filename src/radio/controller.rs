//! The print button: fetch, enrich, publish.
//!
//! ```text
//!   Idle ──print──▶ Loading ──ok──▶ Ready
//!    ▲                 │
//!    └─────error───────┘
//! ```
//!
//! A press while Loading is ignored. The song list is swapped only after
//! both stages finish, so a failed request leaves the previous receipt intact.

use parking_lot::RwLock;

use super::state::{Phase, RadioState};
use crate::artwork::enrich_covers;
use crate::model::{ArtistType, Era, Selection, Song};
use crate::recommend::RequestError;
use crate::traits::{ArtworkApi, RecommendationApi};

/// Message shown when a request fails.
pub const TUNING_ALERT: &str = "Signal interference... could not tune in. Please try again.";

/// Result of pressing print
#[derive(Debug, Clone, PartialEq)]
pub enum TuneOutcome {
    /// A new receipt was printed for the selection captured at the press
    Tuned {
        selection: Selection,
        songs: Vec<Song>,
    },
    /// A request was already in flight; nothing happened
    Busy,
}

/// The radio: shared state plus the two outbound APIs.
pub struct Radio<R, A> {
    state: RwLock<RadioState>,
    recommender: R,
    artwork: A,
    placeholder_size: u32,
}

impl<R, A> Radio<R, A>
where
    R: RecommendationApi,
    A: ArtworkApi,
{
    pub fn new(selection: Selection, recommender: R, artwork: A, placeholder_size: u32) -> Self {
        Self {
            state: RwLock::new(RadioState::new(selection)),
            recommender,
            artwork,
            placeholder_size,
        }
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> RadioState {
        self.state.read().clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.read().phase
    }

    pub fn selection(&self) -> Selection {
        self.state.read().selection
    }

    pub fn turn_knob(&self) -> ArtistType {
        self.state.write().turn_knob()
    }

    pub fn set_era(&self, era: Era) {
        self.state.write().set_era(era);
    }

    /// Run one generation cycle for the current selection.
    pub async fn generate(&self) -> Result<TuneOutcome, RequestError> {
        let selection = {
            let mut state = self.state.write();
            if state.phase == Phase::Loading {
                tracing::debug!("Print pressed while tuning, ignoring");
                return Ok(TuneOutcome::Busy);
            }
            state.phase = Phase::Loading;
            state.printed = false;
            state.selection
        };

        tracing::info!("Tuning in: {}", selection);

        let songs = match self.recommender.fetch_recommendations(selection).await {
            Ok(songs) => songs,
            Err(e) => {
                tracing::error!("Error fetching songs: {}", e);
                self.state.write().phase = Phase::Idle;
                return Err(e);
            }
        };

        let songs = enrich_covers(&self.artwork, songs, self.placeholder_size).await;

        {
            let mut state = self.state.write();
            state.songs = songs.clone();
            state.phase = Phase::Ready;
            state.printed = true;
        }

        tracing::info!("Printed {} songs", songs.len());
        Ok(TuneOutcome::Tuned { selection, songs })
    }
}
