//! Orchestration: selection state and the Idle → Loading → Ready cycle.

mod controller;
mod state;

pub use controller::{Radio, TUNING_ALERT, TuneOutcome};
pub use state::{Phase, RadioState};
