//! Prompt construction.
//!
//! The session token and style adjective only nudge the model toward a
//! different list on each press; identical selections are otherwise
//! indistinguishable to it.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::Selection;

/// Style words mixed into the prompt.
pub const ADJECTIVES: [&str; 6] = [
    "classic",
    "top-rated",
    "sentimental",
    "dynamic",
    "golden",
    "legendary",
];

const SESSION_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_LEN: usize = 6;

/// A fully rendered prompt plus the random parts that went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub session: String,
    pub adjective: &'static str,
}

/// Build a prompt with fresh randomness from the thread RNG.
pub fn build(selection: Selection, count: usize) -> Prompt {
    build_with_rng(selection, count, &mut rand::rng())
}

/// Build a prompt drawing its randomness from `rng`.
pub fn build_with_rng<R: Rng + ?Sized>(selection: Selection, count: usize, rng: &mut R) -> Prompt {
    let session: String = (0..SESSION_LEN)
        .map(|_| SESSION_ALPHABET[rng.random_range(0..SESSION_ALPHABET.len())] as char)
        .collect();
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or(ADJECTIVES[0]);

    let text = format!(
        "Generate a list of {count} Cantonese Pop songs.\n\
         Session: {session}.\n\
         Context: Era {era}, Artist {artist}, Style {adjective}.\n\
         Rules: Real HK Cantopop songs only. Unique selection.",
        era = selection.era.label(),
        artist = selection.artist_type.label(),
    );

    Prompt {
        text,
        session,
        adjective,
    }
}
