//! Errors raised while asking the model for recommendations.

/// The model request failed or returned nothing usable.
///
/// Always surfaced to the listener; the radio drops back to idle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API key rejected: {0}")]
    Unauthorized(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("API request failed (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked by the model: {0}")]
    Blocked(String),

    #[error("Model returned an empty response")]
    EmptyResponse,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Song {index} is missing required field '{field}'")]
    InvalidSong { index: usize, field: &'static str },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
