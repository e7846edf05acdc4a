/// A single artwork lookup failed.
///
/// Never surfaced; the enricher falls back to a placeholder.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No artwork found")]
    NoResults,
}
