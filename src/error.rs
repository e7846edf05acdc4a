//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! CLI/main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - Module-specific errors ([`RequestError`], [`LookupError`], [`ConfigError`])
//!   for detailed handling
//!
//! [`RequestError`]: crate::recommend::RequestError
//! [`LookupError`]: crate::artwork::LookupError
//! [`ConfigError`]: crate::config::ConfigError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Model request failed
    #[error("Request error: {0}")]
    Request(#[from] crate::recommend::RequestError),

    /// Artwork client could not be set up
    #[error("Artwork error: {0}")]
    Lookup(#[from] crate::artwork::LookupError),

    /// Config file could not be written
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// No API key from flag, environment or config file
    #[error("No API key found. Pass --api-key, set {}, or add it to the config file", crate::config::API_KEY_ENV_VARS.join(" / "))]
    MissingApiKey,

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::config::ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
