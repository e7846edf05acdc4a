//! Recommendation fetcher - asks a generative model for a Cantopop playlist.
//!
//! # Architecture
//!
//! - **Prompt** (`prompt.rs`) - renders the request text from a [`Selection`]
//! - **DTOs** (`dto.rs`) - exact Gemini request/response shapes
//! - **Adapter** (`adapter.rs`) - validates model output into [`Song`]s
//! - **Client** (`client.rs`) - the HTTP call
//!
//! [`Selection`]: crate::model::Selection
//! [`Song`]: crate::model::Song

mod adapter;
mod client;
pub mod dto;
mod error;
pub mod prompt;

pub use client::GeminiClient;
pub use error::RequestError;
