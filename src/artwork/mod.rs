//! Album artwork lookup via the iTunes Search API.
//!
//! No API key required. Lookups that fail are never fatal; see
//! [`enrich_covers`].

mod client;
pub mod dto;
mod enricher;
mod error;

pub use client::ItunesClient;
pub use enricher::enrich_covers;
pub use error::LookupError;
