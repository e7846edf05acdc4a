//! Trait definitions for the two outbound APIs.
//!
//! The radio talks to the model and the artwork search through these traits
//! so tests can substitute mock implementations.
//!
//! # Example
//!
//! ```ignore
//! use retro_radio::traits::RecommendationApi;
//!
//! async fn first_title<T: RecommendationApi>(api: &T, sel: Selection) -> Option<String> {
//!     api.fetch_recommendations(sel).await.ok()?.into_iter().next().map(|s| s.title)
//! }
//! ```

use async_trait::async_trait;

use crate::artwork::{ItunesClient, LookupError};
use crate::model::{Selection, Song};
use crate::recommend::{GeminiClient, RequestError};

/// Source of song recommendations.
#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Produce a song list for the selection.
    async fn fetch_recommendations(&self, selection: Selection) -> Result<Vec<Song>, RequestError>;
}

/// Source of cover artwork.
#[async_trait]
pub trait ArtworkApi: Send + Sync {
    /// Return an artwork URL for the song.
    async fn find_artwork(&self, artist: &str, title: &str) -> Result<String, LookupError>;
}

// Implement traits for real clients

#[async_trait]
impl RecommendationApi for GeminiClient {
    async fn fetch_recommendations(&self, selection: Selection) -> Result<Vec<Song>, RequestError> {
        self.fetch_recommendations(selection).await
    }
}

#[async_trait]
impl ArtworkApi for ItunesClient {
    async fn find_artwork(&self, artist: &str, title: &str) -> Result<String, LookupError> {
        self.find_artwork(artist, title).await
    }
}
