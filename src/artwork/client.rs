//! iTunes Search HTTP client
//!
//! Looks up album artwork by artist and title.
//! No API key required.
//!
//! API: https://itunes.apple.com/search

use std::time::Duration;

use super::dto;
use super::error::LookupError;
use crate::config::ArtworkConfig;

/// Size token the search API uses in its 100px artwork URLs
const THUMBNAIL_TOKEN: &str = "100x100bb";

/// iTunes Search client
pub struct ItunesClient {
    http_client: reqwest::Client,
    search_url: String,
    artwork_size: u32,
}

impl ItunesClient {
    /// Create a new client from the artwork settings.
    pub fn new(config: &ArtworkConfig) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            search_url: config.search_url.clone(),
            artwork_size: config.size,
        })
    }

    /// Find artwork for a song and return its upsized URL.
    pub async fn find_artwork(&self, artist: &str, title: &str) -> Result<String, LookupError> {
        let response = self.search(&format!("{artist} {title}")).await?;
        first_artwork(response, self.artwork_size)
    }

    /// Search for songs by free-text term, first hit only
    async fn search(&self, term: &str) -> Result<dto::SearchResponse, LookupError> {
        let response = self
            .http_client
            .get(&self.search_url)
            .query(&[
                ("term", term),
                ("media", "music"),
                ("entity", "song"),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

/// Upsized artwork of the first hit. A hit without artwork counts as no result.
fn first_artwork(response: dto::SearchResponse, size: u32) -> Result<String, LookupError> {
    response
        .results
        .into_iter()
        .next()
        .and_then(|r| r.artwork_url100)
        .map(|url| upsize_artwork(&url, size))
        .ok_or(LookupError::NoResults)
}

/// Rewrite a 100px artwork URL to `size`px. Other URLs pass through unchanged.
pub fn upsize_artwork(url: &str, size: u32) -> String {
    url.replace(THUMBNAIL_TOKEN, &format!("{size}x{size}bb"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ItunesClient::new(&ArtworkConfig::default()).unwrap();
        assert_eq!(client.search_url, "https://itunes.apple.com/search");
        assert_eq!(client.artwork_size, 600);
    }

    fn parse(json: &str) -> dto::SearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_artwork_is_upsized() {
        let response = parse(
            r#"{"resultCount": 1, "results": [{
                "trackName": "紅日",
                "artistName": "李克勤",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/a/100x100bb.jpg"
            }]}"#,
        );
        assert_eq!(
            first_artwork(response, 600).unwrap(),
            "https://is1-ssl.mzstatic.com/image/thumb/a/600x600bb.jpg"
        );
    }

    #[test]
    fn test_no_results() {
        let response = parse(r#"{"resultCount": 0, "results": []}"#);
        assert_eq!(first_artwork(response, 600), Err(LookupError::NoResults));
    }

    #[test]
    fn test_first_hit_without_artwork_is_no_result() {
        let response = parse(
            r#"{"resultCount": 1, "results": [{
                "trackName": "紅日",
                "artworkUrl60": "https://is1-ssl.mzstatic.com/image/thumb/a/60x60bb.jpg"
            }]}"#,
        );
        assert_eq!(first_artwork(response, 600), Err(LookupError::NoResults));
    }

    #[test]
    fn test_missing_results_field_is_no_result() {
        let response = parse(r#"{"resultCount": 0}"#);
        assert_eq!(first_artwork(response, 600), Err(LookupError::NoResults));
    }

    #[test]
    fn test_upsize_artwork() {
        let url = "https://is1-ssl.mzstatic.com/image/thumb/Music/x/100x100bb.jpg";
        assert_eq!(
            upsize_artwork(url, 600),
            "https://is1-ssl.mzstatic.com/image/thumb/Music/x/600x600bb.jpg"
        );
    }

    #[test]
    fn test_upsize_leaves_other_urls() {
        let url = "https://example.com/cover.png";
        assert_eq!(upsize_artwork(url, 600), url);
    }
}
