//! iTunes Search API Data Transfer Objects
//!
//! Only the fields the artwork lookup reads are modelled.
//!
//! API Reference: https://performance-partners.apple.com/search-api

use serde::{Deserialize, Serialize};

/// Response of `GET /search`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One track in the search results
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    /// 100px artwork, e.g. `.../source/100x100bb.jpg`
    pub artwork_url100: Option<String>,
    pub artwork_url60: Option<String>,
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "resultCount": 1,
            "results": [{
                "wrapperType": "track",
                "kind": "song",
                "artistName": "張國榮",
                "collectionName": "Salute",
                "trackName": "風繼續吹",
                "artworkUrl60": "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/cd/60x60bb.jpg",
                "artworkUrl100": "https://is1-ssl.mzstatic.com/image/thumb/Music/v4/ab/cd/100x100bb.jpg",
                "trackTimeMillis": 262000
            }]
        }"#;

        let response: SearchResponse =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(response.result_count, 1);
        assert_eq!(response.results[0].track_name.as_deref(), Some("風繼續吹"));
        assert!(
            response.results[0]
                .artwork_url100
                .as_deref()
                .unwrap()
                .ends_with("100x100bb.jpg")
        );
    }

    #[test]
    fn test_parse_empty_response() {
        let json = r#"{"resultCount": 0, "results": []}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_parse_result_without_artwork() {
        let json = r#"{"resultCount": 1, "results": [{"trackName": "X"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.results[0].artwork_url100.is_none());
    }
}
