//! Gemini `generateContent` Data Transfer Objects
//!
//! These types match what the Gemini REST API sends and returns.
//! Do not use them outside the recommend module; convert to [`Song`] first.
//!
//! API Reference: https://ai.google.dev/api/generate-content
//!
//! [`Song`]: crate::model::Song

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single-turn text request constrained to the song list schema.
    pub fn for_song_list(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.into()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: song_list_schema(),
            },
        }
    }
}

/// A turn of conversation (request) or a candidate body (response)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are used here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Structured output settings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// OpenAPI-subset schema the model must follow: an array of song objects.
pub fn song_list_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Song title" },
                "artist": { "type": "STRING", "description": "Artist name" },
                "year": { "type": "STRING", "description": "Year" },
                "album": { "type": "STRING", "description": "Album" },
                "duration": { "type": "STRING", "description": "MM:SS" },
                "coverDescription": {
                    "type": "STRING",
                    "description": "Short description of the album cover"
                }
            },
            "required": ["title", "artist", "year", "album", "duration"]
        }
    })
}

/// Response body of `generateContent`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    /// STOP, MAX_TOKENS, SAFETY, ...
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// Song object as the model emits it (schema fields only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub year: Option<Value>,
    pub album: Option<String>,
    pub duration: Option<String>,
    pub cover_description: Option<String>,
}

/// Error envelope: `{"error": {"code": 400, "message": "...", "status": "..."}}`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}
