//! Gemini HTTP client
//!
//! Sends a single `generateContent` request per press of the print button.
//! See: https://ai.google.dev/api/generate-content

use std::time::Duration;

use reqwest::StatusCode;

use super::dto::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use super::error::RequestError;
use super::{adapter, prompt};
use crate::config::ModelConfig;
use crate::model::{Selection, Song};

/// User agent string sent with every request
const USER_AGENT: &str = concat!("RetroRadio/", env!("CARGO_PKG_VERSION"));

/// Gemini API client
pub struct GeminiClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
    song_count: usize,
}

impl GeminiClient {
    /// Create a new client from the model settings.
    pub fn new(api_key: impl Into<String>, config: &ModelConfig) -> Result<Self, RequestError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RequestError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.name.clone(),
            api_key: api_key.into(),
            song_count: config.song_count,
        })
    }

    /// Full URL of the generate endpoint for the configured model
    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Ask the model for songs matching `selection`.
    pub async fn fetch_recommendations(
        &self,
        selection: Selection,
    ) -> Result<Vec<Song>, RequestError> {
        let prompt = prompt::build(selection, self.song_count);
        tracing::debug!(
            session = %prompt.session,
            adjective = prompt.adjective,
            "Requesting {} songs for {}",
            self.song_count,
            selection
        );

        let response = self.send_generate_request(&prompt.text).await?;
        let songs = adapter::to_songs(&response)?;

        if songs.len() != self.song_count {
            tracing::info!(
                "Model returned {} songs (asked for {})",
                songs.len(),
                self.song_count
            );
        }
        Ok(songs)
    }

    /// Send the HTTP request and parse the response envelope
    async fn send_generate_request(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, RequestError> {
        let body = GenerateContentRequest::for_song_list(prompt);

        let response = self
            .http_client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<ApiErrorResponse>().await.ok();
            return Err(status_error(status, body));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| RequestError::Parse(e.to_string()))
    }
}

/// Map a failed HTTP status, and the error body if one parsed, to a [`RequestError`].
fn status_error(status: StatusCode, body: Option<ApiErrorResponse>) -> RequestError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return RequestError::RateLimited;
    }

    let message = match body {
        Some(body) => body.error.message,
        None => status.canonical_reason().unwrap_or("Unknown").to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RequestError::Unauthorized(message),
        _ => RequestError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
