//! Adapter layer: convert model output to [`Song`] records.
//!
//! Every song must carry non-blank title, artist, year, album and duration.
//! One bad entry rejects the whole payload.

use serde_json::Value;

use super::dto::{GenerateContentResponse, SongDto};
use super::error::RequestError;
use crate::model::Song;

/// Extract and validate the song list from a `generateContent` response.
pub fn to_songs(response: &GenerateContentResponse) -> Result<Vec<Song>, RequestError> {
    if response.candidates.is_empty()
        && let Some(reason) = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
    {
        return Err(RequestError::Blocked(reason));
    }

    if let Some(reason) = response
        .candidates
        .first()
        .and_then(|c| c.finish_reason.as_deref())
        .filter(|r| *r != "STOP")
    {
        tracing::warn!("Model stopped early ({}), output may be truncated", reason);
    }

    let text = response.text().ok_or(RequestError::EmptyResponse)?;
    parse_songs(&text)
}

/// Parse the JSON text the model produced.
pub fn parse_songs(text: &str) -> Result<Vec<Song>, RequestError> {
    let dtos: Vec<SongDto> =
        serde_json::from_str(text.trim()).map_err(|e| RequestError::Parse(e.to_string()))?;

    dtos.into_iter()
        .enumerate()
        .map(|(index, dto)| to_song(index, dto))
        .collect()
}

fn to_song(index: usize, dto: SongDto) -> Result<Song, RequestError> {
    let required = |value: Option<String>, field: &'static str| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(RequestError::InvalidSong { index, field })
    };

    // Models occasionally emit the year as a bare number despite the schema
    let year = match dto.year {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    Ok(Song {
        title: required(dto.title, "title")?,
        artist: required(dto.artist, "artist")?,
        year: required(year, "year")?,
        album: required(dto.album, "album")?,
        duration: required(dto.duration, "duration")?,
        cover_description: dto
            .cover_description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        cover_url: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::dto::{Candidate, Content, Part, PromptFeedback};

    fn response_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some("model".to_string()),
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                }),
                finish_reason: Some("STOP".to_string()),
            }],
            prompt_feedback: None,
            model_version: None,
        }
    }

    #[test]
    fn test_parse_valid_songs() {
        let text = r#"[
            {"title": "千千闕歌", "artist": "陳慧嫻", "year": "1989", "album": "永遠是你的朋友", "duration": "4:58"},
            {"title": "紅日", "artist": "李克勤", "year": 1992, "album": "紅日", "duration": "4:21", "coverDescription": "sunrise"}
        ]"#;

        let songs = to_songs(&response_with_text(text)).unwrap();
        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].title, "千千闕歌");
        assert_eq!(songs[1].year, "1992");
        assert_eq!(songs[1].cover_description.as_deref(), Some("sunrise"));
        assert!(songs.iter().all(|s| s.cover_url.is_none()));
    }

    #[test]
    fn test_missing_field_rejected() {
        let text = r#"[
            {"title": "A", "artist": "B", "year": "1990", "album": "C", "duration": "3:00"},
            {"title": "D", "artist": "E", "year": "1991", "duration": "3:10"}
        ]"#;

        let err = parse_songs(text).unwrap_err();
        assert_eq!(
            err,
            RequestError::InvalidSong {
                index: 1,
                field: "album"
            }
        );
    }

    #[test]
    fn test_blank_field_rejected() {
        let text =
            r#"[{"title": "  ", "artist": "B", "year": "1990", "album": "C", "duration": "3:00"}]"#;
        assert!(matches!(
            parse_songs(text),
            Err(RequestError::InvalidSong { field: "title", .. })
        ));
    }

    #[test]
    fn test_not_json_rejected() {
        assert!(matches!(
            parse_songs("Sorry, I can't help with that."),
            Err(RequestError::Parse(_))
        ));
    }

    #[test]
    fn test_object_instead_of_array_rejected() {
        let text =
            r#"{"title": "A", "artist": "B", "year": "1990", "album": "C", "duration": "3:00"}"#;
        assert!(matches!(parse_songs(text), Err(RequestError::Parse(_))));
    }

    #[test]
    fn test_empty_array_is_empty_list() {
        assert!(parse_songs("[]").unwrap().is_empty());
    }

    #[test]
    fn test_empty_response() {
        let resp = response_with_text("   ");
        assert_eq!(to_songs(&resp), Err(RequestError::EmptyResponse));
    }

    #[test]
    fn test_blocked_prompt() {
        let resp = GenerateContentResponse {
            candidates: vec![],
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("OTHER".to_string()),
            }),
            model_version: None,
        };
        assert_eq!(
            to_songs(&resp),
            Err(RequestError::Blocked("OTHER".to_string()))
        );
    }
}
