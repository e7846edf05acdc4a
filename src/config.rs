//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\retro-radio\config.toml
//! - macOS: ~/Library/Application Support/retro-radio/config.toml
//! - Linux: ~/.config/retro-radio/config.toml
//!
//! The file is optional. Every setting has a default, and the API key is
//! normally supplied through the environment instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::{ArtistType, Era, Selection};

/// Environment variables checked for the model API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials
    pub credentials: Credentials,

    /// Generative model settings
    pub model: ModelConfig,

    /// Artwork lookup settings
    pub artwork: ArtworkConfig,

    /// Where the knob and slider start
    pub radio: RadioConfig,

    /// Receipt presentation
    pub display: DisplayConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// Gemini API key
    pub gemini_api_key: Option<String>,
}

/// Generative model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model name, e.g. "gemini-2.5-flash"
    pub name: String,

    /// REST base URL (without the `/models/...` suffix)
    pub base_url: String,

    /// How many songs to ask for
    pub song_count: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            song_count: 20,
            timeout_secs: 60,
        }
    }
}

/// Artwork lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Search endpoint
    pub search_url: String,

    /// Edge length in pixels of the artwork URL handed out
    pub size: u32,

    /// Edge length in pixels of placeholder images
    pub placeholder_size: u32,

    /// Per-lookup timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            search_url: "https://itunes.apple.com/search".to_string(),
            size: 600,
            placeholder_size: 400,
            timeout_secs: 10,
        }
    }
}

/// Initial knob and slider positions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    pub artist_type: ArtistType,
    pub era: Era,
}

impl RadioConfig {
    pub fn selection(&self) -> Selection {
        Selection::new(self.artist_type, self.era)
    }
}

/// Receipt presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Receipt width in columns
    pub width: usize,

    /// Delay between printed lines in milliseconds (0 prints at once)
    pub print_delay_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 42,
            print_delay_ms: 40,
        }
    }
}

impl Config {
    /// Pick the API key: explicit value first, then the config file.
    ///
    /// The CLI passes the flag or environment value as `explicit`.
    pub fn resolve_api_key(&self, explicit: Option<&str>) -> Option<String> {
        let from_file = self.credentials.gemini_api_key.as_deref();
        explicit
            .and_then(non_blank)
            .or_else(|| from_file.and_then(non_blank))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// First non-empty API key found in [`API_KEY_ENV_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.trim().is_empty())
}

/// Mask all but the last four characters of a secret for display.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), visible)
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("retro-radio"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from the default location
///
/// Returns default config if file doesn't exist or can't be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };
    load_from(&path)
}

/// Load configuration from a specific file
///
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to `path`
///
/// Creates the parent directory if it doesn't exist.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[model]"));
        assert!(toml.contains("[artwork]"));
        assert!(toml.contains("[radio]"));
        assert!(toml.contains("[display]"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
gemini_api_key = "my-key"

[radio]
era = "80s"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(
            config.credentials.gemini_api_key,
            Some("my-key".to_string())
        );
        assert_eq!(config.radio.era, Era::Eighties);

        // Other fields use defaults
        assert_eq!(config.radio.artist_type, ArtistType::Male);
        assert_eq!(config.model.song_count, 20);
        assert_eq!(config.artwork.size, 600);
        assert_eq!(config.display.width, 42);
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.radio.artist_type = ArtistType::Band;
        config.display.print_delay_ms = 0;
        save_to(&config, &path).unwrap();

        let loaded = load_from(&path);
        assert_eq!(loaded.radio.artist_type, ArtistType::Band);
        assert_eq!(loaded.display.print_delay_ms, 0);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_missing_or_broken_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load_from(&dir.path().join("nope.toml"));
        assert_eq!(missing.model.name, "gemini-2.5-flash");

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "this is = = not toml").unwrap();
        assert_eq!(load_from(&broken).model.song_count, 20);
    }

    #[test]
    fn test_api_key_precedence() {
        let mut config = Config::default();
        config.credentials.gemini_api_key = Some("from-file".to_string());

        assert_eq!(
            config.resolve_api_key(Some("from-cli")).as_deref(),
            Some("from-cli")
        );
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("from-file"));

        config.credentials.gemini_api_key = Some("   ".to_string());
        assert_eq!(config.resolve_api_key(None), None);
    }

    #[test]
    fn test_blank_explicit_key_falls_back_to_file() {
        let mut config = Config::default();
        config.credentials.gemini_api_key = Some(" from-file ".to_string());

        assert_eq!(
            config.resolve_api_key(Some("  ")).as_deref(),
            Some("from-file")
        );
        assert_eq!(
            config.resolve_api_key(Some("")).as_deref(),
            Some("from-file")
        );
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
    }
}
