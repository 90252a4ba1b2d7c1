//! Porta configuration.
//!
//! Loaded from `~/.porta/config.toml` if present; defaults apply when the
//! file is missing. The API key is never read from disk: it comes from the
//! `PORTA_API_KEY` environment variable only.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

/// Environment variable holding the chat API credential.
pub const API_KEY_VAR: &str = "PORTA_API_KEY";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Porta configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Model used for the support chat.
    pub model: String,

    /// Override for the chat API base URL.
    pub api_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_url: None,
        }
    }
}

impl Config {
    /// Load config from `~/.porta/config.toml`, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from an explicit path, or defaults if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The config file path: `~/.porta/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".porta").join("config.toml"))
    }

    /// The chat API key from the environment, if one is set.
    pub fn api_key() -> Option<String> {
        env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_url.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "model = \"gemini-2.5-pro\"\napi-url = \"http://localhost:8080/models\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(
            config.api_url.as_deref(),
            Some("http://localhost:8080/models")
        );
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api-url = \"http://localhost:8080\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = [not toml").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
