//! Configuration loading from TOML and JSON files

mod defense_bonus;
mod search;

pub use defense_bonus::{default_defense_bonuses, DefenseBonus, DefenseBonusTable};
pub use search::SearchConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = read_file(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = read_file(path)?;
    parse_json(&content)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_toml::<SearchConfig>(Path::new("does/not/exist.toml")).unwrap_err();
        match err {
            ConfigError::IoError { path, .. } => {
                assert_eq!(path, PathBuf::from("does/not/exist.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = parse_toml::<SearchConfig>("refine_defense = [").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = parse_json::<SearchConfig>("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }
}
