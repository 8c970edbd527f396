use crate::error::Result;
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "MULTITAP_CONFIG_DIR";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for multitap, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultitapConfig {
    /// Reject unrecognized symbols when decoding
    #[serde(default)]
    pub strict: bool,

    /// Default output format for the CLI
    #[serde(default)]
    pub output: OutputFormat,
}

impl MultitapConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

/// `$MULTITAP_CONFIG_DIR` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "multitap", "multitap").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MultitapConfig::default();
        assert!(!config.strict);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = MultitapConfig::load(temp.path()).unwrap();
        assert_eq!(config, MultitapConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let config = MultitapConfig {
            strict: true,
            output: OutputFormat::Json,
        };
        config.save(&dir).unwrap();

        let loaded = MultitapConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"output": "json"}"#).unwrap();

        let loaded = MultitapConfig::load(temp.path()).unwrap();
        assert!(!loaded.strict);
        assert_eq!(loaded.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        assert!(matches!(
            MultitapConfig::load(temp.path()),
            Err(crate::error::MultitapError::Serialization(_))
        ));
    }
}
