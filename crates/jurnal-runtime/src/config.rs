use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use jurnal_engine::TimestampFormat;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. JURNAL_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.jurnal
pub fn resolve_data_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("JURNAL_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("jurnal"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".jurnal"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_utc_offset_minutes() -> i32 {
    jurnal_engine::time::DEFAULT_OFFSET_MINUTES
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Offset used when rendering timestamps (420 = Asia/Jakarta).
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            utc_offset_minutes: default_utc_offset_minutes(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load_from`], but out-of-range values fall back to
    /// their defaults so a bad hand edit never locks out `config set`.
    pub fn load_lenient(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        if let Err(err) = config.validate() {
            tracing::warn!(path = %path.display(), "{}; using defaults for invalid values", err);
            config.repair();
        }
        Ok(config)
    }

    fn repair(&mut self) {
        let defaults = Self::default();
        if self.page_size == 0 {
            self.page_size = defaults.page_size;
        }
        if self.api_base_url.trim().is_empty() {
            self.api_base_url = defaults.api_base_url;
        }
        if self.timeout_secs == 0 {
            self.timeout_secs = defaults.timeout_secs;
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config("page_size must be greater than 0".to_string()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(Error::Config("api_base_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        TimestampFormat::from_offset_minutes(self.utc_offset_minutes)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Sets a key by its TOML name; used by `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |what: &str| Error::Config(format!("invalid value for {}: {}", what, value));
        match key {
            "api_base_url" => self.api_base_url = value.trim_end_matches('/').to_string(),
            "page_size" => self.page_size = value.parse().map_err(|_| invalid(key))?,
            "utc_offset_minutes" => {
                self.utc_offset_minutes = value.parse().map_err(|_| invalid(key))?
            }
            "timeout_secs" => self.timeout_secs = value.parse().map_err(|_| invalid(key))?,
            other => return Err(Error::Config(format!("unknown config key: {}", other))),
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.utc_offset_minutes, 420);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = Config::path_in(temp_dir.path());

        let mut config = Config::default();
        config.set("api_base_url", "https://sekolah.example/api/")?;
        config.set("page_size", "25")?;
        config.save_to(&config_path)?;

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api_base_url, "https://sekolah.example/api");
        assert_eq!(loaded.page_size, 25);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "page_size = 5\n")?;
        let config = Config::load_from(&path)?;
        assert_eq!(config.page_size, 5);
        assert_eq!(config.timeout_secs, 30);
        Ok(())
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = Config::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("colour", "blue").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        assert!(config.set("timeout_secs", "0").is_err());
        assert!(config.set("timeout_secs", "5").is_ok());
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_lenient_load_replaces_invalid_values() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = Config::path_in(temp_dir.path());
        std::fs::write(&path, "page_size = 0\napi_base_url = \"\"\ntimeout_secs = 0\nutc_offset_minutes = 0\n")?;

        assert!(Config::load_from(&path).is_err());
        let config = Config::load_lenient(&path)?;
        assert_eq!(config.page_size, 10);
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.utc_offset_minutes, 0);
        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_data_path(Some("/tmp/jurnal-data"))?;
        assert_eq!(path, PathBuf::from("/tmp/jurnal-data"));
        Ok(())
    }
}
