//! Configuration management for hadith-reader
//!
//! Handles loading, saving, and validating configuration from TOML files.

mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream CDN configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Search scan bounds
    #[serde(default)]
    pub search: SearchConfig,

    /// Random sampling configuration
    #[serde(default)]
    pub random: RandomConfig,

    /// Chapter browsing configuration
    #[serde(default)]
    pub browse: BrowseConfig,

    /// Text-to-speech configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Paths configuration (internal, not user-editable)
    #[serde(skip)]
    pub paths: PathsConfig,
}

/// Upstream CDN configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL of the static hadith API
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,

    /// User agent string
    #[serde(default = "default_api_user_agent")]
    pub user_agent: String,
}

/// Search scan bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Collections scanned when the request names none
    #[serde(default = "default_search_collections")]
    pub default_collections: Vec<String>,

    /// Sections scanned per collection
    #[serde(default = "default_search_max_sections")]
    pub max_sections: u32,

    /// Results accumulated before the scan stops
    #[serde(default = "default_search_result_cap")]
    pub result_cap: usize,
}

/// Random sampling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    /// Collections the random hadith is drawn from
    #[serde(default = "default_random_collections")]
    pub collections: Vec<String>,

    /// Sections are sampled from `1..=max_section`
    #[serde(default = "default_random_max_section")]
    pub max_section: u32,

    /// Fixed seed for reproducible sampling
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Chapter browsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Hadiths per estimated chapter
    #[serde(default = "default_browse_chapter_size")]
    pub chapter_size: usize,

    /// Hadiths per page
    #[serde(default = "default_browse_page_size")]
    pub page_size: usize,
}

/// Text-to-speech configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Synthesis endpoint
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// Environment variable name for the API key
    #[serde(default = "default_speech_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_speech_voice_id")]
    pub voice_id: String,

    #[serde(default = "default_speech_model")]
    pub model: String,

    #[serde(default = "default_speech_speed")]
    pub speed: f32,

    /// Longer input is truncated before synthesis
    #[serde(default = "default_speech_max_chars")]
    pub max_chars: usize,
}

/// Internal paths configuration
#[derive(Debug, Clone, Default)]
pub struct PathsConfig {
    /// Base directory for hadith-reader data
    pub base_dir: PathBuf,

    /// Path to config file
    pub config_file: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_api_timeout(),
            user_agent: default_api_user_agent(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_collections: default_search_collections(),
            max_sections: default_search_max_sections(),
            result_cap: default_search_result_cap(),
        }
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            collections: default_random_collections(),
            max_section: default_random_max_section(),
            seed: None,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            chapter_size: default_browse_chapter_size(),
            page_size: default_browse_page_size(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            api_key_env: default_speech_api_key_env(),
            voice_id: default_speech_voice_id(),
            model: default_speech_model(),
            speed: default_speech_speed(),
            max_chars: default_speech_max_chars(),
        }
    }
}

impl SpeechConfig {
    /// Get the speech API key from environment
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Config {
    /// Get the default base directory (~/.hadith)
    pub fn default_base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hadith")
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        Self::default_base_dir().join("config.toml")
    }

    fn init_paths(&mut self, base_dir: Option<PathBuf>) {
        let base = base_dir.unwrap_or_else(Self::default_base_dir);
        self.paths = PathsConfig {
            config_file: base.join("config.toml"),
            base_dir: base,
        };
    }

    /// Load configuration from a specific file path
    pub fn load(config_path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", config_path);

        if !config_path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content = std::fs::read_to_string(config_path)?;
        let mut config: Config = toml::from_str(&content)?;

        let base = config_path.parent().unwrap_or(Path::new(".")).to_path_buf();
        config.paths = PathsConfig {
            config_file: config_path.to_path_buf(),
            base_dir: base,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a base directory, falling back to defaults
    /// when no config file exists there
    pub fn load_from(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = Config::default();
        config.init_paths(base_dir);

        if config.paths.config_file.exists() {
            debug!("Loading config from {:?}", config.paths.config_file);
            let content = std::fs::read_to_string(&config.paths.config_file)?;
            let mut loaded: Config = toml::from_str(&content)?;
            loaded.paths = config.paths;
            config = loaded;
        } else {
            debug!("No config file found, using defaults");
        }

        config.validate()?;
        Ok(config)
    }

    /// Create a fresh config rooted at `base_dir` (used by `hadith init`)
    pub fn with_base_dir(base_dir: Option<PathBuf>) -> Self {
        let mut config = Config::default();
        config.init_paths(base_dir);
        config
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.paths.config_file.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&self.paths.config_file, content)?;
        info!("Saved config to {:?}", self.paths.config_file);
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.api.base_url)
            .map_err(|e| Error::Config(format!("api.base_url is not a valid URL: {}", e)))?;

        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be positive".to_string()));
        }

        if self.search.default_collections.is_empty() {
            return Err(Error::Config(
                "search.default_collections must name at least one collection".to_string(),
            ));
        }

        if self.search.max_sections == 0 || self.search.result_cap == 0 {
            return Err(Error::Config(
                "search.max_sections and search.result_cap must be positive".to_string(),
            ));
        }

        if self.random.collections.is_empty() {
            return Err(Error::Config(
                "random.collections must name at least one collection".to_string(),
            ));
        }

        if self.random.max_section == 0 {
            return Err(Error::Config("random.max_section must be positive".to_string()));
        }

        if self.browse.chapter_size == 0 || self.browse.page_size == 0 {
            return Err(Error::Config(
                "browse.chapter_size and browse.page_size must be positive".to_string(),
            ));
        }

        if self.speech.speed <= 0.0 {
            return Err(Error::Config("speech.speed must be positive".to_string()));
        }

        if self.speech.max_chars == 0 {
            return Err(Error::Config("speech.max_chars must be positive".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.default_collections, vec!["bukhari", "muslim"]);
        assert_eq!(config.search.max_sections, 10);
        assert_eq!(config.search.result_cap, 50);
        assert_eq!(config.random.max_section, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_save_load() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::with_base_dir(Some(tmp.path().to_path_buf()));
        config.search.result_cap = 20;
        config.random.seed = Some(7);

        config.save().unwrap();
        assert!(config.paths.config_file.exists());

        let loaded = Config::load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(loaded.search.result_cap, 20);
        assert_eq!(loaded.random.seed, Some(7));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[search]\nmax_sections = 3\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.search.max_sections, 3);
        assert_eq!(loaded.search.result_cap, 50);
        assert_eq!(loaded.browse.page_size, 10);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.search.default_collections.clear();
        assert!(config.validate().is_err());
        config.search.default_collections = vec!["bukhari".to_string()];
        assert!(config.validate().is_ok());

        config.random.max_section = 0;
        assert!(config.validate().is_err());
        config.random.max_section = 5;

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }
}
