use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides `provider.api_key`.
pub const API_KEY_ENV: &str = "ORPHEUS_API_KEY";

const API_KEY_PLACEHOLDER: &str = "your-perplexity-api-key-here";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "ProviderConfig::default_model")]
    pub model: String,
    #[serde(default = "ProviderConfig::default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "ProviderConfig::default_temperature")]
    pub temperature: f64,
    #[serde(default = "ProviderConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            max_tokens: Self::default_max_tokens(),
            temperature: Self::default_temperature(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    fn default_base_url() -> String {
        "https://api.perplexity.ai".to_string()
    }

    fn default_model() -> String {
        "llama-3.1-sonar-small-128k-online".to_string()
    }

    const fn default_max_tokens() -> u32 {
        1000
    }

    const fn default_temperature() -> f64 {
        0.1
    }

    const fn default_timeout_secs() -> u64 {
        30
    }

    /// The configured key, refusing blanks and the template placeholder.
    pub fn api_key(&self) -> anyhow::Result<&str> {
        let key = self.api_key.trim();
        if key.is_empty() || key == API_KEY_PLACEHOLDER {
            anyhow::bail!(
                "API key not configured. Set provider.api_key in the config file or export {API_KEY_ENV}."
            );
        }
        Ok(key)
    }

    /// Key with everything but the first and last four characters hidden.
    #[must_use]
    pub fn masked_api_key(&self) -> String {
        let key = self.api_key.trim();
        let chars: Vec<char> = key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}{}{tail}", "*".repeat(chars.len() - 8))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProfileConfig {
    /// Profile JSON file. Defaults to `~/orpheus/profile.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

impl LoggingConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

/// Files written by [`Config::create_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFiles {
    pub config: PathBuf,
    /// `None` when a profile already existed and was left alone.
    pub profile: Option<PathBuf>,
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("orpheus"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join("config.json");

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'orpheus init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config = Self::from_json(&content)?;
        Ok(config.with_api_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Replace the file's API key with `key` when it is set and non-blank.
    #[must_use]
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {API_KEY_ENV}");
            self.provider.api_key = key;
        }
        self
    }

    pub fn profile_path(&self) -> anyhow::Result<PathBuf> {
        match &self.profile.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("profile.json")),
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<CreatedFiles> {
        Self::create_in(&Self::ensure_config_dir()?)
    }

    /// Write the config and profile templates into `dir`.
    ///
    /// An existing config is an error; an existing profile is kept.
    pub fn create_in(dir: &Path) -> anyhow::Result<CreatedFiles> {
        let config_path = dir.join("config.json");
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }
        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        let profile_path = dir.join("profile.json");
        let profile = if profile_path.exists() {
            None
        } else {
            std::fs::write(&profile_path, PROFILE_TEMPLATE)?;
            Some(profile_path)
        };

        Ok(CreatedFiles {
            config: config_path,
            profile,
        })
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "provider": {
    "api_key": "your-perplexity-api-key-here",
    "base_url": "https://api.perplexity.ai",
    "model": "llama-3.1-sonar-small-128k-online",
    "max_tokens": 1000,
    "temperature": 0.1,
    "timeout_secs": 30
  },
  "profile": {},
  "logging": {
    "filter": "info"
  }
}
"#;

const PROFILE_TEMPLATE: &str = r#"{
  "name": "Your Name",
  "age": 35,
  "bloodGroup": "O+",
  "allergies": [],
  "medications": [],
  "location": { "address": "200 E Washington St, Indianapolis, IN" }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> anyhow::Result<PathBuf> {
        let dir = std::env::temp_dir().join(format!("orpheus-{name}-{}", std::process::id()));
        if dir.exists() {
            std::fs::remove_dir_all(&dir)?;
        }
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    #[test]
    fn empty_object_takes_every_default() -> anyhow::Result<()> {
        let config = Config::from_json("{}")?;
        assert_eq!(config.provider.base_url, "https://api.perplexity.ai");
        assert_eq!(config.provider.model, "llama-3.1-sonar-small-128k-online");
        assert_eq!(config.provider.max_tokens, 1000);
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.logging.filter, "info");
        assert!(config.profile.path.is_none());
        Ok(())
    }

    #[test]
    fn blank_and_placeholder_keys_are_rejected() -> anyhow::Result<()> {
        let config = Config::from_json(r#"{"provider":{"api_key":"  "}}"#)?;
        assert!(config.provider.api_key().is_err());

        let config = Config::from_json(CONFIG_TEMPLATE)?;
        assert!(config.provider.api_key().is_err());
        Ok(())
    }

    #[test]
    fn environment_key_overrides_file() -> anyhow::Result<()> {
        let config = Config::from_json(r#"{"provider":{"api_key":"pplx-file"}}"#)?;

        let kept = config.clone().with_api_key_override(Some(String::new()));
        assert_eq!(kept.provider.api_key()?, "pplx-file");

        let overridden = config.with_api_key_override(Some("pplx-env".to_string()));
        assert_eq!(overridden.provider.api_key()?, "pplx-env");
        Ok(())
    }

    #[test]
    fn masked_key_keeps_only_edges() {
        let provider = ProviderConfig {
            api_key: "pplx-1234567890".to_string(),
            ..ProviderConfig::default()
        };
        assert_eq!(provider.masked_api_key(), "pplx*******7890");

        let short = ProviderConfig {
            api_key: "abc".to_string(),
            ..ProviderConfig::default()
        };
        assert_eq!(short.masked_api_key(), "***");
    }

    #[test]
    fn create_writes_templates_once() -> anyhow::Result<()> {
        let dir = scratch_dir("create")?;

        let created = Config::create_in(&dir)?;
        assert_eq!(created.config, dir.join("config.json"));
        assert_eq!(created.profile, Some(dir.join("profile.json")));

        let profile = orpheus_core::UserProfile::from_json(&std::fs::read_to_string(
            dir.join("profile.json"),
        )?)?;
        assert_eq!(profile.name, "Your Name");

        assert!(Config::create_in(&dir).is_err());

        std::fs::remove_file(dir.join("config.json"))?;
        let again = Config::create_in(&dir)?;
        assert!(again.profile.is_none());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
