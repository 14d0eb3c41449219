use gumzo_core::Language;
use gumzo_core::util::{DEFAULT_MODEL, DEFAULT_SYSTEM_INSTRUCTION, DEFAULT_THREADS_DB};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable holding the Gemini API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
const ENV_SYSTEM_INSTRUCTION: &str = "SYSTEM_INSTRUCTION";
const ENV_MODEL: &str = "GEMINI_MODEL";
const ENV_DB_PATH: &str = "GUMZO_DB_PATH";
const ENV_LANGUAGE: &str = "GUMZO_LANGUAGE";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "GeminiConfig::default_model")]
    pub model: String,
    #[serde(default = "GeminiConfig::default_system_instruction")]
    pub system_instruction: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: Self::default_model(),
            system_instruction: Self::default_system_instruction(),
        }
    }
}

impl GeminiConfig {
    fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    fn default_system_instruction() -> String {
        DEFAULT_SYSTEM_INSTRUCTION.to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_path")]
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
        }
    }
}

impl DatabaseConfig {
    fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_THREADS_DB)
    }
}

impl Config {
    /// Load `~/gumzo/config.json` when present, then apply environment
    /// overrides. Fails if no API key is configured either way.
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::load_unvalidated()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`] but without requiring an API key, for commands
    /// that never reach the generation service.
    pub fn load_unvalidated() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        let base = if config_path.exists() {
            info!("Loading config from {}", config_path.display());
            Self::read_file(&config_path)?
        } else {
            debug!(
                "No config file at {}, using environment only",
                config_path.display()
            );
            Self::default()
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn read_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    /// Empty values are treated as unset.
    pub fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = get(ENV_API_KEY) {
            self.gemini.api_key = api_key;
        }
        if let Some(instruction) = get(ENV_SYSTEM_INSTRUCTION) {
            self.gemini.system_instruction = instruction;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.gemini.model = model;
        }
        if let Some(path) = get(ENV_DB_PATH) {
            self.database.path = PathBuf::from(path);
        }
        if let Some(language) = get(ENV_LANGUAGE) {
            self.language = language
                .parse()
                .map_err(|e| anyhow::anyhow!("{ENV_LANGUAGE}: {e}"))?;
        }

        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.gemini.api_key.trim().is_empty() {
            anyhow::bail!(
                "Gemini API key not configured. Set {ENV_API_KEY} or \"gemini.api_key\" in {}",
                Self::config_path()
                    .map_or_else(|_| "config.json".to_string(), |p| p.display().to_string())
            );
        }
        Ok(())
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("gumzo"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join("config.json");
        Self::write_template(&config_path)?;
        Ok(config_path)
    }

    /// Write the starter config to `path`, refusing to replace an existing file.
    pub fn write_template(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                path.display()
            );
        }

        let config_template = r#"{
  "gemini": {
    "api_key": "your-gemini-api-key-here",
    "model": "gemini-1.5-flash",
    "system_instruction": "Respond to customer queries in a helpful and friendly manner."
  },
  "database": {
    "path": "threads.db"
  },
  "language": "swahili"
}"#;

        std::fs::write(path, config_template)?;
        info!("Created config file at {}", path.display());
        Ok(())
    }
}
