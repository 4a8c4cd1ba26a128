//! Session configuration loaded from TOML.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::{ConfigError, GameMode};

/// Upper bound on the cosmetic AI delay.
pub const MAX_AI_DELAY_MS: u64 = 10_000;

/// Settings for a play session.
///
/// ```toml
/// mode = "player-vs-ai"
/// ai_delay_ms = 500
/// log_file = "noughts.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Mode to start in. `None` shows the main menu.
    #[serde(default)]
    mode: Option<GameMode>,

    /// How long the AI "thinks" before moving, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Where log output is written.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_ai_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            ai_delay_ms: default_ai_delay_ms(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_delay_ms > MAX_AI_DELAY_MS {
            return Err(ConfigError::new(format!(
                "ai_delay_ms must be at most {}, got {}",
                MAX_AI_DELAY_MS, self.ai_delay_ms
            )));
        }
        Ok(())
    }

    /// The AI delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Overrides the starting mode.
    pub fn with_mode(mut self, mode: Option<GameMode>) -> Self {
        if mode.is_some() {
            self.mode = mode;
        }
        self
    }

    /// Overrides the AI delay.
    pub fn with_ai_delay_ms(mut self, ai_delay_ms: Option<u64>) -> Self {
        if let Some(ms) = ai_delay_ms {
            self.ai_delay_ms = ms;
        }
        self
    }

    /// Overrides the log file.
    pub fn with_log_file(mut self, log_file: Option<PathBuf>) -> Self {
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self
    }
}
