use crate::menu::type_codes::MAX_USERS;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Video output settings
    #[serde(default)]
    pub video: VideoConfig,

    /// Menu navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Input settings
    #[serde(default)]
    pub input: InputConfig,
}

/// Video output configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct VideoConfig {
    /// How "screen resolution" steps back: by asking the video driver for its
    /// previous output, or by walking a fixed resolution list
    #[serde(default)]
    pub resolution_mode: ResolutionMode,
}

/// Strategy used by the screen-resolution entry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    /// Ask the video driver to select its previous output
    #[default]
    OutputDriver,
    /// Step back through the fixed screen-resolution list
    ResolutionList,
}

/// Menu navigation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavigationConfig {
    /// Let bounded settings wrap past their minimum back to their maximum
    #[serde(default = "default_false")]
    pub wraparound: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            wraparound: default_false(),
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Number of users whose "joypad index" entries are recognised (1-16)
    #[serde(default = "default_max_users")]
    pub max_users: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_users: default_max_users(),
        }
    }
}

fn default_false() -> bool {
    false
}

fn default_max_users() -> usize {
    MAX_USERS
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file
    /// is missing or invalid.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.max_users == 0 || self.input.max_users > MAX_USERS {
            return Err(ConfigError::ValidationError(format!(
                "input.max_users must be between 1 and {MAX_USERS}"
            )));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Serialize error: {0}")]
    SerializeError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
