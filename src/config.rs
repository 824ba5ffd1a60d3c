use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

/// Default names pre-filling the name entry form. Blank is allowed here;
/// the form itself refuses to start a game until both names are non-empty.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub player_one: String,
    pub player_two: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long the event loop waits for input before redrawing.
    pub poll_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
        }
    }
}

/// Longest name the header and the form render without truncation.
pub const MAX_NAME_LEN: usize = 20;

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.players.player_one.chars().count() > MAX_NAME_LEN
            || self.players.player_two.chars().count() > MAX_NAME_LEN
        {
            return Err(ConfigError::Validation(format!(
                "player names must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}
