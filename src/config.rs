//! Board configuration, loaded from TOML.
//!
//! Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! channel_capacity = 32
//! delay_check_interval_secs = 60
//! ready_notify_policy = "once-per-order"
//! ```

use crate::store::ReadyNotifyPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Capacity of the board actor's request channel.
    pub channel_capacity: usize,
    /// Seconds between automatic delay checks.
    pub delay_check_interval_secs: u64,
    pub ready_notify_policy: ReadyNotifyPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            delay_check_interval_secs: 60,
            ready_notify_policy: ReadyNotifyPolicy::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), "Loaded board config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "channel_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.delay_check_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "delay_check_interval_secs",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn delay_check_interval(&self) -> Duration {
        Duration::from_secs(self.delay_check_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.delay_check_interval(), Duration::from_secs(60));
        assert_eq!(config.ready_notify_policy, ReadyNotifyPolicy::EveryTransition);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = BoardConfig::from_toml_str(
            "delay_check_interval_secs = 5\nready_notify_policy = \"once-per-order\"\n",
        )
        .unwrap();
        assert_eq!(config.delay_check_interval_secs, 5);
        assert_eq!(config.ready_notify_policy, ReadyNotifyPolicy::OncePerOrder);
        assert_eq!(config.channel_capacity, 32);
    }

    #[test]
    fn test_zero_values_are_rejected() {
        let err = BoardConfig::from_toml_str("delay_check_interval_secs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "delay_check_interval_secs", .. }));

        let err = BoardConfig::from_toml_str("channel_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "channel_capacity", .. }));
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let err = BoardConfig::from_toml_str("ready_notify_policy = \"never\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = BoardConfig::load("/nonexistent/kitchen-board.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
