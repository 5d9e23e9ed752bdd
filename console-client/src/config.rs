use std::path::Path;
use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use crate::mode::GameMode;

pub const CONFIG_FILE: &str = "tictactoe_console_config.yaml";

const MAX_BEEPS: u32 = 10;
const MAX_BEEP_INTERVAL_MS: u64 = 5000;

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, ConsoleConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Skips the mode menu when set.
    pub default_mode: Option<GameMode>,
    pub thinking: ThinkingConfig,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        self.thinking.validate()
    }
}

/// Cosmetic pause shown before the bot moves.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ThinkingConfig {
    pub beeps: u32,
    pub beep_interval_ms: u64,
}

impl ThinkingConfig {
    pub fn disabled() -> Self {
        Self {
            beeps: 0,
            beep_interval_ms: 0,
        }
    }

    pub fn beep_interval(&self) -> Duration {
        Duration::from_millis(self.beep_interval_ms)
    }
}

impl Default for ThinkingConfig {
    fn default() -> Self {
        Self {
            beeps: 3,
            beep_interval_ms: 1000,
        }
    }
}

impl Validate for ThinkingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.beeps > MAX_BEEPS {
            return Err(format!("thinking.beeps must not exceed {}", MAX_BEEPS));
        }
        if self.beep_interval_ms > MAX_BEEP_INTERVAL_MS {
            return Err(format!(
                "thinking.beep_interval_ms must not exceed {}",
                MAX_BEEP_INTERVAL_MS
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::config::{ConfigSerializer, YamlConfigSerializer};

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_mode, None);
        assert_eq!(config.thinking.beeps, 3);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: ConsoleConfig = YamlConfigSerializer
            .deserialize("default_mode: optimal\n")
            .unwrap();
        assert_eq!(config.default_mode, Some(GameMode::Optimal));
        assert_eq!(config.thinking, ThinkingConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "default_mode: pvp\nthinking:\n  beeps: 1\n  beep_interval_ms: 250\n";
        let config: ConsoleConfig = YamlConfigSerializer.deserialize(yaml).unwrap();
        assert_eq!(config.default_mode, Some(GameMode::Pvp));
        assert_eq!(config.thinking.beeps, 1);
        assert_eq!(config.thinking.beep_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_too_many_beeps_is_invalid() {
        let config = ConsoleConfig {
            default_mode: None,
            thinking: ThinkingConfig {
                beeps: 11,
                beep_interval_ms: 10,
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_long_interval_is_invalid() {
        let thinking = ThinkingConfig {
            beeps: 1,
            beep_interval_ms: 60_000,
        };
        assert!(thinking.validate().is_err());
    }
}
