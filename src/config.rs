use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::{HEIGHT, WIDTH};

/// Plies searched for the opponent's reply unless configured otherwise
pub const DEFAULT_SEARCH_DEPTH: usize = 4;

/// Game settings, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Plies searched for each opponent move
    pub search_depth: usize,
    /// End the game as a draw once the board fills up without a winner
    pub detect_draws: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            search_depth: DEFAULT_SEARCH_DEPTH,
            detect_draws: false,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(
                "search_depth must be >= 1".into(),
            ));
        }
        if self.search_depth > WIDTH * HEIGHT {
            return Err(ConfigError::Validation(format!(
                "search_depth must be <= {}",
                WIDTH * HEIGHT
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    // one file per test process
    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "connect4_minimax_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.search_depth, 4);
        assert!(!config.detect_draws);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str("detect_draws = true").unwrap();
        assert_eq!(config.search_depth, DEFAULT_SEARCH_DEPTH);
        assert!(config.detect_draws);
    }

    #[test]
    fn rejects_bad_depth() {
        let zero = GameConfig {
            search_depth: 0,
            ..GameConfig::default()
        };
        assert!(matches!(zero.validate(), Err(ConfigError::Validation(_))));

        let too_deep = GameConfig {
            search_depth: WIDTH * HEIGHT + 1,
            ..GameConfig::default()
        };
        assert!(too_deep.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let path = temp_config_path("valid");
        std::fs::write(&path, "search_depth = 6\n").unwrap();
        let config = GameConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.search_depth, 6);
    }

    #[test]
    fn load_validates() {
        let path = temp_config_path("invalid");
        std::fs::write(&path, "search_depth = 0\n").unwrap();
        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = Path::new("does/not/exist/connect4.toml");
        assert_eq!(
            GameConfig::load_or_default(path).unwrap(),
            GameConfig::default()
        );
        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
