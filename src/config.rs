use crate::consts;
use crate::options::Options;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a TOML configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Default pre-game options shown on the start screen
    pub(crate) options: Options,

    /// Colors used for drawing the playfield
    pub(crate) theme: Theme,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakez").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's
    /// contents could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Styles for the playfield, each optional and falling back to the classic
/// palette from [`consts`]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Theme {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    background: Option<parse_style::Style>,
}

impl Theme {
    pub(crate) fn snake(&self) -> ratatui::style::Style {
        self.snake
            .clone()
            .map_or(consts::SNAKE_STYLE, ratatui::style::Style::from)
    }

    pub(crate) fn food(&self) -> ratatui::style::Style {
        self.food
            .clone()
            .map_or(consts::FOOD_STYLE, ratatui::style::Style::from)
    }

    pub(crate) fn background(&self) -> ratatui::style::Style {
        self.background
            .clone()
            .map_or(consts::BACKGROUND_STYLE, ratatui::style::Style::from)
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Difficulty;
    use ratatui::style::Color;

    #[test]
    fn empty_config() {
        let config = toml::from_str::<Config>("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.theme.snake(), consts::SNAKE_STYLE);
        assert_eq!(config.theme.food(), consts::FOOD_STYLE);
        assert_eq!(config.theme.background(), consts::BACKGROUND_STYLE);
    }

    #[test]
    fn options_section() {
        let config = toml::from_str::<Config>(concat!(
            "[options]\n",
            "difficulty = \"hard\"\n",
            "sound = false\n",
        ))
        .unwrap();
        assert_eq!(config.options.difficulty, Difficulty::Hard);
        assert!(!config.options.sound);
    }

    #[test]
    fn theme_section() {
        let config = toml::from_str::<Config>(concat!(
            "[theme]\n",
            "snake = \"green\"\n",
            "food = \"red on black\"\n",
        ))
        .unwrap();
        assert_eq!(config.theme.snake().fg, Some(Color::Green));
        assert_eq!(config.theme.food().fg, Some(Color::Red));
        assert_eq!(config.theme.food().bg, Some(Color::Black));
        assert_eq!(config.theme.background(), consts::BACKGROUND_STYLE);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[options]\ndifficulty = \"easy\"\n").unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.options.difficulty, Difficulty::Easy);
    }

    #[test]
    fn load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "[options]\ndifficulty = 12\n").unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }
}
