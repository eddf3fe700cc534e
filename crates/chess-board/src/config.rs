//! Configuration file loading for the board shell.
//!
//! Settings live in an optional TOML file (`chess-board.toml` by default).
//! Every key has a default, so an empty or missing file is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A value parsed but is out of range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// An RGB color triple.
pub type Rgb = [u8; 3];

/// Settings for the terminal board.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Size of one square in pointer coordinates. Defaults to 75.
    #[serde(default = "default_square_size")]
    pub square_size: u32,
    /// Draw with ANSI truecolor escapes. Defaults to true.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Draw rank and file labels around the grid. Defaults to true.
    #[serde(default = "default_true")]
    pub show_coordinates: bool,
    /// Mark the selected square. Defaults to false.
    #[serde(default)]
    pub highlight_selection: bool,
    /// Background of light squares.
    #[serde(default = "default_light_square")]
    pub light_square: Rgb,
    /// Background of dark squares.
    #[serde(default = "default_dark_square")]
    pub dark_square: Rgb,
}

fn default_square_size() -> u32 {
    75
}

fn default_true() -> bool {
    true
}

fn default_light_square() -> Rgb {
    [235, 236, 208]
}

fn default_dark_square() -> Rgb {
    [119, 149, 86]
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            square_size: default_square_size(),
            color: true,
            show_coordinates: true,
            highlight_selection: false,
            light_square: default_light_square(),
            dark_square: default_dark_square(),
        }
    }
}

impl ShellConfig {
    /// Default configuration file, relative to the working directory.
    pub const DEFAULT_PATH: &'static str = "chess-board.toml";

    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// [`ConfigError::ParseError`] for invalid TOML, and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ShellConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that TOML types alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_size == 0 {
            return Err(ConfigError::Invalid(
                "square_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
