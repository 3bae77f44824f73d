#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::game::{
    BASE_DELAY_MS, DELAY_STEP_MS, GRID_COLS, GRID_ROWS, MIN_DELAY_MS, STARTING_LIVES,
};

// Fallback path when no user config directory is available
const CONFIG_FILE_PATH: &str = "config/quintris.toml";

/// Tunable game parameters. Passed into `GameLoop::new` by value; there is no
/// global configuration state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cols: usize,
    pub rows: usize,
    pub starting_lives: u32,
    pub base_delay_ms: u64,
    pub delay_step_ms: u64,
    pub min_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: GRID_COLS,
            rows: GRID_ROWS,
            starting_lives: STARTING_LIVES,
            base_delay_ms: BASE_DELAY_MS,
            delay_step_ms: DELAY_STEP_MS,
            min_delay_ms: MIN_DELAY_MS,
        }
    }
}

// Load the configuration from the default location, creating a default file
// on first run
pub fn load_config_from_file() -> Result<GameConfig, ConfigError> {
    load_config_from_path(&config_file_path())
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        let default_config = GameConfig::default();
        save_config_to_path(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let config: GameConfig = toml::from_str(&contents)?;
    Ok(config)
}

pub fn save_config_to_file(config: &GameConfig) -> Result<(), ConfigError> {
    save_config_to_path(config, &config_file_path())
}

pub fn save_config_to_path(config: &GameConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

// Get the path to the config file
fn config_file_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var("QUINTRIS_CONFIG") {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("quintris").join("config.toml")
    } else {
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config io error: {err}"),
            ConfigError::Parse(err) => write!(f, "config parse error: {err}"),
            ConfigError::Serialize(err) => write!(f, "config serialize error: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
