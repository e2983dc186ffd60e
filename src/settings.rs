//! Game settings
//!
//! Read from LocalStorage on the web, or from a JSON file named by
//! `BREAKOUT_CONFIG` natively. Invalid configuration falls back to defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::input::InputMode;

/// Why a configuration was rejected
#[derive(Debug)]
pub enum SettingsError {
    /// Not valid JSON for `Settings`
    Parse(serde_json::Error),
    /// Grid must have at least one row and one column
    EmptyGrid { rows: u32, columns: u32 },
    /// More bricks than a session supports
    GridTooLarge { rows: u32, columns: u32 },
    /// A session needs at least one life
    NoLives,
    /// Special brick probability outside [0, 1]
    SpecialChance(f64),
    /// Configuration file could not be read
    Io(std::io::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "invalid settings JSON: {e}"),
            Self::EmptyGrid { rows, columns } => {
                write!(f, "brick grid {rows}x{columns} has no bricks")
            }
            Self::GridTooLarge { rows, columns } => {
                write!(f, "brick grid {rows}x{columns} exceeds {MAX_BRICKS} bricks")
            }
            Self::NoLives => write!(f, "lives must be at least 1"),
            Self::SpecialChance(p) => write!(f, "special_chance {p} is outside [0, 1]"),
            Self::Io(e) => write!(f, "cannot read settings: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Upper bound on rows x columns
pub const MAX_BRICKS: u32 = 10_000;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Brick grid ===
    pub rows: u32,
    pub columns: u32,
    /// Probability that a brick releases extra balls (0.0 - 1.0)
    pub special_chance: f64,

    // === Session ===
    pub lives: u32,
    /// Fixed RNG seed; `None` draws a fresh one per session
    pub seed: Option<u64>,

    // === Controls ===
    pub input_mode: InputMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 5,
            special_chance: 0.2,
            lives: 3,
            seed: None,
            input_mode: InputMode::Keys,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "breakout_settings";
    /// Environment variable naming the config file
    #[cfg(not(target_arch = "wasm32"))]
    const CONFIG_ENV: &'static str = "BREAKOUT_CONFIG";

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(SettingsError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !self
            .rows
            .checked_mul(self.columns)
            .is_some_and(|bricks| bricks <= MAX_BRICKS)
        {
            return Err(SettingsError::GridTooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.lives == 0 {
            return Err(SettingsError::NoLives);
        }
        if !(0.0..=1.0).contains(&self.special_chance) {
            return Err(SettingsError::SpecialChance(self.special_chance));
        }
        Ok(())
    }

    /// Parse `json`, logging and falling back to defaults on failure
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `BREAKOUT_CONFIG` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {path}");
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings from {path}: {e}");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
