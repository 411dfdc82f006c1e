//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/blockfall/settings.toml (or platform equivalent)

use crate::board::{check_dimensions, BOARD_HEIGHT, BOARD_WIDTH};
use crate::error::{EngineError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Engine and driver settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed seed for the piece source; random when absent
    pub seed: Option<u64>,
    /// Board dimensions
    pub board: BoardSettings,
    /// Gravity table
    pub speed: SpeedSettings,
}

/// Board dimensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub rows: usize,
    pub cols: usize,
}

/// Tick interval by lines cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedSettings {
    /// Interval before the first step is reached
    pub base_ms: u64,
    /// Thresholds, ascending by `lines`
    pub steps: Vec<SpeedStep>,
}

/// Once `lines` have been cleared, tick every `interval_ms`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedStep {
    pub lines: u32,
    pub interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            board: BoardSettings::default(),
            speed: SpeedSettings::default(),
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: BOARD_HEIGHT,
            cols: BOARD_WIDTH,
        }
    }
}

impl Default for SpeedSettings {
    fn default() -> Self {
        Self {
            base_ms: 500,
            steps: vec![
                SpeedStep {
                    lines: 10,
                    interval_ms: 400,
                },
                SpeedStep {
                    lines: 20,
                    interval_ms: 300,
                },
                SpeedStep {
                    lines: 30,
                    interval_ms: 200,
                },
            ],
        }
    }
}

impl SpeedSettings {
    /// Tick interval once `lines` rows have been cleared.
    ///
    /// The highest step whose threshold has been reached wins; below every
    /// threshold the base interval applies.
    pub fn interval_for(&self, lines: u32) -> Duration {
        let ms = self
            .steps
            .iter()
            .rev()
            .find(|step| lines >= step.lines)
            .map_or(self.base_ms, |step| step.interval_ms);
        Duration::from_millis(ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_ms == 0 {
            return Err(EngineError::InvalidSpeedTable(
                "base interval must be non-zero".to_string(),
            ));
        }
        if self.steps.iter().any(|step| step.interval_ms == 0) {
            return Err(EngineError::InvalidSpeedTable(
                "step intervals must be non-zero".to_string(),
            ));
        }
        if self.steps.windows(2).any(|pair| pair[0].lines >= pair[1].lines) {
            return Err(EngineError::InvalidSpeedTable(
                "step thresholds must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }
}

impl BoardSettings {
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "blockfall", "blockfall")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from the platform config dir, or defaults if there is no file
    pub fn load() -> Result<Self> {
        let path = Self::settings_path().ok_or(EngineError::NoConfigDir)?;
        Self::load_from(&path)
    }

    /// Load settings from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the platform config dir
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path().ok_or(EngineError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to a file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.board.validate()?;
        self.speed.validate()
    }
}
