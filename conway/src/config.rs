// config.rs - Runtime settings for the Game of Life

use crate::error::{ConfigError, GridError};
use crate::grid::Dimensions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// All tunables. Missing JSON fields fall back to [`LifeConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Milliseconds between generations while running.
    pub step_interval_ms: u64,
    /// Milliseconds between pattern injections while idle-running.
    pub idle_interval_ms: u64,
    /// Side of one cell in logical pixels.
    pub cell_size: f32,
    /// Share of the viewport height given to the board.
    pub row_fraction: f32,
    pub initial_rows: usize,
    pub initial_cols: usize,
    /// Live probability used by the Random action.
    pub random_density: f64,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub glow: bool,
    pub theme: Theme,
    /// Stop stepping when a recently seen board comes back.
    pub stop_on_cycle: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: 500,
            idle_interval_ms: 1000,
            cell_size: 40.0,
            row_fraction: 0.8,
            initial_rows: 15,
            initial_cols: 30,
            random_density: 0.33,
            seed: None,
            glow: false,
            theme: Theme::Dark,
            stop_on_cycle: false,
        }
    }
}

impl LifeConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "step" });
        }
        if self.idle_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval { name: "idle" });
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ConfigError::InvalidDensity(self.random_density));
        }
        if !(self.row_fraction > 0.0 && self.row_fraction <= 1.0) {
            return Err(ConfigError::InvalidRowFraction(self.row_fraction));
        }
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.cell_size));
        }
        self.initial_dimensions()?;
        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn idle_interval(&self) -> Duration {
        Duration::from_millis(self.idle_interval_ms)
    }

    pub fn initial_dimensions(&self) -> Result<Dimensions, GridError> {
        Dimensions::new(self.initial_rows, self.initial_cols)
    }

    /// Grid size that fills a `width` x `height` viewport: rows take
    /// `row_fraction` of the height, columns the full width. Never below 1x1.
    pub fn dimensions_for_viewport(&self, width: f32, height: f32) -> Dimensions {
        let rows = (self.row_fraction * height / self.cell_size).floor() as usize;
        let cols = (width / self.cell_size).floor() as usize;
        Dimensions::at_least_one(rows, cols)
    }
}
