// error.rs - Error types for the Game of Life core

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building grid dimensions.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    ZeroDimension { rows: usize, cols: usize },
}

/// Errors raised while loading or validating a [`crate::config::LifeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} interval must be non-zero")]
    ZeroInterval { name: &'static str },
    #[error("random density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
    #[error("row fraction {0} must be in (0.0, 1.0]")]
    InvalidRowFraction(f32),
    #[error("cell size {0} must be positive")]
    NonPositiveCellSize(f32),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by the row-coroutine stepper.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("row task {row} failed to complete")]
    Join {
        row: usize,
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("failed to build coroutine runtime")]
    Runtime(#[source] std::io::Error),
}
