//! Conway's Game of Life on a torus.
//!
//! The board is a flat vector of cells whose edges wrap around. [`rules::step`]
//! computes a whole generation from one snapshot, [`patterns`] holds the shape
//! catalog and the edge stamper used for idle injection, and [`state::LifeState`]
//! is the single state object a front-end drives through [`state::Action`]s
//! and periodic [`state::LifeState::tick`] calls.

pub mod config;
pub mod coro;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod rules;
pub mod state;
pub mod ticker;

pub use config::{LifeConfig, Theme};
pub use error::{ConfigError, GridError, StepError};
pub use grid::{Board, Dimensions};
pub use patterns::{Edge, Pattern, PATTERNS};
pub use state::{Action, LifeState, StepMode};
