//! Core game logic module for Snake
//!
//! This module contains all the simulation logic without any I/O or rendering
//! dependencies. Front ends observe it through [`Snapshot`]s.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ColumnWrap, ConfigError, GameConfig};
pub use engine::{wrap_position, GameEngine, Snapshot, TickOutcome};
pub use grid::{Cell, Grid, GridError};
pub use state::{GameState, Position, Snake, INITIAL_SNAKE_LENGTH};
