//! GT Snake - a terminal Snake game
//!
//! This library provides:
//! - Core simulation (game module)
//! - Key mapping (input module)
//! - TUI rendering (render module)
//! - Keyboard play loop (modes module)
//! - File logging setup (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
