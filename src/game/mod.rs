//! Core game logic for Snake
//!
//! Everything here is free of I/O and rendering. The terminal front end in
//! `modes` drives a [`GameEngine`] with ticks and direction input and draws
//! the state it exposes.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use state::{Cell, GameState, Phase, Snake};
