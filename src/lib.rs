//! WASD Snake - a grid snake game for the terminal
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Key mapping for terminal input (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive keyboard mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
