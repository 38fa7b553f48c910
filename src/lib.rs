//! Tile Snake - the classic Snake game on a terminal board
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The fixed-tick driver loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
