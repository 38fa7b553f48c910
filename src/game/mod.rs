//! Core game logic module for Snake
//!
//! Everything here is free of terminal I/O so the update rules can be driven
//! and tested directly.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::{Direction, Velocity};
pub use engine::{GameEngine, TickInfo};
pub use state::{CollisionType, GameState, Position, Snake};
