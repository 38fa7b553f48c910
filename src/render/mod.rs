//! Drawing the board.
//!
//! [`Scene`] turns a [`GameState`](crate::game::GameState) into tile squares
//! in board pixel space; [`Renderer`] rasterises a scene onto the terminal.

pub mod renderer;
pub mod scene;

pub use renderer::{BoardView, Renderer};
pub use scene::{Overlay, Scene, Sprite, SpriteKind};
