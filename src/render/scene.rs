use std::fmt;

use crate::game::{GameConfig, GameState, Position};

/// What a tile square depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Food,
    Head,
    Body,
}

/// A filled tile-sized square, in board pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub x: i32,
    pub y: i32,
    pub size: i32,
}

/// The single line of text drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Score(usize),
    GameOver(usize),
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overlay::Score(score) => write!(f, "Score: {score}"),
            Overlay::GameOver(score) => write!(f, "Game Over : {score}"),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub board_width: i32,
    pub board_height: i32,
    pub tile_size: i32,
    /// Squares in paint order: food, head, then body front to back
    pub sprites: Vec<Sprite>,
    pub overlay: Overlay,
}

impl Scene {
    pub fn compose(state: &GameState, config: &GameConfig) -> Self {
        let tile = |kind, pos: Position| {
            let (x, y) = config.to_pixels(pos);
            Sprite {
                kind,
                x,
                y,
                size: config.tile_size,
            }
        };

        let mut sprites = Vec::with_capacity(state.snake.len() + 2);
        sprites.push(tile(SpriteKind::Food, state.food));
        sprites.push(tile(SpriteKind::Head, state.snake.head));
        sprites.extend(
            state
                .snake
                .body
                .iter()
                .map(|&segment| tile(SpriteKind::Body, segment)),
        );

        let overlay = if state.game_over {
            Overlay::GameOver(state.score())
        } else {
            Overlay::Score(state.score())
        };

        Self {
            board_width: config.board_width,
            board_height: config.board_height,
            tile_size: config.tile_size,
            sprites,
            overlay,
        }
    }
}
