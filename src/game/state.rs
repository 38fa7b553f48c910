use serde::{Deserialize, Serialize};

use super::direction::{Direction, Velocity};

/// A position on the game grid, in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by a velocity
    pub fn moved_by(&self, velocity: Velocity) -> Self {
        Self {
            x: self.x + velocity.x,
            y: self.y + velocity.y,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub head: Position,
    /// Body segments, index 0 is the segment right behind the head
    pub body: Vec<Position>,
}

impl Snake {
    /// A bare head with no body
    pub fn new(head: Position) -> Self {
        Self {
            head,
            body: Vec::new(),
        }
    }

    /// Add a segment behind the last one
    pub fn grow(&mut self, segment: Position) {
        self.body.push(segment);
    }

    /// Pull every segment one step towards the head.
    ///
    /// Segment `i` takes the old position of segment `i - 1`, segment 0 takes
    /// the head's current position. The head itself is not moved.
    pub fn shift_body(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.pop();
        self.body.insert(0, self.head);
    }

    /// Check if position collides with the body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Number of body segments, which is also the score
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub velocity: Velocity,
    pub game_over: bool,
}

impl GameState {
    /// A fresh game: bare head at `start`, standing still
    pub fn new(start: Position, food: Position) -> Self {
        Self {
            snake: Snake::new(start),
            food,
            velocity: Velocity::STILL,
            game_over: false,
        }
    }

    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Point the snake in `direction` unless that would reverse it.
    ///
    /// Returns whether the velocity was changed.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.velocity.reverses(direction) {
            return false;
        }
        self.velocity = Velocity::from(direction);
        true
    }

    /// Flag the game as finished. There is no way back.
    pub fn end(&mut self) {
        self.game_over = true;
    }
}
