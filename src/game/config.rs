use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::Position;

/// Fixed parameters of the board and the game clock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the board in pixel units
    pub board_width: i32,
    /// Height of the board in pixel units
    pub board_height: i32,
    /// Edge length of one tile in pixel units
    pub tile_size: i32,
    /// Milliseconds between two ticks
    pub tick_millis: u64,
    /// Cell the head starts on
    pub start: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            tile_size: 25,
            tick_millis: 100,
            start: Position::new(5, 5),
        }
    }
}

impl GameConfig {
    /// Number of tile columns on the board
    pub fn grid_width(&self) -> i32 {
        self.board_width / self.tile_size
    }

    /// Number of tile rows on the board
    pub fn grid_height(&self) -> i32 {
        self.board_height / self.tile_size
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Pixel coordinates of the top-left corner of a tile
    pub fn to_pixels(&self, pos: Position) -> (i32, i32) {
        (pos.x * self.tile_size, pos.y * self.tile_size)
    }

    /// Returns true once the head has left the board.
    ///
    /// Compared in pixel space: the lower bound trips below 0, the upper bound
    /// only once the tile origin is strictly past the board edge, so the head
    /// can sit on column/row `grid` for one tick.
    pub fn is_out_of_bounds(&self, pos: Position) -> bool {
        let (px, py) = self.to_pixels(pos);
        px < 0 || px > self.board_width || py < 0 || py > self.board_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_width(), 24);
        assert_eq!(config.grid_height(), 24);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.start, Position::new(5, 5));
    }

    #[test]
    fn test_pixel_scaling() {
        let config = GameConfig::default();
        assert_eq!(config.to_pixels(Position::new(10, 3)), (250, 75));
    }

    #[test]
    fn test_bounds_are_asymmetric() {
        let config = GameConfig::default();

        assert!(!config.is_out_of_bounds(Position::new(0, 0)));
        assert!(!config.is_out_of_bounds(Position::new(23, 23)));
        assert!(!config.is_out_of_bounds(Position::new(24, 24)));

        assert!(config.is_out_of_bounds(Position::new(-1, 0)));
        assert!(config.is_out_of_bounds(Position::new(0, -1)));
        assert!(config.is_out_of_bounds(Position::new(25, 0)));
        assert!(config.is_out_of_bounds(Position::new(0, 25)));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"tile_size\":25"));
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
