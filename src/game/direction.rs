/// Direction the player can steer the snake in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Grid cells the head advances per tick.
///
/// Always one of `(0, 0)` or a unit step along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Velocity {
    pub x: i32,
    pub y: i32,
}

impl Velocity {
    /// The snake is standing still (start of a game)
    pub const STILL: Velocity = Velocity { x: 0, y: 0 };

    pub fn is_still(&self) -> bool {
        *self == Self::STILL
    }

    /// Returns true if heading in `direction` would turn straight back
    pub fn reverses(&self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        !self.is_still() && self.x == -dx && self.y == -dy
    }
}

impl From<Direction> for Velocity {
    fn from(direction: Direction) -> Self {
        let (x, y) = direction.delta();
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_reversal_detection() {
        let right = Velocity::from(Direction::Right);
        assert!(right.reverses(Direction::Left));
        assert!(!right.reverses(Direction::Right));
        assert!(!right.reverses(Direction::Up));
        assert!(!right.reverses(Direction::Down));

        let up = Velocity::from(Direction::Up);
        assert!(up.reverses(Direction::Down));
        assert!(!up.reverses(Direction::Left));
    }

    #[test]
    fn test_still_never_reverses() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert!(!Velocity::STILL.reverses(direction));
        }
    }
}
