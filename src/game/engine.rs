use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{
    config::GameConfig,
    state::{CollisionType, GameState, Position},
};

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one ended the game
    pub collision: Option<CollisionType>,
}

/// The game engine that applies the update rules
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new engine with an entropy-seeded food generator
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the starting state: bare head on the start cell, random food
    pub fn reset(&mut self) -> GameState {
        let food = self.spawn_food();
        GameState::new(self.config.start, food)
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, state: &mut GameState) -> TickInfo {
        if state.game_over {
            return TickInfo::default();
        }

        let mut outcome = TickInfo::default();

        // Eat first, so the new segment joins the shift below
        if state.snake.head == state.food {
            state.snake.grow(state.food);
            state.food = self.spawn_food();
            outcome.ate_food = true;
            debug!(
                score = state.score(),
                food_x = state.food.x,
                food_y = state.food.y,
                "food eaten"
            );
        }

        state.snake.shift_body();
        state.snake.head = state.snake.head.moved_by(state.velocity);

        outcome.collision = self.check_collision(state);
        if let Some(collision) = outcome.collision {
            state.end();
            info!(?collision, score = state.score(), "game over");
        }

        outcome
    }

    /// Check the freshly moved head against the body and the board edges
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head;

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        if self.config.is_out_of_bounds(head) {
            return Some(CollisionType::Wall);
        }

        None
    }

    /// Pick a uniformly random cell; the snake may already be on it
    fn spawn_food(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.config.grid_width());
        let y = self.rng.gen_range(0..self.config.grid_height());
        Position::new(x, y)
    }
}
