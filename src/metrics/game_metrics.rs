use std::time::{Duration, Instant};

use crate::game::TickInfo;

/// Running totals for the current game
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
        }
    }

    /// Refresh the elapsed time from the wall clock
    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, info: &TickInfo) {
        self.ticks += 1;
        if info.ate_food {
            self.food_eaten += 1;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
