use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use tokio::time::{Instant, interval_at};
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Whether the tick timer is still driving the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    /// Game over; no more ticks are issued. Terminal.
    Stopped,
}

/// Single-player game on the terminal.
///
/// Owns the only copy of the game state. Key presses, timer ticks and
/// resizes are all handled on the task that calls [`PlayMode::run`].
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    phase: LoopPhase,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }

    /// Same as [`PlayMode::new`] but with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_engine(GameEngine::with_seed(config, seed))
    }

    fn with_engine(mut engine: GameEngine) -> Self {
        let state = engine.reset();
        Self::from_parts(engine, state)
    }

    /// Start from an arbitrary state
    pub fn from_parts(engine: GameEngine, state: GameState) -> Self {
        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            phase: LoopPhase::Running,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            head_x = self.state.snake.head.x,
            head_y = self.state.snake.head.y,
            food_x = self.state.food.x,
            food_y = self.state.food.y,
            "game started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // First tick one period after the board appears
        let tick_interval = self.engine.config().tick_interval();
        let mut tick_timer = interval_at(Instant::now() + tick_interval, tick_interval);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, only while the game is on
                _ = tick_timer.tick(), if self.phase == LoopPhase::Running => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(score = self.state.score(), "player quit");
                break;
            }
        }

        Ok(())
    }

    /// Apply a terminal event. Returns true if the screen needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return false;
                }

                let action = self.input_handler.handle_key_event(key);
                self.handle_key_action(action);
                false
            }
            Event::Resize(..) => true,
            _ => false,
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                let turned = self.state.steer(direction);
                debug!(?direction, turned, "steer");
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// One tick of the driver: advance the game, then stop if it ended
    fn update_game(&mut self) {
        if self.phase == LoopPhase::Stopped {
            return;
        }

        let info = self.engine.tick(&mut self.state);
        self.metrics.on_tick(&info);
        self.metrics.update();

        if self.state.game_over {
            self.phase = LoopPhase::Stopped;
            info!(
                score = self.state.score(),
                ticks = self.metrics.ticks,
                food_eaten = self.metrics.food_eaten,
                elapsed = %self.metrics.format_time(),
                "game loop stopped"
            );
        }
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &self.state, self.engine.config(), &self.metrics);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
