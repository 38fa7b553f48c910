use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::scene::{Overlay, Scene, SpriteKind};
use crate::game::{GameConfig, GameState};
use crate::metrics::GameMetrics;

/// Terminal columns used for one tile; cells are roughly twice as tall as wide
const CELLS_PER_TILE_X: i32 = 2;
const CELLS_PER_TILE_Y: i32 = 1;
const TILE_SYMBOL: &str = "█";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        config: &GameConfig,
        metrics: &GameMetrics,
    ) {
        let scene = Scene::compose(state, config);

        let [overlay_area, board_area, footer_area] = Layout::vertical([
            Constraint::Length(1), // Score / game over
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Controls
        ])
        .areas(frame.area());

        frame.render_widget(self.render_overlay(&scene), overlay_area);

        let board_area = self.center_board(board_area, &scene);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");
        let inner = block.inner(board_area);
        frame.render_widget(block, board_area);
        frame.render_widget(BoardView::new(&scene), inner);

        frame.render_widget(self.render_controls(metrics), footer_area);
    }

    /// Size of the bordered board in terminal cells
    fn board_cells(scene: &Scene) -> (u16, u16) {
        let cols = scene.board_width / scene.tile_size * CELLS_PER_TILE_X + 2;
        let rows = scene.board_height / scene.tile_size * CELLS_PER_TILE_Y + 2;
        (
            u16::try_from(cols).unwrap_or(u16::MAX),
            u16::try_from(rows).unwrap_or(u16::MAX),
        )
    }

    fn center_board(&self, area: Rect, scene: &Scene) -> Rect {
        let (width, height) = Self::board_cells(scene);
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        board
    }

    fn render_overlay(&self, scene: &Scene) -> Paragraph<'static> {
        let style = match scene.overlay {
            Overlay::Score(_) => Style::default().fg(Color::White),
            Overlay::GameOver(_) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", scene.overlay),
            style,
        )))
        .alignment(Alignment::Left)
    }

    fn render_controls(&self, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit | "),
            Span::styled(metrics.format_time(), Style::default().fg(Color::Yellow)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rasterises the tile squares of a scene into the area it is given.
///
/// Squares that fall outside the area are clipped.
pub struct BoardView<'a> {
    scene: &'a Scene,
}

impl<'a> BoardView<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    fn color(kind: SpriteKind) -> Color {
        match kind {
            SpriteKind::Food => Color::Red,
            SpriteKind::Head | SpriteKind::Body => Color::Green,
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let tile = self.scene.tile_size;

        for sprite in &self.scene.sprites {
            let col = sprite.x * CELLS_PER_TILE_X / tile;
            let row = sprite.y * CELLS_PER_TILE_Y / tile;
            let width = sprite.size * CELLS_PER_TILE_X / tile;
            let height = sprite.size * CELLS_PER_TILE_Y / tile;
            let style = Style::default().fg(Self::color(sprite.kind));

            for dy in 0..height {
                for dx in 0..width {
                    let (Ok(x), Ok(y)) = (u16::try_from(col + dx), u16::try_from(row + dy)) else {
                        continue;
                    };
                    if x >= area.width || y >= area.height {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                        cell.set_symbol(TILE_SYMBOL).set_style(style);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use ratatui::{Terminal, backend::TestBackend};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn draw(state: &GameState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let renderer = Renderer::new();
        let config = GameConfig::default();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| renderer.render(frame, state, &config, &metrics))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_board_tiles_land_on_cells() {
        let mut state = GameState::new(Position::new(5, 5), Position::new(10, 10));
        state.snake.body = vec![Position::new(4, 5)];
        let scene = Scene::compose(&state, &GameConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 48, 24));

        BoardView::new(&scene).render(buf.area, &mut buf);

        // Food at tile (10, 10) covers columns 20-21 of row 10
        assert_eq!(buf[(20, 10)].symbol(), TILE_SYMBOL);
        assert_eq!(buf[(21, 10)].fg, Color::Red);
        assert_eq!(buf[(22, 10)].symbol(), " ");

        // Head at (5, 5), body at (4, 5)
        assert_eq!(buf[(10, 5)].fg, Color::Green);
        assert_eq!(buf[(8, 5)].fg, Color::Green);
        assert_eq!(buf[(9, 5)].symbol(), TILE_SYMBOL);
        assert_eq!(buf[(12, 5)].symbol(), " ");
    }

    #[test]
    fn test_board_clips_offboard_tiles() {
        // The head may sit one tile past the right edge before the game ends
        let state = GameState::new(Position::new(24, 3), Position::new(0, 0));
        let scene = Scene::compose(&state, &GameConfig::default());
        let mut buf = Buffer::empty(Rect::new(0, 0, 48, 24));

        BoardView::new(&scene).render(buf.area, &mut buf);

        assert!(row_text(&buf, 3).trim().is_empty());
        assert_eq!(buf[(0, 0)].symbol(), TILE_SYMBOL);
    }

    #[test]
    fn test_score_overlay() {
        let mut state = GameState::new(Position::new(5, 5), Position::new(10, 10));
        state.snake.grow(Position::new(4, 5));

        let buf = draw(&state);

        assert!(row_text(&buf, 0).contains("Score: 1"));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = GameState::new(Position::new(5, 5), Position::new(10, 10));
        state.end();

        let buf = draw(&state);
        let overlay = row_text(&buf, 0);

        assert!(overlay.contains("Game Over : 0"));
        assert!(!overlay.contains("Score"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut state = GameState::new(Position::new(7, 2), Position::new(3, 19));
        state.snake.body = vec![Position::new(6, 2), Position::new(5, 2)];
        let before = state.clone();

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        let renderer = Renderer::new();
        let config = GameConfig::default();
        let metrics = GameMetrics::new();

        terminal
            .draw(|frame| renderer.render(frame, &state, &config, &metrics))
            .unwrap();
        let first = terminal.backend().buffer().clone();
        terminal
            .draw(|frame| renderer.render(frame, &state, &config, &metrics))
            .unwrap();
        let second = terminal.backend().buffer().clone();

        assert_eq!(first, second);
        assert_eq!(state, before);
    }
}
