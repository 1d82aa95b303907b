use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameState};
use crate::metrics::GameMetrics;

/// Each tile is a glyph followed by one blank column, which keeps a visible
/// gap between neighbouring tiles.
const TILE: &str = "■ ";
const EMPTY: &str = "  ";
const TILE_WIDTH: u16 = 2;

const BACKGROUND: Color = Color::Black;
const SNAKE_COLOR: Color = Color::LightGreen;
const FOOD_COLOR: Color = Color::Red;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(
            Block::default().style(Style::default().bg(BACKGROUND)),
            frame.area(),
        );

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let board_area = centered_rect(
            chunks[1],
            board_extent(state.grid.width(), TILE_WIDTH),
            board_extent(state.grid.height(), 1),
        );
        frame.render_widget(self.render_grid(state), board_area);

        if state.is_game_over() {
            let overlay_area = centered_rect(board_area, 34, 7);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_game_over(state), overlay_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid.height());

        for y in 0..state.grid.height() {
            let mut spans = Vec::with_capacity(state.grid.width());

            for x in 0..state.grid.width() {
                let cell = Cell::new(x as i32, y as i32);

                let span = if state.snake.contains(cell) {
                    Span::styled(TILE, Style::default().fg(SNAKE_COLOR))
                } else if cell == state.food {
                    Span::styled(TILE, Style::default().fg(FOOD_COLOR))
                } else {
                    Span::raw(EMPTY)
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        let mut style = Style::default().bg(BACKGROUND);
        if state.is_game_over() {
            style = style.add_modifier(Modifier::DIM);
        }

        Paragraph::new(lines).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::White)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.max(state.score).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::White)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::styled(" restart  ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().bg(BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White)),
            )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal columns or rows taken by `tiles` tiles plus the two border lines
fn board_extent(tiles: usize, tile_width: u16) -> u16 {
    u16::try_from(tiles)
        .unwrap_or(u16::MAX)
        .saturating_mul(tile_width)
        .saturating_add(2)
}

/// A `width` x `height` rectangle centred in `area`, clipped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
