use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Grid, Phase, Player, PlayerCount, Position};
use crate::metrics::GameMetrics;

/// Shadow trails are drawn at most this opaque
const SHADOW_MAX_ALPHA: f32 = 0.75;
const PLAYER1_SHADOW_BASE: (u8, u8, u8) = (0, 150, 0);
const PLAYER2_SHADOW_BASE: (u8, u8, u8) = (0, 100, 255);

/// What occupies a grid cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// `age` 1 is the most recently vacated cell
    Shadow { player: Player, age: usize },
    Snake { player: Player, head: bool },
    Food,
}

/// Resolve a cell the way layers are painted: trails, snakes, then food on top
pub fn classify_cell(state: &GameState, pos: Position) -> Cell {
    if state.is_food(pos) {
        return Cell::Food;
    }

    for &player in state.player_count.players().iter().rev() {
        if let Some(snake) = state.snake(player) {
            if snake.contains(pos) {
                return Cell::Snake {
                    player,
                    head: snake.head() == pos,
                };
            }
        }
    }

    for &player in state.player_count.players().iter().rev() {
        if let Some(snake) = state.snake(player) {
            if let Some(i) = snake.trail.iter().position(|&cell| cell == pos) {
                return Cell::Shadow { player, age: i + 1 };
            }
        }
    }

    Cell::Empty
}

/// Opacity of a trail cell of the given age
pub fn shadow_opacity(age: usize, decay: f32) -> f32 {
    (1.0 - age as f32 * decay).max(0.0) * SHADOW_MAX_ALPHA
}

/// Blend a trail color over the black background
pub fn shadow_color(player: Player, age: usize, decay: f32) -> Color {
    let (r, g, b) = match player {
        Player::One => PLAYER1_SHADOW_BASE,
        Player::Two => PLAYER2_SHADOW_BASE,
    };
    let alpha = shadow_opacity(age, decay);
    let scale = |c: u8| (c as f32 * alpha).round() as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}

fn snake_color(player: Player) -> Color {
    match player {
        Player::One => Color::LightGreen,
        Player::Two => Color::Blue,
    }
}

/// Rect of `percent_x` width and `height` rows centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

pub struct Renderer {
    shadow_opacity_decay: f32,
}

impl Renderer {
    pub fn new(shadow_opacity_decay: f32) -> Self {
        Self {
            shadow_opacity_decay,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        state: &GameState,
        metrics: &GameMetrics,
        grid: &Grid,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        match state.phase {
            Phase::Idle => {
                let title = self.render_title(game_area, metrics);
                frame.render_widget(title, game_area);
            }
            Phase::Playing => {
                let board = self.render_grid(game_area, state, grid.tile_count());
                frame.render_widget(board, game_area);
            }
            Phase::Over => {
                // The final board stays visible under the panel
                let board = self.render_grid(game_area, state, grid.tile_count());
                frame.render_widget(board, game_area);

                let panel_area = centered_rect(game_area, 90, 9);
                frame.render_widget(Clear, panel_area);
                let game_over = self.render_game_over(panel_area, state);
                frame.render_widget(game_over, panel_area);
            }
        }

        let controls = self.render_controls(chunks[2], state);
        frame.render_widget(controls, chunks[2]);
    }

    fn cell_span(&self, cell: Cell) -> Span<'static> {
        match cell {
            Cell::Empty => Span::styled("  ", Style::default()),
            Cell::Shadow { player, age } => Span::styled(
                "  ",
                Style::default().bg(shadow_color(player, age, self.shadow_opacity_decay)),
            ),
            Cell::Snake { player, head: true } => Span::styled(
                "■ ",
                Style::default()
                    .fg(snake_color(player))
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::Snake { player, head: false } => {
                Span::styled("□ ", Style::default().fg(snake_color(player)))
            }
            Cell::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        }
    }

    fn render_grid(&self, _area: Rect, state: &GameState, tile_count: i32) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..tile_count)
            .map(|y| {
                let spans: Vec<Span> = (0..tile_count)
                    .map(|x| self.cell_span(classify_cell(state, Position::new(x, y))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        state: &GameState,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_title(&self, _area: Rect, metrics: &GameMetrics) -> Paragraph<'_> {
        let key = |k: &'static str| {
            Span::styled(
                k,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        };

        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "S N A K E",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![key("1"), Span::raw("  One player")]),
            Line::from(vec![key("2"), Span::raw("  Two players")]),
            Line::from(""),
        ];

        if metrics.games_played > 0 {
            text.push(Line::from(Span::styled(
                format!(
                    "Games played: {}   Best score: {}",
                    metrics.games_played, metrics.high_score
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_game_over(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart, ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "B",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" for the title or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let mut spans = Vec::new();

        if state.phase == Phase::Playing {
            spans.push(Span::styled("↑↓←→", Style::default().fg(Color::LightGreen)));
            if state.player_count == PlayerCount::Two {
                spans.push(Span::raw(" player 1 | "));
                spans.push(Span::styled("WASD", Style::default().fg(Color::Blue)));
                spans.push(Span::raw(" player 2 | "));
            } else {
                spans.push(Span::raw(" to move | "));
            }
            spans.push(Span::styled("B", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw(" title | "));
        }

        spans.push(Span::styled("Q", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(crate::game::config::SHADOW_OPACITY_DECAY)
    }
}
