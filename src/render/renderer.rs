use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{progression::speed_label, BoardView, GamePhase, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        view: &BoardView<'_>,
        metrics: &GameMetrics,
        sound_on: bool,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(chunks[0], view, metrics);
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

        match view.phase {
            GamePhase::Idle => {
                let start = self.render_start_screen(game_area, view);
                frame.render_widget(start, game_area);
            }
            GamePhase::Running => {
                let grid = self.render_grid(game_area, view);
                frame.render_widget(grid, game_area);
            }
            GamePhase::Paused => {
                let paused = self.render_pause_screen(game_area, sound_on);
                frame.render_widget(paused, game_area);
            }
            GamePhase::Over => {
                let game_over = self.render_game_over(game_area, view);
                frame.render_widget(game_over, game_area);
            }
        }

        // Render footer with controls
        let controls = self.render_controls(chunks[2], view.phase, sound_on);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, view: &BoardView<'_>) -> Paragraph<'_> {
        let mut lines = Vec::new();
        let head = view.snake.first().copied();

        for y in 0..view.tile_count {
            let mut spans = Vec::new();

            for x in 0..view.tile_count {
                let pos = Position::new(x as i32, y as i32);

                let cell = if Some(pos) == head {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if view.snake.contains(&pos) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == view.food {
                    // Food
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake ");

        if !view.has_started_moving {
            let hint = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            block = block.title_bottom(
                Line::from(vec![
                    Span::styled(" Press arrow keys or WASD to start", hint),
                    Span::styled(" / ", Style::default().fg(Color::Gray)),
                    Span::styled("Space to pause ", hint),
                ])
                .centered(),
            );
        }

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
    }

    fn render_stats(
        &self,
        _area: Rect,
        view: &BoardView<'_>,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(view.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(view.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(view.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(speed_label(view.base_speed_ms), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen(&self, _area: Rect, view: &BoardView<'_>) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Board: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{0}x{0}", view.tile_count)),
                Span::raw("    "),
                Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
                Span::raw(speed_label(view.base_speed_ms)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                key_span("Enter", Color::Green),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(" Snake "),
        )
    }

    fn render_pause_screen(&self, _area: Rect, sound_on: bool) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                key_span("Space", Color::Green),
                Span::styled(" resume    ", Style::default().fg(Color::Gray)),
                key_span("R", Color::Cyan),
                Span::styled(" restart    ", Style::default().fg(Color::Gray)),
                key_span("M", Color::Cyan),
                Span::styled(
                    format!(" sound {}", on_off(sound_on)),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_game_over(&self, _area: Rect, view: &BoardView<'_>) -> Paragraph<'_> {
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.score.to_string(), value),
                Span::raw("    "),
                Span::styled("Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.snake.len().to_string(), value),
                Span::raw("    "),
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(view.high_score.to_string(), value),
            ]),
        ];

        if view.new_record {
            text.push(Line::from(""));
            text.push(Line::from(vec![Span::styled(
                "New high score!",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )]));
        }

        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            key_span("R", Color::Green),
            Span::styled(" to play again, ", Style::default().fg(Color::Gray)),
            key_span("N", Color::Cyan),
            Span::styled(" for a new game or ", Style::default().fg(Color::Gray)),
            key_span("Q", Color::Red),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, _area: Rect, phase: GamePhase, sound_on: bool) -> Paragraph<'_> {
        let mut spans = Vec::new();

        if phase == GamePhase::Running {
            spans.extend([
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Space", Style::default().fg(Color::Cyan)),
                Span::raw(" pause | "),
            ]);
        }

        spans.extend([
            Span::styled("+/-", Style::default().fg(Color::Cyan)),
            Span::raw(" speed | "),
            Span::styled("M", Style::default().fg(Color::Cyan)),
            Span::raw(format!(" sound {} | ", on_off(sound_on))),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn key_span(key: &'static str, color: Color) -> Span<'static> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
