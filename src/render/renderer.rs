use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Cell, GameState, Snapshot};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let board = self.render_grid(snapshot);
        frame.render_widget(board, chunks[0]);

        if snapshot.state == GameState::Lost {
            let popup = centered(chunks[0], 34, 5);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_game_over(), popup);
        }

        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        // A lost board stays visible, just dimmed
        let dim = if snapshot.state == GameState::Lost {
            Modifier::DIM
        } else {
            Modifier::empty()
        };

        let lines: Vec<Line> = snapshot
            .grid
            .iter_rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        let (symbol, style) = match cell {
                            Cell::Body => ("██", Style::default().fg(Color::Yellow)),
                            Cell::Food => ("██", Style::default().fg(Color::Red)),
                            Cell::Empty => ("· ", Style::default().fg(Color::DarkGray)),
                        };
                        Span::styled(symbol, style.add_modifier(dim))
                    })
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

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, GameEngine, Position, Snake};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(snapshot: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, snapshot))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn engine() -> GameEngine {
        GameEngine::with_rng(GameConfig::new(10, 10), StdRng::seed_from_u64(1)).unwrap()
    }

    #[test]
    fn test_playing_board() {
        let mut engine = engine();
        engine.tick();

        let screen = draw(&engine.snapshot());
        assert!(screen.contains("Snake"));
        assert!(screen.contains("██"));
        assert!(!screen.contains("GAME OVER"));
    }

    #[test]
    fn test_lost_board_shows_restart_hint() {
        let mut engine = engine();
        let body = [(5, 5), (5, 6), (4, 6), (4, 5)].map(|(r, c)| Position::new(r, c));
        engine
            .place(Snake::from_segments(body).unwrap(), Direction::Up, None)
            .unwrap();
        engine.tick();

        let screen = draw(&engine.snapshot());
        assert!(screen.contains("GAME OVER"));
        assert!(screen.contains("to restart"));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 34, 5), area);
        assert_eq!(centered(Rect::new(0, 0, 40, 10), 20, 4), Rect::new(10, 3, 20, 4));
    }
}
