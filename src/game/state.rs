use std::collections::VecDeque;

use super::action::Direction;

/// Number of segments a fresh snake starts with
pub const INITIAL_SNAKE_LENGTH: usize = 4;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position one cell in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.displacement();
        self.moved_by(d_row, d_col)
    }
}

/// The snake body, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Build a snake from its segments, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    /// The starting snake: stacked vertically in `column`, rows 0 through 3,
    /// with the head on the bottom row.
    pub fn initial(column: i32) -> Self {
        let body = (0..INITIAL_SNAKE_LENGTH as i32)
            .rev()
            .map(|row| Position::new(row, column))
            .collect();
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Check if any segment, head included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Prepend a new head. The old tail is kept only when `grow` is set.
    pub(crate) fn advance(&mut self, new_head: Position, grow: bool) {
        if !grow {
            self.body.pop_back();
        }
        self.body.push_front(new_head);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never true for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the simulation is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(6, 5));
        assert_eq!(pos.moved_in_direction(Direction::Left), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Right), Position::new(5, 6));
    }

    #[test]
    fn test_initial_snake() {
        let snake = Snake::initial(10);
        let segments: Vec<Position> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![
                Position::new(3, 10),
                Position::new(2, 10),
                Position::new(1, 10),
                Position::new(0, 10),
            ]
        );
        assert_eq!(snake.head(), Position::new(3, 10));
        assert_eq!(snake.tail(), Position::new(0, 10));
    }

    #[test]
    fn test_advance_without_growing() {
        let mut snake = Snake::initial(2);
        snake.advance(Position::new(4, 2), false);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(4, 2));
        assert_eq!(snake.tail(), Position::new(1, 2));
    }

    #[test]
    fn test_advance_with_growing_keeps_tail() {
        let mut snake = Snake::initial(2);
        snake.advance(Position::new(4, 2), true);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.tail(), Position::new(0, 2));
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::initial(0);
        assert!(snake.occupies(Position::new(3, 0)));
        assert!(snake.occupies(Position::new(0, 0)));
        assert!(!snake.occupies(Position::new(4, 0)));
    }

    #[test]
    fn test_empty_segments_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
        let snake = Snake::from_segments([Position::new(1, 1)]).unwrap();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), snake.tail());
    }
}
