/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn.
    ///
    /// The engine drops such requests so the head never reverses into the
    /// segment right behind it.
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the displacement (d_row, d_col) for moving in this direction
    pub fn displacement(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Maps a macOS virtual key code (arrow keys) to a direction.
    ///
    /// Any other code yields `None` and is meant to be ignored by the caller.
    /// Terminal front ends go through crossterm key events instead.
    pub fn from_key_code(code: u16) -> Option<Direction> {
        match code {
            123 => Some(Direction::Left),
            124 => Some(Direction::Right),
            125 => Some(Direction::Down),
            126 => Some(Direction::Up),
            _ => None,
        }
    }
}
