use thiserror::Error;

use super::state::Position;

/// What occupies a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    Food,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
    #[error("two segments share cell ({row}, {col})")]
    OverlappingSegment { row: i32, col: i32 },
}

/// Fixed-size board of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Set every cell back to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Read a cell. Panics when the coordinates are outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        match self.try_get(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Write a cell. Panics when the coordinates are outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Err(err) = self.try_set(row, col, cell) {
            panic!("{err}");
        }
    }

    pub fn try_get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let index = self.index(row as i64, col as i64)?;
        Ok(self.cells[index])
    }

    pub fn try_set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let index = self.index(row as i64, col as i64)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Write the cell under a board position. Panics when it is off the grid.
    pub fn paint(&mut self, pos: Position, cell: Cell) {
        match self.index(pos.row as i64, pos.col as i64) {
            Ok(index) => self.cells[index] = cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Check that a position lies on the grid
    pub fn check(&self, pos: Position) -> Result<(), GridError> {
        self.index(pos.row as i64, pos.col as i64).map(|_| ())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.check(pos).is_ok()
    }

    /// Iterate over the grid one row slice at a time
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// Number of cells currently holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    fn index(&self, row: i64, col: i64) -> Result<usize, GridError> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row as usize * self.cols + col as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.count(Cell::Empty), 12);
    }

    #[test]
    fn test_row_major_addressing() {
        let mut grid = Grid::new(3, 4);
        grid.set(1, 2, Cell::Food);

        assert_eq!(grid.get(1, 2), Cell::Food);
        assert_eq!(grid.get(2, 1), Cell::Empty);

        let rows: Vec<&[Cell]> = grid.iter_rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1][2], Cell::Food);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Body);
        grid.set(1, 1, Cell::Food);
        grid.clear();
        assert_eq!(grid.count(Cell::Empty), 4);
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let mut grid = Grid::new(2, 3);
        assert!(grid.try_get(2, 0).is_err());
        // Column overflow must not alias into the next row
        assert!(grid.try_get(0, 3).is_err());
        assert_eq!(
            grid.try_set(5, 5, Cell::Body),
            Err(GridError::OutOfBounds {
                row: 5,
                col: 5,
                rows: 2,
                cols: 3
            })
        );
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(grid.contains(Position::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn test_get_panics_out_of_bounds() {
        let grid = Grid::new(2, 2);
        grid.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn test_paint_panics_on_negative_position() {
        let mut grid = Grid::new(2, 2);
        grid.paint(Position::new(0, -1), Cell::Body);
    }
}
