use std::collections::HashSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

use super::{
    action::Direction,
    config::{ColumnWrap, ConfigError, GameConfig},
    grid::{Cell, Grid, GridError},
    state::{GameState, Position, Snake},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was already lost; nothing changed
    Frozen,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto food and grew by one segment
    Ate,
    /// The new head hit the body and the game is now lost
    Collided,
}

/// Read-only view of the engine, published after every mutation
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub state: GameState,
    pub direction: Direction,
    pub head: Position,
    pub length: usize,
    pub food: Option<Position>,
    pub ticks: u64,
}

/// Bring a displaced head back onto a `rows x cols` torus.
///
/// Each axis is handled independently. With [`ColumnWrap::Legacy`] a column
/// of exactly 0 is also sent to the right edge.
pub fn wrap_position(mut pos: Position, rows: usize, cols: usize, policy: ColumnWrap) -> Position {
    let rows = rows as i32;
    let cols = cols as i32;

    if pos.row >= rows {
        pos.row = 0;
    } else if pos.row < 0 {
        pos.row = rows - 1;
    }

    let wraps_left = match policy {
        ColumnWrap::Legacy => pos.col <= 0,
        ColumnWrap::Strict => pos.col < 0,
    };
    if pos.col >= cols {
        pos.col = 0;
    } else if wraps_left {
        pos.col = cols - 1;
    }

    pos
}

/// The simulation: owns the grid, the snake, the food and the game state.
///
/// Driven by two calls: [`GameEngine::set_direction`] whenever input arrives
/// and [`GameEngine::tick`] on a fixed cadence. Both must be serialised by
/// the owner.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    direction: Direction,
    food: Option<Position>,
    state: GameState,
    ticks: u64,
    rng: R,
    publisher: watch::Sender<Snapshot>,
}

impl GameEngine<StdRng> {
    /// Create a new engine with an entropy-seeded food generator
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create a new engine drawing food positions from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = Grid::new(config.rows, config.cols);
        let snake = Snake::initial((config.cols / 2) as i32);
        let initial = Snapshot {
            grid: grid.clone(),
            state: GameState::Playing,
            direction: Direction::Down,
            head: snake.head(),
            length: snake.len(),
            food: None,
            ticks: 0,
        };
        let (publisher, _) = watch::channel(initial);

        Ok(Self {
            config,
            grid,
            snake,
            direction: Direction::Down,
            food: None,
            state: GameState::Playing,
            ticks: 0,
            rng,
            publisher,
        })
    }

    /// Reset snake, heading, food and state to the starting position
    pub fn restart(&mut self) {
        self.grid.clear();
        self.snake = Snake::initial((self.config.cols / 2) as i32);
        self.direction = Direction::Down;
        self.food = None;
        self.state = GameState::Playing;
        self.ticks = 0;

        info!(
            "Game restarted on a {}x{} grid",
            self.config.rows, self.config.cols
        );
        self.publish();
    }

    /// Request a new heading. A 180-degree turn is silently ignored.
    pub fn set_direction(&mut self, requested: Direction) {
        if requested.is_opposite(self.direction) {
            debug!("Ignoring reversal from {:?} to {:?}", self.direction, requested);
            return;
        }
        if requested != self.direction {
            self.direction = requested;
            self.publish();
        }
    }

    /// Advance the simulation by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.state == GameState::Lost {
            return TickOutcome::Frozen;
        }

        self.grid.clear();

        let new_head = wrap_position(
            self.snake.head().moved_in_direction(self.direction),
            self.config.rows,
            self.config.cols,
            self.config.column_wrap,
        );

        if self.snake.occupies(new_head) {
            self.state = GameState::Lost;
            self.ticks += 1;
            info!(
                "Snake ran into itself at ({}, {}) with length {}",
                new_head.row,
                new_head.col,
                self.snake.len()
            );
            self.publish();
            return TickOutcome::Collided;
        }

        let ate = self.food == Some(new_head);
        self.snake.advance(new_head, ate);

        if ate {
            debug!(
                "Food eaten at ({}, {}), length now {}",
                new_head.row,
                new_head.col,
                self.snake.len()
            );
            self.food = None;
        }

        if self.food.is_none() {
            let food = self.spawn_food();
            debug!("Food spawned at ({}, {})", food.row, food.col);
            self.food = Some(food);
        }

        self.redraw();
        self.ticks += 1;
        self.publish();

        if ate {
            TickOutcome::Ate
        } else {
            TickOutcome::Moved
        }
    }

    /// Install an arbitrary board and resume playing from it.
    ///
    /// Every segment and the food must lie on the grid, and no two segments
    /// may share a cell.
    pub fn place(
        &mut self,
        snake: Snake,
        direction: Direction,
        food: Option<Position>,
    ) -> Result<(), GridError> {
        let mut seen = HashSet::with_capacity(snake.len());
        for segment in snake.segments() {
            self.grid.check(*segment)?;
            if !seen.insert(*segment) {
                return Err(GridError::OverlappingSegment {
                    row: segment.row,
                    col: segment.col,
                });
            }
        }
        if let Some(food) = food {
            self.grid.check(food)?;
        }

        self.snake = snake;
        self.direction = direction;
        self.food = food;
        self.state = GameState::Playing;
        self.ticks = 0;
        self.grid.clear();
        self.redraw();
        self.publish();
        Ok(())
    }

    /// Receive a fresh [`Snapshot`] after every state change
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            state: self.state,
            direction: self.direction,
            head: self.snake.head(),
            length: self.snake.len(),
            food: self.food,
            ticks: self.ticks,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Uniform over the whole grid; the snake's own cells are not excluded
    fn spawn_food(&mut self) -> Position {
        let row = self.rng.gen_range(0..self.config.rows) as i32;
        let col = self.rng.gen_range(0..self.config.cols) as i32;
        Position::new(row, col)
    }

    fn redraw(&mut self) {
        for segment in self.snake.segments() {
            self.grid.paint(*segment, Cell::Body);
        }
        if let Some(food) = self.food {
            self.grid.paint(food, Cell::Food);
        }
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot());
    }
}
