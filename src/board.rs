use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::apple::Apple;
use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// What a rejected move ran into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Result of one [`Board::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MoveOutcome {
    pub collision: Option<Collision>,
}

impl MoveOutcome {
    #[must_use]
    pub fn collided(self) -> bool {
        self.collision.is_some()
    }
}

/// Presentation state of one grid cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Snake,
    Apple,
}

/// Read-only snapshot of every cell on the board, row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CellMap {
    size: GridSize,
    cells: Vec<Cell>,
}

impl CellMap {
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(Position::new(x, y))
            .map(|index| self.cells[index])
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size.width()))
    }

    /// Counts cells in the given state.
    #[must_use]
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !position.is_within_bounds(self.size) {
            return None;
        }

        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        Some(y * usize::from(self.size.width()) + x)
    }
}

/// The playing field: fixed dimensions, one snake, one apple.
#[derive(Debug, Clone)]
pub struct Board {
    size: GridSize,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
}

impl Board {
    /// Creates a board with a centered snake and a randomly placed apple.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic board for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(size: GridSize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Assembles a board from explicit parts.
    ///
    /// Every segment and the apple must lie inside `size`.
    #[must_use]
    pub fn from_parts(size: GridSize, snake: Snake, apple: Apple, seed: u64) -> Self {
        debug_assert!(snake.segments().all(|segment| segment.is_within_bounds(size)));
        debug_assert!(apple.position().is_within_bounds(size));

        Self {
            size,
            snake,
            apple,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn with_rng(size: GridSize, mut rng: StdRng) -> Self {
        let (x, y) = size.center();
        let snake = Snake::new(Position::new(x, y));
        // A valid grid has at least two cells, so a one-segment snake always
        // leaves room and the fallback is never taken.
        let apple = Apple::spawn(&mut rng, size, &snake)
            .unwrap_or_else(|| Apple::new(snake.head()));

        Self {
            size,
            snake,
            apple,
            rng,
        }
    }

    /// Moves the snake one cell towards `direction`.
    ///
    /// A move off the grid or onto a non-head segment is rejected and leaves
    /// the board untouched.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let new_head = self.snake.head().stepped(direction);

        if !new_head.is_within_bounds(self.size) {
            return MoveOutcome {
                collision: Some(Collision::Wall),
            };
        }

        if self.snake.collides_with(new_head) {
            return MoveOutcome {
                collision: Some(Collision::SelfCollision),
            };
        }

        let ate_apple = new_head == self.apple.position();
        self.snake.advance(new_head, ate_apple);

        MoveOutcome { collision: None }
    }

    /// Returns true while the head sits on the apple.
    #[must_use]
    pub fn snake_ate_apple(&self) -> bool {
        self.snake.head() == self.apple.position()
    }

    /// Queues one segment of growth for the next move.
    pub fn grow_snake(&mut self) {
        self.snake.grow_next();
    }

    /// Moves the apple to a random cell not covered by the snake.
    ///
    /// Returns false, leaving the apple where it was, when the snake fills
    /// the whole grid.
    pub fn create_apple(&mut self) -> bool {
        match Apple::spawn(&mut self.rng, self.size, &self.snake) {
            Some(apple) => {
                debug!("apple respawned at {:?}", apple.position());
                self.apple = apple;
                true
            }
            None => false,
        }
    }

    /// Builds the cell map from the current snake and apple.
    ///
    /// The apple is painted last so it stays visible while the head covers it.
    #[must_use]
    pub fn cell_map(&self) -> CellMap {
        let mut map = CellMap {
            size: self.size,
            cells: vec![Cell::Empty; self.size.total_cells()],
        };

        for segment in self.snake.segments() {
            if let Some(index) = map.index(*segment) {
                map.cells[index] = Cell::Snake;
            }
        }

        if let Some(index) = map.index(self.apple.position()) {
            map.cells[index] = Cell::Apple;
        }

        map
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn apple(&self) -> Apple {
        self.apple
    }
}
