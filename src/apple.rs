use rand::Rng;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random draws tried per grid cell before falling back to a full scan.
const SAMPLING_ATTEMPTS_PER_CELL: usize = 4;

/// The single apple on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    position: Position,
}

impl Apple {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    #[must_use]
    pub fn position(self) -> Position {
        self.position
    }

    pub fn relocate(&mut self, position: Position) {
        self.position = position;
    }

    /// Spawns an apple in a cell the snake does not occupy.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Self> {
        spawn_position(rng, bounds, snake).map(Self::new)
    }
}

/// Picks a uniformly random cell not occupied by the snake.
///
/// Rejection sampling is bounded; once the budget runs out the free cells are
/// enumerated and one is drawn from that list. Returns `None` on a full grid.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let width = i32::from(bounds.width());
    let height = i32::from(bounds.height());

    for _ in 0..bounds.total_cells() * SAMPLING_ATTEMPTS_PER_CELL {
        let candidate = Position::new(rng.gen_range(0..width), rng.gen_range(0..height));
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let mut candidates = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let position = Position::new(x, y);
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
