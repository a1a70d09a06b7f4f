use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width())
            && self.y < i32::from(bounds.height())
    }

    /// Returns the neighbouring cell one step towards `direction`.
    ///
    /// The result may lie outside the grid; bounds are the board's concern.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body (front is head) and its deferred growth flag.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    grow: bool,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body, grow: false }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
            grow: false,
        })
    }

    /// Queues growth on the next movement.
    pub fn grow_next(&mut self) {
        self.grow = true;
    }

    /// Returns true when the next movement will keep the tail.
    #[must_use]
    pub fn is_growing(&self) -> bool {
        self.grow
    }

    /// Moves the head onto `new_head`.
    ///
    /// A pending growth keeps the tail for this move. `ate_apple` only
    /// queues growth, so the extra segment appears on the following move.
    pub fn advance(&mut self, new_head: Position, ate_apple: bool) {
        self.body.push_front(new_head);
        if self.grow {
            self.grow = false;
        } else {
            let _ = self.body.pop_back();
        }

        if ate_apple {
            self.grow = true;
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        // `new` and `from_segments` never produce an empty body, and `advance`
        // pushes before it pops.
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if a non-head segment occupies `position`.
    ///
    /// The tail counts even though it would move away on a non-growing step.
    #[must_use]
    pub fn collides_with(&self, position: Position) -> bool {
        self.body.iter().skip(1).any(|segment| *segment == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false for a constructed snake; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn new_snake_has_single_segment_at_start() {
        let snake = Snake::new(Position::new(3, 4));

        assert_eq!(snake.head(), Position::new(3, 4));
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_growing());
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn advance_without_apple_keeps_length() {
        let mut snake = Snake::from_segments(vec![
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ])
        .expect("non-empty body");

        snake.advance(Position::new(6, 5), false);

        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Position::new(3, 5)));
    }

    #[test]
    fn growth_lands_one_move_after_apple() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), true);
        assert_eq!(snake.len(), 1);
        assert!(snake.is_growing());

        snake.advance(Position::new(7, 5), false);
        assert_eq!(snake.len(), 2);
        assert!(!snake.is_growing());

        snake.advance(Position::new(8, 5), false);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn repeated_growth_requests_grow_once() {
        let mut snake = Snake::new(Position::new(5, 5));

        snake.advance(Position::new(6, 5), true);
        snake.grow_next();
        snake.advance(Position::new(7, 5), false);
        snake.advance(Position::new(8, 5), false);

        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn collision_ignores_head() {
        let snake = Snake::from_segments(vec![Position::new(2, 2), Position::new(1, 2)])
            .expect("non-empty body");

        assert!(!snake.collides_with(Position::new(2, 2)));
        assert!(snake.collides_with(Position::new(1, 2)));
        assert!(!snake.collides_with(Position::new(0, 0)));
    }

    #[test]
    fn stepping_follows_direction_vector() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.stepped(Direction::Up), Position::new(0, -1));
        assert_eq!(origin.stepped(Direction::Right), Position::new(1, 0));
    }

    #[test]
    fn bounds_check_is_half_open() {
        let bounds = GridSize::new(4, 3).expect("valid size");

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(3, 2).is_within_bounds(bounds));
        assert!(!Position::new(4, 2).is_within_bounds(bounds));
        assert!(!Position::new(0, -1).is_within_bounds(bounds));
    }
}
