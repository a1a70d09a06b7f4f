use log::{debug, info, warn};

use crate::board::{Board, Collision};
use crate::config::{GridSize, DEFAULT_GRID};
use crate::input::Direction;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Over,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    Wall,
    SelfCollision,
    /// The snake covers every cell, leaving nowhere to put an apple.
    BoardFull,
}

impl From<Collision> for EndReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::Wall,
            Collision::SelfCollision => Self::SelfCollision,
        }
    }
}

/// Complete mutable game state for one session.
///
/// A finished game is never reset; start over with a fresh `GameState`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    direction: Direction,
    score: u32,
    status: GameStatus,
    end_reason: Option<EndReason>,
    tick_count: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starts a game on the fixed 20×20 board, heading right.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(DEFAULT_GRID))
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_board(Board::new_with_seed(DEFAULT_GRID, seed))
    }

    /// Starts a game on an already assembled board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Running,
            end_reason: None,
            tick_count: 0,
        }
    }

    /// Sets the heading for the next tick, ignoring an immediate reversal.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.direction.is_opposite(direction) {
            return;
        }

        self.direction = direction;
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) {
        if self.status == GameStatus::Over {
            return;
        }

        self.tick_count += 1;

        let outcome = self.board.step(self.direction);
        if let Some(collision) = outcome.collision {
            self.finish(collision.into());
            return;
        }

        if self.board.snake_ate_apple() {
            self.score += 1;
            debug!(
                "apple eaten at {:?}, score {}",
                self.board.snake().head(),
                self.score
            );
            self.board.grow_snake();

            if !self.board.create_apple() {
                warn!("no free cell left for a new apple");
                self.finish(EndReason::BoardFull);
            }
        }
    }

    fn finish(&mut self, reason: EndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        info!(
            "game over after {} ticks: {reason:?}, final score {}",
            self.tick_count, self.score
        );
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.board.size()
    }
}
