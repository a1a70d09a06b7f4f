//! Grid-based Snake: a small game-state engine plus two terminal front ends.

pub mod apple;
pub mod board;
pub mod config;
pub mod console;
pub mod direction_slot;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod snake;
pub mod tui;
pub mod ui;
