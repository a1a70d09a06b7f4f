use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Cell;
use crate::config::{GLYPH_CONSOLE_APPLE, GLYPH_CONSOLE_EMPTY, GLYPH_CONSOLE_SNAKE};
use crate::direction_slot::DirectionSlot;
use crate::game::GameState;
use crate::input::{map_console_line, GameInput};

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

const CONTROLS: &str = "\
=== Snake ===
Type a letter and press Enter:
  w - up
  a - left
  s - down
  d - right
  q - quit
=============";

/// Renders the score line and grid as plain text, one row per line.
#[must_use]
pub fn render_to_string(state: &GameState) -> String {
    let map = state.board().cell_map();
    let mut out = String::new();

    let _ = writeln!(out, "Score: {}", state.score());
    out.push('\n');

    for row in map.rows() {
        for cell in row {
            out.push(match cell {
                Cell::Empty => GLYPH_CONSOLE_EMPTY,
                Cell::Snake => GLYPH_CONSOLE_SNAKE,
                Cell::Apple => GLYPH_CONSOLE_APPLE,
            });
            out.push(' ');
        }
        out.push('\n');
    }

    out
}

/// Runs the line-oriented console game until game over or quit.
///
/// Input is read on a background thread and handed over through a
/// [`DirectionSlot`]; ticks run on the calling thread every `tick`.
/// Returns the final score.
pub fn run(mut state: GameState, tick: Duration) -> io::Result<u32> {
    let slot = DirectionSlot::new();
    let quit = Arc::new(AtomicBool::new(false));
    spawn_stdin_reader(slot.clone(), Arc::clone(&quit))?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{CONTROLS}")?;
    info!("console game started, tick {} ms", tick.as_millis());

    while !state.is_game_over() {
        let started = Instant::now();

        if quit.load(Ordering::Relaxed) {
            info!("console game quit at score {}", state.score());
            return Ok(state.score());
        }

        if let Some(direction) = slot.take() {
            state.change_direction(direction);
        }
        state.tick();

        write!(stdout, "{CLEAR_SCREEN}{}", render_to_string(&state))?;
        stdout.flush()?;

        if let Some(remaining) = tick.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }

    writeln!(stdout, "Game over! Final score: {}", state.score())?;
    Ok(state.score())
}

// The reader blocks on stdin and is abandoned when the game loop returns.
fn spawn_stdin_reader(slot: DirectionSlot, quit: Arc<AtomicBool>) -> io::Result<()> {
    thread::Builder::new()
        .name("console-input".to_owned())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };

                match map_console_line(&line) {
                    Some(GameInput::Direction(direction)) => slot.set(direction),
                    Some(GameInput::Quit) => {
                        quit.store(true, Ordering::Relaxed);
                        break;
                    }
                    Some(GameInput::Confirm) | None => debug!("ignored console input {line:?}"),
                }
            }
        })
        .map(|_| ())
}
