use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::THEME_CLASSIC;
use crate::game::GameState;
use crate::input::{GameInput, InputHandler};
use crate::renderer;

/// Upper bound on how long one input poll may block between redraws.
const FRAME_POLL: Duration = Duration::from_millis(16);

type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode plus alternate screen for the lifetime of one UI run.
///
/// Dropping the session restores the terminal best-effort, including during
/// a panic unwind.
struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let _ = restore_terminal();
                Err(error)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}

/// Runs the full-screen terminal game until the player quits.
///
/// `new_game` builds each session; `Enter` on the game-over screen starts a
/// fresh one. Returns the best score reached during this run.
pub fn run(mut new_game: impl FnMut() -> GameState, tick: Duration) -> io::Result<u32> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut state = new_game();
    let mut best_score = 0;
    let mut last_tick = Instant::now();

    info!("terminal UI started, tick {} ms", tick.as_millis());

    loop {
        session
            .terminal
            .draw(|frame| renderer::render(frame, &state, &THEME_CLASSIC))?;

        let timeout = tick.saturating_sub(last_tick.elapsed()).min(FRAME_POLL);
        match input.poll_input(timeout)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => state.change_direction(direction),
            Some(GameInput::Confirm) if state.is_game_over() => {
                best_score = best_score.max(state.score());
                state = new_game();
                last_tick = Instant::now();
            }
            Some(GameInput::Confirm) | None => {}
        }

        if last_tick.elapsed() >= tick {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(best_score.max(state.score()))
}
