use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use grid_snake::console;
use grid_snake::error::{AppError, ConfigError};
use grid_snake::game::GameState;
use grid_snake::settings::{load_settings, settings_path, Settings};
use grid_snake::tui;
use log::info;

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum Mode {
    /// Full-screen terminal UI driven by key presses.
    Tui,
    /// Plain text grid; type w/a/s/d then Enter to steer.
    Console,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Front end to play with.
    #[arg(long, value_enum, default_value_t = Mode::Tui)]
    mode: Mode,

    /// Tick interval in milliseconds, overriding the settings file.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed apple placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to read instead of the platform default.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    let seed = cli.seed;
    let new_game = move || match seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };

    info!("starting {:?} mode with {settings:?}", cli.mode);

    let score = match cli.mode {
        Mode::Tui => tui::run(new_game, settings.tui_tick())?,
        Mode::Console => console::run(new_game(), settings.console_tick())?,
    };

    if cli.mode == Mode::Tui {
        println!("Best score: {score}");
    }

    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, ConfigError> {
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path)?;

    if let Some(tick_ms) = cli.tick_ms {
        settings.tui_tick_ms = tick_ms;
        settings.console_tick_ms = tick_ms;
    }

    settings.validate()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Mode};

    #[test]
    fn defaults_to_terminal_ui() {
        let cli = Cli::parse_from(["grid-snake"]);

        assert_eq!(cli.mode, Mode::Tui);
        assert_eq!(cli.tick_ms, None);
    }

    #[test]
    fn parses_console_mode_with_overrides() {
        let cli = Cli::parse_from([
            "grid-snake",
            "--mode",
            "console",
            "--tick-ms",
            "500",
            "--seed",
            "9",
        ]);

        assert_eq!(cli.mode, Mode::Console);
        assert_eq!(cli.tick_ms, Some(500));
        assert_eq!(cli.seed, Some(9));
    }
}
