use ratatui::style::Color;
use ratatui::symbols::border;

use crate::error::ConfigError;

/// Logical grid dimensions, validated to be non-zero on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    width: u16,
    height: u16,
}

impl GridSize {
    /// Validates and creates grid dimensions.
    ///
    /// Fails fast with [`ConfigError::InvalidDimensions`] when either axis is
    /// zero, or when the grid is a single cell with no room left for an apple.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || (width == 1 && height == 1) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(self) -> u16 {
        self.height
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the spawn cell for a fresh snake (integer-divided center).
    #[must_use]
    pub fn center(self) -> (i32, i32) {
        (i32::from(self.width / 2), i32::from(self.height / 2))
    }
}

/// The fixed board every new game is played on.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Tick interval used by the full-screen terminal UI.
pub const DEFAULT_TUI_TICK_MS: u64 = 400;

/// Tick interval used by the line-oriented console loop.
pub const DEFAULT_CONSOLE_TICK_MS: u64 = 600;

/// Minimum accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 60;

/// Console glyphs, each followed by a space when printed.
pub const GLYPH_CONSOLE_EMPTY: char = '·';
pub const GLYPH_CONSOLE_SNAKE: char = '■';
pub const GLYPH_CONSOLE_APPLE: char = '○';

/// Terminal UI glyphs; each logical cell is two columns wide.
pub const GLYPH_CELL_SNAKE: &str = "██";
pub const GLYPH_CELL_APPLE: &str = "()";
pub const GLYPH_CELL_EMPTY: &str = "  ";

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Colors applied to all visual elements of the terminal UI.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    apple: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

#[cfg(test)]
mod tests {
    use super::{GridSize, DEFAULT_GRID};
    use crate::error::ConfigError;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            GridSize::new(0, 5),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 5
            })
        ));
        assert!(GridSize::new(5, 0).is_err());
        assert!(GridSize::new(1, 1).is_err());
        assert!(GridSize::new(1, 2).is_ok());
    }

    #[test]
    fn default_grid_is_twenty_square() {
        assert_eq!(DEFAULT_GRID.width(), 20);
        assert_eq!(DEFAULT_GRID.height(), 20);
        assert_eq!(DEFAULT_GRID.total_cells(), 400);
        assert_eq!(DEFAULT_GRID.center(), (10, 10));
    }

    #[test]
    fn center_uses_integer_division() {
        let size = GridSize::new(7, 3).expect("valid size");
        assert_eq!(size.center(), (3, 1));
    }
}
