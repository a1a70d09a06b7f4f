use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{Cell, CellMap};
use crate::config::{
    Theme, BORDER_HALF_BLOCK, GLYPH_CELL_APPLE, GLYPH_CELL_EMPTY, GLYPH_CELL_SNAKE,
};
use crate::game::GameState;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_game_over_menu;

/// Terminal columns used per logical cell, keeping cells roughly square.
const CELL_WIDTH: u16 = 2;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, theme);
    let board_area = centered_board(play_area, state);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, &state.board().cell_map(), state, theme);

    if state.is_game_over() {
        render_game_over_menu(frame, play_area, state.score(), state.end_reason(), theme);
    }
}

fn render_cells(
    frame: &mut Frame<'_>,
    inner: Rect,
    map: &CellMap,
    state: &GameState,
    theme: &Theme,
) {
    let head = state.board().snake().head();
    let buffer = frame.buffer_mut();

    for (row_index, row) in map.rows().enumerate() {
        let Ok(row_offset) = u16::try_from(row_index) else {
            return;
        };
        let y = inner.y.saturating_add(row_offset);
        if y >= inner.bottom() {
            return;
        }

        for (column_index, cell) in row.iter().enumerate() {
            let Ok(column_offset) = u16::try_from(column_index) else {
                break;
            };
            let x = inner.x.saturating_add(column_offset.saturating_mul(CELL_WIDTH));
            if x.saturating_add(CELL_WIDTH) > inner.right() {
                break;
            }

            let is_head = i32::from(column_offset) == head.x && i32::from(row_offset) == head.y;
            let (glyph, style) = cell_style(*cell, is_head, theme);
            buffer.set_string(x, y, glyph, style);
        }
    }
}

fn cell_style(cell: Cell, is_head: bool, theme: &Theme) -> (&'static str, Style) {
    match cell {
        Cell::Snake if is_head => (
            GLYPH_CELL_SNAKE,
            Style::new()
                .fg(theme.snake_head)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Snake => (GLYPH_CELL_SNAKE, Style::new().fg(theme.snake_body)),
        Cell::Apple => (
            GLYPH_CELL_APPLE,
            Style::new().fg(theme.apple).bg(theme.play_bg),
        ),
        Cell::Empty => (GLYPH_CELL_EMPTY, Style::new().bg(theme.play_bg)),
    }
}

/// Returns the bordered board rectangle centered inside `area`.
fn centered_board(area: Rect, state: &GameState) -> Rect {
    let bounds = state.bounds();
    let width = bounds.width().saturating_mul(CELL_WIDTH).saturating_add(2);
    let height = bounds.height().saturating_add(2);

    let [_, column, _] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, board, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(column);

    board
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::apple::Apple;
    use crate::board::Board;
    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::snake::{Position, Snake};

    use super::render;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn frame_shows_score_and_apple() {
        let size = GridSize::new(6, 4).expect("valid size");
        let board = Board::from_parts(
            size,
            Snake::new(Position::new(1, 1)),
            Apple::new(Position::new(4, 2)),
            1,
        );
        let state = GameState::from_board(board);
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &state, &THEME_CLASSIC))
            .expect("draw should succeed");

        let text = buffer_text(&terminal);
        assert!(text.contains("Score: 0"));
        assert!(text.contains("()"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn game_over_popup_is_drawn() {
        let size = GridSize::new(6, 4).expect("valid size");
        let board = Board::from_parts(
            size,
            Snake::new(Position::new(5, 1)),
            Apple::new(Position::new(0, 0)),
            2,
        );
        let mut state = GameState::from_board(board);
        state.tick();
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &state, &THEME_CLASSIC))
            .expect("draw should succeed");

        assert!(buffer_text(&terminal).contains("GAME OVER"));
    }
}
