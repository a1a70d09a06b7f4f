use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

const HUD_MARGIN_X: u16 = 1;

/// Renders the score and controls rows and returns the play area above them.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, score_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, theme)).alignment(Alignment::Center),
        inset_horizontal(score_area, HUD_MARGIN_X),
    );

    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move · q quit"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.menu_footer)),
        inset_horizontal(controls_area, HUD_MARGIN_X),
    );

    play_area
}

fn score_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::raw("Score: "),
        Span::styled(state.score().to_string(), value_style),
        Span::raw("  Length: "),
        Span::styled(state.board().snake().len().to_string(), value_style),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::inset_horizontal;

    #[test]
    fn inset_shrinks_both_sides() {
        let inset = inset_horizontal(Rect::new(0, 3, 10, 1), 1);

        assert_eq!(inset, Rect::new(1, 3, 8, 1));
    }

    #[test]
    fn inset_saturates_on_narrow_areas() {
        let inset = inset_horizontal(Rect::new(0, 0, 1, 1), 1);

        assert_eq!(inset.width, 0);
    }
}
