use crate::app::state::CounterState;
use crate::ui::button;
use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const BUTTON_LABEL: &str = "Clicca";

pub fn display_text(count: u64) -> String {
    format!("Hai cliccato {} volte", count)
}

fn rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Count text
            Constraint::Length(1),              // Gap
            Constraint::Length(button::HEIGHT), // Button
            Constraint::Min(0),
        ])
        .split(area)
}

/// Rect of the click button, shared with mouse hit-testing.
pub fn button_area(area: Rect) -> Rect {
    let row = rows(area)[2];
    Rect {
        width: button::width_for(BUTTON_LABEL).min(row.width),
        ..row
    }
}

pub fn render(frame: &mut Frame, area: Rect, counter: &CounterState, focused: bool) {
    let rows = rows(area);

    let text = Paragraph::new(Span::styled(display_text(counter.count), Theme::text()));
    frame.render_widget(text, rows[0]);

    button::render(frame, button_area(area), BUTTON_LABEL, focused);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_counts_in_italian() {
        assert_eq!(display_text(0), "Hai cliccato 0 volte");
        assert_eq!(display_text(42), "Hai cliccato 42 volte");
    }

    #[test]
    fn button_sits_below_the_text() {
        let area = Rect::new(0, 2, 78, 21);
        let button = button_area(area);
        assert_eq!(button.y, area.y + 2);
        assert_eq!(button.height, button::HEIGHT);
        assert_eq!(button.width, button::width_for(BUTTON_LABEL));
    }
}
