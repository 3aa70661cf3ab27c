use crate::app::state::{SharedButton, SharedCountersState};
use crate::ui::button;
use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const HEADING: &str = "Contatori indipendenti";

/// Fixed button width so the hit target does not move as the count grows.
const BUTTON_WIDTH: u16 = 26;

pub fn button_label(count: u64) -> String {
    format!("Cliccato {} volte", count)
}

fn rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Heading
            Constraint::Length(1),              // Gap
            Constraint::Length(button::HEIGHT), // Button row
            Constraint::Min(0),
        ])
        .split(area)
}

/// Rects of the two sibling buttons, shared with mouse hit-testing.
pub fn button_areas(area: Rect) -> [Rect; 2] {
    let row = rows(area)[2];
    let width = BUTTON_WIDTH.min(row.width / 2);
    let first = Rect { width, ..row };
    let second_x = (row.x + width + 2).min(row.right());
    let second = Rect {
        x: second_x,
        width: width.min(row.right() - second_x),
        ..row
    };
    [first, second]
}

/// Two sibling buttons rendering the one parent-owned count. The exercise
/// is titled "independent", but state and handler are lifted to the parent
/// and passed to both children, so the siblings always agree.
pub fn render(frame: &mut Frame, area: Rect, state: &SharedCountersState) {
    let rows = rows(area);

    let heading = Paragraph::new(Span::styled(HEADING, Theme::heading()));
    frame.render_widget(heading, rows[0]);

    let [first, second] = button_areas(area);
    let label = button_label(state.count);
    button::render(frame, first, &label, state.focused == SharedButton::First);
    button::render(frame, second, &label, state.focused == SharedButton::Second);
}
