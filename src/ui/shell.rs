use crate::app::state::ShellState;
use crate::ui::{counter, header, welcome};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;

fn rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Welcome
            Constraint::Length(1), // Gap
            Constraint::Min(5),    // Counter
        ])
        .split(area)
}

/// Rect handed to the embedded counter component, shared with hit-testing.
pub fn counter_area(area: Rect) -> Rect {
    rows(area)[3]
}

/// Structural composition only: three independent children in a vertical
/// stack, no data passed between them.
pub fn render(frame: &mut Frame, area: Rect, state: &ShellState) {
    let rows = rows(area);
    header::render(frame, rows[0]);
    welcome::render(frame, rows[1]);
    counter::render(frame, rows[3], &state.counter, true);
}
