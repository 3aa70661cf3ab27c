pub mod button;
pub mod counter;
pub mod header;
pub mod layout;
pub mod profile;
pub mod shared;
pub mod shell;
mod status_bar;
pub mod tabs;
pub mod theme;
pub mod welcome;

use crate::app::state::{AppState, Demo, SharedButton};
use ratatui::layout::Position;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    tabs::render(frame, app_layout.tabs, state);
    match state.active {
        Demo::Profile => profile::render(frame, app_layout.content, &state.config.user),
        Demo::Shell => shell::render(frame, app_layout.content, &state.shell),
        Demo::Counter => counter::render(frame, app_layout.content, &state.counter, true),
        Demo::SharedCounters => shared::render(frame, app_layout.content, &state.shared),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Tab(Demo),
    CounterButton,
    ShellCounterButton,
    SharedButton(SharedButton),
}

/// Resolve a mouse position against the current layout. Recomputes the
/// same pure layout the renderer used for `state.last_area`, so the two
/// can never disagree about where a button is.
pub fn hit_test(state: &AppState, column: u16, row: u16) -> Option<ClickTarget> {
    let app_layout = layout::compute_layout(state.last_area);
    let pos = Position::new(column, row);

    if app_layout.tabs.contains(pos) {
        return tabs::tab_areas(app_layout.tabs)
            .into_iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(demo, _)| ClickTarget::Tab(demo));
    }

    let content = app_layout.content;
    match state.active {
        Demo::Profile => None,
        Demo::Shell => counter::button_area(shell::counter_area(content))
            .contains(pos)
            .then_some(ClickTarget::ShellCounterButton),
        Demo::Counter => counter::button_area(content)
            .contains(pos)
            .then_some(ClickTarget::CounterButton),
        Demo::SharedCounters => {
            let [first, second] = shared::button_areas(content);
            if first.contains(pos) {
                Some(ClickTarget::SharedButton(SharedButton::First))
            } else if second.contains(pos) {
                Some(ClickTarget::SharedButton(SharedButton::Second))
            } else {
                None
            }
        }
    }
}
