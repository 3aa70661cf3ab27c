use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::{self, ClickTarget};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.last_area = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('1') => state.select_demo(Demo::Profile),
        KeyCode::Char('2') => state.select_demo(Demo::Shell),
        KeyCode::Char('3') => state.select_demo(Demo::Counter),
        KeyCode::Char('4') => state.select_demo(Demo::SharedCounters),
        KeyCode::Tab => state.select_next_demo(),
        KeyCode::BackTab => state.select_prev_demo(),
        KeyCode::Left if state.active == Demo::SharedCounters => state.shared.focus_first(),
        KeyCode::Right if state.active == Demo::SharedCounters => state.shared.focus_second(),
        KeyCode::Enter | KeyCode::Char(' ') => click_focused(state),
        _ => {}
    }
    vec![]
}

/// Keyboard "click" on whatever button the active demo focuses.
fn click_focused(state: &mut AppState) {
    match state.active {
        Demo::Profile => {}
        Demo::Shell => {
            state.shell.counter.click();
            debug!(count = state.shell.counter.count, "shell counter clicked");
        }
        Demo::Counter => {
            state.counter.click();
            debug!(count = state.counter.count, "counter clicked");
        }
        Demo::SharedCounters => {
            state.shared.click();
            debug!(count = state.shared.count, "shared counter clicked");
        }
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    match ui::hit_test(state, mouse.column, mouse.row) {
        Some(ClickTarget::Tab(demo)) => state.select_demo(demo),
        Some(ClickTarget::CounterButton) => {
            state.counter.click();
            debug!(count = state.counter.count, "counter clicked");
        }
        Some(ClickTarget::ShellCounterButton) => {
            state.shell.counter.click();
            debug!(count = state.shell.counter.count, "shell counter clicked");
        }
        Some(ClickTarget::SharedButton(button)) => {
            // Clicking a sibling focuses it, but the increment still goes
            // through the one lifted counter.
            state.shared.focused = button;
            state.shared.click();
            debug!(count = state.shared.count, "shared counter clicked");
        }
        None => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn state() -> AppState {
        let mut st = AppState::new(AppConfig::default());
        st.last_area = Rect::new(0, 0, 80, 24);
        st
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn left_click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut st = state();
        assert_eq!(handle_event(&mut st, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut st, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn number_keys_select_demos() {
        let mut st = state();
        handle_event(&mut st, key(KeyCode::Char('3')));
        assert_eq!(st.active, Demo::Counter);
        handle_event(&mut st, key(KeyCode::Char('4')));
        assert_eq!(st.active, Demo::SharedCounters);
        handle_event(&mut st, key(KeyCode::Char('1')));
        assert_eq!(st.active, Demo::Profile);
    }

    #[test]
    fn tab_cycles_demos() {
        let mut st = state();
        handle_event(&mut st, key(KeyCode::Tab));
        assert_eq!(st.active, Demo::Shell);
        handle_event(&mut st, key(KeyCode::BackTab));
        assert_eq!(st.active, Demo::Profile);
    }

    #[test]
    fn enter_clicks_the_active_counter() {
        let mut st = state();
        st.select_demo(Demo::Counter);
        for _ in 0..7 {
            handle_event(&mut st, key(KeyCode::Enter));
        }
        assert_eq!(st.counter.count, 7);
    }

    #[test]
    fn enter_on_profile_does_nothing() {
        let mut st = state();
        handle_event(&mut st, key(KeyCode::Enter));
        assert_eq!(st.counter.count, 0);
        assert_eq!(st.shell.counter.count, 0);
        assert_eq!(st.shared.count, 0);
    }

    #[test]
    fn both_shared_buttons_drive_one_count() {
        let mut st = state();
        st.select_demo(Demo::SharedCounters);

        // 3 keyboard clicks on the first button, 2 on the second.
        handle_event(&mut st, key(KeyCode::Left));
        for _ in 0..3 {
            handle_event(&mut st, key(KeyCode::Enter));
        }
        handle_event(&mut st, key(KeyCode::Right));
        for _ in 0..2 {
            handle_event(&mut st, key(KeyCode::Enter));
        }

        assert_eq!(st.shared.count, 5);
    }

    #[test]
    fn mouse_click_hits_counter_button() {
        let mut st = state();
        st.select_demo(Demo::Counter);

        let layout = crate::ui::layout::compute_layout(st.last_area);
        let button = crate::ui::counter::button_area(layout.content);
        let (x, y) = center(button);

        handle_event(&mut st, left_click(x, y));
        handle_event(&mut st, left_click(x, y));
        assert_eq!(st.counter.count, 2);

        // A click outside the button changes nothing.
        let outside_x = st.last_area.width - 1;
        handle_event(&mut st, left_click(outside_x, y));
        assert_eq!(st.counter.count, 2);
    }

    #[test]
    fn mouse_clicks_on_either_sibling_share_the_count() {
        let mut st = state();
        st.select_demo(Demo::SharedCounters);

        let layout = crate::ui::layout::compute_layout(st.last_area);
        let [first, second] = crate::ui::shared::button_areas(layout.content);
        let (ax, ay) = center(first);
        let (bx, by) = center(second);

        for _ in 0..3 {
            handle_event(&mut st, left_click(ax, ay));
        }
        for _ in 0..2 {
            handle_event(&mut st, left_click(bx, by));
        }

        assert_eq!(st.shared.count, 5);
        assert_eq!(st.shared.focused, SharedButton::Second);
    }

    #[test]
    fn resize_updates_hit_test_area() {
        let mut st = state();
        handle_event(&mut st, AppEvent::Terminal(CEvent::Resize(120, 40)));
        assert_eq!(st.last_area, Rect::new(0, 0, 120, 40));
    }
}
