use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub tabs: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Demo content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        tabs: chunks[0],
        content: chunks[1],
        status_bar: chunks[2],
    }
}
