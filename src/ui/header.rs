use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "La mia app";

/// Stateless leaf component: the shell's heading.
pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(TITLE, Theme::heading()));
    frame.render_widget(paragraph, area);
}
