use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const MESSAGE: &str = "Benvenuto nella mia app!";

/// Stateless leaf component: the shell's welcome line.
pub fn render(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(Span::styled(MESSAGE, Theme::text()));
    frame.render_widget(paragraph, area);
}
