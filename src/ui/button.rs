use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub const HEIGHT: u16 = 3;

/// Width needed for a bordered button around `label`: two border cells
/// plus one cell of padding on each side.
pub fn width_for(label: &str) -> u16 {
    label.width() as u16 + 4
}

pub fn render(frame: &mut Frame, area: Rect, label: &str, focused: bool) {
    let (border_style, label_style) = if focused {
        (Theme::border_focused(), Theme::button_focused())
    } else {
        (Theme::border(), Theme::button())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Span::styled(label, label_style)).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
