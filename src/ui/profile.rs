use crate::config::UserConfig;
use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn alt_text(name: &str) -> String {
    format!("Photo of {}", name)
}

/// Map the configured pixel size to terminal cells. Cells are roughly
/// twice as tall as they are wide, so a square image becomes px/4 columns
/// by px/8 rows.
pub fn image_cell_size(px: u16) -> (u16, u16) {
    ((px / 4).max(1), (px / 8).max(1))
}

/// Pure presentation of the immutable user record: a heading with the
/// name, an image placeholder carrying the alternative text, and the
/// source URL dimmed beneath it. The URL is never fetched.
pub fn render(frame: &mut Frame, area: Rect, user: &UserConfig) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name heading
            Constraint::Length(1), // Gap
            Constraint::Min(0),    // Image placeholder + URL
        ])
        .split(area);

    let heading = Paragraph::new(Span::styled(user.name.as_str(), Theme::heading()));
    frame.render_widget(heading, rows[0]);

    let rest = rows[2];
    let (width, height) = image_cell_size(user.image_size);
    let image = Rect {
        width: width.min(rest.width),
        height: height.min(rest.height),
        ..rest
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(image);
    frame.render_widget(block, image);

    let alt = Paragraph::new(Span::styled(alt_text(&user.name), Theme::dim()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(alt, inner);

    if image.bottom() < rest.bottom() {
        let url_row = Rect::new(rest.x, image.bottom(), rest.width, 1);
        let url = Paragraph::new(Span::styled(user.image_url.as_str(), Theme::dim()));
        frame.render_widget(url, url_row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_names_the_user() {
        assert_eq!(alt_text("Hedy Lamarr"), "Photo of Hedy Lamarr");
    }

    #[test]
    fn image_is_square_in_pixels_not_cells() {
        // 120 px maps to 30x15 cells, visually square at a 1:2 cell aspect.
        assert_eq!(image_cell_size(120), (30, 15));
        assert_eq!(image_cell_size(80), (20, 10));
    }

    #[test]
    fn tiny_sizes_stay_visible() {
        assert_eq!(image_cell_size(0), (1, 1));
        assert_eq!(image_cell_size(3), (1, 1));
    }
}
