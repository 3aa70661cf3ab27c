use crate::app::state::{AppState, Demo};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

fn label(index: usize, demo: Demo) -> String {
    format!(" {} {} ", index + 1, demo.title())
}

/// Screen rects of the tab titles. Shared between the renderer and mouse
/// hit-testing so a click always lands where the title was drawn.
pub fn tab_areas(tabs: Rect) -> Vec<(Demo, Rect)> {
    let mut areas = Vec::with_capacity(Demo::ALL.len());
    let mut x = tabs.x;
    for (i, demo) in Demo::ALL.iter().copied().enumerate() {
        let width = label(i, demo).width() as u16;
        if x >= tabs.right() {
            break;
        }
        let width = width.min(tabs.right() - x);
        areas.push((demo, Rect::new(x, tabs.y, width, tabs.height)));
        x += width + 1; // separator
    }
    areas
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, demo) in Demo::ALL.iter().copied().enumerate() {
        let style = if demo == state.active {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        spans.push(Span::styled(label(i, demo), style));
        spans.push(Span::styled("│", Theme::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_areas_are_disjoint_and_inside_the_bar() {
        let bar = Rect::new(0, 0, 80, 1);
        let areas = tab_areas(bar);
        assert_eq!(areas.len(), 4);
        for window in areas.windows(2) {
            assert!(window[0].1.right() < window[1].1.x);
        }
        for (_, rect) in &areas {
            assert!(rect.right() <= bar.right());
        }
    }

    #[test]
    fn narrow_bar_truncates_instead_of_overflowing() {
        let bar = Rect::new(0, 0, 14, 1);
        for (_, rect) in tab_areas(bar) {
            assert!(rect.right() <= bar.right());
        }
    }
}
