use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn heading() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn dim() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn tab_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn button_focused() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_accent() -> Style {
        Style::default().fg(Color::Green).bg(Color::DarkGray)
    }
}
