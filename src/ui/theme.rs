//! Colors and icons shared by the task screen widgets.

use crate::icons::IconService;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub icons: IconService,
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub muted: Color,
    pub highlight: Color,
    pub due: Color,
    pub flag: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(IconService::default())
    }
}

impl Theme {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            primary: Color::Cyan,
            on_primary: Color::Black,
            text: Color::White,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
            due: Color::Rgb(255, 165, 0), // Orange
            flag: Color::Red,
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self, selected: bool) -> Style {
        if selected {
            Style::default().fg(self.highlight).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn completed_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn fab_style(&self) -> Style {
        Style::default().fg(self.on_primary).bg(self.primary)
    }
}
