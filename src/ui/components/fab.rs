//! Floating action button drawn over the bottom-right corner of a screen

use crate::constants::ADD_CONTENT_DESCRIPTION;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

pub struct FloatingActionButton<'a> {
    pub icon: &'a str,
}

impl<'a> FloatingActionButton<'a> {
    pub fn new(icon: &'a str) -> Self {
        Self { icon }
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.icon, ADD_CONTENT_DESCRIPTION)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(theme.fab_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(theme.fab_style()),
            );

        f.render_widget(Clear, area);
        f.render_widget(button, area);
    }
}
