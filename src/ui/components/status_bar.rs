//! Status bar component

use crate::constants::{KEY_HINTS, PLACEHOLDER_HINT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, route: Option<&str>) {
        let status_text = match route {
            Some(route) => format!("{route} • {PLACEHOLDER_HINT}"),
            None => KEY_HINTS.to_string(),
        };

        let status_bar = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));

        f.render_widget(status_bar, area);
    }
}
