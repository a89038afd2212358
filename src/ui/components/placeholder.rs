//! Stand-in for destinations handled outside this application

use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct DestinationPlaceholder<'a> {
    pub route: &'a str,
}

impl<'a> DestinationPlaceholder<'a> {
    pub fn new(route: &'a str) -> Self {
        Self { route }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = LayoutManager::centered_rect_lines(60, 5.min(area.height), area);
        let body = Paragraph::new(format!("Screen '{}' is provided by another module.", self.route))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(theme.text_style(false))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", self.route))
                    .title_style(theme.title_style()),
            );
        f.render_widget(Clear, popup);
        f.render_widget(body, popup);
    }
}
