//! Toolbar with a title and one trailing action icon

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct ActionToolbar<'a> {
    pub title: &'a str,
    pub end_action_icon: &'a str,
}

impl<'a> ActionToolbar<'a> {
    pub fn new(title: &'a str, end_action_icon: &'a str) -> Self {
        Self { title, end_action_icon }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(theme.text_style(false));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let title = Paragraph::new(self.title)
            .style(theme.title_style())
            .alignment(Alignment::Left);
        f.render_widget(title, inner);

        let end_action = Paragraph::new(self.end_action_icon)
            .style(theme.title_style())
            .alignment(Alignment::Right);
        f.render_widget(end_action, inner);
    }
}
