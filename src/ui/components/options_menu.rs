//! Dropdown listing the actions available for one task row

use crate::constants::NO_ACTIONS_AVAILABLE;
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct TaskOptionsMenu<'a> {
    pub title: &'a str,
    pub options: &'a [String],
    pub selected: usize,
}

impl<'a> TaskOptionsMenu<'a> {
    pub fn new(title: &'a str, options: &'a [String], selected: usize) -> Self {
        Self {
            title,
            options,
            selected,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let lines = self.options.len().max(1) as u16 + 2;
        let popup = LayoutManager::centered_rect_lines(50, lines.min(area.height), area);

        let items: Vec<ListItem> = if self.options.is_empty() {
            vec![ListItem::new(Line::styled(NO_ACTIONS_AVAILABLE, Style::default().fg(theme.muted)))]
        } else {
            self.options
                .iter()
                .map(|option| ListItem::new(Line::from(option.as_str())))
                .collect()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", self.title))
                    .title_style(theme.title_style()),
            )
            .highlight_style(theme.text_style(true))
            .style(theme.text_style(false));

        let mut state = ListState::default();
        if !self.options.is_empty() {
            state.select(Some(self.selected.min(self.options.len() - 1)));
        }

        f.render_widget(Clear, popup);
        f.render_stateful_widget(list, popup, &mut state);
    }
}
