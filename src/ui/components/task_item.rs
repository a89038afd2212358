use crate::icons::IconService;
use crate::model::{Priority, Task};
use crate::ui::theme::Theme;
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::ListItem,
};

/// One row of the task list: checkbox, title, metadata and the action affordance.
#[derive(Debug, Clone)]
pub struct TaskItem<'a> {
    pub task: &'a Task,
    pub options: &'a [String],
    pub icons: &'a IconService,
}

impl<'a> TaskItem<'a> {
    pub fn new(task: &'a Task, options: &'a [String], icons: &'a IconService) -> Self {
        Self { task, options, icons }
    }

    pub fn render(&self, selected: bool, theme: &Theme) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        // Checkbox
        line_spans.push(Span::styled(
            format!("{} ", self.icons.checkbox(self.task.completed)),
            theme.text_style(selected),
        ));

        if self.task.priority == Priority::High {
            line_spans.push(Span::styled(
                format!("{} ", self.icons.high_priority()),
                Style::default().fg(theme.flag),
            ));
        }

        // Title, crossed out once done
        let title_style = if self.task.completed && !selected {
            theme.completed_style()
        } else {
            theme.text_style(selected)
        };
        line_spans.push(Span::styled(self.task.title.clone(), title_style));

        let due = self.task.due_label();
        if !due.is_empty() {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                format!("{} {}", self.icons.due_date(), due),
                Style::default().fg(theme.due),
            ));
        }

        if self.task.flag {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(self.icons.flag(), Style::default().fg(theme.flag)));
        }

        // Action affordance
        line_spans.push(Span::raw(" "));
        line_spans.push(Span::styled(self.icons.more(), Style::default().fg(theme.muted)));

        ListItem::new(Line::from(line_spans))
    }
}
