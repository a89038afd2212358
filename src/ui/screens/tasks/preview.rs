//! Development preview of the tasks screen content.

use super::content::{ContentCallbacks, TasksScreenContent, TasksScreenState};
use crate::constants::TASKS_TITLE;
use crate::model::Task;
use crate::navigation::Destination;
use crate::ui::theme::Theme;
use anyhow::Result;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Callbacks that ignore every intent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCallbacks;

impl ContentCallbacks for NoopCallbacks {
    fn on_add_click(&mut self, _destination: Destination) {}
    fn on_settings_click(&mut self, _destination: Destination) {}
    fn on_task_check_change(&mut self, _task: &Task) {}
    fn on_task_action_click(&mut self, _action: &str, _task: &Task) {}
}

/// Draw the content with stub callbacks and no tasks onto an off-screen buffer.
pub fn render_preview(width: u16, height: u16, theme: &Theme) -> Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let content = TasksScreenContent::new(&[], NoopCallbacks, TASKS_TITLE, theme);
    let mut state = TasksScreenState::default();
    terminal.draw(|f| {
        let area = f.area();
        content.render(f, area, &mut state);
    })?;
    Ok(terminal.backend().buffer().clone())
}

/// Buffer contents as text, one line per row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    let mut out = String::new();
    for row in buffer.content().chunks(width) {
        for cell in row {
            out.push_str(cell.symbol());
        }
        out.push('\n');
    }
    out
}
