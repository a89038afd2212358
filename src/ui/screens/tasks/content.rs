//! Stateless rendering of the tasks screen.

use crate::model::Task;
use crate::navigation::Destination;
use crate::ui::components::{ActionToolbar, FloatingActionButton, TaskItem, TaskOptionsMenu};
use crate::ui::layout::LayoutManager;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Options handed to every row. The screen does not define any.
const NO_OPTIONS: &[String] = &[];

/// Receivers for the four intents the content can raise.
pub trait ContentCallbacks {
    fn on_add_click(&mut self, destination: Destination);
    fn on_settings_click(&mut self, destination: Destination);
    fn on_task_check_change(&mut self, task: &Task);
    fn on_task_action_click(&mut self, action: &str, task: &Task);
}

impl<C: ContentCallbacks + ?Sized> ContentCallbacks for &mut C {
    fn on_add_click(&mut self, destination: Destination) {
        (**self).on_add_click(destination);
    }

    fn on_settings_click(&mut self, destination: Destination) {
        (**self).on_settings_click(destination);
    }

    fn on_task_check_change(&mut self, task: &Task) {
        (**self).on_task_check_change(task);
    }

    fn on_task_action_click(&mut self, action: &str, task: &Task) {
        (**self).on_task_action_click(action, task);
    }
}

/// A user interaction with one of the content's affordances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    AddClick,
    SettingsClick,
    CheckChange { key: String },
    ActionClick { key: String, action: String },
}

/// A list row, keyed by its task's id.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow<'a> {
    pub key: &'a str,
    pub task: &'a Task,
    pub options: &'a [String],
}

/// Open row action menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsMenuState {
    pub key: String,
    pub selected: usize,
}

/// List bookkeeping owned by the host: which row is highlighted, scroll
/// offset, and the open action menu if any.
#[derive(Debug, Default)]
pub struct TasksScreenState {
    pub list_state: ListState,
    pub selected_key: Option<String>,
    pub options_menu: Option<OptionsMenuState>,
}

impl TasksScreenState {
    pub fn selected_index(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn selected_task<'t>(&self, tasks: &'t [Task]) -> Option<&'t Task> {
        let key = self.selected_key.as_deref()?;
        tasks.iter().find(|task| task.id == key)
    }

    pub fn select_next(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            return;
        }
        let next = match self.selected_index() {
            Some(index) => (index + 1) % tasks.len(),
            None => 0,
        };
        self.select_index(tasks, next);
    }

    pub fn select_previous(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            return;
        }
        let previous = match self.selected_index() {
            Some(0) | None => tasks.len() - 1,
            Some(index) => index - 1,
        };
        self.select_index(tasks, previous);
    }

    /// Keep the selection on the same task after the list changed, or clamp it
    /// when that task is gone.
    pub fn reconcile(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            self.selected_key = None;
            self.list_state.select(None);
            self.options_menu = None;
            return;
        }

        let by_key = self
            .selected_key
            .as_deref()
            .and_then(|key| tasks.iter().position(|task| task.id == key));
        let index = by_key.unwrap_or_else(|| self.selected_index().unwrap_or(0).min(tasks.len() - 1));
        self.select_index(tasks, index);

        if let Some(menu) = &self.options_menu {
            if !tasks.iter().any(|task| task.id == menu.key) {
                self.options_menu = None;
            }
        }
    }

    fn select_index(&mut self, tasks: &[Task], index: usize) {
        self.list_state.select(Some(index));
        self.selected_key = tasks.get(index).map(|task| task.id.clone());
    }
}

/// Toolbar, spacer, task list and floating action button for a task slice.
///
/// Rendering reads only the tasks and the host's [`TasksScreenState`]; the
/// callbacks are only reached through [`TasksScreenContent::dispatch`].
pub struct TasksScreenContent<'a, C> {
    tasks: &'a [Task],
    callbacks: C,
    title: &'a str,
    theme: &'a Theme,
}

impl<'a, C: ContentCallbacks> TasksScreenContent<'a, C> {
    pub fn new(tasks: &'a [Task], callbacks: C, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            tasks,
            callbacks,
            title,
            theme,
        }
    }

    /// Rows in input order.
    pub fn rows(&self) -> Vec<TaskRow<'a>> {
        self.tasks
            .iter()
            .map(|task| TaskRow {
                key: task.id.as_str(),
                task,
                options: NO_OPTIONS,
            })
            .collect()
    }

    pub fn row(&self, key: &str) -> Option<TaskRow<'a>> {
        self.rows().into_iter().find(|row| row.key == key)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, state: &mut TasksScreenState) {
        let (toolbar_area, _spacer, list_area) = LayoutManager::tasks_screen_layout(area);

        ActionToolbar::new(self.title, self.theme.icons.settings()).render(f, toolbar_area, self.theme);

        let selected = state.selected_index();
        let items: Vec<_> = self
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                TaskItem::new(row.task, row.options, &self.theme.icons).render(selected == Some(index), self.theme)
            })
            .collect();
        let list = List::new(items).highlight_style(self.theme.text_style(true));
        f.render_stateful_widget(list, list_area, &mut state.list_state);

        FloatingActionButton::new(self.theme.icons.add()).render(f, LayoutManager::fab_rect(area), self.theme);

        if let Some(menu) = &state.options_menu {
            if let Some(row) = self.row(&menu.key) {
                TaskOptionsMenu::new(&row.task.title, row.options, menu.selected).render(f, area, self.theme);
            }
        }
    }

    /// Route `event` to its callback. Returns false when it names an unknown row.
    pub fn dispatch(&mut self, event: ContentEvent) -> bool {
        match event {
            ContentEvent::AddClick => {
                self.callbacks.on_add_click(Destination::AddTask);
                true
            }
            ContentEvent::SettingsClick => {
                self.callbacks.on_settings_click(Destination::Settings);
                true
            }
            ContentEvent::CheckChange { key } => match self.tasks.iter().find(|task| task.id == key) {
                Some(task) => {
                    self.callbacks.on_task_check_change(task);
                    true
                }
                None => false,
            },
            ContentEvent::ActionClick { key, action } => match self.tasks.iter().find(|task| task.id == key) {
                Some(task) => {
                    self.callbacks.on_task_action_click(&action, task);
                    true
                }
                None => false,
            },
        }
    }

    pub fn into_callbacks(self) -> C {
        self.callbacks
    }
}
