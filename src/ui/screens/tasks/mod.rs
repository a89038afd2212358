//! The tasks screen.
//!
//! [`TasksScreen`] wires a [`TasksViewModel`] to the stateless
//! [`TasksScreenContent`]: it collects the task list while started, launches
//! the option-loading effect after the first render, and forwards intents
//! back to the view-model or the navigation callback.

pub mod content;
pub mod preview;

pub use content::{ContentCallbacks, ContentEvent, OptionsMenuState, TaskRow, TasksScreenContent, TasksScreenState};
pub use preview::NoopCallbacks;

use crate::model::Task;
use crate::navigation::Destination;
use crate::ui::core::{Action, CollectedState, Component, LaunchedEffect, Lifecycle};
use crate::ui::theme::Theme;
use crate::view_model::TasksViewModel;
use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

/// Navigation callback owned by the screen.
pub type OpenScreen = Box<dyn FnMut(Destination) + Send>;

/// Adapts content intents to view-model calls.
struct ScreenCallbacks<'a, V: ?Sized> {
    view_model: &'a V,
    open_screen: &'a mut (dyn FnMut(Destination) + Send),
}

impl<V: TasksViewModel + ?Sized> ContentCallbacks for ScreenCallbacks<'_, V> {
    fn on_add_click(&mut self, _destination: Destination) {
        self.view_model.on_add_click(&mut *self.open_screen);
    }

    fn on_settings_click(&mut self, destination: Destination) {
        (self.open_screen)(destination);
    }

    fn on_task_check_change(&mut self, task: &Task) {
        self.view_model.on_task_check_change(task);
    }

    fn on_task_action_click(&mut self, action: &str, task: &Task) {
        self.view_model.on_task_action_click(&mut *self.open_screen, task, action);
    }
}

pub struct TasksScreen<V: TasksViewModel + 'static> {
    view_model: Arc<V>,
    open_screen: OpenScreen,
    tasks: CollectedState<Vec<Task>>,
    state: TasksScreenState,
    load_task_options: LaunchedEffect<usize>,
    lifecycle: Lifecycle,
    title: String,
    theme: Theme,
}

impl<V: TasksViewModel + 'static> TasksScreen<V> {
    pub fn new<F>(view_model: Arc<V>, open_screen: F, title: impl Into<String>, theme: Theme) -> Self
    where
        F: FnMut(Destination) + Send + 'static,
    {
        Self {
            view_model,
            open_screen: Box::new(open_screen),
            tasks: CollectedState::new(Vec::new()),
            state: TasksScreenState::default(),
            load_task_options: LaunchedEffect::new(),
            lifecycle: Lifecycle::Initialized,
            title: title.into(),
            theme,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.value()
    }

    pub fn state(&self) -> &TasksScreenState {
        &self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_collecting(&self) -> bool {
        self.tasks.is_collecting()
    }

    pub fn options_effect_launched(&self) -> bool {
        self.load_task_options.has_run()
    }

    /// Tear down the subscription and cancel the effect. The screen cannot be
    /// restarted afterwards.
    pub fn dispose(&mut self) {
        self.tasks.stop();
        self.load_task_options.cancel();
        self.lifecycle = Lifecycle::Disposed;
        debug!("Tasks screen disposed");
    }

    fn effect_key(&self) -> usize {
        Arc::as_ptr(&self.view_model) as *const () as usize
    }

    fn launch_effects(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        let key = self.effect_key();
        let view_model = Arc::clone(&self.view_model);
        if self.load_task_options.launch(key, async move {
            view_model.load_task_options().await;
        }) {
            info!("Requested task options");
        }
    }

    fn dispatch(&mut self, event: ContentEvent) {
        let callbacks = ScreenCallbacks {
            view_model: &*self.view_model,
            open_screen: &mut *self.open_screen,
        };
        let mut content = TasksScreenContent::new(self.tasks.value(), callbacks, &self.title, &self.theme);
        if !content.dispatch(event) {
            debug!("Dropped event for a row that is no longer listed");
        }
    }

    fn selected_key(&self) -> Option<String> {
        self.state.selected_task(self.tasks.value()).map(|task| task.id.clone())
    }

    fn selected_row_options(&self, key: &str) -> Vec<String> {
        let content = TasksScreenContent::new(self.tasks.value(), NoopCallbacks, &self.title, &self.theme);
        content.row(key).map(|row| row.options.to_vec()).unwrap_or_default()
    }

    fn move_option_cursor(&mut self, forward: bool) {
        let Some(key) = self.state.options_menu.as_ref().map(|menu| menu.key.clone()) else {
            return;
        };
        let count = self.selected_row_options(&key).len();
        if let Some(menu) = self.state.options_menu.as_mut() {
            menu.selected = if forward {
                (menu.selected + 1).min(count.saturating_sub(1))
            } else {
                menu.selected.saturating_sub(1)
            };
        }
    }

    fn handle_options_menu_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousOption,
            KeyCode::Down | KeyCode::Char('j') => Action::NextOption,
            KeyCode::Enter => Action::ChooseOption,
            KeyCode::Esc => Action::CloseTaskOptions,
            _ => Action::None,
        }
    }
}

impl<V: TasksViewModel + 'static> Component for TasksScreen<V> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.state.options_menu.is_some() {
            return self.handle_options_menu_key(key);
        }

        match key.code {
            KeyCode::Char('a') | KeyCode::Char('+') => Action::Content(ContentEvent::AddClick),
            KeyCode::Char('s') => Action::Content(ContentEvent::SettingsClick),
            KeyCode::Char(' ') | KeyCode::Char('x') => match self.selected_key() {
                Some(key) => Action::Content(ContentEvent::CheckChange { key }),
                None => Action::None,
            },
            KeyCode::Enter | KeyCode::Char('o') => match self.selected_key() {
                Some(key) => Action::OpenTaskOptions(key),
                None => Action::None,
            },
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Content(event) => self.dispatch(event),
            Action::SelectNext => self.state.select_next(self.tasks.value()),
            Action::SelectPrevious => self.state.select_previous(self.tasks.value()),
            Action::OpenTaskOptions(key) => {
                self.state.options_menu = Some(OptionsMenuState { key, selected: 0 });
            }
            Action::NextOption => self.move_option_cursor(true),
            Action::PreviousOption => self.move_option_cursor(false),
            Action::ChooseOption => {
                if let Some(menu) = self.state.options_menu.take() {
                    let options = self.selected_row_options(&menu.key);
                    if let Some(action) = options.get(menu.selected) {
                        self.dispatch(ContentEvent::ActionClick {
                            key: menu.key,
                            action: action.clone(),
                        });
                    }
                }
            }
            Action::CloseTaskOptions => self.state.options_menu = None,
            other => return other,
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let callbacks = ScreenCallbacks {
            view_model: &*self.view_model,
            open_screen: &mut *self.open_screen,
        };
        let content = TasksScreenContent::new(self.tasks.value(), callbacks, &self.title, &self.theme);
        content.render(f, rect, &mut self.state);

        // Effects run once the first frame is on screen
        self.launch_effects();
    }

    fn tick(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Started {
            return false;
        }
        let changed = self.tasks.poll();
        if changed {
            self.state.reconcile(self.tasks.value());
        }
        changed
    }

    fn on_start(&mut self) {
        if matches!(self.lifecycle, Lifecycle::Started | Lifecycle::Disposed) {
            return;
        }
        self.tasks.start(self.view_model.tasks());
        self.state.reconcile(self.tasks.value());
        self.lifecycle = Lifecycle::Started;
        debug!("Tasks screen started with {} tasks", self.tasks.value().len());
    }

    fn on_stop(&mut self) {
        if self.lifecycle != Lifecycle::Started {
            return;
        }
        self.tasks.stop();
        self.lifecycle = Lifecycle::Stopped;
        debug!("Tasks screen stopped");
    }
}
