//! View-model seam between the tasks screen and whatever owns the tasks.
//!
//! The screen only talks to [`TasksViewModel`]. [`LocalTasksViewModel`] is
//! the implementation the binary runs with, backed by a [`TaskStore`].

use crate::model::{Task, TaskActionOption};
use crate::navigation::Destination;
use crate::store::TaskStore;
use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::watch;

/// Everything the tasks screen needs from its view-model.
#[async_trait]
pub trait TasksViewModel: Send + Sync {
    /// A new subscription to the task list.
    fn tasks(&self) -> watch::Receiver<Vec<Task>>;

    fn on_task_check_change(&self, task: &Task);

    fn on_task_action_click(&self, open_screen: &mut dyn FnMut(Destination), task: &Task, action: &str);

    fn on_add_click(&self, open_screen: &mut dyn FnMut(Destination));

    /// Fetch the row action titles. Called once per screen.
    async fn load_task_options(&self);
}

pub struct LocalTasksViewModel {
    store: TaskStore,
    show_edit_option: bool,
    options: watch::Sender<Vec<String>>,
}

impl LocalTasksViewModel {
    pub fn new(store: TaskStore, show_edit_option: bool) -> Self {
        let (options, _rx) = watch::channel(Vec::new());
        Self {
            store,
            show_edit_option,
            options,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Action titles published by the last [`TasksViewModel::load_task_options`].
    pub fn task_options(&self) -> Vec<String> {
        self.options.borrow().clone()
    }

    fn update_task(&self, task: Task) {
        if let Err(e) = self.store.update(task) {
            warn!("Task update rejected: {e}");
        }
    }
}

#[async_trait]
impl TasksViewModel for LocalTasksViewModel {
    fn tasks(&self) -> watch::Receiver<Vec<Task>> {
        self.store.subscribe()
    }

    fn on_task_check_change(&self, task: &Task) {
        info!("Toggling completion of task {}", task.id);
        self.update_task(Task {
            completed: !task.completed,
            ..task.clone()
        });
    }

    fn on_task_action_click(&self, open_screen: &mut dyn FnMut(Destination), task: &Task, action: &str) {
        match TaskActionOption::from_title(action) {
            Some(TaskActionOption::EditTask) => open_screen(Destination::EditTask {
                task_id: task.id.clone(),
            }),
            Some(TaskActionOption::ToggleFlag) => {
                info!("Toggling flag of task {}", task.id);
                self.update_task(Task {
                    flag: !task.flag,
                    ..task.clone()
                });
            }
            Some(TaskActionOption::DeleteTask) => {
                info!("Deleting task {}", task.id);
                if let Err(e) = self.store.delete(&task.id) {
                    warn!("Task delete rejected: {e}");
                }
            }
            None => warn!("Ignoring unknown task action '{action}'"),
        }
    }

    fn on_add_click(&self, open_screen: &mut dyn FnMut(Destination)) {
        open_screen(Destination::AddTask);
    }

    async fn load_task_options(&self) {
        let options = TaskActionOption::options(self.show_edit_option);
        info!("Loaded {} task options", options.len());
        self.options.send_replace(options);
    }
}
