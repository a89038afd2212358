//! In-memory task store.
//!
//! Every mutation publishes a fresh snapshot on a `watch` channel so any
//! number of observers can follow the list without polling the store.

use crate::model::{Priority, Task};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Failed to read seed file {}: {source}", .path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone)]
pub struct TaskStore {
    tx: Arc<watch::Sender<Vec<Task>>>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TaskStore {
    /// Create a store holding `tasks`. Tasks without an id get one.
    pub fn new(tasks: Vec<Task>) -> Self {
        let tasks = tasks.into_iter().map(with_id).collect();
        let (tx, _rx) = watch::channel(tasks);
        Self { tx: Arc::new(tx) }
    }

    /// Open a new subscription. The receiver starts at the current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Task>> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tx.borrow().clone()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.tx.borrow().iter().find(|task| task.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    /// Append a task and return its id.
    pub fn add(&self, task: Task) -> String {
        let task = with_id(task);
        let id = task.id.clone();
        self.tx.send_modify(|tasks| tasks.push(task));
        debug!("Stored task {id}");
        id
    }

    /// Replace the task sharing `task.id`.
    pub fn update(&self, task: Task) -> Result<(), StoreError> {
        let mut found = false;
        self.tx.send_if_modified(|tasks| {
            if let Some(slot) = tasks.iter_mut().find(|existing| existing.id == task.id) {
                found = true;
                if *slot != task {
                    *slot = task.clone();
                    return true;
                }
            }
            false
        });

        if found {
            debug!("Updated task {}", task.id);
            Ok(())
        } else {
            Err(StoreError::NotFound(task.id))
        }
    }

    pub fn delete(&self, id: &str) -> Result<Task, StoreError> {
        let mut removed = None;
        self.tx.send_if_modified(|tasks| match tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                removed = Some(tasks.remove(index));
                true
            }
            None => false,
        });

        let task = removed.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        debug!("Deleted task {id}");
        Ok(task)
    }

    /// Read a JSON array of tasks.
    pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Task>, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Seed {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn with_id(mut task: Task) -> Task {
    if task.id.is_empty() {
        task.id = Uuid::new_v4().to_string();
    }
    task
}

/// A handful of tasks to populate a fresh store.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task {
            title: "Water the plants".to_string(),
            priority: Priority::Low,
            due_date: "Mon, Dec 5, 2022".to_string(),
            ..Default::default()
        },
        Task {
            title: "Book dentist appointment".to_string(),
            priority: Priority::High,
            flag: true,
            ..Default::default()
        },
        Task {
            title: "Read chapter 4".to_string(),
            priority: Priority::Medium,
            due_date: "Fri, Dec 9, 2022".to_string(),
            due_time: "20:00".to_string(),
            completed: true,
            ..Default::default()
        },
    ]
}
