//! Typed navigation destinations.
//!
//! Screens never build route strings by hand; they ask for a [`Destination`]
//! and the host resolves it.

use std::fmt;

pub const ADD_TASK_ROUTE: &str = "add_task";
pub const SETTINGS_ROUTE: &str = "settings";
pub const EDIT_TASK_ROUTE: &str = "edit_task";
pub const TASK_ID_ARG: &str = "taskId";

/// Places the tasks screen can send the user to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    AddTask,
    Settings,
    EditTask { task_id: String },
}

impl Destination {
    /// The string key the host routes on.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Self::AddTask => ADD_TASK_ROUTE.to_string(),
            Self::Settings => SETTINGS_ROUTE.to_string(),
            Self::EditTask { task_id } => format!("{EDIT_TASK_ROUTE}?{TASK_ID_ARG}={task_id}"),
        }
    }

    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        match route {
            ADD_TASK_ROUTE => Some(Self::AddTask),
            SETTINGS_ROUTE => Some(Self::Settings),
            _ => {
                let (screen, query) = route.split_once('?')?;
                if screen != EDIT_TASK_ROUTE {
                    return None;
                }
                let task_id = query.strip_prefix(TASK_ID_ARG)?.strip_prefix('=')?;
                if task_id.is_empty() {
                    return None;
                }
                Some(Self::EditTask {
                    task_id: task_id.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}
