//! Task records observed by the tasks screen and the row actions a
//! view-model understands.

use serde::{Deserialize, Serialize};

/// Task priority, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    None,
    Low,
    Medium,
    High,
}

/// A single to-do entry.
///
/// The screen treats these as immutable snapshots: it renders them and hands
/// them back to the view-model when the user asks for a change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub due_date: String,
    pub due_time: String,
    pub description: String,
    pub url: String,
    pub flag: bool,
    pub completed: bool,
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Due date and time joined for display, empty when neither is set.
    #[must_use]
    pub fn due_label(&self) -> String {
        match (self.due_date.is_empty(), self.due_time.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.due_date.clone(),
            (true, false) => self.due_time.clone(),
            (false, false) => format!("{} {}", self.due_date, self.due_time),
        }
    }
}

/// Row actions offered by the reference view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskActionOption {
    EditTask,
    ToggleFlag,
    DeleteTask,
}

impl TaskActionOption {
    pub const ALL: [TaskActionOption; 3] = [Self::EditTask, Self::ToggleFlag, Self::DeleteTask];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::EditTask => "Edit task",
            Self::ToggleFlag => "Toggle flag",
            Self::DeleteTask => "Delete task",
        }
    }

    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.title() == title)
    }

    /// Option titles in menu order. "Edit task" is left out unless enabled.
    #[must_use]
    pub fn options(has_edit_option: bool) -> Vec<String> {
        Self::ALL
            .into_iter()
            .filter(|option| has_edit_option || *option != Self::EditTask)
            .map(|option| option.title().to_string())
            .collect()
    }
}
