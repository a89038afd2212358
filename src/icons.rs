//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Checkbox icons for task rows
#[derive(Debug, Clone)]
pub struct CheckboxIcons {
    pub unchecked: &'static str,
    pub checked: &'static str,
}

/// Toolbar and button icons
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub add: &'static str,
    pub settings: &'static str,
    pub more: &'static str,
}

/// Task metadata icons
#[derive(Debug, Clone)]
pub struct StatusIcons {
    pub flag: &'static str,
    pub due_date: &'static str,
    pub high_priority: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub checkbox: CheckboxIcons,
    pub actions: ActionIcons,
    pub status: StatusIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "🔳",
                checked: "✅",
            },
            actions: ActionIcons {
                add: "➕",
                settings: "⚙️",
                more: "⋮",
            },
            status: StatusIcons {
                flag: "🚩",
                due_date: "📅",
                high_priority: "🔴",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "☐",
                checked: "☑",
            },
            actions: ActionIcons {
                add: "+",
                settings: "⚙",
                more: "⋮",
            },
            status: StatusIcons {
                flag: "⚑",
                due_date: "◷",
                high_priority: "●",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            checkbox: CheckboxIcons {
                unchecked: "[ ]",
                checked: "[X]",
            },
            actions: ActionIcons {
                add: "+",
                settings: "*",
                more: "...",
            },
            status: StatusIcons {
                flag: "F",
                due_date: "@",
                high_priority: "!",
            },
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let icons = self.icons().checkbox;
        if checked {
            icons.checked
        } else {
            icons.unchecked
        }
    }

    #[must_use]
    pub fn add(&self) -> &'static str {
        self.icons().actions.add
    }

    #[must_use]
    pub fn settings(&self) -> &'static str {
        self.icons().actions.settings
    }

    #[must_use]
    pub fn more(&self) -> &'static str {
        self.icons().actions.more
    }

    #[must_use]
    pub fn flag(&self) -> &'static str {
        self.icons().status.flag
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().status.due_date
    }

    #[must_use]
    pub fn high_priority(&self) -> &'static str {
        self.icons().status.high_priority
    }
}
