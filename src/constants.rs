//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Directory name used under the XDG config and data directories
pub const APP_DIR_NAME: &str = "makeitso";
/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "makeitso.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "makeitso.log";

// UI Text
pub const TASKS_TITLE: &str = "Tasks";
pub const ADD_CONTENT_DESCRIPTION: &str = "Add";
pub const NO_ACTIONS_AVAILABLE: &str = "No actions available";
pub const KEY_HINTS: &str = "a add  s settings  space check  enter actions  q quit";
pub const PLACEHOLDER_HINT: &str = "Press Esc to go back";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// Timing
/// Default event loop tick in milliseconds
pub const TICK_RATE_DEFAULT_MS: u64 = 100;
pub const TICK_RATE_MIN_MS: u64 = 10;
pub const TICK_RATE_MAX_MS: u64 = 1000;

// UI Layout Constants
/// Height of the toolbar including its border
pub const TOOLBAR_HEIGHT: u16 = 3;
/// Gap between the toolbar and the list
pub const SMALL_SPACER: u16 = 1;
/// Width of the floating action button
pub const FAB_WIDTH: u16 = 9;
/// Height of the floating action button
pub const FAB_HEIGHT: u16 = 3;
/// Columns kept between the floating action button and the right edge
pub const FAB_PADDING_X: u16 = 2;
/// Rows kept between the floating action button and the bottom edge
pub const FAB_PADDING_Y: u16 = 1;
