//! Reusable UI components

pub mod fab;
pub mod options_menu;
pub mod placeholder;
pub mod status_bar;
pub mod task_item;
pub mod toolbar;

// Component exports
pub use fab::FloatingActionButton;
pub use options_menu::TaskOptionsMenu;
pub use placeholder::DestinationPlaceholder;
pub use status_bar::StatusBar;
pub use task_item::TaskItem;
pub use toolbar::ActionToolbar;
