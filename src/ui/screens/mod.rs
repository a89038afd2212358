//! Screens hosted by the application

pub mod tasks;

pub use tasks::TasksScreen;
