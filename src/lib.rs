//! makeitso - a terminal to-do list
//!
//! The library is built around a single tasks screen that renders a list of
//! tasks, a toolbar with a settings action and a floating add button. The
//! screen owns no business logic: it observes a task list published by a
//! view-model and forwards user intents back to it.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`model`] - Task records and row actions
//! * [`navigation`] - Typed navigation destinations
//! * [`store`] - In-memory task store publishing snapshots
//! * [`view_model`] - The view-model seam and its store-backed implementation
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup
pub mod logger;

/// Task records and the row actions a view-model understands
pub mod model;

/// Typed navigation destinations
pub mod navigation;

/// In-memory task storage
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// View-model trait and implementation
pub mod view_model;

pub use model::Task;
pub use navigation::Destination;
