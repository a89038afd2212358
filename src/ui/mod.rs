//! UI module for makeitso
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod screens;
pub mod theme;

pub use app::{run_app, App};
pub use layout::LayoutManager;
pub use theme::Theme;
