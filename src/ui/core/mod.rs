//! Core UI functionality for the tasks screen.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions produced by key handling
//! - [`component`] - Base component trait and rendering abstractions
//! - [`effect`] - Run-once background effects tied to a component
//! - [`event_handler`] - Terminal event polling and tick timing
//! - [`lifecycle`] - Lifecycle states and lifecycle-scoped subscriptions
//!
//! Components turn key events into [`Action`]s, apply them in `update`, and
//! draw in `render`. The host drives `on_start`/`on_stop` from visibility and
//! terminal focus, which is what opens and closes state subscriptions.

pub mod actions;
pub mod component;
pub mod effect;
pub mod event_handler;
pub mod lifecycle;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use effect::LaunchedEffect;
pub use event_handler::{EventHandler, EventType};
pub use lifecycle::{CollectedState, Lifecycle, Subscription};
