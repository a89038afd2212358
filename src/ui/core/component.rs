use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of UI that maps keys to [`Action`]s, applies them and draws itself.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        // Default implementation passes action through
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);

    /// Called once per event loop tick. Returns whether a redraw is needed.
    fn tick(&mut self) -> bool {
        false
    }

    // Optional lifecycle methods
    fn on_start(&mut self) {}
    fn on_stop(&mut self) {}
}
