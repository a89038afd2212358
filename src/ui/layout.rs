//! Layout management and calculations

use crate::constants::{FAB_HEIGHT, FAB_PADDING_X, FAB_PADDING_Y, FAB_WIDTH, SMALL_SPACER, TOOLBAR_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (screen on top, key hints below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area)
            .to_vec()
    }

    /// Split the tasks screen into toolbar, spacer and list
    #[must_use]
    pub fn tasks_screen_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOOLBAR_HEIGHT),
                Constraint::Length(SMALL_SPACER),
                Constraint::Min(0),
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Bottom-right corner slot for the floating action button, clipped to `area`
    #[must_use]
    pub fn fab_rect(area: Rect) -> Rect {
        let width = FAB_WIDTH.min(area.width);
        let height = FAB_HEIGHT.min(area.height);
        let x = area.right().saturating_sub(width + FAB_PADDING_X).max(area.x);
        let y = area.bottom().saturating_sub(height + FAB_PADDING_Y).max(area.y);
        Rect::new(x, y, width, height)
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
