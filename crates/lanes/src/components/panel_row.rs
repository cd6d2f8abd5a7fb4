//! Side-by-side layout of all panels.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::list_panel::ListPanel;
use crate::state::AppState;

pub struct PanelRow;

impl PanelRow {
    /// Render every panel side by side, left to right, top-aligned.
    ///
    /// Each panel gets `width / panel_count` columns; remainder columns on
    /// the right stay blank when the count does not divide the width.
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let count = state.group.len();
        if count == 0 || area.width == 0 || area.height == 0 {
            return;
        }

        let panel_width = area.width / count as u16;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(panel_width); count])
            .split(area);

        for (i, panel) in state.group.panels().iter().enumerate() {
            ListPanel::render(frame, chunks[i], panel, i == state.group.selected());
        }
    }
}
