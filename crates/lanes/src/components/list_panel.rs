//! A single panel: one vertical list of items.

use lanes_core::Panel;
use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::util::styles::item_style;

/// Columns each panel keeps free as a gutter to its right neighbor.
const PANEL_GUTTER: u16 = 2;

pub struct ListPanel;

impl ListPanel {
    /// Render the panel's items top-down into `area`.
    ///
    /// Each item is one line padded to the panel's inner width; the selected
    /// item is highlighted only while the panel is focused. There is no
    /// scrolling: items render from the top and anything past the bottom of
    /// the area is clipped.
    pub fn render(frame: &mut Frame, area: Rect, panel: &Panel, focused: bool) {
        let width = area.width.saturating_sub(PANEL_GUTTER);
        if width == 0 || area.height == 0 {
            return;
        }

        let inner = Rect { width, ..area };
        let list = panel.list();

        let lines: Vec<Line> = list
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let highlighted = focused && i == list.selected();
                Line::styled(fit_width(item.content(), width), item_style(highlighted))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Pad or truncate `content` to exactly `width` columns.
fn fit_width(content: &str, width: u16) -> String {
    let width = width as usize;
    let truncated: String = content.chars().take(width).collect();
    format!("{truncated:<width$}")
}
