//! Common styling utilities for TUI components

use ratatui::style::{Color, Style};

/// Background for the selected item of the focused panel, the lightest
/// entry of the terminal palette.
pub const SELECTED_BG: Color = Color::Indexed(255);

/// Foreground paired with [`SELECTED_BG`], the darkest palette entry.
pub const SELECTED_FG: Color = Color::Indexed(0);

/// Style for an item line.
///
/// The selected line of a focused panel renders dark-on-light; every other
/// line keeps the terminal defaults.
pub fn item_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().bg(SELECTED_BG).fg(SELECTED_FG)
    } else {
        Style::default()
    }
}
