//! Application state and seed data.

use lanes_core::PanelGroup;

/// Seed contents for the three startup panels. There is no content source
/// in scope, so this is all the data the app ever starts from.
const SEED_PANELS: [[&str; 3]; 3] = [
    ["foo", "bar", "baz"],
    ["qux", "qux", "quuz"],
    ["corge", "grault", "waldo"],
];

/// Top-level mutable state owned by [`crate::App`].
pub struct AppState {
    pub group: PanelGroup,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            group: PanelGroup::new(SEED_PANELS),
            exit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
