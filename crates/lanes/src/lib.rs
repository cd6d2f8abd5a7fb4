//! Terminal multi-panel list navigator
//!
//! Renders a fixed row of side-by-side panels, each holding a vertical list
//! of text items. Focus moves between panels with `h`/`l` and between items
//! with `j`/`k`; `o`/`O` insert placeholder items below/above the current
//! selection. All model state lives in [`lanes_core`]; this crate maps key
//! presses to semantic actions and draws the panel group with ratatui.

pub mod app;
pub mod components;
pub mod keybindings;
pub mod logging;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
pub use state::AppState;
