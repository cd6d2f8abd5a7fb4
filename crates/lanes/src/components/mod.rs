//! Stateless render components.
//!
//! Components read model state and paint into the frame; they never mutate
//! the model. Input handling lives in [`crate::app`] and [`crate::keybindings`].

pub mod list_panel;
pub mod panel_row;
