//! Application root: event loop and top-level draw pass.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::components::panel_row::PanelRow;
use crate::keybindings;
use crate::state::AppState;

/// Root controller: owns the state tree, maps key presses to actions, and
/// draws a full frame after every processed event.
pub struct App {
    state: AppState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Run the main loop until the user quits.
    ///
    /// One event is fully applied before the next is read; there is no other
    /// thread touching the state.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("entering main loop");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        PanelRow::render(frame, frame.area(), &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            // A resize takes effect on the next draw; nothing to record.
            Event::Resize(..) => {}
            _ => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            tracing::debug!("exit requested");
            self.state.exit = true;
            return;
        }

        if let Some(action) = keybindings::action_for(&key) {
            tracing::trace!(?action, "applying action");
            self.state.group.apply(action);
        }
    }
}
