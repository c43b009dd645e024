//! Event handling for the application.
//!
//! This module handles keyboard input and the periodic tick that drives
//! spinner animation and background result polling.

mod handler;
mod keys;

use crossterm::event::KeyEvent;

pub use handler::EventHandler;
pub use keys::{Action, KeyBindings};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input arrived within the tick rate.
    Tick,
    /// The application should quit.
    Quit,
}
