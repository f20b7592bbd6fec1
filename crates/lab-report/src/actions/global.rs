//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Global actions that affect the entire application
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    MouseClicked {
        column: u16,
        row: u16,
        /// Area of the last rendered frame, for hit-testing
        screen: Rect,
    },
    /// Close the current view (pop from stack)
    Close,
    /// Quit the application
    Quit,
    /// Unrecoverable failure: stop the application and report the message
    Fatal(String),
}
