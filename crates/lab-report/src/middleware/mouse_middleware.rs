//! Mouse Middleware
//!
//! Hit-tests left clicks against the active view. Only the top view sees
//! clicks, so a prompt blocks the form underneath.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::MouseClicked {
            column,
            row,
            screen,
        }) = action
        {
            if let Some(translated) = state
                .active_view()
                .and_then(|view| view.translate_click(*column, *row, *screen, state))
            {
                log::debug!("MouseMiddleware: click at {},{} -> {:?}", column, row, translated);
                dispatcher.dispatch(translated);
            }
            return false;
        }

        true
    }
}
