use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Raw input is noisy and already logged by the keyboard middleware
        match action {
            Action::Global(GlobalAction::KeyPressed(_)) => {}
            Action::Global(GlobalAction::MouseClicked { column, row, .. }) => {
                log::trace!("Mouse click at {},{}", column, row);
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true
    }
}
