//! Context Action Translation Middleware
//!
//! Translates semantic actions (Enter = Confirm) into whatever they mean
//! for the active view and its current focus.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ContextActionMiddleware;

impl ContextActionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ContextActionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::ViewContext(context) = action {
            if let Some(translated) = state
                .active_view()
                .and_then(|view| view.translate_context_action(*context, state))
            {
                log::debug!(
                    "ContextActionMiddleware: Translating {:?} to {:?}",
                    context,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            return false;
        }

        true
    }
}
