//! Navigation Translation Middleware
//!
//! Translates generic Navigation actions into view-specific actions
//! using the active view's translate_navigation method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Navigate(nav) = action {
            match state
                .active_view()
                .and_then(|view| view.translate_navigation(*nav, state))
            {
                Some(translated) => {
                    log::debug!(
                        "NavigationMiddleware: Translating {:?} to {:?}",
                        nav,
                        translated
                    );
                    dispatcher.dispatch(translated);
                }
                None => log::debug!("Navigation action not handled by active view: {:?}", nav),
            }
            return false;
        }

        true
    }
}
