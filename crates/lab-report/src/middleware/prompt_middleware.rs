//! Prompt Middleware
//!
//! Handles Confirm by running the prompt's intent, then closing it.

use crate::actions::{Action, PromptAction, ReportAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, PromptIntent, PromptKind};

pub struct PromptMiddleware;

impl PromptMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for PromptMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Prompt(PromptAction::Confirm) = action {
            if let Some(prompt) = &state.prompt {
                if let PromptKind::Confirm(intent) = prompt.kind {
                    log::info!("Prompt confirmed: {:?}", intent);
                    match intent {
                        PromptIntent::ResetAll => {
                            dispatcher.dispatch(Action::Report(ReportAction::ResetAll));
                            dispatcher.dispatch(Action::StatusBar(StatusBarAction::info(
                                "Formulario restablecido",
                                "reset",
                            )));
                        }
                    }
                }
                dispatcher.dispatch(Action::Prompt(PromptAction::Confirmed));
            }
            return false;
        }

        true
    }
}
