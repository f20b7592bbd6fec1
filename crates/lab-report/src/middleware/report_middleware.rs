//! Report Middleware
//!
//! Turns save and reset requests into blocking prompts. Nothing is persisted:
//! saving only shows what is currently in memory.

use crate::actions::{Action, PromptAction, ReportAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::save_summary;
use crate::middleware::Middleware;
use crate::state::{AppState, PromptState};

pub struct ReportMiddleware;

impl ReportMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for ReportMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Report(ReportAction::RequestSave) => {
                log::info!(
                    "Save requested ({} machines recorded)",
                    state.report.recorded_slot_count()
                );
                let prompt = PromptState::acknowledge("Guardar informe", save_summary(&state.report));
                dispatcher.dispatch(Action::Prompt(PromptAction::Show(prompt)));
                false
            }
            Action::Report(ReportAction::RequestReset) => {
                dispatcher.dispatch(Action::Prompt(PromptAction::Show(
                    PromptState::confirm_reset(),
                )));
                false
            }
            _ => true,
        }
    }
}
