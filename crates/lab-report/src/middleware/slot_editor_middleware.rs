//! Machine Editor Middleware
//!
//! Handles Save by committing the draft into the report, then closing the
//! editor. The draft never touches the report before this point.

use crate::actions::{Action, ReportAction, SlotEditorAction, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct SlotEditorMiddleware;

impl SlotEditorMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for SlotEditorMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::SlotEditor(SlotEditorAction::Save) = action {
            if let Some(draft) = &state.slot_editor {
                log::debug!(
                    "Committing PC {}: {:?} with {} task(s)",
                    draft.machine,
                    draft.status,
                    draft.tasks.len()
                );
                dispatcher.dispatch(Action::Report(ReportAction::CommitSlot {
                    machine: draft.machine,
                    slot: draft.to_slot(),
                }));
                dispatcher.dispatch(Action::SlotEditor(SlotEditorAction::Saved));
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::success(
                    format!("PC {} guardada: {}", draft.machine, draft.status.label()),
                    "editor",
                )));
            }
            return false;
        }

        true
    }
}
