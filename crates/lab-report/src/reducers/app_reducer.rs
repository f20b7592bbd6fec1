use crate::actions::{Action, GlobalAction, PromptAction, SlotEditorAction};
use crate::reducers::{
    main_view_reducer, prompt_reducer, report_reducer, slot_editor_reducer, status_bar_reducer,
};
use crate::state::AppState;
use crate::views::{PromptView, SlotEditorView, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Fatal(message)) => {
            log::error!("Fatal: {}", message);
            state.fatal_error = Some(message.clone());
            state.running = false;
            return state;
        }
        Action::Global(GlobalAction::Close) => {
            close_top_view(&mut state);
            return state;
        }
        Action::SlotEditor(SlotEditorAction::Open(_)) if state.slot_editor.is_none() => {
            state.view_stack.push(Box::new(SlotEditorView::new()));
        }
        Action::SlotEditor(SlotEditorAction::Saved | SlotEditorAction::Cancel) => {
            remove_view(&mut state, ViewId::SlotEditor);
        }
        Action::Prompt(PromptAction::Show(_)) if state.prompt.is_none() => {
            state.view_stack.push(Box::new(PromptView::new()));
        }
        Action::Prompt(PromptAction::Confirmed | PromptAction::Cancel) => {
            remove_view(&mut state, ViewId::Prompt);
        }
        _ => {}
    }

    // Sub-reducers. The report reducer reads the focus before the main view
    // reducer moves it.
    match action {
        Action::Report(report_action) => {
            state.report = report_reducer::reduce(state.report, &state.main_view, report_action);
        }
        Action::SlotEditor(editor_action) => {
            state.slot_editor =
                slot_editor_reducer::reduce(state.slot_editor, &state.report, editor_action);
        }
        Action::Prompt(prompt_action) => {
            state.prompt = prompt_reducer::reduce(state.prompt, prompt_action);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, status_action);
        }
        _ => {}
    }
    state.main_view = main_view_reducer::reduce(state.main_view, action);

    state
}

/// Close the top-most view, discarding whatever it was editing.
///
/// Closing the last view quits the application.
fn close_top_view(state: &mut AppState) {
    if state.view_stack.len() <= 1 {
        log::debug!("Closing last view - quitting application");
        state.running = false;
        return;
    }

    if let Some(popped) = state.view_stack.pop() {
        match popped.view_id() {
            ViewId::SlotEditor => state.slot_editor = None,
            ViewId::Prompt => state.prompt = None,
            ViewId::Report => {}
        }
        log::debug!("Closed view: {:?}", popped.view_id());
    }
}

fn remove_view(state: &mut AppState, id: ViewId) {
    if let Some(position) = state.view_stack.iter().rposition(|v| v.view_id() == id) {
        state.view_stack.remove(position);
    }
}
