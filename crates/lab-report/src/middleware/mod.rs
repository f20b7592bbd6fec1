use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use lab_report_document::DocumentRenderer;
use std::sync::Arc;

pub mod context_action_middleware;
pub mod export_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod mouse_middleware;
pub mod navigation_middleware;
pub mod prompt_middleware;
pub mod report_middleware;
pub mod slot_editor_middleware;
pub mod text_input_middleware;

use context_action_middleware::ContextActionMiddleware;
use export_middleware::ExportMiddleware;
use keyboard_middleware::KeyboardMiddleware;
use logging::LoggingMiddleware;
use mouse_middleware::MouseMiddleware;
use navigation_middleware::NavigationMiddleware;
use prompt_middleware::PromptMiddleware;
use report_middleware::ReportMiddleware;
use slot_editor_middleware::SlotEditorMiddleware;
use text_input_middleware::TextInputMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// The application's middleware, in execution order
///
/// Input translation comes first so that the screen-specific middleware only
/// ever sees translated actions.
pub fn default_chain(
    renderer: Arc<dyn DocumentRenderer>,
) -> anyhow::Result<Vec<Box<dyn Middleware>>> {
    Ok(vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(MouseMiddleware::new()),
        Box::new(NavigationMiddleware::new()),
        Box::new(TextInputMiddleware::new()),
        Box::new(ContextActionMiddleware::new()),
        Box::new(ReportMiddleware::new()),
        Box::new(SlotEditorMiddleware::new()),
        Box::new(PromptMiddleware::new()),
        Box::new(ExportMiddleware::new(renderer)?),
    ])
}
