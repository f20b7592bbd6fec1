//! Actions module
//!
//! All actions in the application, using a tagged action architecture:
//! - Generic actions (Navigate, TextInput, ViewContext) that the active view
//!   translates into screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod prompt;
pub mod report;
pub mod slot_editor;
pub mod status_bar;

pub use context_action::ContextAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use prompt::PromptAction;
pub use report::{GridStep, ReportAction};
pub use slot_editor::SlotEditorAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Report form actions (metadata, grid, stats)
    Report(ReportAction),
    /// Machine editor popup actions
    SlotEditor(SlotEditorAction),
    /// Blocking prompt actions (reset confirmation, save acknowledgement)
    Prompt(PromptAction),
    /// Status bar actions
    StatusBar(StatusBarAction),
}
