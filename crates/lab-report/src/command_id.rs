//! Command identifiers
//!
//! Every command a key binding can trigger, as a type-safe enum.

use crate::actions::{
    Action, ContextAction, GlobalAction, NavigationAction, PromptAction, ReportAction,
    SlotEditorAction,
};

/// Unique identifier for each command in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateLeft,
    NavigateRight,
    NavigateToTop,
    NavigateToBottom,

    // === Focus ===
    FocusNext,
    FocusPrevious,

    // === Context ===
    /// Primary action of the focused element
    Confirm,

    // === Report ===
    ReportSave,
    ReportReset,
    ReportExportPdf,
    DateToday,
    DateNextMonth,
    DatePreviousMonth,

    // === Machine editor ===
    SlotEditorAddTask,
    SlotEditorRemoveTask,
    SlotEditorSave,

    // === Prompt ===
    PromptConfirm,
    PromptCancel,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::FocusNext => Action::Report(ReportAction::FocusNext),
            Self::FocusPrevious => Action::Report(ReportAction::FocusPrevious),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),

            Self::ReportSave => Action::Report(ReportAction::RequestSave),
            Self::ReportReset => Action::Report(ReportAction::RequestReset),
            Self::ReportExportPdf => Action::Report(ReportAction::ExportPdf),
            Self::DateToday => Action::Report(ReportAction::DateToday),
            Self::DateNextMonth => Action::Report(ReportAction::DateMonthStep { months: 1 }),
            Self::DatePreviousMonth => Action::Report(ReportAction::DateMonthStep { months: -1 }),

            Self::SlotEditorAddTask => Action::SlotEditor(SlotEditorAction::AddTask),
            Self::SlotEditorRemoveTask => Action::SlotEditor(SlotEditorAction::RemoveSelectedTask),
            Self::SlotEditorSave => Action::SlotEditor(SlotEditorAction::Save),

            Self::PromptConfirm => Action::Prompt(PromptAction::Confirm),
            Self::PromptCancel => Action::Prompt(PromptAction::Cancel),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }
}
