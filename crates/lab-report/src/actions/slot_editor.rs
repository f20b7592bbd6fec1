//! Machine editor actions

use crate::domain_models::{MachineId, Status};

#[derive(Debug, Clone, PartialEq)]
pub enum SlotEditorAction {
    /// Open the editor on a copy of the machine's slot
    Open(MachineId),

    // Text input (translated from TextInputAction)
    Char(char),
    Backspace,
    ClearInput,

    // Draft editing
    /// Append the typed task (blank input is ignored)
    AddTask,
    RemoveSelectedTask,
    /// Remove one task by position (its "×" was clicked)
    RemoveTask(usize),
    SelectNextTask,
    SelectPreviousTask,
    NextStatus,
    PreviousStatus,
    SetStatus(Status),

    // Control actions
    /// User asked to save - triggers the commit (handled by middleware)
    Save,
    /// Draft has been committed - close the editor (handled by reducer)
    Saved,
    /// Discard the draft and close
    Cancel,
}
