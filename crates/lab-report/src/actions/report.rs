//! Report form actions

use crate::domain_models::{MachineId, MachineSlot};
use crate::state::FormField;

/// Cursor movement inside the machine grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStep {
    Left,
    Right,
    Up,
    Down,
    First,
    Last,
}

/// Actions for the report form (main view)
#[derive(Debug, Clone, PartialEq)]
pub enum ReportAction {
    // Focus
    FocusNext,
    FocusPrevious,
    Focus(FormField),

    // Text editing on the focused field (technician, conclusions)
    Char(char),
    Backspace,
    ClearField,
    /// Line break in the conclusions editor
    Newline,

    // Shift selector
    ShiftNext,
    ShiftPrevious,

    // Date field
    DateStep { days: i64 },
    DateMonthStep { months: i32 },
    DateToday,

    // Machine grid
    MoveCursor(GridStep),
    /// Highlight a machine (mouse click)
    SelectMachine(MachineId),

    // Store mutations
    /// Replace a machine's slot with an edited one
    CommitSlot {
        machine: MachineId,
        slot: MachineSlot,
    },
    /// Restore every field to its default (only after confirmation)
    ResetAll,

    // Requests (handled by middleware)
    /// Show the save summary
    RequestSave,
    /// Ask for reset confirmation
    RequestReset,
    /// Render the report to PDF
    ExportPdf,
}
