pub mod prompt_view_model;
pub mod report_view_model;
pub mod slot_editor_view_model;
pub mod status_bar;

pub use prompt_view_model::PromptViewModel;
pub use report_view_model::{MachineCellViewModel, ReportViewModel};
pub use slot_editor_view_model::SlotEditorViewModel;
pub use status_bar::StatusBarViewModel;

use crate::command_id::CommandId;
use crate::domain_models::Status;
use crate::keybindings::Keymap;
use lab_report_theme::Theme;
use ratatui::style::Color;

/// A key hint shown in footers, e.g. "Ctrl+S" + "guardar"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub keys: String,
    pub description: &'static str,
}

impl KeyHint {
    /// Hint for a command, skipped when the command has no binding
    pub fn for_command(
        keymap: &Keymap,
        command: CommandId,
        description: &'static str,
    ) -> Option<Self> {
        keymap
            .compact_hint_for_command(command)
            .map(|keys| Self { keys, description })
    }

    pub fn fixed(keys: &str, description: &'static str) -> Self {
        Self {
            keys: keys.to_string(),
            description,
        }
    }
}

/// Theme color for a machine status, looked up by its style class
pub fn status_color(theme: &Theme, status: Status) -> Color {
    match status.info().class {
        "status-maintenance" => theme.machine_maintenance,
        "status-updated" => theme.machine_updated,
        "status-problem" => theme.machine_problem,
        _ => theme.machine_none,
    }
}
