pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("end", "End", NavigateToBottom),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Focus
        KeyBinding::new("tab", "Tab", FocusNext),
        KeyBinding::new("shift+tab", "Shift+Tab", FocusPrevious),
        KeyBinding::new("backtab", "Shift+Tab", FocusPrevious),
        // Context
        KeyBinding::new("enter", "Enter", Confirm),
        // Report
        KeyBinding::new("ctrl+s", "Ctrl+S", ReportSave),
        KeyBinding::new("ctrl+r", "Ctrl+R", ReportReset),
        KeyBinding::new("ctrl+e", "Ctrl+E", ReportExportPdf),
        KeyBinding::new("t", "t", DateToday),
        KeyBinding::new("]", "]", DateNextMonth),
        KeyBinding::new("[", "[", DatePreviousMonth),
        // Machine editor
        KeyBinding::new("ctrl+a", "Ctrl+A", SlotEditorAddTask),
        KeyBinding::new("delete", "Del", SlotEditorRemoveTask),
        KeyBinding::new("ctrl+d", "Ctrl+D", SlotEditorRemoveTask),
        KeyBinding::new("ctrl+s", "Ctrl+S", SlotEditorSave),
        // Prompt
        KeyBinding::new("y", "y", PromptConfirm),
        KeyBinding::new("n", "n", PromptCancel),
        // General
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+q", "Ctrl+Q", GlobalQuit),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
