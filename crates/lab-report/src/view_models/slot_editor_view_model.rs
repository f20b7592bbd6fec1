//! View model for the machine editor popup

use super::{status_color, KeyHint};
use crate::command_id::CommandId;
use crate::domain_models::{SlotDraft, Status};
use crate::icons;
use crate::keybindings::Keymap;
use lab_report_theme::Theme;
use ratatui::style::Color;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotEditorViewModel {
    /// "Tareas - PC 7"
    pub title: String,
    pub statuses: Vec<StatusOptionViewModel>,
    pub tasks: Vec<String>,
    /// Highlighted task, `None` when the list is empty
    pub selected_task: Option<usize>,
    pub input: String,
    pub hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptionViewModel {
    pub status: Status,
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
    pub selected: bool,
}

impl SlotEditorViewModel {
    pub fn from_draft(draft: &SlotDraft, theme: &Theme, keymap: &Keymap) -> Self {
        let statuses = Status::iter()
            .map(|status| StatusOptionViewModel {
                status,
                icon: icons::icon_for(status),
                label: status.label(),
                color: status_color(theme, status),
                selected: status == draft.status,
            })
            .collect();

        let hints = [
            Some(KeyHint::fixed("←/→", "estado")),
            KeyHint::for_command(keymap, CommandId::Confirm, "agregar"),
            KeyHint::for_command(keymap, CommandId::SlotEditorRemoveTask, "quitar"),
            KeyHint::for_command(keymap, CommandId::SlotEditorSave, "guardar"),
            KeyHint::for_command(keymap, CommandId::GlobalClose, "cancelar"),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            title: format!("Tareas - PC {}", draft.machine),
            statuses,
            tasks: draft.tasks.clone(),
            selected_task: (!draft.tasks.is_empty()).then_some(draft.selected_task),
            input: draft.input.clone(),
            hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{MachineId, MachineSlot};
    use crate::keymap::default_keymap;

    #[test]
    fn test_selected_status_and_tasks() {
        let slot = MachineSlot::new(Status::Maintenance, vec!["limpieza".into()]);
        let draft = SlotDraft::open(MachineId::new(7).unwrap(), &slot);
        let vm = SlotEditorViewModel::from_draft(&draft, &Theme::default(), &default_keymap());

        assert_eq!(vm.title, "Tareas - PC 7");
        let selected: Vec<_> = vm
            .statuses
            .iter()
            .filter(|s| s.selected)
            .map(|s| s.status)
            .collect();
        assert_eq!(selected, vec![Status::Maintenance]);
        assert_eq!(vm.tasks, vec!["limpieza".to_string()]);
        assert_eq!(vm.selected_task, Some(0));
        assert!(vm.hints.iter().any(|h| h.keys == "Del/Ctrl+D"));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let draft = SlotDraft::open(MachineId::first(), &MachineSlot::default());
        let vm = SlotEditorViewModel::from_draft(&draft, &Theme::default(), &default_keymap());
        assert_eq!(vm.selected_task, None);
    }
}
