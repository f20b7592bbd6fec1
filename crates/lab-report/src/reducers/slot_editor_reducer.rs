//! Machine Editor Reducer
//!
//! Edits the draft. Opening copies the slot from the report; the report
//! itself is only changed by the commit the middleware dispatches on save.

use crate::actions::SlotEditorAction;
use crate::domain_models::{Report, SlotDraft};

pub fn reduce(
    draft: Option<SlotDraft>,
    report: &Report,
    action: &SlotEditorAction,
) -> Option<SlotDraft> {
    match action {
        SlotEditorAction::Open(machine) => {
            if let Some(open) = draft {
                log::debug!("Editor already open for PC {}, ignoring", open.machine);
                return Some(open);
            }
            Some(SlotDraft::open(*machine, &report.slot(*machine)))
        }
        SlotEditorAction::Saved | SlotEditorAction::Cancel => None,
        _ => draft.map(|mut draft| {
            edit(&mut draft, action);
            draft
        }),
    }
}

fn edit(draft: &mut SlotDraft, action: &SlotEditorAction) {
    match action {
        SlotEditorAction::Char(c) => draft.input.push(*c),
        SlotEditorAction::Backspace => {
            draft.input.pop();
        }
        SlotEditorAction::ClearInput => draft.input.clear(),
        SlotEditorAction::AddTask => {
            if !draft.add_task() {
                log::debug!("Ignoring blank task for PC {}", draft.machine);
            }
        }
        SlotEditorAction::RemoveSelectedTask => {
            if let Some(task) = draft.remove_selected_task() {
                log::debug!("Removed task '{}' from PC {}", task, draft.machine);
            }
        }
        SlotEditorAction::RemoveTask(index) => {
            if let Some(task) = draft.remove_task(*index) {
                log::debug!("Removed task '{}' from PC {}", task, draft.machine);
            }
        }
        SlotEditorAction::SelectNextTask => draft.select_next_task(),
        SlotEditorAction::SelectPreviousTask => draft.select_previous_task(),
        SlotEditorAction::NextStatus => draft.set_status(draft.status.next()),
        SlotEditorAction::PreviousStatus => draft.set_status(draft.status.previous()),
        SlotEditorAction::SetStatus(status) => draft.set_status(*status),
        SlotEditorAction::Open(_)
        | SlotEditorAction::Save
        | SlotEditorAction::Saved
        | SlotEditorAction::Cancel => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{MachineId, Status};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn report() -> Report {
        let mut report = Report::new(NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        report.commit_slot(
            MachineId::new(8).unwrap(),
            Status::Problem,
            vec!["pantalla".into()],
        );
        report
    }

    fn run(actions: &[SlotEditorAction]) -> Option<SlotDraft> {
        let report = report();
        actions
            .iter()
            .fold(None, |draft, action| reduce(draft, &report, action))
    }

    #[test]
    fn test_open_copies_the_slot() {
        let draft = run(&[SlotEditorAction::Open(MachineId::new(8).unwrap())]).unwrap();
        assert_eq!(draft.status, Status::Problem);
        assert_eq!(draft.tasks, vec!["pantalla"]);
        assert_eq!(draft.input, "");
    }

    #[test]
    fn test_only_one_editor_at_a_time() {
        let draft = run(&[
            SlotEditorAction::Open(MachineId::new(8).unwrap()),
            SlotEditorAction::Open(MachineId::new(9).unwrap()),
        ])
        .unwrap();
        assert_eq!(draft.machine, MachineId::new(8).unwrap());
    }

    #[test]
    fn test_typing_and_adding_tasks() {
        let draft = run(&[
            SlotEditorAction::Open(MachineId::new(1).unwrap()),
            SlotEditorAction::Char('x'),
            SlotEditorAction::Backspace,
            SlotEditorAction::Char('o'),
            SlotEditorAction::Char('k'),
            SlotEditorAction::AddTask,
            SlotEditorAction::AddTask,
            SlotEditorAction::SetStatus(Status::Updated),
            SlotEditorAction::NextStatus,
        ])
        .unwrap();
        assert_eq!(draft.tasks, vec!["ok"]);
        assert_eq!(draft.status, Status::Problem);
    }

    #[test]
    fn test_remove_task_by_position() {
        let draft = run(&[
            SlotEditorAction::Open(MachineId::new(8).unwrap()),
            SlotEditorAction::Char('a'),
            SlotEditorAction::AddTask,
            SlotEditorAction::RemoveTask(0),
            SlotEditorAction::RemoveTask(5),
        ])
        .unwrap();
        assert_eq!(draft.tasks, vec!["a"]);
    }

    #[test]
    fn test_cancel_discards_the_draft() {
        assert_eq!(
            run(&[
                SlotEditorAction::Open(MachineId::new(1).unwrap()),
                SlotEditorAction::Char('x'),
                SlotEditorAction::Cancel,
            ]),
            None
        );
    }

    #[test]
    fn test_edits_without_editor_are_ignored() {
        assert_eq!(run(&[SlotEditorAction::AddTask]), None);
    }
}
