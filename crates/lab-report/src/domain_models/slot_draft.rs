//! Editing draft for a single machine.
//!
//! The draft is a value copy of a slot. It is mutated freely while the editor
//! is open and only reaches the report through an explicit commit.

use super::{MachineId, MachineSlot, Status};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDraft {
    pub machine: MachineId,
    pub status: Status,
    pub tasks: Vec<String>,
    /// Text typed into the new-task input
    pub input: String,
    /// Highlighted task in the list (for removal)
    pub selected_task: usize,
}

impl SlotDraft {
    /// Start editing a copy of `slot`
    pub fn open(machine: MachineId, slot: &MachineSlot) -> Self {
        Self {
            machine,
            status: slot.status,
            tasks: slot.tasks.clone(),
            input: String::new(),
            selected_task: 0,
        }
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Append the trimmed input as a task.
    ///
    /// Blank input is ignored and left untouched. Returns true when a task was added.
    pub fn add_task(&mut self) -> bool {
        let task = self.input.trim();
        if task.is_empty() {
            return false;
        }
        self.tasks.push(task.to_string());
        self.input.clear();
        self.selected_task = self.tasks.len() - 1;
        true
    }

    /// Remove the task at `index`, keeping the others in order
    pub fn remove_task(&mut self, index: usize) -> Option<String> {
        if index >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(index);
        self.selected_task = self.selected_task.min(self.tasks.len().saturating_sub(1));
        Some(removed)
    }

    pub fn remove_selected_task(&mut self) -> Option<String> {
        self.remove_task(self.selected_task)
    }

    pub fn select_next_task(&mut self) {
        if self.selected_task + 1 < self.tasks.len() {
            self.selected_task += 1;
        }
    }

    pub fn select_previous_task(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    /// The slot this draft would commit
    pub fn to_slot(&self) -> MachineSlot {
        MachineSlot::new(self.status, self.tasks.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Report;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn machine(n: u8) -> MachineId {
        MachineId::new(n).unwrap()
    }

    fn draft_with(tasks: &[&str]) -> SlotDraft {
        let slot = MachineSlot::new(
            Status::Maintenance,
            tasks.iter().map(|t| t.to_string()).collect(),
        );
        SlotDraft::open(machine(3), &slot)
    }

    #[test]
    fn test_commit_then_reopen_round_trips() {
        let mut report = Report::new(NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        report.commit_slot(machine(9), Status::Updated, vec!["A".into(), "B".into()]);

        let draft = SlotDraft::open(machine(9), &report.slot(machine(9)));
        assert_eq!(draft.status, Status::Updated);
        assert_eq!(draft.tasks, vec!["A", "B"]);
        assert_eq!(draft.input, "");
    }

    #[test]
    fn test_blank_tasks_are_rejected() {
        let mut draft = draft_with(&["keep"]);
        for blank in ["", "   ", "\t\n"] {
            draft.input = blank.to_string();
            assert!(!draft.add_task());
        }
        assert_eq!(draft.tasks, vec!["keep"]);
    }

    #[test]
    fn test_add_task_trims_and_allows_duplicates() {
        let mut draft = draft_with(&["limpieza"]);
        draft.input = "  limpieza ".to_string();
        assert!(draft.add_task());

        assert_eq!(draft.tasks, vec!["limpieza", "limpieza"]);
        assert_eq!(draft.input, "");
        assert_eq!(draft.selected_task, 1);
    }

    #[test]
    fn test_remove_task_keeps_relative_order() {
        let tasks = ["a", "b", "c", "d"];
        for i in 0..tasks.len() {
            let mut draft = draft_with(&tasks);
            assert_eq!(draft.remove_task(i).as_deref(), Some(tasks[i]));

            let expected: Vec<&str> = tasks
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, t)| *t)
                .collect();
            assert_eq!(draft.tasks, expected);
        }
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = draft_with(&["a"]);
        assert_eq!(draft.remove_task(5), None);
        assert_eq!(draft.tasks, vec!["a"]);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut draft = draft_with(&["a", "b"]);
        draft.select_next_task();
        draft.select_next_task();
        assert_eq!(draft.selected_task, 1);

        draft.remove_selected_task();
        assert_eq!(draft.selected_task, 0);
        draft.remove_selected_task();
        assert!(draft.tasks.is_empty());
        assert_eq!(draft.remove_selected_task(), None);

        draft.select_previous_task();
        assert_eq!(draft.selected_task, 0);
    }

    #[test]
    fn test_draft_edits_do_not_touch_report() {
        let mut report = Report::new(NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        let mut draft = SlotDraft::open(machine(1), &report.slot(machine(1)));
        draft.set_status(Status::Problem);
        draft.input = "no enciende".into();
        draft.add_task();

        assert!(report.get(machine(1)).is_none());

        let slot = draft.to_slot();
        report.commit_slot(draft.machine, slot.status, slot.tasks);
        assert_eq!(report.slot(machine(1)).status, Status::Problem);
    }
}
