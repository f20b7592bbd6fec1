//! Main View Reducer
//!
//! Focus and grid cursor of the report form.

use crate::actions::{Action, GridStep, ReportAction, SlotEditorAction};
use crate::domain_models::{MachineId, MACHINE_COUNT};
use crate::layout::GRID_COLUMNS;
use crate::state::{FormField, MainViewState};

pub fn reduce(mut state: MainViewState, action: &Action) -> MainViewState {
    match action {
        Action::Report(ReportAction::FocusNext) => {
            state.focused_field = state.focused_field.next();
        }
        Action::Report(ReportAction::FocusPrevious) => {
            state.focused_field = state.focused_field.prev();
        }
        Action::Report(ReportAction::Focus(field)) => {
            state.focused_field = *field;
        }
        Action::Report(ReportAction::MoveCursor(step)) => {
            state.cursor = step_cursor(state.cursor, *step);
        }
        Action::Report(ReportAction::SelectMachine(id))
        | Action::SlotEditor(SlotEditorAction::Open(id)) => {
            state.cursor = *id;
            state.focused_field = FormField::Grid;
        }
        _ => {}
    }
    state
}

/// Move the grid cursor, stopping at the edges
pub fn step_cursor(cursor: MachineId, step: GridStep) -> MachineId {
    let index = cursor.index();
    let target = match step {
        GridStep::Left => index.checked_sub(1),
        GridStep::Right => Some(index + 1),
        GridStep::Up => index.checked_sub(GRID_COLUMNS),
        GridStep::Down => Some(index + GRID_COLUMNS),
        GridStep::First => Some(0),
        GridStep::Last => Some(usize::from(MACHINE_COUNT) - 1),
    };
    target.and_then(MachineId::from_index).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u8) -> MachineId {
        MachineId::new(n).unwrap()
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(step_cursor(id(1), GridStep::Right), id(2));
        assert_eq!(step_cursor(id(1), GridStep::Down), id(9));
        assert_eq!(step_cursor(id(12), GridStep::Up), id(4));
        assert_eq!(step_cursor(id(9), GridStep::Left), id(8));
        assert_eq!(step_cursor(id(17), GridStep::Last), id(40));
        assert_eq!(step_cursor(id(17), GridStep::First), id(1));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(step_cursor(id(1), GridStep::Left), id(1));
        assert_eq!(step_cursor(id(3), GridStep::Up), id(3));
        assert_eq!(step_cursor(id(40), GridStep::Right), id(40));
        assert_eq!(step_cursor(id(36), GridStep::Down), id(36));
    }

    #[test]
    fn test_opening_a_machine_moves_focus_to_grid() {
        let state = MainViewState {
            focused_field: FormField::Conclusions,
            cursor: id(1),
        };
        let state = reduce(state, &Action::SlotEditor(SlotEditorAction::Open(id(22))));
        assert_eq!(state.cursor, id(22));
        assert_eq!(state.focused_field, FormField::Grid);
    }
}
