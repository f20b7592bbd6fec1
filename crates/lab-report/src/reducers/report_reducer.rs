//! Report Reducer
//!
//! Applies form edits and slot commits to the report. Text and stepping
//! actions apply to the focused field only.

use crate::actions::ReportAction;
use crate::domain_models::{today, MetaUpdate, Report};
use crate::state::{FormField, MainViewState};
use chrono::{Days, Months, NaiveDate};

pub fn reduce(mut report: Report, view: &MainViewState, action: &ReportAction) -> Report {
    let meta = report.meta().clone();

    match action {
        ReportAction::Char(c) => {
            if let Some(mut text) = focused_text(&report, view.focused_field) {
                text.push(*c);
                set_text(&mut report, view.focused_field, text);
            }
        }
        ReportAction::Backspace => {
            if let Some(mut text) = focused_text(&report, view.focused_field) {
                text.pop();
                set_text(&mut report, view.focused_field, text);
            }
        }
        ReportAction::ClearField => {
            if view.focused_field.is_text() {
                set_text(&mut report, view.focused_field, String::new());
            }
        }
        ReportAction::Newline => {
            if view.focused_field == FormField::Conclusions {
                report.set_meta(MetaUpdate::Conclusions(format!("{}\n", meta.conclusions)));
            }
        }

        ReportAction::ShiftNext => report.set_meta(MetaUpdate::Shift(meta.shift.next())),
        ReportAction::ShiftPrevious => report.set_meta(MetaUpdate::Shift(meta.shift.previous())),

        ReportAction::DateStep { days } => {
            if let Some(date) = step_days(meta.date, *days) {
                report.set_meta(MetaUpdate::Date(date));
            }
        }
        ReportAction::DateMonthStep { months } => {
            if let Some(date) = step_months(meta.date, *months) {
                report.set_meta(MetaUpdate::Date(date));
            }
        }
        ReportAction::DateToday => report.set_meta(MetaUpdate::Date(today())),

        ReportAction::CommitSlot { machine, slot } => {
            report.commit_slot(*machine, slot.status, slot.tasks.clone());
            log::debug!("Committed PC {}, stats now {:?}", machine, report.stats());
        }
        ReportAction::ResetAll => {
            report.reset_all(today());
            log::info!("Report reset to defaults");
        }

        // Focus and cursor live in the main view state; requests are handled by middleware
        _ => {}
    }

    report
}

fn focused_text(report: &Report, field: FormField) -> Option<String> {
    match field {
        FormField::Technician => Some(report.meta().technician.clone()),
        FormField::Conclusions => Some(report.meta().conclusions.clone()),
        _ => None,
    }
}

fn set_text(report: &mut Report, field: FormField, text: String) {
    match field {
        FormField::Technician => report.set_meta(MetaUpdate::Technician(text)),
        FormField::Conclusions => report.set_meta(MetaUpdate::Conclusions(text)),
        _ => {}
    }
}

fn step_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    }
}

fn step_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let magnitude = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{MachineId, MachineSlot, Shift, Status};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn focused(field: FormField) -> MainViewState {
        MainViewState {
            focused_field: field,
            ..MainViewState::default()
        }
    }

    fn apply(report: Report, field: FormField, actions: &[ReportAction]) -> Report {
        let view = focused(field);
        actions
            .iter()
            .fold(report, |report, action| reduce(report, &view, action))
    }

    #[test]
    fn test_typing_edits_only_the_focused_field() {
        let report = Report::new(date(2025, 6, 24));
        let report = apply(
            report,
            FormField::Technician,
            &[
                ReportAction::ClearField,
                ReportAction::Char('L'),
                ReportAction::Char('u'),
                ReportAction::Char('z'),
                ReportAction::Char('x'),
                ReportAction::Backspace,
                ReportAction::Newline,
            ],
        );
        assert_eq!(report.meta().technician, "Luz");

        // Typing on the grid changes nothing
        let before = report.clone();
        let report = apply(report, FormField::Grid, &[ReportAction::Char('q')]);
        assert_eq!(report, before);
    }

    #[test]
    fn test_conclusions_accept_newlines() {
        let report = apply(
            Report::new(date(2025, 6, 24)),
            FormField::Conclusions,
            &[
                ReportAction::ClearField,
                ReportAction::Char('a'),
                ReportAction::Newline,
                ReportAction::Char('b'),
            ],
        );
        assert_eq!(report.meta().conclusions, "a\nb");
    }

    #[test]
    fn test_empty_technician_is_allowed() {
        let report = apply(
            Report::new(date(2025, 6, 24)),
            FormField::Technician,
            &[ReportAction::ClearField],
        );
        assert_eq!(report.meta().technician, "");
    }

    #[test]
    fn test_shift_cycles() {
        let report = apply(
            Report::new(date(2025, 6, 24)),
            FormField::Shift,
            &[ReportAction::ShiftPrevious],
        );
        assert_eq!(report.meta().shift, Shift::Night);

        let report = apply(report, FormField::Shift, &[ReportAction::ShiftNext]);
        assert_eq!(report.meta().shift, Shift::Morning);
    }

    #[test]
    fn test_date_stepping() {
        let report = apply(
            Report::new(date(2025, 1, 31)),
            FormField::Date,
            &[
                ReportAction::DateStep { days: 1 },
                ReportAction::DateMonthStep { months: 1 },
                ReportAction::DateStep { days: -2 },
            ],
        );
        assert_eq!(report.meta().date, date(2025, 2, 27));

        let report = apply(
            Report::new(date(2024, 3, 31)),
            FormField::Date,
            &[ReportAction::DateMonthStep { months: -1 }],
        );
        assert_eq!(report.meta().date, date(2024, 2, 29));
    }

    #[test]
    fn test_commit_slot_updates_stats() {
        let report = apply(
            Report::new(date(2025, 6, 24)),
            FormField::Grid,
            &[ReportAction::CommitSlot {
                machine: MachineId::new(40).unwrap(),
                slot: MachineSlot::new(Status::Problem, vec!["x".into()]),
            }],
        );
        assert_eq!(report.stats().problem, 1);
        assert_eq!(report.stats().pending, 39);
    }
}
