//! View model for the report form
//!
//! Pre-computes every string and color the main view draws, so rendering
//! only has to place them.

use super::{status_color, KeyHint};
use crate::command_id::CommandId;
use crate::domain_models::{format_date, today, MachineId};
use crate::icons;
use crate::state::{AppState, FormField};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct ReportViewModel {
    /// Header line, e.g. "Informe LAB46"
    pub title: String,
    pub technician: String,
    pub shift: &'static str,
    /// Report date as dd/mm/yyyy
    pub date: String,
    pub focused: FormField,
    /// One entry per machine, in id order
    pub cells: Vec<MachineCellViewModel>,
    pub stats: [StatBoxViewModel; 4],
    pub conclusions: String,
    pub footer: String,
    /// Hints for the focused element, followed by the global ones
    pub hints: Vec<KeyHint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineCellViewModel {
    /// "PC 7"
    pub title: String,
    pub icon: &'static str,
    pub label: &'static str,
    pub preview: String,
    pub color: Color,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBoxViewModel {
    pub label: &'static str,
    pub value: usize,
    pub color: Color,
}

impl ReportViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let report = &state.report;
        let meta = report.meta();
        let cursor = state.main_view.cursor;
        let grid_focused = state.main_view.focused_field == FormField::Grid;

        let cells = MachineId::all()
            .map(|id| {
                let slot = report.slot(id);
                MachineCellViewModel {
                    title: format!("PC {}", id),
                    icon: icons::icon_for(slot.status),
                    label: slot.status.label(),
                    preview: slot.preview(),
                    color: status_color(theme, slot.status),
                    selected: grid_focused && id == cursor,
                }
            })
            .collect();

        let stats = report.stats();
        let stats = [
            StatBoxViewModel {
                label: "Completadas",
                value: stats.completed,
                color: theme.machine_updated,
            },
            StatBoxViewModel {
                label: "En Mantenimiento",
                value: stats.maintenance,
                color: theme.machine_maintenance,
            },
            StatBoxViewModel {
                label: "Con Problemas",
                value: stats.problem,
                color: theme.machine_problem,
            },
            StatBoxViewModel {
                label: "Pendientes",
                value: stats.pending,
                color: theme.machine_none,
            },
        ];

        let lab_name = &state.app_config.lab_name;
        Self {
            title: format!("Informe {}", lab_name),
            technician: meta.technician.clone(),
            shift: meta.shift.label(),
            date: format_date(meta.date),
            focused: state.main_view.focused_field,
            cells,
            stats,
            conclusions: meta.conclusions.clone(),
            footer: format!(
                "Sistema de Informes {} © 2025 | Todos los derechos reservados | {}",
                lab_name,
                format_date(today())
            ),
            hints: hints_for(state),
        }
    }
}

fn hints_for(state: &AppState) -> Vec<KeyHint> {
    let keymap = &state.keymap;
    let focus = state.main_view.focused_field;

    let mut hints = match focus {
        FormField::Grid => vec![
            Some(KeyHint::fixed("←↑↓→", "mover")),
            KeyHint::for_command(keymap, CommandId::Confirm, "abrir"),
        ],
        FormField::Shift => vec![Some(KeyHint::fixed("←/→", "turno"))],
        FormField::Date => vec![
            Some(KeyHint::fixed("←/→", "día")),
            KeyHint::for_command(keymap, CommandId::DatePreviousMonth, "mes -"),
            KeyHint::for_command(keymap, CommandId::DateNextMonth, "mes +"),
            KeyHint::for_command(keymap, CommandId::DateToday, "hoy"),
        ],
        FormField::Technician | FormField::Conclusions => {
            vec![Some(KeyHint::fixed("Esc", "salir del campo"))]
        }
        FormField::SaveButton | FormField::ResetButton | FormField::ExportButton => {
            vec![KeyHint::for_command(keymap, CommandId::Confirm, "activar")]
        }
    };

    hints.extend([
        KeyHint::for_command(keymap, CommandId::FocusNext, "campo"),
        KeyHint::for_command(keymap, CommandId::ReportSave, "guardar"),
        KeyHint::for_command(keymap, CommandId::ReportReset, "restablecer"),
        KeyHint::for_command(keymap, CommandId::ReportExportPdf, "PDF"),
        KeyHint::for_command(keymap, CommandId::GlobalQuit, "salir"),
    ]);
    hints.into_iter().flatten().collect()
}
