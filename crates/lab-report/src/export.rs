//! Snapshot of the report as a renderer-neutral document.

use crate::domain_models::{MachineId, Report};
use lab_report_document::{Block, Cell, Document, Field, Table};

/// Build the full-detail document: metadata, one row per machine, conclusions.
///
/// Machines without a committed slot are listed with the default status.
pub fn build_document(report: &Report, lab_name: &str) -> Document {
    let meta = report.meta();

    let mut table = Table::new(&[("PC", 1.0), ("Estado", 2.5), ("Tareas", 6.5)]);
    for id in MachineId::all() {
        let slot = report.slot(id);
        let tasks = if slot.tasks.is_empty() {
            Cell::text("-")
        } else {
            Cell::lines(slot.tasks)
        };
        table.push_row(vec![
            Cell::text(id.to_string()),
            Cell::text(slot.status.label()),
            tasks,
        ]);
    }

    Document::new(format!("Informe {} - Detalle Completo", lab_name))
        .with_block(Block::Fields(vec![
            Field::new("Auxiliar", &meta.technician),
            Field::new("Turno", meta.shift.label()),
            Field::new("Fecha", meta.date.format("%Y-%m-%d").to_string()),
        ]))
        .with_block(Block::Table(table))
        .with_block(Block::Section {
            heading: "Conclusiones".to_string(),
            body: meta.conclusions.clone(),
        })
}
