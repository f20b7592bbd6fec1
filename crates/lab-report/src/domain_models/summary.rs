//! Text for the "save report" acknowledgement.

use super::{Report, MACHINE_COUNT};
use chrono::NaiveDate;

const CONCLUSIONS_PREVIEW_CHARS: usize = 50;

/// `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Summary shown when the user saves the report.
///
/// Nothing is persisted; this only describes what is in memory.
pub fn save_summary(report: &Report) -> String {
    let meta = report.meta();
    let conclusions: String = meta
        .conclusions
        .chars()
        .take(CONCLUSIONS_PREVIEW_CHARS)
        .collect();

    format!(
        "Informe guardado correctamente!\n\n\
         Guardado exitosamente:\n\
         - Auxiliar: {}\n\
         - Turno: {}\n\
         - Fecha: {}\n\
         - Computadoras con tareas: {}/{}\n\
         - Conclusiones: {}...",
        meta.technician,
        meta.shift.label(),
        format_date(meta.date),
        report.recorded_slot_count(),
        MACHINE_COUNT,
        conclusions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{MachineId, MetaUpdate, Status};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_date_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2025");
    }

    #[test]
    fn test_save_summary() {
        let mut report = Report::new(NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        report.set_meta(MetaUpdate::Technician("Ana".into()));
        report.set_meta(MetaUpdate::Conclusions("Todo en orden".into()));
        report.commit_slot(MachineId::new(2).unwrap(), Status::None, vec![]);
        report.commit_slot(MachineId::new(3).unwrap(), Status::Updated, vec![]);

        assert_eq!(
            save_summary(&report),
            "Informe guardado correctamente!\n\n\
             Guardado exitosamente:\n\
             - Auxiliar: Ana\n\
             - Turno: Mañana\n\
             - Fecha: 24/06/2025\n\
             - Computadoras con tareas: 2/40\n\
             - Conclusiones: Todo en orden..."
        );
    }

    #[test]
    fn test_save_summary_truncates_conclusions() {
        let report = Report::new(NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        let summary = save_summary(&report);
        assert!(summary.ends_with(
            "- Conclusiones: Durante la fecha del día 24/06/2025 se hizo las co..."
        ));
    }
}
