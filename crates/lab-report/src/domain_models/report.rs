//! The report: metadata plus the per-machine slot map.

use super::stats::{aggregate, Stats};
use super::{MachineId, MachineSlot, Status};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use strum::{EnumIter, IntoEnumIterator};

pub const DEFAULT_TECHNICIAN: &str = "Nombre del Auxiliar";
pub const DEFAULT_CONCLUSIONS: &str = "Durante la fecha del día 24/06/2025 se hizo las colocaciones del dominio con los auxiliares del laboratorio 46 dando como resultados 38 máquinas en total con dominio en uso";

/// Today's local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Work shift of the technician
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum Shift {
    #[default]
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Mañana",
            Self::Afternoon => "Tarde",
            Self::Night => "Noche",
        }
    }

    pub fn next(self) -> Self {
        Self::iter().cycle().skip_while(|s| *s != self).nth(1).unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        Self::iter().rev().cycle().skip_while(|s| *s != self).nth(1).unwrap_or(self)
    }
}

/// A new value for one metadata field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaUpdate {
    Technician(String),
    Shift(Shift),
    Date(NaiveDate),
    Conclusions(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMeta {
    pub technician: String,
    pub shift: Shift,
    pub date: NaiveDate,
    pub conclusions: String,
}

impl ReportMeta {
    pub fn defaults(date: NaiveDate) -> Self {
        Self {
            technician: DEFAULT_TECHNICIAN.to_string(),
            shift: Shift::default(),
            date,
            conclusions: DEFAULT_CONCLUSIONS.to_string(),
        }
    }
}

/// The report store
///
/// Stats are recomputed on every slot-map mutation, so readers never see
/// counts that disagree with the slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    meta: ReportMeta,
    slots: BTreeMap<MachineId, MachineSlot>,
    stats: Stats,
}

impl Default for Report {
    fn default() -> Self {
        Self::new(today())
    }
}

impl Report {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            meta: ReportMeta::defaults(date),
            slots: BTreeMap::new(),
            stats: Stats::default(),
        }
    }

    pub fn meta(&self) -> &ReportMeta {
        &self.meta
    }

    pub fn set_meta(&mut self, update: MetaUpdate) {
        match update {
            MetaUpdate::Technician(value) => self.meta.technician = value,
            MetaUpdate::Shift(value) => self.meta.shift = value,
            MetaUpdate::Date(value) => self.meta.date = value,
            MetaUpdate::Conclusions(value) => self.meta.conclusions = value,
        }
    }

    /// Recorded slot, if the machine was ever committed
    pub fn get(&self, id: MachineId) -> Option<&MachineSlot> {
        self.slots.get(&id)
    }

    /// Slot for a machine, defaulting to an empty one
    pub fn slot(&self, id: MachineId) -> MachineSlot {
        self.slots.get(&id).cloned().unwrap_or_default()
    }

    pub fn slots(&self) -> &BTreeMap<MachineId, MachineSlot> {
        &self.slots
    }

    /// Replace a machine's status and tasks in one step
    pub fn commit_slot(&mut self, id: MachineId, status: Status, tasks: Vec<String>) {
        self.slots.insert(id, MachineSlot::new(status, tasks));
        self.stats = aggregate(&self.slots);
    }

    /// Restore every field to its default and drop all slots
    pub fn reset_all(&mut self, date: NaiveDate) {
        self.meta = ReportMeta::defaults(date);
        self.slots.clear();
        self.stats = aggregate(&self.slots);
    }

    /// Number of machines with anything committed, whatever the status
    pub fn recorded_slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn id(n: u8) -> MachineId {
        MachineId::new(n).unwrap()
    }

    #[test]
    fn test_defaults() {
        let report = Report::new(date(2025, 6, 24));
        assert_eq!(report.meta().technician, "Nombre del Auxiliar");
        assert_eq!(report.meta().shift.label(), "Mañana");
        assert_eq!(report.meta().date, date(2025, 6, 24));
        assert_eq!(report.meta().conclusions, DEFAULT_CONCLUSIONS);
        assert_eq!(report.recorded_slot_count(), 0);
        assert_eq!(report.stats(), Stats::default());
    }

    #[test]
    fn test_set_meta_accepts_anything() {
        let mut report = Report::new(date(2025, 6, 24));
        report.set_meta(MetaUpdate::Technician(String::new()));
        report.set_meta(MetaUpdate::Shift(Shift::Night));
        report.set_meta(MetaUpdate::Conclusions("  ".into()));

        assert_eq!(report.meta().technician, "");
        assert_eq!(report.meta().shift, Shift::Night);
        assert_eq!(report.meta().conclusions, "  ");
    }

    #[test]
    fn test_absent_slot_defaults() {
        let report = Report::new(date(2025, 6, 24));
        assert_eq!(report.slot(id(7)), MachineSlot::default());
        assert!(report.get(id(7)).is_none());
    }

    #[test]
    fn test_commit_sequence_updates_stats() {
        let mut report = Report::new(date(2025, 6, 24));
        report.commit_slot(id(5), Status::Problem, vec!["fan noise".into()]);
        report.commit_slot(id(12), Status::Updated, vec![]);
        report.commit_slot(
            id(5),
            Status::Maintenance,
            vec!["fan noise".into(), "reseated RAM".into()],
        );

        assert_eq!(
            report.stats(),
            Stats {
                completed: 1,
                maintenance: 1,
                problem: 0,
                pending: 38,
            }
        );
        assert_eq!(report.recorded_slot_count(), 2);
        assert_eq!(report.slot(id(5)).tasks, vec!["fan noise", "reseated RAM"]);
    }

    #[test]
    fn test_reset_all_restores_defaults() {
        let mut report = Report::new(date(2025, 6, 24));
        report.set_meta(MetaUpdate::Technician("Ana".into()));
        report.set_meta(MetaUpdate::Shift(Shift::Afternoon));
        report.commit_slot(id(1), Status::Updated, vec!["x".into()]);

        report.reset_all(date(2025, 7, 1));

        assert_eq!(report, Report::new(date(2025, 7, 1)));
    }

    #[test]
    fn test_shift_labels_and_cycle() {
        assert_eq!(Shift::Afternoon.label(), "Tarde");
        assert_eq!(Shift::Night.next(), Shift::Morning);
        assert_eq!(Shift::Morning.previous(), Shift::Night);
    }
}
