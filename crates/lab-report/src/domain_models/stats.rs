//! Aggregate counts over the slot map.

use super::{MachineId, MachineSlot, Status, MACHINE_COUNT};
use std::collections::BTreeMap;

/// Counts of machines per status bucket
///
/// Always derived from the slot map, never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub completed: usize,
    pub maintenance: usize,
    pub problem: usize,
    /// Machines with no status: `MACHINE_COUNT - (completed + maintenance + problem)`
    pub pending: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            completed: 0,
            maintenance: 0,
            problem: 0,
            pending: usize::from(MACHINE_COUNT),
        }
    }
}

/// Compute the stats for a slot map
pub fn aggregate(slots: &BTreeMap<MachineId, MachineSlot>) -> Stats {
    let mut stats = Stats {
        pending: 0,
        ..Stats::default()
    };

    for id in MachineId::all() {
        match slots.get(&id).map(|slot| slot.status) {
            Some(Status::Updated) => stats.completed += 1,
            Some(Status::Maintenance) => stats.maintenance += 1,
            Some(Status::Problem) => stats.problem += 1,
            Some(Status::None) | None => {}
        }
    }

    stats.pending = usize::from(MACHINE_COUNT) - (stats.completed + stats.maintenance + stats.problem);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn slot(status: Status) -> MachineSlot {
        MachineSlot::new(status, Vec::new())
    }

    #[test]
    fn test_empty_map_is_all_pending() {
        assert_eq!(aggregate(&BTreeMap::new()), Stats::default());
    }

    #[test]
    fn test_buckets_always_sum_to_machine_count() {
        let statuses: Vec<Status> = Status::iter().collect();

        // Walk a spread of maps: every machine gets a status derived from a seed
        for seed in 0..64usize {
            let mut slots = BTreeMap::new();
            for id in MachineId::all() {
                let pick = (id.index() * 7 + seed * 13) % (statuses.len() + 1);
                if let Some(status) = statuses.get(pick) {
                    slots.insert(id, slot(*status));
                }
            }
            let stats = aggregate(&slots);
            let total = stats.completed + stats.maintenance + stats.problem + stats.pending;
            assert_eq!(total, 40, "seed {}", seed);
        }
    }

    #[test]
    fn test_none_status_counts_as_pending() {
        let mut slots = BTreeMap::new();
        slots.insert(MachineId::first(), slot(Status::None));
        slots.insert(MachineId::last(), slot(Status::Problem));

        let stats = aggregate(&slots);
        assert_eq!(stats.problem, 1);
        assert_eq!(stats.pending, 39);
    }
}
