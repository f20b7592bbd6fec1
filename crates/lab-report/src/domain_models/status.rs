//! Machine status with its display metadata.

use strum::{EnumIter, IntoEnumIterator};

/// State of a single machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum Status {
    /// Nothing recorded yet
    #[default]
    None,
    /// Under maintenance
    Maintenance,
    /// Updated / task completed
    Updated,
    /// Has a problem
    Problem,
}

/// Display metadata attached to a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    /// Human readable label shown in the grid and the export
    pub label: &'static str,
    /// Icon identifier, resolved to a glyph by [`crate::icons`]
    pub icon: &'static str,
    /// Style class, mapped to a theme color by the views
    pub class: &'static str,
}

const STATUS_INFO: [StatusInfo; 4] = [
    StatusInfo {
        label: "Sin tarea",
        icon: "fa-question-circle",
        class: "status-none",
    },
    StatusInfo {
        label: "Mantenimiento",
        icon: "fa-tools",
        class: "status-maintenance",
    },
    StatusInfo {
        label: "Actualizada",
        icon: "fa-check-circle",
        class: "status-updated",
    },
    StatusInfo {
        label: "Problema",
        icon: "fa-exclamation-triangle",
        class: "status-problem",
    },
];

impl Status {
    pub fn info(self) -> &'static StatusInfo {
        &STATUS_INFO[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Next status in selector order, wrapping around
    pub fn next(self) -> Self {
        Self::iter().cycle().skip_while(|s| *s != self).nth(1).unwrap_or(self)
    }

    /// Previous status in selector order, wrapping around
    pub fn previous(self) -> Self {
        Self::iter().rev().cycle().skip_while(|s| *s != self).nth(1).unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Status::None.label(), "Sin tarea");
        assert_eq!(Status::Maintenance.label(), "Mantenimiento");
        assert_eq!(Status::Updated.label(), "Actualizada");
        assert_eq!(Status::Problem.label(), "Problema");
        assert_eq!(Status::default(), Status::None);
    }

    #[test]
    fn test_every_status_has_distinct_metadata() {
        let infos: Vec<_> = Status::iter().map(Status::info).collect();
        assert_eq!(infos.len(), 4);
        for (i, a) in infos.iter().enumerate() {
            for b in &infos[i + 1..] {
                assert_ne!(a.label, b.label);
                assert_ne!(a.icon, b.icon);
                assert_ne!(a.class, b.class);
            }
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Status::None.next(), Status::Maintenance);
        assert_eq!(Status::Problem.next(), Status::None);
        assert_eq!(Status::None.previous(), Status::Problem);
        assert_eq!(Status::Updated.previous(), Status::Maintenance);
    }
}
