use super::Status;
use std::fmt;

/// Number of machines in the lab
pub const MACHINE_COUNT: u8 = 40;

/// Machine number, always within `1..=MACHINE_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MachineId(u8);

impl MachineId {
    /// Returns None outside `1..=MACHINE_COUNT`
    pub fn new(id: u8) -> Option<Self> {
        (1..=MACHINE_COUNT).contains(&id).then_some(Self(id))
    }

    /// Machine at a zero-based grid position
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index + 1).ok().and_then(Self::new)
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn last() -> Self {
        Self(MACHINE_COUNT)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based grid position
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// All machines in ascending order
    pub fn all() -> impl DoubleEndedIterator<Item = MachineId> {
        (1..=MACHINE_COUNT).map(MachineId)
    }
}

impl fmt::Display for MachineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What has been recorded for one machine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MachineSlot {
    pub status: Status,
    /// Tasks in insertion order; duplicates are allowed
    pub tasks: Vec<String>,
}

impl MachineSlot {
    const PREVIEW_CHARS: usize = 20;

    pub fn new(status: Status, tasks: Vec<String>) -> Self {
        Self { status, tasks }
    }

    /// Short preview of the first task for grid cells
    pub fn preview(&self) -> String {
        let Some(first) = self.tasks.first() else {
            return String::new();
        };
        if first.chars().count() > Self::PREVIEW_CHARS {
            let head: String = first.chars().take(Self::PREVIEW_CHARS).collect();
            format!("{}...", head)
        } else {
            first.clone()
        }
    }
}
