//! Domain models
//!
//! The report itself, independent of how it is shown: machine slots and their
//! status, report metadata, derived statistics and the editing draft.

mod machine;
mod report;
mod slot_draft;
mod stats;
mod status;
mod summary;

pub use machine::{MachineId, MachineSlot, MACHINE_COUNT};
pub use report::{today, MetaUpdate, Report};
pub use slot_draft::SlotDraft;
pub use status::Status;
pub use summary::{format_date, save_summary};

#[cfg(test)]
pub use report::{Shift, DEFAULT_TECHNICIAN};
#[cfg(test)]
pub use stats::Stats;
