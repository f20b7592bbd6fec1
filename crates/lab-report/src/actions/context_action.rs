//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter) means:
//! - Report grid: open the machine editor for the highlighted machine
//! - Report buttons: save, reset or export
//! - Prompt: accept

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on the focused element (Enter key)
    Confirm,
}
