//! Prompt actions
//!
//! Blocking popups that swallow all other input until answered.

use crate::state::PromptState;

#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    /// Show a prompt on top of the current view
    Show(PromptState),
    /// User accepted - triggers the intent dispatch (handled by middleware)
    Confirm,
    /// Intent has been dispatched - close the prompt (handled by reducer)
    Confirmed,
    /// Declined or dismissed
    Cancel,
}
