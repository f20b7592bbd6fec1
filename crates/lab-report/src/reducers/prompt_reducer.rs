//! Prompt Reducer

use crate::actions::PromptAction;
use crate::state::PromptState;

pub fn reduce(prompt: Option<PromptState>, action: &PromptAction) -> Option<PromptState> {
    match action {
        PromptAction::Show(new_prompt) => Some(new_prompt.clone()),
        PromptAction::Confirmed | PromptAction::Cancel => None,
        // Confirm is handled by middleware
        PromptAction::Confirm => prompt,
    }
}
