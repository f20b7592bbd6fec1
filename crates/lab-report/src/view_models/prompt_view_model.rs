//! View model for the blocking prompt popup

use super::KeyHint;
use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::PromptState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptViewModel {
    pub title: String,
    /// Message split into display lines
    pub lines: Vec<String>,
    pub is_question: bool,
    pub hints: Vec<KeyHint>,
}

impl PromptViewModel {
    pub fn from_state(prompt: &PromptState, keymap: &Keymap) -> Self {
        let is_question = prompt.is_question();
        let hints = if is_question {
            [
                KeyHint::for_command(keymap, CommandId::PromptConfirm, "sí"),
                KeyHint::for_command(keymap, CommandId::PromptCancel, "no"),
            ]
            .into_iter()
            .flatten()
            .collect()
        } else {
            KeyHint::for_command(keymap, CommandId::Confirm, "aceptar")
                .into_iter()
                .collect()
        };

        Self {
            title: prompt.title.clone(),
            lines: prompt.message.lines().map(str::to_string).collect(),
            is_question,
            hints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keymap;

    #[test]
    fn test_question_offers_yes_and_no() {
        let vm = PromptViewModel::from_state(&PromptState::confirm_reset(), &default_keymap());
        assert!(vm.is_question);
        assert_eq!(vm.hints[0].keys, "y");
        assert_eq!(vm.hints[1].keys, "n");
        assert_eq!(vm.lines, vec![PromptState::RESET_MESSAGE.to_string()]);
    }

    #[test]
    fn test_acknowledge_keeps_blank_lines() {
        let prompt = PromptState::acknowledge("Guardar informe", "uno\n\ndos");
        let vm = PromptViewModel::from_state(&prompt, &default_keymap());
        assert!(!vm.is_question);
        assert_eq!(vm.lines, vec!["uno", "", "dos"]);
        assert_eq!(vm.hints[0].keys, "Enter");
    }
}
