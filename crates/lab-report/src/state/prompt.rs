//! Blocking prompt state

/// What happens when a confirmation prompt is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptIntent {
    ResetAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Yes/no question; accepting runs the intent
    Confirm(PromptIntent),
    /// Message that only needs to be dismissed
    Acknowledge,
}

/// State of the prompt popup (present only when shown)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub kind: PromptKind,
    pub title: String,
    pub message: String,
}

impl PromptState {
    pub const RESET_MESSAGE: &'static str =
        "¿Estás seguro de que deseas restablecer todos los campos a sus valores originales?";

    pub fn confirm_reset() -> Self {
        Self {
            kind: PromptKind::Confirm(PromptIntent::ResetAll),
            title: "Restablecer formulario".to_string(),
            message: Self::RESET_MESSAGE.to_string(),
        }
    }

    pub fn acknowledge(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: PromptKind::Acknowledge,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self.kind, PromptKind::Confirm(_))
    }
}
