//! Status Bar Reducer

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};

pub fn reduce(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push {
            kind,
            message,
            source,
        } => {
            state.push(StatusMessage::new(*kind, message.clone(), source.clone()));
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState {
            max_history: 2,
            ..StatusBarState::default()
        };
        for i in 0..5 {
            state = reduce(state, &StatusBarAction::info(format!("m{}", i), "test"));
        }
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.latest().map(|m| m.message.as_str()), Some("m4"));
    }
}
