//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! Three layers:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Views with TEXT_INPUT receive printable characters, Backspace, Enter and
//! Tab as text input / navigation instead of key bindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the
//! action. This keeps report shortcuts from firing while a popup is open.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        // Esc: text views decide themselves (leave field, cancel editor)
        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            self.pending_key = None;

            if let Some(input) = text_input_for(&key) {
                log::debug!("Layer 2: TEXT_INPUT - routing {:?}", input);
                dispatcher.dispatch(Action::TextInput(input));
                return;
            }

            if capabilities.supports_item_navigation() {
                match key.code {
                    KeyCode::Down => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                        return;
                    }
                    KeyCode::Up => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                        return;
                    }
                    _ => {}
                }
            }

            // Tab moves on even while typing
            match key.code {
                KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    return;
                }
                KeyCode::Tab => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                    return;
                }
                KeyCode::BackTab => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    return;
                }
                _ => {}
            }

            // Ctrl combinations and arrows continue to the keymap
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        let (command_ids, clear_pending, new_pending) =
            state.keymap.match_key(&key, self.pending_key.as_ref());

        if clear_pending {
            self.pending_key = None;
        }
        if let Some(pending_char) = new_pending {
            self.pending_key = Some(PendingKey {
                key: pending_char,
                timestamp: Instant::now(),
            });
            log::debug!(
                "Layer 3: Waiting for second key in sequence (first: {})",
                pending_char
            );
            return;
        }

        for cmd_id in command_ids {
            let action = cmd_id.to_action();

            match view {
                Some(view) if view.accepts_action(&action, state) => {
                    log::debug!("Layer 3: Command {:?} accepted by view", cmd_id);
                    dispatcher.dispatch(action);
                    return;
                }
                Some(view) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                None => {
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Keys that edit text in a TEXT_INPUT view
fn text_input_for(key: &KeyEvent) -> Option<TextInputAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char(c) if !ctrl && !alt => Some(TextInputAction::Char(c)),
        // Ctrl+U - Unix line kill
        KeyCode::Char('u') if ctrl => Some(TextInputAction::ClearLine),
        // Cmd+Backspace on Mac
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Some(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Some(TextInputAction::Backspace),
        KeyCode::Enter => Some(TextInputAction::Confirm),
        _ => None,
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Raw keys never reach the reducer
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, ReportAction};
    use crate::state::FormField;
    use std::sync::mpsc;

    fn run(state: &AppState, keys: &[KeyEvent]) -> Vec<Action> {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        for key in keys {
            let consumed = !middleware.handle(
                &Action::Global(GlobalAction::KeyPressed(*key)),
                state,
                &dispatcher,
            );
            assert!(consumed);
        }
        rx.try_iter().collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_chars_are_typed_in_text_fields() {
        let mut state = AppState::default();
        state.main_view.focused_field = FormField::Technician;

        let actions = run(&state, &[key(KeyCode::Char('t')), key(KeyCode::Enter)]);
        assert!(matches!(
            actions.as_slice(),
            [
                Action::TextInput(TextInputAction::Char('t')),
                Action::TextInput(TextInputAction::Confirm)
            ]
        ));
    }

    #[test]
    fn test_chars_are_bindings_outside_text_fields() {
        let mut state = AppState::default();
        state.main_view.focused_field = FormField::Date;

        let actions = run(&state, &[key(KeyCode::Char('t')), key(KeyCode::Enter)]);
        assert!(matches!(
            actions.as_slice(),
            [
                Action::Report(ReportAction::DateToday),
                Action::ViewContext(ContextAction::Confirm)
            ]
        ));
    }

    #[test]
    fn test_gated_binding_is_dropped() {
        let mut state = AppState::default();
        state.main_view.focused_field = FormField::Grid;

        // 't' only applies to the date field, 'y' only to prompts
        let actions = run(&state, &[key(KeyCode::Char('t')), key(KeyCode::Char('y'))]);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_two_key_sequence() {
        let state = AppState::default();

        let actions = run(&state, &[key(KeyCode::Char('g')), key(KeyCode::Char('g'))]);
        assert!(matches!(
            actions.as_slice(),
            [Action::Navigate(NavigationAction::ToTop)]
        ));
    }

    #[test]
    fn test_esc_closes_when_not_typing() {
        let state = AppState::default();
        let actions = run(&state, &[key(KeyCode::Esc)]);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Close)]
        ));
    }
}
