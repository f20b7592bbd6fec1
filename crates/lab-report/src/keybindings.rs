//! Keybinding system
//!
//! Maps keyboard input to commands. Supports single keys, modifier
//! combinations, and two-key sequences.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `ParsedKeyPattern`: Matchable form of a textual pattern (e.g., "ctrl+s", "g g")
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone)]
pub struct KeyBinding {
    /// Textual representation of the key(s) - e.g., "ctrl+s", "g g", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+S", "gg"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone)]
pub enum ParsedKeyPattern {
    /// Single key with optional modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g., "g g" -> press 'g', then 'g')
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "y", "[", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+s", "shift+tab"
/// - Special keys: "tab", "enter", "esc", "delete", "up", "home", ...
/// - Two-key sequence: "g g" (space-separated)
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let parts: Vec<&str> = pattern.split_whitespace().collect();
        if parts.len() == 2 && parts[0].chars().count() == 1 && parts[1].chars().count() == 1 {
            let first = parts[0].chars().next()?;
            let second = parts[1].chars().next()?;
            return Some(ParsedKeyPattern::Sequence { first, second });
        }
        return None;
    }

    // Single characters keep their case ("G" vs "g")
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        // Uppercase letters come with SHIFT modifier from terminal
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;

    Some(ParsedKeyPattern::Single { code, modifiers })
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// State for tracking pending keys in two-key sequences
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparsable key binding '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Try to match a key event against the keymap
    ///
    /// Returns (matched_commands, should_clear_pending, new_pending_key).
    /// Several commands may share a key (Ctrl+S saves the report or the
    /// editor draft); the caller picks the one the active view accepts.
    pub fn match_key(
        &self,
        key: &KeyEvent,
        pending: Option<&PendingKey>,
    ) -> (Vec<CommandId>, bool, Option<char>) {
        const SEQUENCE_TIMEOUT_SECS: u64 = 2;

        // Plain character press (no ctrl/alt)
        let current_char = match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        let valid_pending =
            pending.filter(|p| p.timestamp.elapsed().as_secs() < SEQUENCE_TIMEOUT_SECS);

        if let (Some(pending), Some(current)) = (valid_pending, current_char) {
            for (binding, pattern) in &self.bindings {
                if let ParsedKeyPattern::Sequence { first, second } = pattern {
                    if *first == pending.key && *second == current {
                        return (vec![binding.command], true, None);
                    }
                }
            }
        }

        let mut matches = Vec::new();
        let mut new_pending = None;

        for (binding, pattern) in &self.bindings {
            match pattern {
                ParsedKeyPattern::Single { code, modifiers } => {
                    // BackTab arrives with or without SHIFT depending on the terminal
                    let key_matches = if *code == KeyCode::BackTab {
                        key.code == KeyCode::BackTab
                    } else {
                        key.code == *code && key.modifiers == *modifiers
                    };
                    if key_matches {
                        matches.push(binding.command);
                    }
                }
                ParsedKeyPattern::Sequence { first, .. } => {
                    if new_pending.is_none() && current_char == Some(*first) {
                        new_pending = current_char;
                    }
                }
            }
        }

        if !matches.is_empty() {
            return (matches, true, None);
        }

        if let Some(pending) = new_pending {
            return (vec![], false, Some(pending));
        }

        (vec![], true, None)
    }

    /// First hint for a command
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
    }

    /// All hints for a command, deduplicated and joined with "/" (e.g. "Del/Ctrl+D")
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in self.bindings.iter().filter(|(b, _)| b.command == command) {
            if !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}
