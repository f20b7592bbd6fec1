//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub symbol: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05"), empty for the welcome line
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        match state.status_bar.latest() {
            Some(msg) => {
                let fg_color = match msg.kind {
                    StatusKind::Success => theme.status_success,
                    StatusKind::Info => theme.status_info,
                };
                Self {
                    symbol: msg.kind.symbol(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style: Style::default().fg(theme.text_muted),
                }
            }
            None => Self {
                symbol: "»",
                message: format!(
                    "Informe {}: selecciona una computadora para registrar sus tareas",
                    state.app_config.lab_name
                ),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;
    use lab_report_config::AppConfig;

    #[test]
    fn test_latest_message_is_shown() {
        let mut state = AppState::new(AppConfig::default());
        assert!(StatusBarViewModel::from_state(&state).timestamp.is_empty());

        state.status_bar.push(StatusMessage::new(
            StatusKind::Success,
            "PC 3 guardada: Actualizada",
            "editor",
        ));
        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "PC 3 guardada: Actualizada");
        assert_eq!(vm.symbol, "✔");
        assert_eq!(vm.source, "editor");
    }
}
