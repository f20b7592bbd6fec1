//! Blocking prompt popup
//!
//! Used for the reset confirmation and the save summary. While it is on
//! top of the view stack every other command is dropped.

use crate::actions::{Action, ContextAction, PromptAction};
use crate::capabilities::PanelCapabilities;
use crate::layout::prompt_area;
use crate::state::AppState;
use crate::view_models::PromptViewModel;
use crate::views::{View, ViewId};
use lab_report_theme::Theme;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct PromptView;

impl PromptView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PromptView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PromptView {
    fn view_id(&self) -> ViewId {
        ViewId::Prompt
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        if let Some(prompt) = &state.prompt {
            let vm = PromptViewModel::from_state(prompt, &state.keymap);
            render_prompt(f, &vm, &state.theme, area);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Prompt(PromptAction::Confirm)),
        }
    }

    fn accepts_action(&self, action: &Action, _state: &AppState) -> bool {
        matches!(
            action,
            Action::Prompt(_) | Action::ViewContext(_) | Action::Global(_)
        )
    }
}

fn render_prompt(f: &mut Frame, vm: &PromptViewModel, theme: &Theme, area: Rect) {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let popup = prompt_area(area, &vm.lines);
    f.render_widget(Clear, popup);

    let mut hint_spans = vec![Span::raw(" ")];
    for hint in &vm.hints {
        hint_spans.push(Span::styled(hint.keys.as_str(), theme.key_hint()));
        hint_spans.push(Span::styled(
            format!(" {}  ", hint.description),
            theme.muted(),
        ));
    }

    let border_style = if vm.is_question {
        theme.warning()
    } else {
        theme.panel_border_focused()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(hint_spans))
        .border_style(border_style)
        .style(theme.panel_background());
    f.render_widget(block, popup);

    let lines: Vec<Line> = vm
        .lines
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let message = Paragraph::new(lines)
        .style(theme.text())
        .wrap(Wrap { trim: false });
    f.render_widget(
        message,
        popup.inner(Margin {
            horizontal: 2,
            vertical: 1,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ReportAction;
    use crate::state::PromptState;
    use lab_report_config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_only_prompt_commands_pass() {
        let view = PromptView::new();
        let state = AppState::new(AppConfig::default());
        assert!(view.accepts_action(&Action::Prompt(PromptAction::Cancel), &state));
        assert!(!view.accepts_action(&Action::Report(ReportAction::ExportPdf), &state));
        assert!(!view.capabilities(&state).accepts_text_input());
        assert_eq!(
            view.translate_context_action(ContextAction::Confirm, &state),
            Some(Action::Prompt(PromptAction::Confirm))
        );
    }

    #[test]
    fn test_render_shows_message() {
        let mut state = AppState::new(AppConfig::default());
        state.prompt = Some(PromptState::confirm_reset());

        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal
            .draw(|f| PromptView::new().render(&state, f.area(), f))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Restablecer formulario"));
        assert!(text.contains("restablecer todos los campos"));
    }
}
