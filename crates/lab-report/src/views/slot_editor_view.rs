//! Machine editor popup
//!
//! Floating editor for one machine's status and task list. Changes live in
//! the draft until saved; Esc or a click outside the popup discards them.

use crate::actions::{Action, ContextAction, NavigationAction, SlotEditorAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::layout::EditorLayout;
use crate::state::AppState;
use crate::view_models::SlotEditorViewModel;
use crate::views::{View, ViewId};
use lab_report_theme::Theme;
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SlotEditorView;

impl SlotEditorView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SlotEditorView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SlotEditorView {
    fn view_id(&self) -> ViewId {
        ViewId::SlotEditor
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        if let Some(draft) = &state.slot_editor {
            let vm = SlotEditorViewModel::from_draft(draft, &state.theme, &state.keymap);
            render_editor(f, &vm, &state.theme, area);
        }
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, _state: &AppState) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => SlotEditorAction::SelectNextTask,
            NavigationAction::Previous => SlotEditorAction::SelectPreviousTask,
            NavigationAction::Left => SlotEditorAction::PreviousStatus,
            NavigationAction::Right => SlotEditorAction::NextStatus,
            NavigationAction::ToTop | NavigationAction::ToBottom => return None,
        };
        Some(Action::SlotEditor(action))
    }

    fn translate_text_input(&self, input: TextInputAction, _state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SlotEditorAction::Char(c),
            TextInputAction::Backspace => SlotEditorAction::Backspace,
            TextInputAction::ClearLine => SlotEditorAction::ClearInput,
            TextInputAction::Escape => SlotEditorAction::Cancel,
            TextInputAction::Confirm => SlotEditorAction::AddTask,
        };
        Some(Action::SlotEditor(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::SlotEditor(SlotEditorAction::AddTask)),
        }
    }

    fn translate_click(
        &self,
        column: u16,
        row: u16,
        screen: Rect,
        state: &AppState,
    ) -> Option<Action> {
        let layout = EditorLayout::new(screen);
        let position = Position::new(column, row);
        if !layout.contains(column, row) || layout.close_button.contains(position) {
            return Some(Action::SlotEditor(SlotEditorAction::Cancel));
        }
        if layout.add_button.contains(position) {
            return Some(Action::SlotEditor(SlotEditorAction::AddTask));
        }
        if layout.save_button.contains(position) {
            return Some(Action::SlotEditor(SlotEditorAction::Save));
        }
        if let Some(draft) = &state.slot_editor {
            let selected = (!draft.tasks.is_empty()).then_some(draft.selected_task);
            if let Some(index) = layout.remove_button_at(column, row, selected, draft.tasks.len()) {
                return Some(Action::SlotEditor(SlotEditorAction::RemoveTask(index)));
            }
        }
        layout
            .status_at(column, row)
            .map(|status| Action::SlotEditor(SlotEditorAction::SetStatus(status)))
    }

    fn accepts_action(&self, action: &Action, _state: &AppState) -> bool {
        matches!(
            action,
            Action::SlotEditor(_)
                | Action::ViewContext(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

fn render_editor(f: &mut Frame, vm: &SlotEditorViewModel, theme: &Theme, area: Rect) {
    let overlay = Block::default().style(
        Style::default()
            .bg(Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let layout = EditorLayout::new(area);
    f.render_widget(Clear, layout.popup);

    let mut hint_spans = vec![Span::raw(" ")];
    for hint in &vm.hints {
        hint_spans.push(Span::styled(hint.keys.as_str(), theme.key_hint()));
        hint_spans.push(Span::styled(
            format!(" {}  ", hint.description),
            theme.muted(),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", vm.title))
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(Line::from(hint_spans))
        .border_style(theme.panel_border_focused())
        .style(theme.panel_background());
    f.render_widget(block, layout.popup);

    f.render_widget(
        Paragraph::new(Span::styled("Estado:", theme.section_header())),
        layout.status_label,
    );

    for (option, (_, rect)) in vm.statuses.iter().zip(&layout.status_options) {
        let label = format!(" {} {} ", option.icon, option.label);
        let style = if option.selected {
            Style::default()
                .fg(theme.bg_primary)
                .bg(option.color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(option.color)
        };
        f.render_widget(Paragraph::new(Span::styled(label, style)), *rect);
    }

    f.render_widget(
        Paragraph::new(Span::styled("Tareas realizadas:", theme.section_header())),
        layout.tasks_label,
    );

    if vm.tasks.is_empty() {
        f.render_widget(
            Paragraph::new(Span::styled("Sin tareas registradas", theme.muted().italic())),
            layout.tasks,
        );
    } else {
        let items: Vec<ListItem> = vm
            .tasks
            .iter()
            .map(|task| ListItem::new(format!("• {}", task)))
            .collect();
        let list = List::new(items)
            .style(theme.text())
            .highlight_style(theme.selected())
            .highlight_symbol("> ");
        let offset = layout.task_offset(vm.selected_task);
        let mut list_state = ListState::default()
            .with_offset(offset)
            .with_selected(vm.selected_task);
        f.render_stateful_widget(list, layout.tasks, &mut list_state);

        for (_, rect) in layout.remove_buttons(offset, vm.tasks.len()) {
            f.render_widget(
                Paragraph::new(Span::styled(" × ", theme.error())),
                rect,
            );
        }
    }

    let input = Paragraph::new(Line::from(vec![
        Span::styled(vm.input.as_str(), theme.input_active()),
        Span::styled("▏", theme.accent()),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" Nueva tarea ")
            .title_style(theme.panel_title())
            .border_style(theme.panel_border()),
    );
    f.render_widget(input, layout.input);

    f.render_widget(
        Paragraph::new("+")
            .alignment(Alignment::Center)
            .style(theme.success())
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(theme.panel_border()),
            ),
        layout.add_button,
    );
    f.render_widget(
        Paragraph::new(Span::styled("[ Guardar Tareas ]", theme.accent().bold()))
            .alignment(Alignment::Center),
        layout.save_button,
    );
    f.render_widget(
        Paragraph::new(Span::styled(" × ", theme.muted())),
        layout.close_button,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{MachineId, MachineSlot, SlotDraft, Status};
    use lab_report_config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn editing_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        let slot = MachineSlot::new(Status::Updated, vec!["formateo".into()]);
        state.slot_editor = Some(SlotDraft::open(MachineId::new(9).unwrap(), &slot));
        state
    }

    #[test]
    fn test_keys_edit_the_draft() {
        let view = SlotEditorView::new();
        let state = editing_state();
        assert_eq!(
            view.translate_text_input(TextInputAction::Confirm, &state),
            Some(Action::SlotEditor(SlotEditorAction::AddTask))
        );
        assert_eq!(
            view.translate_text_input(TextInputAction::Escape, &state),
            Some(Action::SlotEditor(SlotEditorAction::Cancel))
        );
        assert_eq!(
            view.translate_navigation(NavigationAction::Right, &state),
            Some(Action::SlotEditor(SlotEditorAction::NextStatus))
        );
        assert_eq!(
            view.translate_navigation(NavigationAction::Previous, &state),
            Some(Action::SlotEditor(SlotEditorAction::SelectPreviousTask))
        );
    }

    #[test]
    fn test_report_commands_are_rejected() {
        let view = SlotEditorView::new();
        let state = editing_state();
        assert!(!view.accepts_action(
            &Action::Report(crate::actions::ReportAction::RequestReset),
            &state
        ));
        assert!(view.accepts_action(&Action::SlotEditor(SlotEditorAction::Save), &state));
    }

    #[test]
    fn test_clicks() {
        let view = SlotEditorView::new();
        let state = editing_state();
        let screen = Rect::new(0, 0, 120, 48);

        assert_eq!(
            view.translate_click(0, 0, screen, &state),
            Some(Action::SlotEditor(SlotEditorAction::Cancel))
        );

        let layout = EditorLayout::new(screen);
        let (status, rect) = layout.status_options[3];
        assert_eq!(status, Status::Problem);
        assert_eq!(
            view.translate_click(rect.x + 1, rect.y, screen, &state),
            Some(Action::SlotEditor(SlotEditorAction::SetStatus(Status::Problem)))
        );

        // Inside the popup but not on a control
        let popup = layout.popup;
        assert_eq!(view.translate_click(popup.x, popup.y, screen, &state), None);
    }

    #[test]
    fn test_button_clicks() {
        let view = SlotEditorView::new();
        let state = editing_state();
        let screen = Rect::new(0, 0, 120, 48);
        let layout = EditorLayout::new(screen);
        let click = |rect: Rect| view.translate_click(rect.x, rect.y, screen, &state);

        assert_eq!(
            click(layout.close_button),
            Some(Action::SlotEditor(SlotEditorAction::Cancel))
        );
        assert_eq!(
            click(layout.add_button),
            Some(Action::SlotEditor(SlotEditorAction::AddTask))
        );
        assert_eq!(
            click(layout.save_button),
            Some(Action::SlotEditor(SlotEditorAction::Save))
        );

        let (index, remove) = layout.remove_buttons(0, 1)[0];
        assert_eq!(index, 0);
        assert_eq!(
            click(remove),
            Some(Action::SlotEditor(SlotEditorAction::RemoveTask(0)))
        );
        // The task text itself is not a target
        assert_eq!(
            view.translate_click(layout.tasks.x, layout.tasks.y, screen, &state),
            None
        );
    }

    #[test]
    fn test_render_shows_draft() {
        let state = editing_state();
        let mut terminal = Terminal::new(TestBackend::new(120, 48)).unwrap();
        terminal
            .draw(|f| SlotEditorView::new().render(&state, f.area(), f))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tareas - PC 9"));
        assert!(text.contains("formateo"));
        assert!(text.contains("Actualizada"));
        assert!(text.contains("Guardar Tareas"));
        assert!(text.contains("×"));
    }
}
