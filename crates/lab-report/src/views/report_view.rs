//! Report form view
//!
//! Renders the header fields, the machine grid, the stats boxes, the
//! conclusions editor and the action buttons.

use crate::actions::{
    Action, ContextAction, GridStep, NavigationAction, ReportAction, SlotEditorAction,
    TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::domain_models::MACHINE_COUNT;
use crate::layout::{ReportLayout, GRID_COLUMNS};
use crate::state::{AppState, FormField};
use crate::view_models::{KeyHint, MachineCellViewModel, ReportViewModel, StatusBarViewModel};
use crate::views::status_bar::StatusBarWidget;
use crate::views::{View, ViewId};
use lab_report_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

/// Cursor drawn after the text of the field being edited
const CURSOR: &str = "▏";

/// The report form, always at the bottom of the view stack
#[derive(Debug, Clone)]
pub struct ReportView;

impl ReportView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReportView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ReportView {
    fn view_id(&self) -> ViewId {
        ViewId::Report
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if state.main_view.focused_field.is_text() {
            PanelCapabilities::TEXT_INPUT
        } else {
            PanelCapabilities::empty()
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, state: &AppState) -> Option<Action> {
        use FormField::*;
        use NavigationAction::*;

        let cursor = state.main_view.cursor.index();
        let action = match (state.main_view.focused_field, nav) {
            (Grid, Left) => ReportAction::MoveCursor(GridStep::Left),
            (Grid, Right) => ReportAction::MoveCursor(GridStep::Right),
            // Leaving the grid past its first or last row moves focus
            (Grid, Previous) if cursor < GRID_COLUMNS => ReportAction::FocusPrevious,
            (Grid, Previous) => ReportAction::MoveCursor(GridStep::Up),
            (Grid, Next) if cursor + GRID_COLUMNS >= usize::from(MACHINE_COUNT) => {
                ReportAction::FocusNext
            }
            (Grid, Next) => ReportAction::MoveCursor(GridStep::Down),
            (Grid, ToTop) => ReportAction::MoveCursor(GridStep::First),
            (Grid, ToBottom) => ReportAction::MoveCursor(GridStep::Last),
            (Shift, Left) => ReportAction::ShiftPrevious,
            (Shift, Right) => ReportAction::ShiftNext,
            (Date, Left) => ReportAction::DateStep { days: -1 },
            (Date, Right) => ReportAction::DateStep { days: 1 },
            (SaveButton | ResetButton | ExportButton, Left) => ReportAction::FocusPrevious,
            (SaveButton | ResetButton | ExportButton, Right) => ReportAction::FocusNext,
            (_, Previous) => ReportAction::FocusPrevious,
            (_, Next) => ReportAction::FocusNext,
            _ => return None,
        };
        Some(Action::Report(action))
    }

    fn translate_text_input(&self, input: TextInputAction, state: &AppState) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => ReportAction::Char(c),
            TextInputAction::Backspace => ReportAction::Backspace,
            TextInputAction::ClearLine => ReportAction::ClearField,
            TextInputAction::Escape => ReportAction::Focus(FormField::Grid),
            TextInputAction::Confirm if state.main_view.focused_field == FormField::Conclusions => {
                ReportAction::Newline
            }
            TextInputAction::Confirm => ReportAction::FocusNext,
        };
        Some(Action::Report(action))
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(match state.main_view.focused_field {
                FormField::Grid => {
                    Action::SlotEditor(SlotEditorAction::Open(state.main_view.cursor))
                }
                FormField::Shift => Action::Report(ReportAction::ShiftNext),
                FormField::SaveButton => Action::Report(ReportAction::RequestSave),
                FormField::ResetButton => Action::Report(ReportAction::RequestReset),
                FormField::ExportButton => Action::Report(ReportAction::ExportPdf),
                FormField::Technician | FormField::Date | FormField::Conclusions => {
                    Action::Report(ReportAction::FocusNext)
                }
            }),
        }
    }

    fn translate_click(
        &self,
        column: u16,
        row: u16,
        screen: Rect,
        _state: &AppState,
    ) -> Option<Action> {
        let layout = ReportLayout::new(screen);
        if let Some(machine) = layout.machine_at(column, row) {
            return Some(Action::SlotEditor(SlotEditorAction::Open(machine)));
        }
        let action = match layout.field_at(column, row)? {
            FormField::SaveButton => ReportAction::RequestSave,
            FormField::ResetButton => ReportAction::RequestReset,
            FormField::ExportButton => ReportAction::ExportPdf,
            field => ReportAction::Focus(field),
        };
        Some(Action::Report(action))
    }

    fn accepts_action(&self, action: &Action, state: &AppState) -> bool {
        match action {
            // Date shortcuts are plain letters, only meaningful on the date field
            Action::Report(ReportAction::DateToday | ReportAction::DateMonthStep { .. }) => {
                state.main_view.focused_field == FormField::Date
            }
            Action::Report(_)
            | Action::SlotEditor(SlotEditorAction::Open(_))
            | Action::ViewContext(_)
            | Action::Navigate(_)
            | Action::TextInput(_)
            | Action::Global(_) => true,
            _ => false,
        }
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = ReportViewModel::from_state(state);
    let layout = ReportLayout::new(area);

    f.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    render_header(&vm, layout.header, theme, f);

    let editing = |field: FormField| vm.focused == field;
    render_field(
        f,
        "Auxiliar",
        Line::from(text_with_cursor(&vm.technician, editing(FormField::Technician))),
        editing(FormField::Technician),
        layout.technician,
        theme,
    );
    render_field(
        f,
        "Turno",
        stepper(vm.shift, editing(FormField::Shift), theme),
        editing(FormField::Shift),
        layout.shift,
        theme,
    );
    render_field(
        f,
        "Fecha",
        stepper(&vm.date, editing(FormField::Date), theme),
        editing(FormField::Date),
        layout.date,
        theme,
    );

    render_grid(&vm, &layout, theme, f);
    render_stats(&vm, &layout, f);
    render_conclusions(&vm, layout.conclusions, theme, f);
    render_buttons(&vm, &layout, theme, f);

    let footer = Paragraph::new(vm.footer.as_str())
        .style(theme.muted())
        .alignment(Alignment::Center);
    f.render_widget(footer, layout.footer);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), layout.status_bar);
}

fn render_header(vm: &ReportViewModel, area: Rect, theme: &Theme, f: &mut Frame) {
    let block = Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(Style::default().fg(theme.accent_secondary))
        .style(Style::default().bg(theme.accent_secondary))
        .title_bottom(hint_line(&vm.hints, theme).right_aligned());

    let title = Paragraph::new(Line::from(Span::styled(
        vm.title.as_str(),
        Style::default()
            .fg(theme.text_primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(title, area);
}

/// Key hints as "key desc  key desc ..."
fn hint_line<'a>(hints: &'a [KeyHint], theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for hint in hints {
        spans.push(Span::styled(hint.keys.as_str(), theme.key_hint()));
        spans.push(Span::styled(
            format!(" {}  ", hint.description),
            theme.key_description(),
        ));
    }
    Line::from(spans)
}

fn text_with_cursor(text: &str, focused: bool) -> String {
    if focused {
        format!("{}{}", text, CURSOR)
    } else {
        text.to_string()
    }
}

/// "◀ value ▶" for fields stepped with the arrow keys
fn stepper<'a>(value: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
    let arrows = if focused { theme.accent() } else { theme.muted() };
    Line::from(vec![
        Span::styled("◀ ", arrows),
        Span::styled(value, theme.text()),
        Span::styled(" ▶", arrows),
    ])
}

fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_style = if focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };
    Block::bordered()
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", title))
        .title_style(theme.panel_title())
        .border_style(border_style)
        .style(theme.panel_background())
}

fn render_field(
    f: &mut Frame,
    title: &str,
    value: Line,
    focused: bool,
    area: Rect,
    theme: &Theme,
) {
    let style = if focused {
        theme.input_active()
    } else {
        theme.text()
    };
    let paragraph = Paragraph::new(value)
        .style(style)
        .block(field_block(title, focused, theme));
    f.render_widget(paragraph, area);
}

fn render_grid(vm: &ReportViewModel, layout: &ReportLayout, theme: &Theme, f: &mut Frame) {
    let block = field_block("Computadoras", vm.focused == FormField::Grid, theme);
    f.render_widget(block, layout.grid);

    for (cell, area) in vm.cells.iter().zip(&layout.grid_cells) {
        render_cell(cell, *area, theme, f);
    }
}

fn render_cell(cell: &MachineCellViewModel, area: Rect, theme: &Theme, f: &mut Frame) {
    let (border_type, border_style, background) = if cell.selected {
        (
            BorderType::Thick,
            Style::default().fg(theme.active_fg).add_modifier(Modifier::BOLD),
            Style::default().bg(theme.selected_bg),
        )
    } else {
        (
            BorderType::Plain,
            Style::default().fg(cell.color),
            theme.panel_background(),
        )
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            cell.title.as_str(),
            Style::default().fg(theme.text_primary).bold(),
        ))
        .style(background);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", cell.icon, cell.label),
            Style::default().fg(cell.color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(cell.preview.as_str(), theme.text_secondary())),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stats(vm: &ReportViewModel, layout: &ReportLayout, f: &mut Frame) {
    for (stat, area) in vm.stats.iter().zip(layout.stats) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(stat.color));
        let line = Line::from(vec![
            Span::styled(
                stat.value.to_string(),
                Style::default().fg(stat.color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(stat.label, Style::default().fg(stat.color)),
        ]);
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }
}

fn render_conclusions(vm: &ReportViewModel, area: Rect, theme: &Theme, f: &mut Frame) {
    let focused = vm.focused == FormField::Conclusions;
    let text = text_with_cursor(&vm.conclusions, focused);
    let style = if focused {
        theme.input_active()
    } else {
        theme.text()
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(field_block("Conclusiones", focused, theme));
    f.render_widget(paragraph, area);
}

fn render_buttons(vm: &ReportViewModel, layout: &ReportLayout, theme: &Theme, f: &mut Frame) {
    let buttons = [
        ("Guardar Informe", FormField::SaveButton, layout.save_button),
        ("Restablecer", FormField::ResetButton, layout.reset_button),
        ("Descargar PDF", FormField::ExportButton, layout.export_button),
    ];

    for (label, field, area) in buttons {
        let focused = vm.focused == field;
        let style = if focused {
            theme.selected()
        } else {
            theme.accent()
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(style)
            .style(style);
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(button, area);
    }
}
