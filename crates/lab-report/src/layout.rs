//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both sides compute the same rectangles from the frame area, so a click
//! always lands on what was drawn there.

use crate::domain_models::{MachineId, Status};
use crate::state::FormField;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use strum::IntoEnumIterator;

pub const GRID_COLUMNS: usize = 8;
pub const GRID_ROWS: usize = 5;
/// Height of one machine cell: border, status, task preview, border
const CELL_HEIGHT: u16 = 4;
/// " Guardar Tareas " plus brackets
const SAVE_LABEL_WIDTH: u16 = 18;
/// Room for " × " at the end of a task row
const REMOVE_WIDTH: u16 = 3;

/// Rectangles of the report form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    pub header: Rect,
    pub technician: Rect,
    pub shift: Rect,
    pub date: Rect,
    /// Bordered area around the machine grid
    pub grid: Rect,
    /// One rectangle per machine, in id order
    pub grid_cells: Vec<Rect>,
    pub stats: [Rect; 4],
    pub conclusions: Rect,
    pub save_button: Rect,
    pub reset_button: Rect,
    pub export_button: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

impl ReportLayout {
    pub fn new(area: Rect) -> Self {
        let grid_height = GRID_ROWS as u16 * CELL_HEIGHT + 2;
        let [header, meta, grid, stats, conclusions, actions, footer, status_bar] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(grid_height),
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        let [technician, shift, date] = Layout::horizontal([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .areas(meta);

        let inner = grid.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); GRID_ROWS]).split(inner);
        let grid_cells = rows
            .iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row)
                    .to_vec()
            })
            .collect();

        let stats = Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(stats);

        let [save_button, reset_button, export_button] =
            Layout::horizontal([Constraint::Ratio(1, 3); 3])
                .spacing(2)
                .areas(actions);

        Self {
            header,
            technician,
            shift,
            date,
            grid,
            grid_cells,
            stats,
            conclusions,
            save_button,
            reset_button,
            export_button,
            footer,
            status_bar,
        }
    }

    /// Machine whose grid cell contains the point
    pub fn machine_at(&self, column: u16, row: u16) -> Option<MachineId> {
        let position = Position::new(column, row);
        self.grid_cells
            .iter()
            .position(|cell| cell.contains(position))
            .and_then(MachineId::from_index)
    }

    /// Form element (other than the grid) under the point
    pub fn field_at(&self, column: u16, row: u16) -> Option<FormField> {
        let position = Position::new(column, row);
        [
            (self.technician, FormField::Technician),
            (self.shift, FormField::Shift),
            (self.date, FormField::Date),
            (self.conclusions, FormField::Conclusions),
            (self.save_button, FormField::SaveButton),
            (self.reset_button, FormField::ResetButton),
            (self.export_button, FormField::ExportButton),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(position))
        .map(|(_, field)| field)
    }
}

/// Rectangles of the machine editor popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorLayout {
    pub popup: Rect,
    /// "×" on the top border
    pub close_button: Rect,
    pub status_label: Rect,
    /// One option per status, in selector order
    pub status_options: Vec<(Status, Rect)>,
    pub tasks_label: Rect,
    pub tasks: Rect,
    pub input: Rect,
    /// "+" next to the input
    pub add_button: Rect,
    pub save_button: Rect,
}

impl EditorLayout {
    pub fn new(screen: Rect) -> Self {
        let popup = centered(screen, percent_of(screen.width, 60).clamp(50, 80), 20);
        let inner = popup.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });

        let [status_label, options, _spacing, tasks_label, tasks, input_row, buttons] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .areas(inner);
        let [input, add_button] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(5)]).areas(input_row);
        let [_, save_button, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(SAVE_LABEL_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(buttons);
        let close_button = Rect::new(popup.right().saturating_sub(5), popup.y, 3, 1)
            .intersection(popup);

        let option_rects = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(options);
        let status_options = Status::iter()
            .zip(option_rects.iter().copied())
            .collect();

        Self {
            popup,
            close_button,
            status_label,
            status_options,
            tasks_label,
            tasks,
            input,
            add_button,
            save_button,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.popup.contains(Position::new(column, row))
    }

    pub fn status_at(&self, column: u16, row: u16) -> Option<Status> {
        let position = Position::new(column, row);
        self.status_options
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(status, _)| *status)
    }

    /// First task row shown when `selected` has to stay visible
    pub fn task_offset(&self, selected: Option<usize>) -> usize {
        selected.map_or(0, |index| {
            (index + 1).saturating_sub(usize::from(self.tasks.height))
        })
    }

    /// "×" of each visible task, paired with the task index
    pub fn remove_buttons(&self, offset: usize, task_count: usize) -> Vec<(usize, Rect)> {
        (offset..task_count)
            .zip(self.tasks.rows())
            .map(|(index, row)| {
                let x = row.right().saturating_sub(REMOVE_WIDTH);
                (index, Rect::new(x, row.y, REMOVE_WIDTH, 1).intersection(row))
            })
            .collect()
    }

    /// Task whose "×" is at the given position
    pub fn remove_button_at(
        &self,
        column: u16,
        row: u16,
        selected: Option<usize>,
        task_count: usize,
    ) -> Option<usize> {
        let position = Position::new(column, row);
        self.remove_buttons(self.task_offset(selected), task_count)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| index)
    }
}

/// Area of a prompt popup large enough for `lines` once wrapped
pub fn prompt_area(screen: Rect, lines: &[String]) -> Rect {
    let width = percent_of(screen.width, 60).clamp(50, 72);
    // Border plus one column of padding on each side
    let text_width = usize::from(width.saturating_sub(4)).max(1);
    let rows: usize = lines
        .iter()
        .map(|line| line.chars().count().div_ceil(text_width).max(1))
        .sum();
    // Border plus one row of padding above and below
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(4);
    centered(screen, width, height)
}

/// `percent` of `length`, without overflowing on very wide terminals
fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent) / 100;
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

/// Rectangle of the given size centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
