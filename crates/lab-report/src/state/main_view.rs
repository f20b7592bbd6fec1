//! Report form (main view) state

use crate::domain_models::MachineId;

/// Focusable elements of the report form, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Technician,
    Shift,
    Date,
    #[default]
    Grid,
    Conclusions,
    SaveButton,
    ResetButton,
    ExportButton,
}

impl FormField {
    const ORDER: [FormField; 8] = [
        Self::Technician,
        Self::Shift,
        Self::Date,
        Self::Grid,
        Self::Conclusions,
        Self::SaveButton,
        Self::ResetButton,
        Self::ExportButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Move to the next field
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Fields that take free text
    pub fn is_text(self) -> bool {
        matches!(self, Self::Technician | Self::Conclusions)
    }
}

/// State for the report form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainViewState {
    pub focused_field: FormField,
    /// Highlighted machine in the grid
    pub cursor: MachineId,
}

impl Default for MainViewState {
    fn default() -> Self {
        Self {
            focused_field: FormField::default(),
            cursor: MachineId::first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_through_every_field() {
        let mut field = FormField::Technician;
        for _ in 0..FormField::ORDER.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Technician);
        assert_eq!(FormField::Technician.prev(), FormField::ExportButton);
        assert_eq!(FormField::Date.next(), FormField::Grid);
    }
}
