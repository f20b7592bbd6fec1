use ratatui::{
    prelude::*,
    style::palette::tailwind,
};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Status colors (feedback messages)
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Machine status colors
    pub machine_none: Color,
    pub machine_maintenance: Color,
    pub machine_updated: Color,
    pub machine_problem: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub active_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            // Backgrounds
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c800,

            // Text
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,

            // Accents (navy header of the printed report)
            accent_primary: tailwind::INDIGO.c400,
            accent_secondary: tailwind::INDIGO.c600,

            // Feedback
            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            // Machines
            machine_none: tailwind::SLATE.c400,
            machine_maintenance: tailwind::AMBER.c400,
            machine_updated: tailwind::EMERALD.c400,
            machine_problem: tailwind::RED.c400,

            // Selection
            selected_bg: tailwind::INDIGO.c700,
            selected_fg: Color::White,
            active_fg: tailwind::YELLOW.c300,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the border of the focused panel
    pub fn panel_border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Ctrl+S" in "Ctrl+S save")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the selected item in lists and grids
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for success messages
    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for warning messages
    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text (cursor markers, focus indicators)
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    /// Style for the value of the field being edited
    pub fn input_active(&self) -> Style {
        Style::default().fg(self.active_fg).bg(self.bg_secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_colors_are_distinct() {
        let theme = Theme::default();
        let colors = [
            theme.machine_none,
            theme.machine_maintenance,
            theme.machine_updated,
            theme.machine_problem,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
