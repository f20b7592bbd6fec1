//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] symbol message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += width_of(&ts_str);
        }

        let symbol_str = format!("{} ", vm.symbol);
        buf.set_string(x, area.y, &symbol_str, vm.message_style);
        x += width_of(&symbol_str);

        let source_str = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = width_of(&source_str);

        let available = area
            .width
            .saturating_sub(x - area.x)
            .saturating_sub(source_width + 2);

        if width_of(&vm.message) > available {
            let truncated: String = vm
                .message
                .chars()
                .take(usize::from(available.saturating_sub(1)))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if source_width > 0 && source_width + 1 < area.width {
            let source_x = area.x + area.width - source_width - 1;
            buf.set_string(source_x, area.y, &source_str, vm.metadata_style);
        }
    }
}

fn width_of(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}
