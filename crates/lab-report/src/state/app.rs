//! Application State

use super::{MainViewState, PromptState, StatusBarState};
use crate::domain_models::{Report, SlotDraft};
use crate::keymap::{default_keymap, Keymap};
use crate::views::{ReportView, View};
use lab_report_config::AppConfig;
use lab_report_theme::Theme;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the report form, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub report: Report,
    pub main_view: MainViewState,
    /// Machine editor draft (present only while the editor is open)
    pub slot_editor: Option<SlotDraft>,
    /// Blocking prompt (present only while shown)
    pub prompt: Option<PromptState>,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub keymap: Keymap,
    pub app_config: AppConfig,
    /// Set when the application has to stop because of an unrecoverable error
    pub fatal_error: Option<String>,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(ReportView::new())],
            report: Report::default(),
            main_view: MainViewState::default(),
            slot_editor: None,
            prompt: None,
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config,
            fatal_error: None,
        }
    }

    /// Top-most (active) view
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("report", &self.report)
            .field("main_view", &self.main_view)
            .field("slot_editor", &self.slot_editor)
            .field("prompt", &self.prompt)
            .field("status_bar", &self.status_bar)
            .field("theme", &"<theme>")
            .field("app_config", &self.app_config)
            .field("fatal_error", &self.fatal_error)
            .finish()
    }
}
