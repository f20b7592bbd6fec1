use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod prompt_view;
pub mod report_view;
pub mod slot_editor_view;
pub mod status_bar;

pub use prompt_view::PromptView;
pub use report_view::ReportView;
pub use slot_editor_view::SlotEditorView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Report,
    SlotEditor,
    Prompt,
}

/// View trait - the interface every entry of the view stack implements
///
/// Views are stored as `Box<dyn View>`, so the trait must stay object-safe:
/// no generic methods, no `Self: Sized` bounds, `&self` receivers only.
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Capabilities of this view for the current state (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box (Clone itself requires Sized)
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action.
    ///
    /// The default returns None, meaning the view ignores navigation.
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action.
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter) to this view's specific action.
    fn translate_context_action(
        &self,
        _action: ContextAction,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }

    /// Translate a left click at `column`/`row` on a screen of size `screen`.
    fn translate_click(
        &self,
        _column: u16,
        _row: u16,
        _screen: Rect,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }

    /// Whether a keymap command should reach this view.
    ///
    /// Commands rejected here are dropped, so several views can share a key.
    fn accepts_action(&self, action: &Action, state: &AppState) -> bool;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views are drawn bottom-up so floating views end up on top; they clear
/// only their own area, leaving the report visible around them.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
