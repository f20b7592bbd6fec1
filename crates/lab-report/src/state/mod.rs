//! Application state

mod app;
mod main_view;
mod prompt;
mod status_bar;

pub use app::AppState;
pub use main_view::{FormField, MainViewState};
pub use prompt::{PromptIntent, PromptKind, PromptState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
