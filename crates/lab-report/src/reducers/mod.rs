pub mod app_reducer;
pub mod main_view_reducer;
pub mod prompt_reducer;
pub mod report_reducer;
pub mod slot_editor_reducer;
pub mod status_bar_reducer;
