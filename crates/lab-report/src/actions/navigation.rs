//! Navigation actions - shared across multiple screens
//!
//! Generic navigation that views translate into their screen-specific actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Down arrow, Tab in text fields
    Next,
    /// Up arrow, Shift+Tab in text fields
    Previous,
    Left,
    Right,
    /// Home, gg
    ToTop,
    /// End, G
    ToBottom,
}
