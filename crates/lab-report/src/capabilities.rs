//! Panel capability system
//!
//! Views declare capabilities so the keyboard middleware can route keys
//! without knowing which concrete view is active.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Printable keys are typed into a text field instead of triggering bindings
        const TEXT_INPUT = 1 << 0;

        /// Up/Down move between items even while typing
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
