//! Status icon glyphs.
//!
//! The glyph set is chosen once at startup from the configured icon style
//! and shared process-wide afterwards.

use crate::domain_models::Status;
use lab_report_config::IconStyle;
use std::sync::OnceLock;

static ICON_STYLE: OnceLock<IconStyle> = OnceLock::new();

/// Icon id, unicode glyph, ascii fallback
const ICON_TABLE: [(&str, &str, &str); 4] = [
    ("fa-question-circle", "?", "?"),
    ("fa-tools", "⚒", "*"),
    ("fa-check-circle", "✔", "+"),
    ("fa-exclamation-triangle", "⚠", "!"),
];

/// Select the glyph set; only the first call has an effect.
///
/// Returns false when a style was already installed.
pub fn install(style: IconStyle) -> bool {
    let installed = ICON_STYLE.set(style).is_ok();
    if installed {
        log::debug!("Installed {:?} status icons", style);
    }
    installed
}

/// The active icon style, unicode until [`install`] is called
pub fn style() -> IconStyle {
    ICON_STYLE.get().copied().unwrap_or_default()
}

/// Glyph for a status in the active style
pub fn icon_for(status: Status) -> &'static str {
    resolve(style(), status.info().icon)
}

/// Glyph for an icon id; unknown ids render as a blank
pub fn resolve(style: IconStyle, icon: &str) -> &'static str {
    ICON_TABLE
        .iter()
        .find(|(id, _, _)| *id == icon)
        .map(|(_, unicode, ascii)| match style {
            IconStyle::Unicode => *unicode,
            IconStyle::Ascii => *ascii,
        })
        .unwrap_or(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_status_has_both_glyphs() {
        for status in Status::iter() {
            let icon = status.info().icon;
            assert_ne!(resolve(IconStyle::Unicode, icon), " ");
            assert!(resolve(IconStyle::Ascii, icon).is_ascii());
        }
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(IconStyle::Unicode, "fa-tools"), "⚒");
        assert_eq!(resolve(IconStyle::Ascii, "fa-check-circle"), "+");
        assert_eq!(resolve(IconStyle::Unicode, "fa-unknown"), " ");
    }

    #[test]
    fn test_install_is_idempotent() {
        install(IconStyle::Unicode);
        let first = style();
        assert!(!install(IconStyle::Ascii));
        assert_eq!(style(), first);
    }
}
