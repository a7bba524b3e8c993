// SPDX-License-Identifier: MPL-2.0
//! Host document boundary.
//!
//! The subsystem mirrors the active locale onto the hosting surface: a
//! `lang` attribute holding the locale code and a `dir` attribute holding
//! the text direction. Both are written together as the final effect of a
//! winning switch, never speculatively.

use unic_langid::LanguageIdentifier;

use super::registry::TextDirection;

/// The surface whose `lang`/`dir` attributes track the active locale.
pub trait HostDocument {
    /// A locale code already present on the document root, consulted once
    /// by the detector.
    fn language(&self) -> Option<String>;

    /// Writes both attributes. Called only for a winning switch, after the
    /// controller state has been updated, so observers never see the two
    /// disagree.
    fn apply_locale(&mut self, code: &LanguageIdentifier, direction: TextDirection);
}

/// In-process document root used by the demo shell and tests.
#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    lang: Option<String>,
    dir: TextDirection,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document that already carries a `lang` attribute, as a host page
    /// might before this subsystem starts.
    pub fn with_language(code: &str) -> Self {
        Self {
            lang: Some(code.to_string()),
            dir: TextDirection::LeftToRight,
        }
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn dir(&self) -> TextDirection {
        self.dir
    }
}

impl HostDocument for DocumentState {
    fn language(&self) -> Option<String> {
        self.lang.clone()
    }

    fn apply_locale(&mut self, code: &LanguageIdentifier, direction: TextDirection) {
        self.lang = Some(code.to_string());
        self.dir = direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_locale_sets_both_attributes() {
        let mut document = DocumentState::new();
        assert!(document.lang().is_none());

        let arabic: LanguageIdentifier = "ar".parse().expect("parse");
        document.apply_locale(&arabic, TextDirection::RightToLeft);

        assert_eq!(document.lang(), Some("ar"));
        assert_eq!(document.dir(), TextDirection::RightToLeft);
    }

    #[test]
    fn with_language_reports_existing_attribute() {
        let document = DocumentState::with_language("en-US");
        assert_eq!(document.language().as_deref(), Some("en-US"));
    }
}
