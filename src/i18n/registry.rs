// SPDX-License-Identifier: MPL-2.0
//! Static catalog of the locales this build supports.
//!
//! The registry is fixed at build time: descriptors carry the display
//! metadata and text direction for each locale, and the first entry doubles
//! as the fallback locale whose bundle must cover every translation key.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// Rendering direction derived from a locale descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl TextDirection {
    /// The value written to the host document's `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

/// Immutable metadata for one supported locale.
#[derive(Debug, Clone)]
pub struct LocaleDescriptor {
    pub code: LanguageIdentifier,
    /// Name in English, for diagnostics and tooling.
    pub display_name: &'static str,
    /// Name in the locale's own language, shown in the switcher.
    pub native_name: &'static str,
    pub rtl: bool,
}

impl LocaleDescriptor {
    pub fn direction(&self) -> TextDirection {
        if self.rtl {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }
}

/// Ordered, read-only set of supported locales.
///
/// The ordering is configuration order and is what the switcher renders.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: Vec<LocaleDescriptor>,
}

impl LocaleRegistry {
    /// Builds a registry from descriptors. The first entry is the fallback
    /// locale.
    ///
    /// # Panics
    ///
    /// Panics if `locales` is empty: a registry without a fallback locale
    /// cannot satisfy any lookup.
    pub fn new(locales: Vec<LocaleDescriptor>) -> Self {
        assert!(!locales.is_empty(), "registry needs at least one locale");
        Self { locales }
    }

    /// The registry matching the bundles embedded under `assets/i18n/`.
    pub fn bundled() -> Self {
        let parse = |code: &str| {
            code.parse::<LanguageIdentifier>()
                .expect("built-in locale code must parse")
        };
        Self::new(vec![
            LocaleDescriptor {
                code: parse("zh-CN"),
                display_name: "Chinese (Simplified)",
                native_name: "中文",
                rtl: false,
            },
            LocaleDescriptor {
                code: parse("en-US"),
                display_name: "English (US)",
                native_name: "English",
                rtl: false,
            },
            LocaleDescriptor {
                code: parse("ar"),
                display_name: "Arabic",
                native_name: "العربية",
                rtl: true,
            },
        ])
    }

    pub fn list(&self) -> &[LocaleDescriptor] {
        &self.locales
    }

    pub fn find(&self, code: &LanguageIdentifier) -> Option<&LocaleDescriptor> {
        self.locales.iter().find(|descriptor| descriptor.code == *code)
    }

    pub fn contains(&self, code: &LanguageIdentifier) -> bool {
        self.find(code).is_some()
    }

    /// The locale whose bundle is a superset of every other bundle.
    pub fn fallback(&self) -> &LocaleDescriptor {
        &self.locales[0]
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::bundled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> LanguageIdentifier {
        s.parse().expect("test locale should parse")
    }

    #[test]
    fn bundled_registry_keeps_configuration_order() {
        let registry = LocaleRegistry::bundled();
        let codes: Vec<String> = registry
            .list()
            .iter()
            .map(|descriptor| descriptor.code.to_string())
            .collect();
        assert_eq!(codes, vec!["zh-CN", "en-US", "ar"]);
    }

    #[test]
    #[should_panic(expected = "registry needs at least one locale")]
    fn empty_registry_is_rejected() {
        let _ = LocaleRegistry::new(Vec::new());
    }

    #[test]
    fn fallback_is_first_entry() {
        let registry = LocaleRegistry::bundled();
        assert_eq!(registry.fallback().code, code("zh-CN"));
    }

    #[test]
    fn find_matches_exact_code() {
        let registry = LocaleRegistry::bundled();
        let descriptor = registry.find(&code("en-US")).expect("en-US is registered");
        assert_eq!(descriptor.display_name, "English (US)");
        assert!(registry.find(&code("en-GB")).is_none());
    }

    #[test]
    fn direction_is_derived_from_rtl_flag() {
        let registry = LocaleRegistry::bundled();
        let arabic = registry.find(&code("ar")).expect("ar is registered");
        assert_eq!(arabic.direction(), TextDirection::RightToLeft);
        assert_eq!(arabic.direction().as_attr(), "rtl");

        let english = registry.find(&code("en-US")).expect("en-US is registered");
        assert_eq!(english.direction(), TextDirection::LeftToRight);
    }
}
