// SPDX-License-Identifier: MPL-2.0
//! One-shot resolution of the initial active locale.
//!
//! Runs once at startup, before anything renders. The precedence chain is
//! stored preference, then the system-reported language, then a locale
//! already on the host document, then the hard fallback. A stored
//! preference deliberately outranks the system language so an explicit
//! choice survives OS locale changes.

use unic_langid::LanguageIdentifier;

use crate::config::PreferenceStore;

use super::document::HostDocument;
use super::registry::LocaleRegistry;

/// Resolves the initial locale from explicit candidate values.
///
/// First match against the registry wins; if nothing matches, the
/// registry's fallback locale is returned. Detection never fails.
pub fn detect_initial_locale(
    registry: &LocaleRegistry,
    preference: Option<&str>,
    system: Option<&str>,
    document: Option<&str>,
) -> LanguageIdentifier {
    if let Some(code) = preference.and_then(|raw| exact_match(registry, raw)) {
        return code;
    }

    if let Some(raw) = system {
        if let Some(code) = exact_match(registry, raw) {
            return code;
        }
        if let Some(code) = primary_subtag_match(registry, raw) {
            return code;
        }
    }

    if let Some(code) = document.and_then(|raw| exact_match(registry, raw)) {
        return code;
    }

    registry.fallback().code.clone()
}

/// Production entry point: reads the persisted preference, the OS locale,
/// and the host document.
pub fn detect(
    registry: &LocaleRegistry,
    preferences: &dyn PreferenceStore,
    document: &dyn HostDocument,
) -> LanguageIdentifier {
    let preference = preferences.stored_language();
    let system = sys_locale::get_locale();
    let document_lang = document.language();
    detect_initial_locale(
        registry,
        preference.as_deref(),
        system.as_deref(),
        document_lang.as_deref(),
    )
}

fn parse(raw: &str) -> Option<LanguageIdentifier> {
    // Some platforms report `en_US` or `en_US.UTF-8`; normalize before
    // parsing.
    let normalized = raw.trim().replace('_', "-");
    let normalized = normalized.split('.').next().unwrap_or(&normalized);
    normalized.parse().ok()
}

fn exact_match(registry: &LocaleRegistry, raw: &str) -> Option<LanguageIdentifier> {
    let candidate = parse(raw)?;
    registry.find(&candidate).map(|descriptor| descriptor.code.clone())
}

/// Matches on the primary language subtag, so a system `en` picks up a
/// registered `en-US`.
fn primary_subtag_match(registry: &LocaleRegistry, raw: &str) -> Option<LanguageIdentifier> {
    let candidate = parse(raw)?;
    registry
        .list()
        .iter()
        .find(|descriptor| descriptor.code.language == candidate.language)
        .map(|descriptor| descriptor.code.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LocaleRegistry {
        LocaleRegistry::bundled()
    }

    fn detect_with(
        preference: Option<&str>,
        system: Option<&str>,
        document: Option<&str>,
    ) -> String {
        detect_initial_locale(&registry(), preference, system, document).to_string()
    }

    #[test]
    fn stored_preference_wins_over_everything() {
        assert_eq!(
            detect_with(Some("ar"), Some("en-US"), Some("zh-CN")),
            "ar"
        );
    }

    #[test]
    fn unregistered_preference_is_skipped() {
        assert_eq!(detect_with(Some("fr"), Some("en-US"), None), "en-US");
    }

    #[test]
    fn system_locale_matches_exact_code() {
        assert_eq!(detect_with(None, Some("en-US"), None), "en-US");
    }

    #[test]
    fn system_locale_matches_primary_subtag() {
        assert_eq!(detect_with(None, Some("en"), None), "en-US");
        assert_eq!(detect_with(None, Some("en-GB"), None), "en-US");
    }

    #[test]
    fn posix_style_system_locale_is_normalized() {
        assert_eq!(detect_with(None, Some("en_US.UTF-8"), None), "en-US");
    }

    #[test]
    fn document_language_is_third_in_line() {
        assert_eq!(detect_with(None, Some("fr"), Some("ar")), "ar");
    }

    #[test]
    fn fallback_when_no_candidate_matches() {
        assert_eq!(detect_with(None, None, None), "zh-CN");
        assert_eq!(detect_with(Some("tlh"), Some("fr"), Some("de")), "zh-CN");
    }

    #[test]
    fn garbage_candidates_never_panic() {
        assert_eq!(detect_with(Some("!!"), Some(""), Some("   ")), "zh-CN");
    }

    #[test]
    fn spec_scenario_browser_language_without_preference() {
        // No stored preference, system reports en-US: initial locale is
        // en-US even though zh-CN is the fallback.
        assert_eq!(detect_with(None, Some("en-US"), None), "en-US");
    }
}
