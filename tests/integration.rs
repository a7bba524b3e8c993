// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios across detection, switching, and persistence.

use locale_lens::config::{FilePreferences, PreferenceStore};
use locale_lens::i18n::{
    detector, DocumentState, LocaleController, LocaleRegistry, ResourceStore, SwitchContext,
    SwitchOutcome, SwitchStart, SwitchTicket,
};
use tempfile::tempdir;
use unic_langid::LanguageIdentifier;

fn code(s: &str) -> LanguageIdentifier {
    s.parse().expect("test locale should parse")
}

fn pending(start: SwitchStart) -> SwitchTicket {
    match start {
        SwitchStart::Pending(ticket) => ticket,
        other => panic!("expected Pending, got {other:?}"),
    }
}

#[test]
fn detection_switch_and_reload_round_trip() {
    let registry = LocaleRegistry::bundled();
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut preferences = FilePreferences::at_path(temp_dir.path().join("settings.toml"));
    let mut document = DocumentState::new();
    let mut store = ResourceStore::with_fallback(code("zh-CN")).expect("fallback loads");

    // First launch: no stored preference, the system reports en-US.
    let initial = detector::detect_initial_locale(&registry, None, Some("en-US"), None);
    assert_eq!(initial, code("en-US"));

    let mut controller = LocaleController::new(registry, &initial);

    // The user switches to zh-CN.
    let ticket = pending(controller.begin_switch(&code("zh-CN")));
    let result = ResourceStore::load_bundle(&code("zh-CN"));
    let outcome = controller.complete_switch(
        ticket,
        result,
        &mut SwitchContext {
            store: &mut store,
            document: &mut document,
            preferences: &mut preferences,
        },
    );
    assert_eq!(outcome, SwitchOutcome::Applied);

    let state = controller.state();
    assert_eq!(state.code(), &code("zh-CN"));
    assert_eq!(state.direction().as_attr(), "ltr");
    assert!(!state.is_switching());
    assert!(state.last_error().is_none());
    assert_eq!(document.lang(), Some("zh-CN"));
    assert_eq!(preferences.stored_language().as_deref(), Some("zh-CN"));

    // Simulated reload: the stored preference now outranks the system
    // language.
    let registry = LocaleRegistry::bundled();
    let redetected = detector::detect_initial_locale(
        &registry,
        preferences.stored_language().as_deref(),
        Some("en-US"),
        document.lang(),
    );
    assert_eq!(redetected, code("zh-CN"));
}

#[test]
fn rapid_double_switch_never_regresses_the_document() {
    let registry = LocaleRegistry::bundled();
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut preferences = FilePreferences::at_path(temp_dir.path().join("settings.toml"));
    let mut document = DocumentState::new();
    let mut store = ResourceStore::with_fallback(code("zh-CN")).expect("fallback loads");
    let mut controller = LocaleController::new(registry, &code("zh-CN"));

    // switch_to("en-US") immediately followed by switch_to("ar") before
    // the first resolves.
    let first = pending(controller.begin_switch(&code("en-US")));
    let second = pending(controller.begin_switch(&code("ar")));

    // The newer request completes first and wins.
    let outcome = controller.complete_switch(
        second,
        ResourceStore::load_bundle(&code("ar")),
        &mut SwitchContext {
            store: &mut store,
            document: &mut document,
            preferences: &mut preferences,
        },
    );
    assert_eq!(outcome, SwitchOutcome::Applied);
    assert_eq!(document.lang(), Some("ar"));
    assert_eq!(document.dir().as_attr(), "rtl");

    // The stale result lands afterwards; nothing may move.
    let outcome = controller.complete_switch(
        first,
        ResourceStore::load_bundle(&code("en-US")),
        &mut SwitchContext {
            store: &mut store,
            document: &mut document,
            preferences: &mut preferences,
        },
    );
    assert_eq!(outcome, SwitchOutcome::Superseded);
    assert_eq!(controller.state().code(), &code("ar"));
    assert_eq!(document.lang(), Some("ar"));
    assert_eq!(document.dir().as_attr(), "rtl");
    assert_eq!(preferences.stored_language().as_deref(), Some("ar"));
}

#[test]
fn every_registered_locale_can_become_active() {
    let registry = LocaleRegistry::bundled();
    let descriptors: Vec<_> = registry.list().to_vec();
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut preferences = FilePreferences::at_path(temp_dir.path().join("settings.toml"));
    let mut document = DocumentState::new();
    let mut store = ResourceStore::with_fallback(code("zh-CN")).expect("fallback loads");
    let mut controller = LocaleController::new(registry, &code("en-US"));

    for descriptor in descriptors {
        if &descriptor.code == controller.state().code() {
            continue;
        }
        let ticket = pending(controller.begin_switch(&descriptor.code));
        let result = ResourceStore::load_bundle(&descriptor.code);
        let _ = controller.complete_switch(
            ticket,
            result,
            &mut SwitchContext {
                store: &mut store,
                document: &mut document,
                preferences: &mut preferences,
            },
        );
        let state = controller.state();
        assert_eq!(state.code(), &descriptor.code);
        assert_eq!(state.direction(), descriptor.direction());
        assert_eq!(document.dir(), descriptor.direction());
    }
}

#[test]
fn partial_bundle_resolves_through_the_fallback() {
    let mut store = ResourceStore::with_fallback(code("zh-CN")).expect("fallback loads");
    let arabic = ResourceStore::load_bundle(&code("ar")).expect("ar bundle loads");
    store.install(code("ar"), arabic);

    // `app.footer` is deliberately untranslated in the ar bundle.
    let footer = store.resolve(&code("ar"), "app.footer");
    assert_eq!(footer, store.resolve(&code("zh-CN"), "app.footer"));

    // A key nobody ships comes back verbatim and is recorded.
    assert_eq!(store.resolve(&code("ar"), "app.missing"), "app.missing");
    assert!(store.missing_keys().contains(&"app.missing".to_string()));
}
