// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the locale subsystem.
//!
//! The `App` struct wires the controller, resource store, host document,
//! and preference store together and drives the switch protocol from the
//! Iced update loop: a selection begins a switch, the bundle resolves in a
//! `Task`, and the completion message is routed back to the controller,
//! which drops stale results by sequence token.

pub mod message;
mod update;
mod view;

pub use message::Message;

use std::fmt;

use iced::{Element, Task};

use crate::config::FilePreferences;
use crate::i18n::{detector, DocumentState, HostDocument, LocaleController, LocaleRegistry, ResourceStore};

/// Root Iced application state.
pub struct App {
    pub(crate) controller: LocaleController,
    pub(crate) store: ResourceStore,
    pub(crate) document: DocumentState,
    pub(crate) preferences: FilePreferences,
    pub(crate) menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.controller.state().code().to_string())
            .field("switching", &self.controller.state().is_switching())
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .run()
}

impl App {
    /// Detects the initial locale, loads its bundle, and adopts it.
    ///
    /// Detection runs exactly once, here, before the first render.
    fn new() -> (Self, Task<Message>) {
        let registry = LocaleRegistry::bundled();
        let preferences = FilePreferences::at_default_location();
        let mut document = DocumentState::new();

        let detected = detector::detect(&registry, &preferences, &document);

        let fallback = registry.fallback().code.clone();
        let mut store = ResourceStore::with_fallback(fallback.clone())
            .expect("fallback bundle must be present and well-formed");

        // The fallback bundle is already in the store; anything else loads
        // here, degrading to the fallback locale if its artifact is broken.
        let initial = if detected == fallback {
            detected
        } else {
            match ResourceStore::load_bundle(&detected) {
                Ok(bundle) => {
                    store.install(detected.clone(), bundle);
                    detected
                }
                Err(error) => {
                    eprintln!("Failed to load bundle for {detected}: {error}");
                    fallback
                }
            }
        };

        let controller = LocaleController::new(registry, &initial);
        document.apply_locale(controller.state().code(), controller.state().direction());

        let app = App {
            controller,
            store,
            document,
            preferences,
            menu_open: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.store
            .resolve(self.controller.state().code(), "app.title")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageMenu(menu_message) => {
                update::handle_language_menu_message(self, menu_message)
            }
            Message::SwitchCompleted { ticket, result } => {
                update::handle_switch_completed(self, ticket, result)
            }
            Message::DismissNotice => {
                self.controller.clear_error();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
