// SPDX-License-Identifier: MPL-2.0
//! Active-locale state and the switch protocol.
//!
//! The controller owns the single [`ActiveLocaleState`] every
//! locale-dependent render reads. Switching is a two-phase protocol:
//! [`LocaleController::begin_switch`] validates the request and hands out a
//! ticket carrying a monotonically increasing sequence token, the bundle is
//! resolved elsewhere (possibly asynchronously), and
//! [`LocaleController::complete_switch`] applies the result. Only the
//! ticket with the highest token ever issued may mutate state, so a slow
//! earlier switch can never clobber a later one.

use unic_langid::LanguageIdentifier;

use crate::config::PreferenceStore;
use crate::error::Error;

use super::document::HostDocument;
use super::registry::{LocaleRegistry, TextDirection};
use super::resources::{ResourceBundle, ResourceStore};

/// The one process-wide locale snapshot.
///
/// `direction` is always derived from the registry descriptor for `code`;
/// the two are only ever written together.
#[derive(Debug, Clone)]
pub struct ActiveLocaleState {
    code: LanguageIdentifier,
    direction: TextDirection,
    switching: bool,
    last_error: Option<Error>,
}

impl ActiveLocaleState {
    pub fn code(&self) -> &LanguageIdentifier {
        &self.code
    }

    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    pub fn is_switching(&self) -> bool {
        self.switching
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

/// Handle for one in-flight switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchTicket {
    token: u64,
    code: LanguageIdentifier,
}

impl SwitchTicket {
    pub fn code(&self) -> &LanguageIdentifier {
        &self.code
    }
}

/// Immediate outcome of a switch request.
#[derive(Debug, Clone)]
pub enum SwitchStart {
    /// The requested locale is already active; nothing entered `Switching`.
    NoOp,
    /// Rejected before any transition (unknown locale).
    Rejected(Error),
    /// The switch is in flight; resolve the bundle, then hand the ticket to
    /// [`LocaleController::complete_switch`].
    Pending(SwitchTicket),
}

/// Terminal outcome of an in-flight switch.
#[derive(Debug, Clone, PartialEq)]
pub enum SwitchOutcome {
    Applied,
    Failed(Error),
    /// A newer switch was requested while this one resolved; the result was
    /// dropped without touching state. Not an error.
    Superseded,
}

/// Everything a winning switch must update besides controller state. The
/// four effects (code, direction, document attributes, persisted
/// preference) land before `complete_switch` returns, so no observer sees
/// them disagree.
pub struct SwitchContext<'a> {
    pub store: &'a mut ResourceStore,
    pub document: &'a mut dyn HostDocument,
    pub preferences: &'a mut dyn PreferenceStore,
}

type StateListener = Box<dyn Fn(&ActiveLocaleState) + Send>;

/// Owns [`ActiveLocaleState`] and enforces the switch protocol.
pub struct LocaleController {
    registry: LocaleRegistry,
    state: ActiveLocaleState,
    latest_token: u64,
    listeners: Vec<StateListener>,
}

impl std::fmt::Debug for LocaleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleController")
            .field("state", &self.state)
            .field("latest_token", &self.latest_token)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LocaleController {
    /// Adopts the detector's initial locale. An initial code missing from
    /// the registry degrades to the fallback locale rather than panicking.
    pub fn new(registry: LocaleRegistry, initial: &LanguageIdentifier) -> Self {
        let descriptor = registry
            .find(initial)
            .unwrap_or_else(|| registry.fallback());
        let state = ActiveLocaleState {
            code: descriptor.code.clone(),
            direction: descriptor.direction(),
            switching: false,
            last_error: None,
        };
        Self {
            registry,
            state,
            latest_token: 0,
            listeners: Vec::new(),
        }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Read-only snapshot of the active locale.
    pub fn state(&self) -> &ActiveLocaleState {
        &self.state
    }

    /// Registers an observer invoked after every terminal state change
    /// (applied switch, failed switch, rejected request).
    pub fn subscribe(&mut self, listener: impl Fn(&ActiveLocaleState) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Starts a switch to `code`.
    ///
    /// Re-selecting the active locale is an idempotent no-op that never
    /// shows as `switching`. An unregistered code is rejected before any
    /// transition, recording `last_error` for the UI.
    pub fn begin_switch(&mut self, code: &LanguageIdentifier) -> SwitchStart {
        if *code == self.state.code {
            return SwitchStart::NoOp;
        }

        if !self.registry.contains(code) {
            let error = Error::UnknownLocale(code.to_string());
            self.state.last_error = Some(error.clone());
            self.notify();
            return SwitchStart::Rejected(error);
        }

        self.latest_token += 1;
        self.state.switching = true;
        SwitchStart::Pending(SwitchTicket {
            token: self.latest_token,
            code: code.clone(),
        })
    }

    /// Applies the result of a resolved switch.
    ///
    /// A stale ticket (a newer switch was begun in the meantime) is dropped
    /// without any mutation: last-requested-wins. For the live ticket, a
    /// success installs the bundle and updates code, direction, document
    /// attributes, and the persisted preference together; a failure keeps
    /// the prior locale and records the error.
    pub fn complete_switch(
        &mut self,
        ticket: SwitchTicket,
        result: Result<ResourceBundle, Error>,
        ctx: &mut SwitchContext<'_>,
    ) -> SwitchOutcome {
        if ticket.token != self.latest_token {
            return SwitchOutcome::Superseded;
        }

        let direction = self
            .registry
            .find(&ticket.code)
            .map(|descriptor| descriptor.direction());
        let outcome = match result {
            Ok(bundle) => match direction {
                Some(direction) => {
                    ctx.store.install(ticket.code.clone(), bundle);
                    self.state.code = ticket.code.clone();
                    self.state.direction = direction;
                    self.state.last_error = None;
                    self.state.switching = false;
                    ctx.document.apply_locale(&self.state.code, direction);
                    if let Err(error) = ctx.preferences.store_language(&ticket.code.to_string()) {
                        // The switch itself succeeded; losing the stored
                        // preference only costs the next startup detection.
                        eprintln!("Failed to persist language preference: {error}");
                    }
                    SwitchOutcome::Applied
                }
                // The registry is immutable, so a ticket for a code it no
                // longer knows should be impossible; treat it as a failure
                // rather than trusting the ticket.
                None => self.fail(Error::UnknownLocale(ticket.code.to_string())),
            },
            Err(error) => self.fail(error),
        };

        self.notify();
        outcome
    }

    fn fail(&mut self, error: Error) -> SwitchOutcome {
        self.state.last_error = Some(error.clone());
        self.state.switching = false;
        SwitchOutcome::Failed(error)
    }

    /// Clears a previously recorded error, e.g. when the UI dismisses the
    /// notice.
    pub fn clear_error(&mut self) {
        self.state.last_error = None;
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}
