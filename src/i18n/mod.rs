// SPDX-License-Identifier: MPL-2.0
//! Locale resolution and switching.
//!
//! The pieces, leaves first: [`registry`] holds the static locale catalog,
//! [`resources`] the flattened translation bundles with fallback lookup,
//! [`detector`] resolves the initial locale once at startup, and
//! [`controller`] owns the active-locale state and the sequence-token
//! switch protocol. [`document`] is the boundary to the hosting surface's
//! `lang`/`dir` attributes.

pub mod controller;
pub mod detector;
pub mod document;
pub mod registry;
pub mod resources;

pub use controller::{
    ActiveLocaleState, LocaleController, SwitchContext, SwitchOutcome, SwitchStart, SwitchTicket,
};
pub use document::{DocumentState, HostDocument};
pub use registry::{LocaleDescriptor, LocaleRegistry, TextDirection};
pub use resources::{ResourceBundle, ResourceStore};
