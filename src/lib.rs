// SPDX-License-Identifier: MPL-2.0
//! `locale_lens` is the locale resolution and switching layer of an Iced
//! application: it detects the startup language, lets the user change it at
//! runtime, and keeps translations, text direction, host-document
//! attributes, and the persisted preference consistent through the change.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
