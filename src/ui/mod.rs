// SPDX-License-Identifier: MPL-2.0
//! UI components.

pub mod language_menu;
