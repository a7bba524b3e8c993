// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::error::Error;
use crate::i18n::{ResourceBundle, SwitchTicket};
use crate::ui::language_menu;

/// Messages consumed by `App::update`. The variants forward the language
/// menu's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageMenu(language_menu::Message),
    /// Bundle resolution for an in-flight switch finished. The ticket's
    /// sequence token decides whether this result still applies.
    SwitchCompleted {
        ticket: SwitchTicket,
        result: Result<ResourceBundle, Error>,
    },
    /// The user dismissed the error notice.
    DismissNotice,
}
