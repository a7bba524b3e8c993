// SPDX-License-Identifier: MPL-2.0
//! Update handlers driving the switch protocol.

use iced::Task;
use unic_langid::LanguageIdentifier;

use crate::error::Error;
use crate::i18n::{ResourceBundle, ResourceStore, SwitchContext, SwitchStart, SwitchTicket};
use crate::ui::language_menu;

use super::{App, Message};

pub fn handle_language_menu_message(
    app: &mut App,
    message: language_menu::Message,
) -> Task<Message> {
    match language_menu::update(message, &mut app.menu_open) {
        language_menu::Event::None => Task::none(),
        language_menu::Event::LocaleSelected(code) => start_switch(app, &code),
    }
}

/// Begins a switch and, if one is actually in flight, resolves the target
/// bundle off the update loop. Re-selecting the active locale and unknown
/// codes produce no task; the controller has already settled them.
fn start_switch(app: &mut App, code: &LanguageIdentifier) -> Task<Message> {
    match app.controller.begin_switch(code) {
        SwitchStart::NoOp | SwitchStart::Rejected(_) => Task::none(),
        SwitchStart::Pending(ticket) => {
            let target = ticket.code().clone();
            Task::perform(
                async move { ResourceStore::load_bundle(&target) },
                move |result| Message::SwitchCompleted {
                    ticket: ticket.clone(),
                    result,
                },
            )
        }
    }
}

pub fn handle_switch_completed(
    app: &mut App,
    ticket: SwitchTicket,
    result: Result<ResourceBundle, Error>,
) -> Task<Message> {
    let mut ctx = SwitchContext {
        store: &mut app.store,
        document: &mut app.document,
        preferences: &mut app.preferences,
    };
    // Applied, failed, and superseded outcomes all leave a consistent
    // state behind; the next render reads it. Errors surface through
    // `last_error` as a dismissible notice.
    let _ = app.controller.complete_switch(ticket, result, &mut ctx);
    Task::none()
}
