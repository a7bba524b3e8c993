// SPDX-License-Identifier: MPL-2.0
//! Demo view: a handful of translated surfaces plus the language menu.

use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

use crate::i18n::TextDirection;
use crate::ui::language_menu;

use super::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let state = app.controller.state();
    let code = state.code();
    let registry = app.controller.registry();

    let align = match state.direction() {
        TextDirection::LeftToRight => Horizontal::Left,
        TextDirection::RightToLeft => Horizontal::Right,
    };

    let title = Text::new(app.store.resolve(code, "app.title")).size(30);
    let tagline = Text::new(app.store.resolve(code, "app.tagline"));

    let native_name = registry
        .find(code)
        .map(|descriptor| descriptor.native_name)
        .unwrap_or_default();
    let greeting = Text::new(
        app.store
            .resolve_with_args(code, "app.greeting", &[("name", native_name)]),
    );

    let menu = language_menu::view(language_menu::ViewContext {
        store: &app.store,
        state,
        registry,
        menu_open: app.menu_open,
    })
    .map(Message::LanguageMenu);

    let mut content = Column::new()
        .push(title)
        .push(tagline)
        .push(greeting)
        .push(menu)
        .spacing(20)
        .width(Length::Fill)
        .align_x(align);

    if let Some(error) = state.last_error() {
        let notice = Row::new()
            .push(Text::new(app.store.resolve(code, error.i18n_key())))
            .push(
                button(Text::new(app.store.resolve(code, "notice.dismiss")))
                    .on_press(Message::DismissNotice),
            )
            .spacing(10);
        content = content.push(notice);
    }

    content = content.push(Text::new(app.store.resolve(code, "app.footer")).size(12));

    Container::new(content).padding(20).into()
}
