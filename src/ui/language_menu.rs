// SPDX-License-Identifier: MPL-2.0
//! Language switcher.
//!
//! A trigger button shows the active locale's native name and opens a list
//! of every registered locale; the active entry carries a check mark.
//! While a switch is in flight the trigger loses its press handler (Iced
//! renders it disabled) and shows a switching label instead. Buttons are
//! keyboard-focusable and activatable, and the trigger's arrow reflects
//! the expanded state.

use iced::{
    widget::{button, Button, Column, Row, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

use crate::i18n::{ActiveLocaleState, LocaleRegistry, ResourceStore};

/// Contextual data needed to render the menu.
pub struct ViewContext<'a> {
    pub store: &'a ResourceStore,
    pub state: &'a ActiveLocaleState,
    pub registry: &'a LocaleRegistry,
    pub menu_open: bool,
}

/// Messages emitted by the menu.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LocaleSelected(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LocaleSelected(LanguageIdentifier),
}

/// Process a menu message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::LocaleSelected(code) => {
            *menu_open = false;
            Event::LocaleSelected(code)
        }
    }
}

/// Render the language menu.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(6);

    content = content.push(
        Row::new()
            .push(Text::new(ctx.store.resolve(ctx.state.code(), "language.label")))
            .push(build_trigger(&ctx))
            .spacing(10),
    );

    if ctx.menu_open && !ctx.state.is_switching() {
        content = content.push(build_list(&ctx));
    }

    content.into()
}

fn build_trigger<'a>(ctx: &ViewContext<'a>) -> Button<'a, Message> {
    let label = if ctx.state.is_switching() {
        ctx.store.resolve(ctx.state.code(), "language.switching")
    } else {
        let arrow = if ctx.menu_open { "▴" } else { "▾" };
        let native = ctx
            .registry
            .find(ctx.state.code())
            .map(|descriptor| descriptor.native_name.to_string())
            .unwrap_or_else(|| ctx.state.code().to_string());
        format!("{native} {arrow}")
    };

    let trigger = Button::new(Text::new(label));
    if ctx.state.is_switching() {
        // No press handler: Iced renders the button disabled, which is the
        // busy indicator for an in-flight switch.
        trigger
    } else {
        trigger.on_press(Message::ToggleMenu)
    }
}

fn build_list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(4).width(Length::Shrink);

    for descriptor in ctx.registry.list() {
        let is_active = descriptor.code == *ctx.state.code();
        let label = if is_active {
            format!("{} ✓", descriptor.native_name)
        } else {
            descriptor.native_name.to_string()
        };

        // Selecting the active entry is forwarded anyway; the controller
        // settles it as a no-op without ever showing the busy state.
        let entry = Button::new(Text::new(label))
            .on_press(Message::LocaleSelected(descriptor.code.clone()))
            .style(if is_active {
                button::primary
            } else {
                button::secondary
            })
            .width(Length::Fixed(180.0));

        list = list.push(entry);
    }

    list.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleController;

    fn code(s: &str) -> LanguageIdentifier {
        s.parse().expect("test locale should parse")
    }

    fn fixture() -> (LocaleController, ResourceStore) {
        let controller = LocaleController::new(LocaleRegistry::bundled(), &code("en-US"));
        let store = ResourceStore::with_fallback(code("zh-CN")).expect("fallback loads");
        (controller, store)
    }

    #[test]
    fn toggle_opens_and_closes_the_menu() {
        let mut menu_open = false;
        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::None
        ));
        assert!(menu_open);
        let _ = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn selection_closes_the_menu_and_propagates_the_code() {
        let mut menu_open = true;
        let event = update(Message::LocaleSelected(code("ar")), &mut menu_open);
        assert!(!menu_open);
        match event {
            Event::LocaleSelected(selected) => assert_eq!(selected, code("ar")),
            Event::None => panic!("expected LocaleSelected"),
        }
    }

    #[test]
    fn view_renders_closed_and_open_states() {
        let (controller, store) = fixture();
        for menu_open in [false, true] {
            let _element = view(ViewContext {
                store: &store,
                state: controller.state(),
                registry: controller.registry(),
                menu_open,
            });
        }
    }

    #[test]
    fn view_renders_while_switching() {
        let (mut controller, store) = fixture();
        let _ = controller.begin_switch(&code("ar"));
        assert!(controller.state().is_switching());
        let _element = view(ViewContext {
            store: &store,
            state: controller.state(),
            registry: controller.registry(),
            menu_open: true,
        });
    }
}
