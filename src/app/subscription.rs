// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard arrows drive the carousel while the Home screen is shown. Keys
//! captured by a focused widget are left alone.

use super::{Message, Screen};
use crate::ui::home::{self, carousel};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current screen.
pub fn create_keyboard_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Home => event::listen_with(|event, status, _window_id| match status {
            event::Status::Ignored => carousel_key(&event),
            event::Status::Captured => None,
        }),
        Screen::Portfolio | Screen::About => Subscription::none(),
    }
}

/// Maps arrow keys to carousel navigation.
fn carousel_key(event: &event::Event) -> Option<Message> {
    let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };
    let message = match key {
        Key::Named(Named::ArrowLeft) => carousel::Message::Previous,
        Key::Named(Named::ArrowRight) => carousel::Message::Next,
        _ => return None,
    };
    Some(Message::Home(home::Message::Carousel(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};

    fn key_press(named: Named) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: key::Physical::Code(key::Code::ArrowRight),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn arrows_map_to_carousel_navigation() {
        assert!(matches!(
            carousel_key(&key_press(Named::ArrowLeft)),
            Some(Message::Home(home::Message::Carousel(carousel::Message::Previous)))
        ));
        assert!(matches!(
            carousel_key(&key_press(Named::ArrowRight)),
            Some(Message::Home(home::Message::Carousel(carousel::Message::Next)))
        ));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(carousel_key(&key_press(Named::Enter)).is_none());
    }
}
