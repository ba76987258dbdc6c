// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events are routed to the carousel; the carousel's own timers
//! are batched in by `App::subscription`.

use super::Message;
use crate::ui::carousel;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Maps a key press to an application message.
#[must_use]
pub fn route_key(key: &Key) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::Carousel(carousel::Message::RotateLeft)),
        Key::Named(Named::ArrowRight) => Some(Message::Carousel(carousel::Message::RotateRight)),
        Key::Named(Named::Escape) => Some(Message::CloseRequested),
        _ => None,
    }
}

/// Listens to keyboard events that no widget captured.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => route_key(&key),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_rotate_the_carousel() {
        assert!(matches!(
            route_key(&Key::Named(Named::ArrowLeft)),
            Some(Message::Carousel(carousel::Message::RotateLeft))
        ));
        assert!(matches!(
            route_key(&Key::Named(Named::ArrowRight)),
            Some(Message::Carousel(carousel::Message::RotateRight))
        ));
    }

    #[test]
    fn escape_closes_and_other_keys_are_ignored() {
        assert!(matches!(
            route_key(&Key::Named(Named::Escape)),
            Some(Message::CloseRequested)
        ));
        assert!(route_key(&Key::Named(Named::Space)).is_none());
        assert!(route_key(&Key::Character("a".into())).is_none());
    }
}
