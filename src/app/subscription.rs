// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native event the application listens for is the keyboard while a
//! carousel session is open. The subscription is derived from the session
//! state on every update, so the listener exists exactly for the open
//! interval — no leaked bindings, no double firing across sessions.

use super::Message;
use crate::ui::carousel;
use iced::{event, keyboard, Subscription};

/// Creates the carousel keyboard subscription, active only while a gallery
/// session is open. Key presses already captured by a focused widget are
/// left alone.
pub fn create_event_subscription(carousel_open: bool) -> Subscription<Message> {
    if !carousel_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Carousel(carousel::Message::Next)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Carousel(carousel::Message::Previous)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) => Some(Message::Carousel(carousel::Message::Close)),
            _ => None,
        }
    })
}
