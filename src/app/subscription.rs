// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Maps keyboard arrow keys onto the gallery navigation messages so the
//! buttons and the keyboard drive the same update path.

use super::Message;
use crate::ui::{controls, gallery};
use iced::{event, keyboard, Subscription};

/// Creates the keyboard navigation subscription.
///
/// Only events no widget claimed are considered, so arrow keys keep working
/// wherever focus happens to be.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Gallery(gallery::Message::Controls(
                controls::Message::NavigatePrevious,
            ))),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Gallery(gallery::Message::Controls(
                controls::Message::NavigateNext,
            ))),
            _ => None,
        }
    })
}
