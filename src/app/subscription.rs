// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the application's subscriptions.
///
/// The event listener is attached once, for the life of the page; gating on
/// the viewer's open state happens in the update handler, not here, so the
/// guard stays an explicit state check.
pub fn create(has_notifications: bool) -> Subscription<Message> {
    let events = event::listen_with(|event, status, _window| match status {
        event::Status::Ignored => Some(Message::RawEvent(event)),
        event::Status::Captured => None,
    });

    // Ticks run only while a toast is on screen.
    let ticks = if has_notifications {
        time::every(Duration::from_millis(250)).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([events, ticks])
}
