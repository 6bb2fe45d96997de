// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The host page is always the base layer; the lightbox overlay and the
//! toast area are stacked on top only while they have something to show.

use super::{App, Message};
use crate::ui::notifications;
use crate::ui::overlay;
use crate::ui::page;
use iced::widget::Stack;
use iced::{Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let page_view = page::view(page::ViewContext {
        i18n: &app.i18n,
        collection: app.lightbox.collection(),
        base_dir: &app.base_dir,
        scroll_progress: app.scroll_progress,
        show_scroll_top: app.scroll_offset_y > page::SCROLL_TOP_THRESHOLD
            && !app.lightbox.scroll_locked(),
        show_captions: app.show_captions,
        scroll_locked: app.lightbox.scroll_locked(),
    })
    .map(Message::Page);

    let mut layers = Stack::new().push(page_view);

    // The overlay is present exactly while the viewer is open. Its backdrop
    // captures pointer presses; wheel events are withheld from the page by
    // the scroll guard while the lock is held.
    if let Some(frame) = app.lightbox.frame() {
        layers = layers.push(
            overlay::view(overlay::ViewContext {
                i18n: &app.i18n,
                frame,
                base_dir: &app.base_dir,
                video: app.lightbox.video(),
                show_captions: app.show_captions,
                show_counter: app.show_counter,
            })
            .map(Message::Overlay),
        );
    }

    if app.notifications.has_notifications() {
        layers = layers.push(
            notifications::view(&app.notifications, &app.i18n).map(Message::Notification),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
