// SPDX-License-Identifier: MPL-2.0
//! Update logic: translates messages into state transitions and side
//! effects.

use super::{App, Message};
use crate::gallery_scanner::Collection;
use crate::lightbox::{Direction, Surface};
use crate::ui::notifications::{self, Notification};
use crate::ui::overlay;
use crate::ui::page;
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::{event, keyboard, Task};
use std::path::{Path, PathBuf};

/// Handles one message. Every branch runs to completion on the UI thread;
/// the only asynchronous work is dialogs and gallery loading, both routed
/// back through their own result messages.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Page(m) => update_page(app, m),
        Message::Overlay(m) => update_overlay(app, m),
        Message::Notification(notifications::Message::Dismiss(id)) => {
            app.notifications.dismiss(id);
            Task::none()
        }
        Message::OpenLightbox(index) => {
            app.lightbox.open(index);
            Task::none()
        }
        Message::CloseLightbox => {
            app.lightbox.close();
            Task::none()
        }
        Message::NavigateLightbox(direction) => {
            app.lightbox.navigate(direction);
            Task::none()
        }
        Message::RawEvent(event) => handle_raw_event(app, &event),
        Message::Tick(_) => {
            app.notifications.dismiss_expired();
            Task::none()
        }
        Message::GalleryLoaded {
            result,
            base_dir,
            open_index,
        } => handle_gallery_loaded(app, result, base_dir, open_index),
        Message::GalleryDialogResult(Some(path)) => {
            app.page_path = Some(path.clone());
            load_gallery(path, None)
        }
        Message::GalleryDialogResult(None) => Task::none(),
    }
}

fn update_page(app: &mut App, message: page::Message) -> Task<Message> {
    match message {
        page::Message::ThumbnailPressed(index) => {
            app.lightbox.open(index);
            Task::none()
        }
        page::Message::Scrolled(viewport) => {
            app.scroll_offset_y = viewport.absolute_offset().y;
            let progress = viewport.relative_offset().y;
            app.scroll_progress = if progress.is_finite() {
                progress.clamp(0.0, 1.0)
            } else {
                0.0
            };
            Task::none()
        }
        page::Message::ScrollToTop => {
            operation::snap_to(page::scrollable_id(), RelativeOffset { x: 0.0, y: 0.0 })
        }
        page::Message::OpenGalleryPressed => open_gallery_dialog(),
    }
}

fn update_overlay(app: &mut App, message: overlay::Message) -> Task<Message> {
    match message {
        overlay::Message::ClosePressed | overlay::Message::BackdropPressed => {
            app.lightbox.close();
            Task::none()
        }
        // Clicks on the content surface must not fall through to the
        // backdrop; absorbing them here keeps the viewer open.
        overlay::Message::ContentPressed => Task::none(),
        overlay::Message::PreviousPressed => {
            app.lightbox.navigate(Direction::Previous);
            Task::none()
        }
        overlay::Message::NextPressed => {
            app.lightbox.navigate(Direction::Next);
            Task::none()
        }
        overlay::Message::TogglePlayback => {
            app.lightbox.toggle_video_playback();
            Task::none()
        }
        overlay::Message::CopyLinkPressed => copy_current_link(app),
    }
}

/// The viewer's actions for a named key. Returns `None` while the viewer is
/// closed: the key listener is process-wide, attached once for the life of
/// the page, and must not affect unrelated behavior while the viewer is
/// inactive.
fn key_action(is_open: bool, key: keyboard::key::Named) -> Option<KeyAction> {
    if !is_open {
        return None;
    }
    match key {
        keyboard::key::Named::Escape => Some(KeyAction::Close),
        keyboard::key::Named::ArrowLeft => Some(KeyAction::Navigate(Direction::Previous)),
        keyboard::key::Named::ArrowRight => Some(KeyAction::Navigate(Direction::Next)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Close,
    Navigate(Direction),
}

fn handle_raw_event(app: &mut App, event: &event::Event) -> Task<Message> {
    if let event::Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(named),
        ..
    }) = event
    {
        match key_action(app.lightbox.is_open(), *named) {
            Some(KeyAction::Close) => app.lightbox.close(),
            Some(KeyAction::Navigate(direction)) => app.lightbox.navigate(direction),
            None => {}
        }
    }
    Task::none()
}

/// Copies the current item's source URL to the system clipboard and confirms
/// with a toast. An item without a source gets a warning toast instead; the
/// action never interrupts the rest of the page.
fn copy_current_link(app: &mut App) -> Task<Message> {
    let url = app.lightbox.frame().and_then(|frame| match frame.surface {
        Surface::Image { url, .. } | Surface::Video { url } => Some(url),
        Surface::Hidden => None,
    });

    match url {
        Some(url) => {
            app.notifications.push(
                Notification::success("notify-link-copied").with_arg("url", url.clone()),
            );
            iced::clipboard::write(url)
        }
        None => {
            app.notifications
                .push(Notification::warning("notify-nothing-to-copy"));
            Task::none()
        }
    }
}

fn handle_gallery_loaded(
    app: &mut App,
    result: Result<Collection, crate::error::Error>,
    base_dir: PathBuf,
    open_index: Option<usize>,
) -> Task<Message> {
    match result {
        Ok(collection) => {
            let count = collection.len();
            log::info!("gallery page loaded with {count} item(s)");
            app.install_collection(collection, base_dir);
            app.notifications.push(
                Notification::info("notify-gallery-loaded").with_arg("count", count.to_string()),
            );
            if let Some(index) = open_index {
                app.lightbox.open(index);
            }
        }
        Err(error) => {
            log::warn!("failed to load gallery page: {error}");
            app.install_collection(Collection::new(), base_dir);
            app.notifications.push(
                Notification::error("notify-gallery-error").with_arg("details", error.to_string()),
            );
        }
    }
    Task::none()
}

/// Reads and scans a gallery page off the UI thread, reporting back through
/// [`Message::GalleryLoaded`].
pub(super) fn load_gallery(path: PathBuf, open_index: Option<usize>) -> Task<Message> {
    Task::perform(
        async move {
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            (Collection::scan_file(&path), base_dir)
        },
        move |(result, base_dir)| Message::GalleryLoaded {
            result,
            base_dir,
            open_index,
        },
    )
}

fn open_gallery_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Gallery pages", &["html", "htm", "xhtml"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::GalleryDialogResult,
    )
}
