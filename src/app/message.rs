// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery_scanner::Collection;
use crate::lightbox::Direction;
use crate::ui::notifications;
use crate::ui::overlay;
use crate::ui::page;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Overlay(overlay::Message),
    Notification(notifications::Message),
    /// Externally callable surface: open the lightbox at a collection index.
    OpenLightbox(usize),
    /// Externally callable surface: close the lightbox.
    CloseLightbox,
    /// Externally callable surface: move the lightbox cursor.
    NavigateLightbox(Direction),
    /// Result of reading and scanning a gallery page.
    GalleryLoaded {
        result: Result<Collection, Error>,
        base_dir: PathBuf,
        /// Index to open right after loading (deep link).
        open_index: Option<usize>,
    },
    /// Result from the open gallery dialog.
    GalleryDialogResult(Option<PathBuf>),
    /// Raw runtime event routed to the keyboard handler.
    RawEvent(iced::event::Event),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional gallery page to load on startup.
    pub page_path: Option<String>,
    /// Optional collection index to open the lightbox at after loading.
    pub open_index: Option<usize>,
}
