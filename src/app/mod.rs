// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the host page and the
//! lightbox overlay.
//!
//! The `App` struct wires together the viewer core, localization, and
//! preferences, and translates messages into side effects like clipboard
//! writes or gallery loading. Policy decisions (window sizing, which index a
//! deep link opens, notification routing) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery_scanner::Collection;
use crate::i18n::fluent::I18n;
use crate::lightbox::Lightbox;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 450;

/// Root Iced application state bridging the host page, the lightbox, and
/// localized preferences.
pub struct App {
    pub i18n: I18n,
    lightbox: Lightbox,
    /// Directory the current page's relative source URLs resolve against.
    base_dir: PathBuf,
    page_path: Option<PathBuf>,
    /// Fraction of the page scrolled, in `[0, 1]`.
    scroll_progress: f32,
    /// Absolute page scroll offset in pixels, for the scroll-top threshold.
    scroll_offset_y: f32,
    show_captions: bool,
    show_counter: bool,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.lightbox.collection().len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            lightbox: Lightbox::default(),
            base_dir: PathBuf::from("."),
            page_path: None,
            scroll_progress: 0.0,
            scroll_offset_y: 0.0,
            show_captions: true,
            show_counter: true,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off gallery loading
    /// based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            show_captions: config.show_captions.unwrap_or(true),
            show_counter: config.show_counter.unwrap_or(true),
            page_path: flags.page_path.as_ref().map(PathBuf::from),
            ..Self::default()
        };

        let task = match flags.page_path {
            Some(path) => update::load_gallery(PathBuf::from(path), flags.open_index),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page_name = self
            .page_path
            .as_ref()
            .and_then(|path| path.file_name().and_then(|name| name.to_str()));

        match page_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Replaces the current collection and page location, closing any open
    /// viewer session and resetting page scroll state.
    fn install_collection(&mut self, collection: Collection, base_dir: PathBuf) {
        self.base_dir = base_dir;
        self.lightbox.replace_collection(collection);
        self.scroll_progress = 0.0;
        self.scroll_offset_y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;

    #[test]
    fn default_app_starts_with_closed_viewer_and_empty_page() {
        let app = App::default();
        assert!(!app.lightbox.is_open());
        assert!(app.lightbox.collection().is_empty());
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn title_shows_app_name_without_page() {
        let app = App::default();
        let title = app.title();
        assert!(!title.contains(" - "));
    }

    #[test]
    fn title_shows_page_name_when_loaded() {
        let app = App {
            page_path: Some(PathBuf::from("/pages/portfolio.html")),
            ..App::default()
        };
        assert!(app.title().starts_with("portfolio.html - "));
    }

    #[test]
    fn install_collection_resets_scroll_state() {
        let mut app = App {
            scroll_progress: 0.7,
            scroll_offset_y: 900.0,
            ..App::default()
        };
        app.lightbox
            .replace_collection(Collection::from_items(vec![MediaItem::image(
                "a.jpg", "", "",
            )]));
        app.lightbox.open(0);

        app.install_collection(Collection::new(), PathBuf::from("/tmp"));

        assert!(!app.lightbox.is_open());
        assert_eq!(app.scroll_progress, 0.0);
        assert_eq!(app.scroll_offset_y, 0.0);
        assert_eq!(app.base_dir, PathBuf::from("/tmp"));
    }
}
