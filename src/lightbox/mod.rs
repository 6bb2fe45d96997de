// SPDX-License-Identifier: MPL-2.0
//! The lightbox media viewer core.
//!
//! This module owns the viewer state machine: a current-index cursor over the
//! derived [`Collection`], the open/closed state, the page scroll lock, and
//! the video surface model. It is pure and presentation-independent; the
//! overlay renders whatever [`Lightbox::frame`] reports.
//!
//! The state machine has two states only:
//!
//! ```text
//! CLOSED --open(i)--> OPEN
//! OPEN --close()--> CLOSED
//! OPEN --navigate(d)--> OPEN   (current index updated, wrapping around)
//! ```
//!
//! All operations are synchronous, idempotent where re-entry is possible, and
//! absorb precondition violations as silent no-ops rather than failing the
//! host application.

mod frame;
mod scroll_lock;
mod video;

pub use frame::{Frame, Surface};
pub use scroll_lock::ScrollLock;
pub use video::VideoSurface;

use crate::gallery_scanner::Collection;
use crate::media::MediaKind;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Move to the previous item, wrapping to the last from the first.
    Previous,
    /// Move to the next item, wrapping to the first from the last.
    Next,
}

impl Direction {
    /// The signed index offset of this direction.
    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

/// The lightbox viewer: one overlay surface, an ordered collection, a cursor,
/// and the open/closed state.
///
/// Constructed closed with the cursor at zero. The cursor is meaningful only
/// while the viewer is open; it is always in `[0, len)` once `open` succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    collection: Collection,
    is_open: bool,
    current_index: usize,
    scroll_lock: ScrollLock,
    video: VideoSurface,
}

impl Lightbox {
    /// Creates a closed viewer over the given collection.
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            is_open: false,
            current_index: 0,
            scroll_lock: ScrollLock::new(),
            video: VideoSurface::new(),
        }
    }

    /// Replaces the collection, closing the viewer first so no stale cursor
    /// can outlive the items it pointed into.
    pub fn replace_collection(&mut self, collection: Collection) {
        self.close();
        self.current_index = 0;
        self.collection = collection;
    }

    /// Returns the collection the viewer navigates.
    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The cursor position. Meaningful only while the viewer is open.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether page scrolling is currently suspended.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Returns the video surface state for rendering.
    #[must_use]
    pub fn video(&self) -> &VideoSurface {
        &self.video
    }

    /// Opens the viewer at `index` and suspends page scrolling.
    ///
    /// Opening with an empty collection or an out-of-range index is a silent
    /// no-op: the viewer must never crash the page or show stale content.
    /// This is the only operation that acquires the scroll lock.
    pub fn open(&mut self, index: usize) {
        if index >= self.collection.len() {
            log::debug!(
                "ignoring open({index}) on collection of {} item(s)",
                self.collection.len()
            );
            return;
        }

        self.current_index = index;
        self.is_open = true;
        self.scroll_lock.acquire();
        self.show_current();
    }

    /// Moves the cursor one step, wrapping around in both directions, and
    /// re-renders. A no-op while closed; idempotent for single-item
    /// collections (mod 1 always yields 0).
    pub fn navigate(&mut self, direction: Direction) {
        if !self.is_open {
            log::debug!("ignoring navigate while closed");
            return;
        }
        let len = self.collection.len();
        if len == 0 {
            return;
        }

        // True modulo: the result must be non-negative even though the
        // offset can be negative.
        let len = len as isize;
        let stepped = self.current_index as isize + direction.offset();
        self.current_index = stepped.rem_euclid(len) as usize;
        self.show_current();
    }

    /// Closes the viewer, pauses any active video playback, and releases the
    /// scroll lock unconditionally. Calling while already closed is a no-op.
    pub fn close(&mut self) {
        self.is_open = false;
        self.video.pause();
        self.scroll_lock.release();
    }

    /// Toggles play/pause on the video surface. Only meaningful while the
    /// viewer is open on a video item; ignored otherwise.
    pub fn toggle_video_playback(&mut self) {
        if self.is_open {
            self.video.toggle();
        }
    }

    /// Produces the rendering snapshot for the current item, or `None` while
    /// the viewer is closed.
    #[must_use]
    pub fn frame(&self) -> Option<Frame> {
        if !self.is_open {
            return None;
        }
        let item = self.collection.get(self.current_index)?;

        let surface = if !item.has_source() {
            Surface::Hidden
        } else {
            match item.kind() {
                MediaKind::Image => Surface::Image {
                    url: item.source_url().to_string(),
                    alt: item.alt_text().to_string(),
                },
                MediaKind::Video => Surface::Video {
                    url: item.source_url().to_string(),
                },
            }
        };

        Some(Frame {
            surface,
            caption: item.caption_text().to_string(),
            counter: format!("{} / {}", self.current_index + 1, self.collection.len()),
            nav_visible: self.collection.len() > 1,
        })
    }

    /// Prepares the media surfaces for the item under the cursor: a video
    /// item gets its source set and reloaded; anything else pauses the video
    /// slot so playback is never left running behind an image.
    fn show_current(&mut self) {
        match self.collection.get(self.current_index) {
            Some(item) if item.kind() == MediaKind::Video && item.has_source() => {
                self.video.show(item.source_url());
            }
            _ => self.video.pause(),
        }
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new(Collection::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;

    fn sample_collection() -> Collection {
        Collection::from_items(vec![
            MediaItem::image("a.jpg", "A", "cap1"),
            MediaItem::video("b.mp4", "cap2"),
            MediaItem::image("c.png", "C", ""),
        ])
    }

    #[test]
    fn new_viewer_starts_closed_at_index_zero() {
        let viewer = Lightbox::new(sample_collection());
        assert!(!viewer.is_open());
        assert_eq!(viewer.current_index(), 0);
        assert!(!viewer.scroll_locked());
        assert!(viewer.frame().is_none());
    }

    #[test]
    fn open_sets_cursor_and_acquires_scroll_lock() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(1);

        assert!(viewer.is_open());
        assert_eq!(viewer.current_index(), 1);
        assert!(viewer.scroll_locked());
    }

    #[test]
    fn open_on_empty_collection_is_a_no_op() {
        let mut viewer = Lightbox::new(Collection::new());
        viewer.open(0);

        assert!(!viewer.is_open());
        assert!(!viewer.scroll_locked());
        assert!(viewer.frame().is_none());
    }

    #[test]
    fn open_with_out_of_range_index_is_a_no_op() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(3);

        assert!(!viewer.is_open());
        assert!(!viewer.scroll_locked());
    }

    #[test]
    fn navigate_cycles_through_the_scenario() {
        let mut viewer = Lightbox::new(sample_collection());

        viewer.open(0);
        let frame = viewer.frame().expect("open frame");
        assert!(matches!(frame.surface, Surface::Image { ref url, .. } if url == "a.jpg"));
        assert_eq!(frame.counter, "1 / 3");
        assert_eq!(frame.caption, "cap1");

        viewer.navigate(Direction::Next);
        let frame = viewer.frame().expect("frame");
        assert!(matches!(frame.surface, Surface::Video { ref url } if url == "b.mp4"));
        assert_eq!(frame.counter, "2 / 3");
        assert_eq!(frame.caption, "cap2");

        viewer.navigate(Direction::Next);
        let frame = viewer.frame().expect("frame");
        assert!(matches!(frame.surface, Surface::Image { ref url, .. } if url == "c.png"));
        assert_eq!(frame.counter, "3 / 3");
        assert_eq!(frame.caption, "");

        // Wraps past the end back to the first item.
        viewer.navigate(Direction::Next);
        assert_eq!(viewer.frame().expect("frame").counter, "1 / 3");

        // And backwards from the first to the last.
        viewer.navigate(Direction::Previous);
        assert_eq!(viewer.frame().expect("frame").counter, "3 / 3");
    }

    #[test]
    fn n_steps_forward_return_to_the_start() {
        let mut viewer = Lightbox::new(sample_collection());
        for start in 0..3 {
            viewer.open(start);
            for _ in 0..3 {
                viewer.navigate(Direction::Next);
            }
            assert_eq!(viewer.current_index(), start);
            viewer.close();
        }
    }

    #[test]
    fn navigate_never_leaves_the_index_range() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(0);

        for step in 0..20 {
            let direction = if step % 3 == 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            viewer.navigate(direction);
            assert!(viewer.current_index() < viewer.collection().len());
        }
    }

    #[test]
    fn single_item_navigation_is_a_no_op_on_the_cursor() {
        let collection = Collection::from_items(vec![MediaItem::image("only.jpg", "", "")]);
        let mut viewer = Lightbox::new(collection);
        viewer.open(0);

        viewer.navigate(Direction::Next);
        assert_eq!(viewer.current_index(), 0);
        viewer.navigate(Direction::Previous);
        assert_eq!(viewer.current_index(), 0);
    }

    #[test]
    fn single_item_hides_navigation_controls() {
        let collection = Collection::from_items(vec![MediaItem::image("only.jpg", "", "")]);
        let mut viewer = Lightbox::new(collection);
        viewer.open(0);

        assert!(!viewer.frame().expect("frame").nav_visible);
    }

    #[test]
    fn multi_item_shows_navigation_controls() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(0);
        assert!(viewer.frame().expect("frame").nav_visible);
    }

    #[test]
    fn navigate_while_closed_is_a_no_op() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.navigate(Direction::Next);
        assert_eq!(viewer.current_index(), 0);
        assert!(!viewer.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(0);

        viewer.close();
        let after_first = viewer.clone();
        viewer.close();
        assert_eq!(viewer, after_first);
    }

    #[test]
    fn open_then_close_restores_scroll_state() {
        let mut viewer = Lightbox::new(sample_collection());
        assert!(!viewer.scroll_locked());

        viewer.open(2);
        assert!(viewer.scroll_locked());

        viewer.close();
        assert!(!viewer.scroll_locked());
    }

    #[test]
    fn scroll_lock_always_matches_open_state() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(0);
        viewer.navigate(Direction::Next);
        assert_eq!(viewer.is_open(), viewer.scroll_locked());
        viewer.close();
        assert_eq!(viewer.is_open(), viewer.scroll_locked());
        viewer.open(1);
        assert_eq!(viewer.is_open(), viewer.scroll_locked());
    }

    #[test]
    fn showing_a_video_sets_and_reloads_the_surface() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(1);

        assert_eq!(viewer.video().source(), Some("b.mp4"));
        assert_eq!(viewer.video().generation(), 1);
    }

    #[test]
    fn navigating_away_from_a_video_pauses_it() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(1);
        viewer.toggle_video_playback();
        assert!(viewer.video().is_playing());

        viewer.navigate(Direction::Next);
        assert!(!viewer.video().is_playing());
    }

    #[test]
    fn close_pauses_video_playback() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(1);
        viewer.toggle_video_playback();

        viewer.close();
        assert!(!viewer.video().is_playing());
    }

    #[test]
    fn toggle_video_playback_while_closed_is_ignored() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(1);
        viewer.close();

        viewer.toggle_video_playback();
        assert!(!viewer.video().is_playing());
    }

    #[test]
    fn placeholder_item_renders_caption_and_counter_only() {
        let collection = Collection::from_items(vec![
            MediaItem::image("a.jpg", "", ""),
            MediaItem::placeholder("no media here"),
        ]);
        let mut viewer = Lightbox::new(collection);
        viewer.open(1);

        let frame = viewer.frame().expect("frame");
        assert_eq!(frame.surface, Surface::Hidden);
        assert_eq!(frame.caption, "no media here");
        assert_eq!(frame.counter, "2 / 2");
    }

    #[test]
    fn replace_collection_closes_and_resets_the_cursor() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(2);

        viewer.replace_collection(Collection::from_items(vec![MediaItem::image(
            "new.jpg", "", "",
        )]));

        assert!(!viewer.is_open());
        assert!(!viewer.scroll_locked());
        assert_eq!(viewer.current_index(), 0);
        assert_eq!(viewer.collection().len(), 1);
    }

    #[test]
    fn reopening_after_close_works() {
        let mut viewer = Lightbox::new(sample_collection());
        viewer.open(0);
        viewer.close();
        viewer.open(2);

        assert!(viewer.is_open());
        assert_eq!(viewer.frame().expect("frame").counter, "3 / 3");
    }
}
