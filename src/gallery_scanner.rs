// SPDX-License-Identifier: MPL-2.0
//! Gallery page scanner for deriving the viewable media collection.
//!
//! This module scans a host page (an XHTML-like markup document) for gallery
//! containers, extracts one media element and an optional caption from each
//! unit, and builds the ordered [`Collection`] the lightbox navigates.
//!
//! The host page contract: any element whose `class` attribute contains the
//! token `gallery` is a gallery container; each `figure` inside it is one
//! navigable unit holding an `<img>` or a `<video>` with a `<source>`, plus an
//! optional `<figcaption>`. Absence of these markers is silent and non-fatal:
//! the collection is simply empty.

use crate::error::{Error, Result};
use crate::media::MediaItem;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Ordered collection of media items derived from one host page.
///
/// Order is document order. The collection is built once at scan time and is
/// not expected to change while a viewer session is active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Collection {
    items: Vec<MediaItem>,
}

impl Collection {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a collection from pre-built items.
    ///
    /// This is the seam that lets the viewer core be exercised with synthetic
    /// collections, independent of any markup shape.
    #[must_use]
    pub fn from_items(items: Vec<MediaItem>) -> Self {
        Self { items }
    }

    /// Reads a gallery page from disk and scans it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the markup cannot be
    /// parsed.
    pub fn scan_file(path: &Path) -> Result<Self> {
        let markup = std::fs::read_to_string(path)?;
        Self::scan_markup(&markup)
    }

    /// Scans markup for gallery containers and builds the collection in
    /// document order.
    ///
    /// A `figure` that contains both an image and a video contributes the
    /// image (first-match wins, like the host pages this was written for).
    /// A `figure` with no recognizable media element contributes a
    /// placeholder item so the counter keeps matching the page.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup cannot be parsed. Zero gallery
    /// containers is not an error.
    pub fn scan_markup(markup: &str) -> Result<Self> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = false;

        let mut items = Vec::new();
        // One entry per currently-open element; true marks a gallery container.
        let mut open_elements: Vec<bool> = Vec::new();
        let mut figure: Option<PendingFigure> = None;
        let mut figure_depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let in_gallery = open_elements.iter().any(|g| *g);
                    open_elements.push(is_gallery_container(e));

                    let name = local_name(e);
                    if name == "figure" && in_gallery && figure.is_none() {
                        figure = Some(PendingFigure::default());
                        figure_depth = open_elements.len();
                    } else if let Some(pending) = figure.as_mut() {
                        match name.as_str() {
                            "img" => pending.observe_image(e),
                            "video" => pending.observe_video(e),
                            "source" => pending.observe_source(e),
                            "figcaption" => pending.in_caption = true,
                            _ => {}
                        }
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    if let Some(pending) = figure.as_mut() {
                        match local_name(e).as_str() {
                            "img" => pending.observe_image(e),
                            "video" => pending.observe_video(e),
                            "source" => pending.observe_source(e),
                            _ => {}
                        }
                    }
                }
                Ok(Event::Text(ref t)) => {
                    if let Some(pending) = figure.as_mut() {
                        if pending.in_caption {
                            let text = t.unescape().map_err(|e| Error::Markup(e.to_string()))?;
                            pending.caption.push_str(&text);
                        }
                    }
                }
                Ok(Event::End(ref e)) => {
                    let name =
                        String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
                    if let Some(pending) = figure.as_mut() {
                        if name == "figcaption" {
                            pending.in_caption = false;
                        }
                    }
                    if name == "figure" && open_elements.len() == figure_depth {
                        if let Some(finished) = figure.take() {
                            items.push(finished.into_item());
                        }
                    }
                    open_elements.pop();
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(Error::from(e)),
                _ => {}
            }
        }

        log::debug!("gallery scan found {} media item(s)", items.len());
        Ok(Self { items })
    }

    /// Returns the number of items in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at the specified index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Returns all items in document order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Iterates over the items in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }
}

/// Accumulates the pieces of one `figure` while its subtree is being read.
#[derive(Debug, Default)]
struct PendingFigure {
    image: Option<(String, String)>,
    video: Option<String>,
    caption: String,
    in_caption: bool,
}

impl PendingFigure {
    fn observe_image(&mut self, e: &BytesStart<'_>) {
        if self.image.is_some() {
            return;
        }
        if let Some(src) = attribute_value(e, b"src") {
            let alt = attribute_value(e, b"alt").unwrap_or_default();
            self.image = Some((src, alt));
        }
    }

    fn observe_video(&mut self, e: &BytesStart<'_>) {
        // A `src` directly on the video element counts as well.
        if self.video.is_none() {
            if let Some(src) = attribute_value(e, b"src") {
                self.video = Some(src);
            }
        }
    }

    fn observe_source(&mut self, e: &BytesStart<'_>) {
        if self.video.is_none() {
            if let Some(src) = attribute_value(e, b"src") {
                self.video = Some(src);
            }
        }
    }

    fn into_item(self) -> MediaItem {
        let caption = self.caption.trim().to_string();

        // Image wins over video when a figure carries both.
        if let Some((src, alt)) = self.image {
            MediaItem::image(src, alt, caption)
        } else if let Some(src) = self.video {
            MediaItem::video(src, caption)
        } else {
            MediaItem::placeholder(caption)
        }
    }
}

/// Checks whether the element's `class` attribute contains the `gallery`
/// token (exact token, not substring: `photo-gallery` does not match).
fn is_gallery_container(e: &BytesStart<'_>) -> bool {
    attribute_value(e, b"class")
        .map(|classes| classes.split_whitespace().any(|token| token == "gallery"))
        .unwrap_or(false)
}

fn attribute_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    // html_attributes tolerates valueless attributes like `controls`.
    e.html_attributes().flatten().find_map(|a| {
        if a.key.as_ref() == key {
            a.unescape_value().ok().map(|v| v.into_owned())
        } else {
            None
        }
    })
}

fn local_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase()
}
