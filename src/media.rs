// SPDX-License-Identifier: MPL-2.0
//! Core media domain types: the two media kinds, one gallery entry, and
//! extension-based kind detection for source URLs.
//!
//! These types are pure data without any presentation dependencies. The
//! presentation layer resolves source URLs against the host page's base
//! directory when it actually needs to show something.

/// Represents the two media formats a gallery entry can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Static image (JPEG, PNG, BMP, etc.)
    Image,
    /// Video (MP4, WebM, etc.)
    Video,
}

/// Supported media extensions.
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];

    /// Video file extensions
    pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "avi", "mov", "mkv", "webm"];
}

/// Detects the media kind of a source URL from its extension.
///
/// Matching is case-insensitive; an optional query string or fragment is
/// ignored. Returns `None` for unrecognized extensions and empty URLs.
#[must_use]
pub fn detect_media_kind(source_url: &str) -> Option<MediaKind> {
    let path = source_url
        .split(['?', '#'])
        .next()
        .unwrap_or(source_url);
    let extension = path.rsplit('.').next()?;
    if extension.len() == path.len() {
        // No '.' at all; rsplit returned the whole path.
        return None;
    }
    let extension = extension.to_ascii_lowercase();

    if extensions::IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Image)
    } else if extensions::VIDEO_EXTENSIONS.contains(&extension.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// One entry in the viewable collection, derived from a gallery container at
/// discovery time and immutable thereafter.
///
/// A container with no recognizable media element still yields an item (a
/// placeholder with an empty source) so the collection keeps matching the
/// host page item-for-item; the viewer renders caption and counter for such
/// items and shows no media surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    kind: MediaKind,
    source_url: String,
    alt_text: String,
    caption_text: String,
}

impl MediaItem {
    /// Creates an image item.
    #[must_use]
    pub fn image(
        source_url: impl Into<String>,
        alt_text: impl Into<String>,
        caption_text: impl Into<String>,
    ) -> Self {
        Self {
            kind: MediaKind::Image,
            source_url: source_url.into(),
            alt_text: alt_text.into(),
            caption_text: caption_text.into(),
        }
    }

    /// Creates a video item.
    #[must_use]
    pub fn video(source_url: impl Into<String>, caption_text: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            source_url: source_url.into(),
            alt_text: String::new(),
            caption_text: caption_text.into(),
        }
    }

    /// Creates a placeholder item for a gallery container that carries no
    /// recognizable media element. The item has an empty source and renders
    /// caption and counter only.
    #[must_use]
    pub fn placeholder(caption_text: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            source_url: String::new(),
            alt_text: String::new(),
            caption_text: caption_text.into(),
        }
    }

    /// Returns the media kind.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Returns the source URL as found on the host page (possibly relative).
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Returns the alternative text (images only; empty otherwise).
    #[must_use]
    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    /// Returns the caption text (empty string if the container had none).
    #[must_use]
    pub fn caption_text(&self) -> &str {
        &self.caption_text
    }

    /// Whether this item carries a usable media source.
    #[must_use]
    pub fn has_source(&self) -> bool {
        !self.source_url.is_empty()
    }
}
