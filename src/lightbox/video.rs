// SPDX-License-Identifier: MPL-2.0
//! Video slot model for the overlay's video surface.
//!
//! The surface tracks the source, the playing flag, and a reload generation.
//! The source swap is fire-and-forget: bumping the generation is the
//! equivalent of re-triggering a load on the underlying media element, whose
//! buffering is not modeled here.

/// State of the overlay's video surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoSurface {
    source: Option<String>,
    playing: bool,
    generation: u64,
}

impl VideoSurface {
    /// Creates an empty, paused surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the surface at a new source and triggers a reload.
    ///
    /// Always reloads, even for the same source, matching the behavior of
    /// re-opening an item. Playback starts paused.
    pub fn show(&mut self, source_url: &str) {
        self.source = Some(source_url.to_string());
        self.generation = self.generation.wrapping_add(1);
        self.playing = false;
    }

    /// Pauses playback. The source is kept so the hidden slot can be shown
    /// again without another swap.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Toggles play/pause. Has no effect when no source is set.
    pub fn toggle(&mut self) {
        if self.source.is_some() {
            self.playing = !self.playing;
        }
    }

    /// Returns the current source URL, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Whether playback is currently active.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Reload counter; bumped on every source swap.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
