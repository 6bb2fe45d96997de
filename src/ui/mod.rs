// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`page`] - Host page: thumbnail grid, reading progress, scroll-to-top
//! - [`overlay`] - The lightbox overlay surface
//! - [`notifications`] - Toast notification system for user feedback
//! - [`scroll_guard`] - Custom widget enforcing the page scroll lock
//! - [`styles`] - Centralized styling (palette, containers, buttons)

pub mod notifications;
pub mod overlay;
pub mod page;
pub mod scroll_guard;
pub mod styles;
