// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a gallery-page media viewer built with the Iced GUI
//! framework.
//!
//! It scans a host page for gallery containers, renders the page as a
//! thumbnail grid, and overlays a lightbox viewer with wraparound
//! keyboard/pointer navigation over the derived media collection.

#![doc(html_root_url = "https://docs.rs/iced_lightbox/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery_scanner;
pub mod i18n;
pub mod lightbox;
pub mod media;
pub mod ui;
