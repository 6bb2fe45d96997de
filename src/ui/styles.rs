// SPDX-License-Identifier: MPL-2.0
//! Centralized styling for the page and overlay surfaces.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

/// Color constants shared across the UI.
pub mod palette {
    use iced::Color;

    pub const SUCCESS: Color = Color::from_rgb(0.18, 0.65, 0.35);
    pub const INFO: Color = Color::from_rgb(0.20, 0.47, 0.85);
    pub const WARNING: Color = Color::from_rgb(0.90, 0.60, 0.15);
    pub const ERROR: Color = Color::from_rgb(0.82, 0.22, 0.20);

    /// Dimmed backdrop behind the lightbox content.
    pub const BACKDROP: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.88,
    };

    /// Dark surface used for the video slot and thumbnails without preview.
    pub const MEDIA_SURFACE: Color = Color::from_rgb(0.09, 0.09, 0.11);

    pub const OVERLAY_TEXT: Color = Color::from_rgb(0.95, 0.95, 0.95);
    pub const OVERLAY_TEXT_DIM: Color = Color::from_rgb(0.70, 0.70, 0.72);
}

/// Style for the full-window dimmed backdrop of the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKDROP)),
        ..Default::default()
    }
}

/// Style for the dark video/thumbnail surface.
pub fn media_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::MEDIA_SURFACE)),
        text_color: Some(palette::OVERLAY_TEXT),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a toast notification container with the severity accent color.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.92,
            ..palette::MEDIA_SURFACE
        })),
        text_color: Some(palette::OVERLAY_TEXT),
        border: Border {
            color: accent,
            width: 1.5,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Borderless button drawn as plain overlay text; used for the close and
/// navigation glyphs.
pub fn overlay_control(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color::WHITE,
        _ => palette::OVERLAY_TEXT,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Transparent button wrapping a thumbnail cell on the host page.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::INFO,
            width: 2.0,
            radius: 4.0.into(),
        },
        _ => Border {
            radius: 4.0.into(),
            ..Default::default()
        },
    };
    button::Style {
        background: None,
        border,
        shadow: Shadow::default(),
        ..Default::default()
    }
}
