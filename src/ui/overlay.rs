// SPDX-License-Identifier: MPL-2.0
//! The lightbox overlay surface.
//!
//! One full-window region containing the close control, the previous/next
//! controls, an image slot, a video slot, a caption slot, and a counter slot.
//! Exactly one of the image/video slots is visible at a time; everything the
//! overlay shows comes from the [`Frame`] snapshot, so the overlay itself
//! holds no state.

use crate::i18n::fluent::I18n;
use crate::lightbox::{Frame, Surface, VideoSurface};
use crate::ui::page::file_name;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, container, mouse_area, Column, Image, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

const MEDIA_MAX_WIDTH: f32 = 960.0;
const MEDIA_MAX_HEIGHT: f32 = 560.0;
const VIDEO_SLOT_WIDTH: f32 = 640.0;
const VIDEO_SLOT_HEIGHT: f32 = 360.0;

/// Messages emitted by the overlay.
#[derive(Debug, Clone)]
pub enum Message {
    ClosePressed,
    PreviousPressed,
    NextPressed,
    /// Click on the dimmed backdrop outside the content (closes the viewer).
    BackdropPressed,
    /// Click on the content surface itself; absorbed so it cannot fall
    /// through to the backdrop.
    ContentPressed,
    TogglePlayback,
    CopyLinkPressed,
}

/// Context required to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Frame,
    pub base_dir: &'a Path,
    pub video: &'a VideoSurface,
    pub show_captions: bool,
    pub show_counter: bool,
}

/// Renders the overlay for the current frame.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let content = container(content_column(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut layers = Stack::new().push(backdrop).push(content);

    // Close control, top-right corner.
    layers = layers.push(
        container(
            button(Text::new("×").size(36))
                .style(styles::overlay_control)
                .padding([4, 12])
                .on_press(Message::ClosePressed),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .padding(12),
    );

    // Previous/next controls are shown only when there is more than one item.
    if ctx.frame.nav_visible {
        layers = layers
            .push(nav_control("‹", Message::PreviousPressed, alignment::Horizontal::Left))
            .push(nav_control("›", Message::NextPressed, alignment::Horizontal::Right));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// The centered content: media slot, caption, counter, copy-link control.
fn content_column<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(media_slot(ctx));

    if ctx.show_captions && !ctx.frame.caption.is_empty() {
        column = column.push(
            Text::new(ctx.frame.caption.clone())
                .size(15)
                .color(styles::palette::OVERLAY_TEXT),
        );
    }

    let mut footer = Row::new().spacing(18).align_y(alignment::Vertical::Center);
    if ctx.show_counter {
        footer = footer.push(
            Text::new(ctx.frame.counter.clone())
                .size(13)
                .color(styles::palette::OVERLAY_TEXT_DIM),
        );
    }
    if !matches!(ctx.frame.surface, Surface::Hidden) {
        footer = footer.push(
            button(Text::new(ctx.i18n.tr("lightbox-copy-link")).size(13))
                .style(styles::overlay_control)
                .padding([2, 8])
                .on_press(Message::CopyLinkPressed),
        );
    }
    column = column.push(footer);

    // Absorb clicks so they never reach the backdrop underneath.
    mouse_area(column)
        .on_press(Message::ContentPressed)
        .into()
}

/// The visible media surface for the current item.
fn media_slot<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match &ctx.frame.surface {
        Surface::Image { url, .. } => container(
            Image::new(Handle::from_path(ctx.base_dir.join(url)))
                .content_fit(ContentFit::Contain)
                .width(Length::Fixed(MEDIA_MAX_WIDTH))
                .height(Length::Fixed(MEDIA_MAX_HEIGHT)),
        )
        .into(),
        Surface::Video { url } => video_slot(ctx, url),
        Surface::Hidden => container(
            Text::new(ctx.i18n.tr("lightbox-missing-media"))
                .size(14)
                .color(styles::palette::OVERLAY_TEXT_DIM),
        )
        .padding(48)
        .into(),
    }
}

/// The video slot: dark surface with the source name and a play/pause
/// control. The actual source/reload state lives in [`VideoSurface`].
fn video_slot<'a>(ctx: &ViewContext<'a>, url: &str) -> Element<'a, Message> {
    let playback_key = if ctx.video.is_playing() {
        "video-pause-button"
    } else {
        "video-play-button"
    };

    let playback = button(Text::new(ctx.i18n.tr(playback_key)).size(14))
        .style(styles::overlay_control)
        .padding([4, 12])
        .on_press(Message::TogglePlayback);

    container(
        Column::new()
            .spacing(10)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("▶").size(44))
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("video-source-label", &[("name", &file_name(url))]),
                )
                .size(13),
            )
            .push(playback),
    )
    .width(Length::Fixed(VIDEO_SLOT_WIDTH))
    .height(Length::Fixed(VIDEO_SLOT_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::media_surface)
    .into()
}

fn nav_control(
    glyph: &'static str,
    message: Message,
    side: alignment::Horizontal,
) -> Element<'static, Message> {
    container(
        button(Text::new(glyph).size(44))
            .style(styles::overlay_control)
            .padding([4, 14])
            .on_press(message),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(side)
    .align_y(alignment::Vertical::Center)
    .padding(16)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::{Frame, Surface, VideoSurface};

    fn sample_frame(surface: Surface) -> Frame {
        Frame {
            surface,
            caption: "A caption".to_string(),
            counter: "1 / 3".to_string(),
            nav_visible: true,
        }
    }

    #[test]
    fn overlay_renders_image_frame() {
        let i18n = I18n::default();
        let video = VideoSurface::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            frame: sample_frame(Surface::Image {
                url: "a.jpg".into(),
                alt: "A".into(),
            }),
            base_dir: Path::new("."),
            video: &video,
            show_captions: true,
            show_counter: true,
        });
    }

    #[test]
    fn overlay_renders_video_frame() {
        let i18n = I18n::default();
        let mut video = VideoSurface::new();
        video.show("b.mp4");
        let _element = view(ViewContext {
            i18n: &i18n,
            frame: sample_frame(Surface::Video { url: "b.mp4".into() }),
            base_dir: Path::new("."),
            video: &video,
            show_captions: true,
            show_counter: true,
        });
    }

    #[test]
    fn overlay_renders_hidden_surface() {
        let i18n = I18n::default();
        let video = VideoSurface::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            frame: Frame {
                surface: Surface::Hidden,
                caption: String::new(),
                counter: "2 / 2".to_string(),
                nav_visible: false,
            },
            base_dir: Path::new("."),
            video: &video,
            show_captions: true,
            show_counter: true,
        });
    }
}
