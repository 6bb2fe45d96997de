// SPDX-License-Identifier: MPL-2.0
//! Host page view: the scrollable thumbnail grid and its page decorations
//! (reading progress, scroll-to-top, empty state).
//!
//! Every thumbnail is bound to its position in the collection, so a click
//! opens the lightbox at exactly that index.

use crate::gallery_scanner::Collection;
use crate::i18n::fluent::I18n;
use crate::media::{MediaItem, MediaKind};
use crate::ui::scroll_guard::scroll_guard;
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, container, progress_bar, Column, Id, Image, Row, Scrollable, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Number of thumbnails per grid row.
const GRID_COLUMNS: usize = 3;

const THUMBNAIL_WIDTH: f32 = 240.0;
const THUMBNAIL_HEIGHT: f32 = 160.0;

/// Scroll distance after which the scroll-to-top button appears, in pixels.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;

/// Messages emitted by the host page.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was clicked; the payload is its collection index.
    ThumbnailPressed(usize),
    /// The page scrollable moved.
    Scrolled(Viewport),
    /// The scroll-to-top button was pressed.
    ScrollToTop,
    /// The "Open gallery…" action was triggered.
    OpenGalleryPressed,
}

/// Context required to render the host page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub collection: &'a Collection,
    pub base_dir: &'a Path,
    /// Fraction of the page scrolled, in `[0, 1]`.
    pub scroll_progress: f32,
    pub show_scroll_top: bool,
    pub show_captions: bool,
    /// Whether the viewer currently holds the page scroll lock.
    pub scroll_locked: bool,
}

/// Widget id of the page scrollable, shared with scroll-to-top tasks.
pub fn scrollable_id() -> Id {
    Id::new("gallery-page")
}

/// Renders the host page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.collection.is_empty() {
        return empty_state(ctx.i18n);
    }

    let mut grid = Column::new().spacing(16).padding(24);
    for (row_start, chunk) in ctx
        .collection
        .items()
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| (row * GRID_COLUMNS, chunk))
    {
        let mut row = Row::new().spacing(16);
        for (offset, item) in chunk.iter().enumerate() {
            row = row.push(thumbnail_cell(
                item,
                row_start + offset,
                ctx.base_dir,
                ctx.i18n,
                ctx.show_captions,
            ));
        }
        grid = grid.push(row);
    }

    let scroll = Scrollable::new(
        container(grid)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .id(scrollable_id())
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(Message::Scrolled);

    let page = Column::new()
        .push(progress_bar(0.0..=1.0, ctx.scroll_progress))
        .push(scroll_guard(scroll, ctx.scroll_locked));

    let mut layers = Stack::new().push(page);

    if ctx.show_scroll_top {
        let scroll_top = button(Text::new("↑").size(22))
            .style(styles::overlay_control)
            .padding([8, 14])
            .on_press(Message::ScrollToTop);

        layers = layers.push(
            container(container(scroll_top).style(styles::media_surface))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(24)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

/// One grid cell: the clickable media preview plus its caption.
fn thumbnail_cell<'a>(
    item: &'a MediaItem,
    index: usize,
    base_dir: &Path,
    i18n: &I18n,
    show_captions: bool,
) -> Element<'a, Message> {
    let preview: Element<'_, Message> = if !item.has_source() {
        placeholder_preview(i18n)
    } else {
        match item.kind() {
            MediaKind::Image => Image::new(Handle::from_path(base_dir.join(item.source_url())))
                .width(Length::Fixed(THUMBNAIL_WIDTH))
                .height(Length::Fixed(THUMBNAIL_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            MediaKind::Video => video_preview(item.source_url(), i18n),
        }
    };

    let cell = button(preview)
        .style(styles::thumbnail)
        .padding(0)
        .on_press(Message::ThumbnailPressed(index));

    let mut column = Column::new()
        .spacing(6)
        .width(Length::Fixed(THUMBNAIL_WIDTH))
        .push(cell);

    if show_captions && !item.caption_text().is_empty() {
        column = column.push(
            Text::new(item.caption_text())
                .size(13)
                .color(styles::palette::OVERLAY_TEXT_DIM),
        );
    }

    column.into()
}

fn video_preview<'a>(source_url: &str, i18n: &I18n) -> Element<'a, Message> {
    let name = file_name(source_url);
    container(
        Column::new()
            .spacing(8)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new("▶").size(34))
            .push(Text::new(i18n.tr_with_args("video-source-label", &[("name", &name)])).size(12)),
    )
    .width(Length::Fixed(THUMBNAIL_WIDTH))
    .height(Length::Fixed(THUMBNAIL_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::media_surface)
    .into()
}

fn placeholder_preview<'a>(i18n: &I18n) -> Element<'a, Message> {
    container(Text::new(i18n.tr("lightbox-missing-media")).size(12))
        .width(Length::Fixed(THUMBNAIL_WIDTH))
        .height(Length::Fixed(THUMBNAIL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::media_surface)
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let open_button = button(Text::new(i18n.tr("open-gallery-button")))
        .padding([8, 16])
        .on_press(Message::OpenGalleryPressed);

    let content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("page-empty-heading")).size(24))
        .push(Text::new(i18n.tr("page-empty-body")).size(14))
        .push(open_button);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Extracts the trailing path segment of a source URL for display.
pub fn file_name(source_url: &str) -> String {
    source_url
        .rsplit('/')
        .next()
        .unwrap_or(source_url)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery_scanner::Collection;
    use crate::media::MediaItem;

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name("clips/deep/tour.mp4"), "tour.mp4");
        assert_eq!(file_name("flat.mp4"), "flat.mp4");
    }

    #[test]
    fn page_view_renders_for_empty_collection() {
        let i18n = I18n::default();
        let collection = Collection::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
            base_dir: Path::new("."),
            scroll_progress: 0.0,
            show_scroll_top: false,
            show_captions: true,
            scroll_locked: false,
        });
    }

    #[test]
    fn page_view_renders_for_mixed_collection() {
        let i18n = I18n::default();
        let collection = Collection::from_items(vec![
            MediaItem::image("a.jpg", "A", "cap"),
            MediaItem::video("b.mp4", ""),
            MediaItem::placeholder("empty"),
        ]);
        let _element = view(ViewContext {
            i18n: &i18n,
            collection: &collection,
            base_dir: Path::new("."),
            scroll_progress: 0.4,
            show_scroll_top: true,
            show_captions: true,
            scroll_locked: true,
        });
    }
}
