// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that withholds mouse wheel events from the page
//! scrollable while the viewer's scroll lock is held.
//!
//! The overlay backdrop already captures pointer presses; wheel events are
//! the remaining path by which the background page could scroll while the
//! lightbox is open. The wrapper keeps the scrollable (and its offset) in the
//! widget tree, so releasing the lock restores scrolling exactly where it
//! was.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// Wraps content and swallows wheel scroll events while `locked` is true.
pub struct ScrollGuard<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    locked: bool,
}

impl<'a, Message, Theme, Renderer> ScrollGuard<'a, Message, Theme, Renderer> {
    /// Creates a new `ScrollGuard` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, locked: bool) -> Self {
        Self {
            content: content.into(),
            locked,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGuard<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if self.locked && is_wheel_event(event) {
            return;
        }

        // Pass through all other events
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGuard<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(guard: ScrollGuard<'a, Message, Theme, Renderer>) -> Self {
        Self::new(guard)
    }
}

/// Helper function to wrap content in a scroll guard.
pub fn scroll_guard<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    locked: bool,
) -> ScrollGuard<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGuard::new(content, locked)
}

fn is_wheel_event(event: &Event) -> bool {
    matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_event_is_detected() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        assert!(is_wheel_event(&event));
    }

    #[test]
    fn other_mouse_events_are_not_detected() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!is_wheel_event(&event));
    }

    #[test]
    fn window_events_are_not_detected() {
        let event = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!is_wheel_event(&event));
    }
}
