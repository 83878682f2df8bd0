// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that only draws the part of its content lying left of
//! the comparison divider.
//!
//! Layout and events pass straight through, so the content keeps its full
//! size and fit mode while the visible region shrinks with the split.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// A widget that clips its content to a fraction of its own width.
pub struct SplitClip<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    fraction: f32,
}

impl<'a, Message, Theme, Renderer> SplitClip<'a, Message, Theme, Renderer> {
    /// Creates a new `SplitClip` showing the leftmost `fraction` (0.0..=1.0)
    /// of `content`.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, fraction: f32) -> Self {
        Self {
            content: content.into(),
            fraction,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SplitClip<'_, Message, Theme, Renderer>
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
        let Some(clip) = visible_region(layout.bounds(), self.fraction, viewport) else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                &clip,
            );
        });
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
}

impl<'a, Message, Theme, Renderer> From<SplitClip<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: SplitClip<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}

/// Helper function to create a split clip wrapper.
pub fn split_clip<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    fraction: f32,
) -> SplitClip<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SplitClip::new(content, fraction)
}

/// Region of `bounds` left of the divider that is also inside `viewport`.
///
/// Returns `None` when nothing would be drawn.
fn visible_region(bounds: Rectangle, fraction: f32, viewport: &Rectangle) -> Option<Rectangle> {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let left = Rectangle {
        width: bounds.width * fraction,
        ..bounds
    };
    if left.width <= 0.0 {
        return None;
    }
    left.intersection(viewport)
}
