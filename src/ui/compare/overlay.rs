// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing the divider and handle, and translating raw
//! window input into [`PointerEvent`]s.
//!
//! A canvas sees every window event, not only those over its bounds. Presses
//! are accepted inside the bounds only; moves and releases anywhere in the
//! window are forwarded while `capturing` is set, which is the case exactly
//! while a drag is running.

use super::view::RenderStrategy;
use super::Message;
use crate::domain::compare::{ContainerGeometry, PointerEvent, PointerInput, PointerSource};
use crate::domain::ui::SplitPosition;
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theming::ColorScheme;
use iced::mouse;
use iced::touch;
use iced::widget::canvas::{self, path, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{Point, Rectangle, Renderer, Theme};

pub struct ComparisonOverlay {
    pub position: SplitPosition,
    pub capturing: bool,
    pub strategy: RenderStrategy,
    pub colors: ColorScheme,
}

impl canvas::Program<Message> for ComparisonOverlay {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let pointer = translate(event, bounds, cursor, self.capturing)?;

        // Geometry is measured now, for this event, never cached.
        let geometry = ContainerGeometry::new(bounds.x, bounds.width);
        Some(
            Action::publish(Message::Pointer {
                event: pointer,
                geometry,
            })
            .and_capture(),
        )
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let x = bounds.width * self.position.as_fraction();
        let center = Point::new(x, bounds.height / 2.0);
        let radius = self.strategy.handle_radius();

        let divider = Path::line(Point::new(x, 0.0), Point::new(x, bounds.height));
        frame.stroke(
            &divider,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(self.colors.divider),
        );

        let handle = Path::circle(center, radius);
        frame.fill(&handle, self.colors.handle_fill);
        frame.stroke(
            &handle,
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(self.colors.handle_border),
        );

        if self.strategy.shows_chevrons() {
            let chevrons = chevrons(center, sizing::HANDLE_CHEVRON);
            frame.stroke(
                &chevrons,
                Stroke::default()
                    .with_width(border::WIDTH_MD)
                    .with_color(self.colors.handle_glyph),
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.capturing {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_over(bounds) {
            Some(point) => {
                let divider_x = bounds.x + bounds.width * self.position.as_fraction();
                if (point.x - divider_x).abs() <= sizing::DIVIDER_HIT_HALF_WIDTH {
                    mouse::Interaction::ResizingHorizontally
                } else {
                    mouse::Interaction::Pointer
                }
            }
            None => mouse::Interaction::default(),
        }
    }
}

/// Left- and right-pointing chevrons either side of `center`.
fn chevrons(center: Point, size: f32) -> Path {
    let gap = size / 2.0;
    let mut builder = path::Builder::new();

    builder.move_to(Point::new(center.x - gap, center.y - size));
    builder.line_to(Point::new(center.x - gap - size, center.y));
    builder.line_to(Point::new(center.x - gap, center.y + size));

    builder.move_to(Point::new(center.x + gap, center.y - size));
    builder.line_to(Point::new(center.x + gap + size, center.y));
    builder.line_to(Point::new(center.x + gap, center.y + size));

    builder.build()
}

/// Maps a window event onto the slider's pointer vocabulary.
///
/// Coordinates stay in window space; the caller pairs them with the
/// container bounds measured for the same event.
pub(crate) fn translate(
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    capturing: bool,
) -> Option<PointerEvent> {
    match event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let point = cursor.position_over(bounds)?;
            Some(PointerEvent::Pressed(PointerInput::Mouse { x: point.x }))
        }
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) if capturing => {
            Some(PointerEvent::Moved(PointerInput::Mouse { x: position.x }))
        }
        iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if capturing => {
            Some(PointerEvent::Released(PointerSource::Mouse))
        }
        iced::Event::Touch(touch::Event::FingerPressed { id, position })
            if bounds.contains(*position) =>
        {
            Some(PointerEvent::Pressed(PointerInput::Touch {
                finger: id.0,
                x: position.x,
            }))
        }
        iced::Event::Touch(touch::Event::FingerMoved { id, position }) if capturing => {
            Some(PointerEvent::Moved(PointerInput::Touch {
                finger: id.0,
                x: position.x,
            }))
        }
        iced::Event::Touch(touch::Event::FingerLifted { id, .. }) if capturing => {
            Some(PointerEvent::Released(PointerSource::Touch(id.0)))
        }
        iced::Event::Touch(touch::Event::FingerLost { .. }) if capturing => {
            Some(PointerEvent::Cancelled)
        }
        _ => None,
    }
}
