// SPDX-License-Identifier: MPL-2.0
//! Split reducer.
//!
//! [`SplitSlider`] owns the split position and the drag session of one
//! mounted comparison. It is a pure reducer: every input is applied
//! synchronously and the only output is the new position when it changed.

use super::geometry::ContainerGeometry;
use super::pointer::{PointerEvent, PointerInput};
use super::session::DragSession;
use crate::domain::ui::SplitPosition;

/// Split position plus the drag session that may be driving it.
#[derive(Debug, Clone, Default)]
pub struct SplitSlider {
    position: SplitPosition,
    session: DragSession,
}

impl SplitSlider {
    /// Creates a slider centred at 50%, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(&self) -> SplitPosition {
        self.position
    }

    #[must_use]
    pub fn session(&self) -> DragSession {
        self.session
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Whether pointer events outside the widget must reach this slider.
    ///
    /// Only a running drag needs them; an idle slider only reacts to presses
    /// inside its own bounds.
    #[must_use]
    pub fn captures_pointer(&self) -> bool {
        self.session.is_dragging()
    }

    /// Applies a pointer event against the geometry read for that event.
    ///
    /// Returns the new position when it changed.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        geometry: ContainerGeometry,
    ) -> Option<SplitPosition> {
        match event {
            PointerEvent::Pressed(input) => {
                self.session.begin(input.source());
                if self.session.is_driven_by(input.source()) {
                    self.follow(input, geometry)
                } else {
                    None
                }
            }
            PointerEvent::Moved(input) => {
                if self.session.is_driven_by(input.source()) {
                    self.follow(input, geometry)
                } else {
                    None
                }
            }
            PointerEvent::Released(source) => {
                self.session.release(source);
                None
            }
            PointerEvent::Cancelled => {
                self.session.cancel();
                None
            }
        }
    }

    /// Sets the split directly (keyboard, reset).
    ///
    /// Returns the new position when it changed.
    pub fn set_position(&mut self, position: SplitPosition) -> Option<SplitPosition> {
        if position == self.position {
            return None;
        }
        self.position = position;
        Some(position)
    }

    /// Moves the split by `delta` percentage points.
    pub fn nudge(&mut self, delta: f32) -> Option<SplitPosition> {
        self.set_position(self.position.nudged(delta))
    }

    /// Recentres the split.
    pub fn reset(&mut self) -> Option<SplitPosition> {
        self.set_position(SplitPosition::CENTER)
    }

    /// Abandons a running drag in place, e.g. when the window loses focus.
    ///
    /// Returns true if a drag was running.
    pub fn cancel_drag(&mut self) -> bool {
        self.session.cancel()
    }

    /// Ends any running drag before the slider goes away.
    ///
    /// After this, [`Self::captures_pointer`] is false and move events are
    /// ignored until a new press.
    pub fn teardown(&mut self) {
        self.session.cancel();
    }

    fn follow(&mut self, input: PointerInput, geometry: ContainerGeometry) -> Option<SplitPosition> {
        let position = geometry.split_at(input.x())?;
        self.set_position(position)
    }
}
