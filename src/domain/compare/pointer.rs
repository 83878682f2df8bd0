// SPDX-License-Identifier: MPL-2.0
//! Normalized pointer input.
//!
//! Mouse and touch events are resolved once into a [`PointerInput`] so the
//! split computation only ever sees a single horizontal coordinate.

/// Identifies the device driving a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    /// A touch contact, identified by its finger id.
    Touch(u64),
}

/// A horizontal pointer coordinate tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Mouse { x: f32 },
    Touch { finger: u64, x: f32 },
}

impl PointerInput {
    /// Horizontal coordinate, in the same space as [`super::ContainerGeometry`].
    #[must_use]
    pub fn x(self) -> f32 {
        match self {
            PointerInput::Mouse { x } | PointerInput::Touch { x, .. } => x,
        }
    }

    #[must_use]
    pub fn source(self) -> PointerSource {
        match self {
            PointerInput::Mouse { .. } => PointerSource::Mouse,
            PointerInput::Touch { finger, .. } => PointerSource::Touch(finger),
        }
    }
}

/// Interaction events consumed by [`super::SplitSlider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press inside the container: starts a drag and jumps the split.
    Pressed(PointerInput),
    /// Movement anywhere; only honored while the same source is dragging.
    Moved(PointerInput),
    /// Button or finger lifted, inside or outside the container.
    Released(PointerSource),
    /// Touch cancel or focus loss: ends any drag regardless of source.
    Cancelled,
}
