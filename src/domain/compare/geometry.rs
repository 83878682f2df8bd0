// SPDX-License-Identifier: MPL-2.0
//! Container geometry.
//!
//! The horizontal extent of the comparison surface, in the same coordinate
//! space as pointer positions. It is meant to be read fresh for every
//! pointer event: the layout can move between two events of a single drag
//! (scrolling, window resize), so a cached rectangle would desynchronize the
//! handle from the pointer.

use crate::domain::ui::SplitPosition;

/// Left edge and width of the comparison surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerGeometry {
    left: f32,
    width: f32,
}

impl ContainerGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    #[must_use]
    pub fn left(self) -> f32 {
        self.left
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns true when no split can be derived from this geometry
    /// (zero, negative or non-finite width, or a non-finite left edge).
    ///
    /// This is the normal state of a widget that has not been laid out yet.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !(self.width.is_finite() && self.width > 0.0 && self.left.is_finite())
    }

    /// Converts a pointer x coordinate into a split position.
    ///
    /// The offset is clamped to `[0, width]` first so pointers outside the
    /// container pin the split to an edge. Returns `None` when the geometry
    /// is degenerate or the coordinate is `NaN`, in which case the caller
    /// must leave its current position untouched.
    #[must_use]
    pub fn split_at(self, pointer_x: f32) -> Option<SplitPosition> {
        if self.is_degenerate() || pointer_x.is_nan() {
            return None;
        }

        let offset = (pointer_x - self.left).clamp(0.0, self.width);
        Some(SplitPosition::new(offset / self.width * 100.0))
    }

    /// Returns the x coordinate of the divider for `position`.
    #[must_use]
    pub fn x_at(self, position: SplitPosition) -> f32 {
        self.left + self.width.max(0.0) * position.as_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(pointer_x: f32, left: f32, width: f32) -> f32 {
        ((pointer_x - left) / width * 100.0).clamp(0.0, 100.0)
    }

    #[test]
    fn split_matches_clamped_formula() {
        let geometry = ContainerGeometry::new(20.0, 640.0);
        for pointer_x in [-500.0, 0.0, 20.0, 21.5, 180.0, 340.0, 659.0, 660.0, 5_000.0] {
            let split = geometry.split_at(pointer_x).expect("valid geometry");
            assert!(
                (split.value() - expected(pointer_x, 20.0, 640.0)).abs() < 1e-4,
                "pointer {pointer_x} gave {}",
                split.value()
            );
        }
    }

    #[test]
    fn offset_container_centre() {
        let geometry = ContainerGeometry::new(100.0, 400.0);
        assert_eq!(geometry.split_at(300.0), Some(SplitPosition::new(50.0)));
    }

    #[test]
    fn far_outside_pointer_pins_to_edges() {
        let geometry = ContainerGeometry::new(0.0, 500.0);
        assert_eq!(geometry.split_at(-10_000.0), Some(SplitPosition::MIN));
        assert_eq!(geometry.split_at(10_000.0), Some(SplitPosition::MAX));
    }

    #[test]
    fn zero_width_yields_nothing() {
        let geometry = ContainerGeometry::new(0.0, 0.0);
        assert!(geometry.is_degenerate());
        assert_eq!(geometry.split_at(10.0), None);
    }

    #[test]
    fn non_finite_geometry_is_degenerate() {
        assert!(ContainerGeometry::new(0.0, f32::INFINITY).is_degenerate());
        assert!(ContainerGeometry::new(f32::NAN, 100.0).is_degenerate());
        assert!(ContainerGeometry::new(0.0, -4.0).is_degenerate());
    }

    #[test]
    fn nan_pointer_yields_nothing() {
        let geometry = ContainerGeometry::new(0.0, 100.0);
        assert_eq!(geometry.split_at(f32::NAN), None);
    }

    #[test]
    fn x_at_inverts_split_at() {
        let geometry = ContainerGeometry::new(100.0, 400.0);
        assert_eq!(geometry.x_at(SplitPosition::new(25.0)), 200.0);
        assert_eq!(geometry.x_at(SplitPosition::MAX), 500.0);
    }
}
