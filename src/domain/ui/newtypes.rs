// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Split Bounds
// =============================================================================

/// Split position bounds (0% to 100% of the container width).
pub mod split_bounds {
    /// Leftmost split: only the "after" image is visible.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Rightmost split: only the "before" image is visible.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Split used on mount and on reset.
    pub const CENTER_PERCENT: f32 = 50.0;
}

// =============================================================================
// SplitPosition
// =============================================================================

/// Percent of the container width that shows the "before" image,
/// guaranteed to be within `[0, 100]`.
///
/// Every constructor clamps, so a value obtained from a pointer far outside
/// the container (or from arithmetic on a degenerate one) can never escape
/// the valid range. `NaN` collapses to the centre.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SplitPosition(f32);

impl SplitPosition {
    /// Both images get half of the container.
    pub const CENTER: Self = Self(split_bounds::CENTER_PERCENT);
    /// Split at the left edge.
    pub const MIN: Self = Self(split_bounds::MIN_PERCENT);
    /// Split at the right edge.
    pub const MAX: Self = Self(split_bounds::MAX_PERCENT);

    /// Creates a new split position, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::CENTER;
        }
        Self(percent.clamp(split_bounds::MIN_PERCENT, split_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the split as a fraction of the container width (50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Returns whether the split sits on the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= split_bounds::MIN_PERCENT
    }

    /// Returns whether the split sits on the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= split_bounds::MAX_PERCENT
    }

    /// Moves the split by `delta` percentage points.
    #[must_use]
    pub fn nudged(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for SplitPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl std::fmt::Display for SplitPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}%", self.0)
    }
}

// =============================================================================
// Keyboard Step Bounds
// =============================================================================

/// Keyboard nudge bounds, in percentage points.
pub mod keyboard_step_bounds {
    /// Smallest nudge.
    pub const MIN: f32 = 0.5;
    /// Largest nudge.
    pub const MAX: f32 = 25.0;
    /// Default nudge.
    pub const DEFAULT: f32 = 2.0;
}

// =============================================================================
// KeyboardStep
// =============================================================================

/// Amount an arrow key moves the split, guaranteed to be within 0.5–25 points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyboardStep(f32);

impl KeyboardStep {
    /// Creates a new keyboard step, clamping the value to the valid range.
    #[must_use]
    pub fn new(points: f32) -> Self {
        if points.is_nan() {
            return Self::default();
        }
        Self(points.clamp(keyboard_step_bounds::MIN, keyboard_step_bounds::MAX))
    }

    /// Returns the raw value in percentage points.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for KeyboardStep {
    fn default() -> Self {
        Self(keyboard_step_bounds::DEFAULT)
    }
}

// =============================================================================
// Compact Breakpoint Bounds
// =============================================================================

/// Width bounds (logical pixels) below which the compact rendering is used.
pub mod breakpoint_bounds {
    /// Smallest breakpoint.
    pub const MIN: f32 = 0.0;
    /// Largest breakpoint.
    pub const MAX: f32 = 4096.0;
    /// Default breakpoint.
    pub const DEFAULT: f32 = 480.0;
}

// =============================================================================
// CompactBreakpoint
// =============================================================================

/// Container width under which the comparison switches to its compact
/// render strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompactBreakpoint(f32);

impl CompactBreakpoint {
    /// Creates a new breakpoint, clamping the value to the valid range.
    #[must_use]
    pub fn new(width: f32) -> Self {
        if width.is_nan() {
            return Self::default();
        }
        Self(width.clamp(breakpoint_bounds::MIN, breakpoint_bounds::MAX))
    }

    /// Returns the raw width.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true when `available_width` calls for the compact strategy.
    #[must_use]
    pub fn is_compact(self, available_width: f32) -> bool {
        available_width < self.0
    }
}

impl Default for CompactBreakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_position_defaults_to_center() {
        assert_eq!(SplitPosition::default().value(), 50.0);
    }

    #[test]
    fn split_position_clamps_out_of_range_values() {
        assert_eq!(SplitPosition::new(-12.0).value(), 0.0);
        assert_eq!(SplitPosition::new(250.0).value(), 100.0);
        assert_eq!(SplitPosition::new(f32::INFINITY).value(), 100.0);
        assert_eq!(SplitPosition::new(f32::NEG_INFINITY).value(), 0.0);
    }

    #[test]
    fn split_position_nan_collapses_to_center() {
        assert_eq!(SplitPosition::new(f32::NAN), SplitPosition::CENTER);
    }

    #[test]
    fn split_position_fraction() {
        assert!((SplitPosition::new(25.0).as_fraction() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn split_position_nudge_stays_in_range() {
        assert!(SplitPosition::new(99.0).nudged(5.0).is_max());
        assert!(SplitPosition::new(1.0).nudged(-5.0).is_min());
        assert_eq!(SplitPosition::new(40.0).nudged(2.0).value(), 42.0);
    }

    #[test]
    fn split_position_displays_rounded_percent() {
        assert_eq!(SplitPosition::new(33.4).to_string(), "33%");
    }

    #[test]
    fn keyboard_step_clamps() {
        assert_eq!(KeyboardStep::new(0.0).value(), keyboard_step_bounds::MIN);
        assert_eq!(KeyboardStep::new(100.0).value(), keyboard_step_bounds::MAX);
        assert_eq!(KeyboardStep::new(f32::NAN), KeyboardStep::default());
    }

    #[test]
    fn compact_breakpoint_selects_strategy() {
        let breakpoint = CompactBreakpoint::new(400.0);
        assert!(breakpoint.is_compact(399.0));
        assert!(!breakpoint.is_compact(400.0));
    }
}
