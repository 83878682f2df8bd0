// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! The bounds themselves live with the domain newtypes; this module only
//! re-exposes the defaults the config layer falls back to.

use crate::domain::ui::newtypes::{breakpoint_bounds, keyboard_step_bounds};

// ==========================================================================
// Comparison Defaults
// ==========================================================================

/// Default arrow-key nudge, in percentage points.
pub const DEFAULT_KEYBOARD_STEP: f32 = keyboard_step_bounds::DEFAULT;

/// Whether "Before"/"After" labels are drawn in the regular layout.
pub const DEFAULT_SHOW_LABELS: bool = true;

/// Width (logical pixels) under which the compact layout is used.
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = breakpoint_bounds::DEFAULT;

const _: () = {
    assert!(DEFAULT_KEYBOARD_STEP >= keyboard_step_bounds::MIN);
    assert!(DEFAULT_KEYBOARD_STEP <= keyboard_step_bounds::MAX);
    assert!(DEFAULT_COMPACT_BREAKPOINT <= breakpoint_bounds::MAX);
};
