// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core comparison logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and the split
//! reducer. It has no dependencies on external crates (except `std`) so the
//! drag behavior can be tested without a renderer or an event loop.
//!
//! # Modules
//!
//! - [`compare`]: Split reducer ([`SplitSlider`](compare::SplitSlider)),
//!   [`ContainerGeometry`](compare::ContainerGeometry),
//!   [`PointerEvent`](compare::PointerEvent) and the drag session
//! - [`ui`]: UI value objects ([`SplitPosition`](ui::newtypes::SplitPosition),
//!   [`KeyboardStep`](ui::newtypes::KeyboardStep),
//!   [`CompactBreakpoint`](ui::newtypes::CompactBreakpoint))

pub mod compare;
pub mod ui;
