// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison domain.
//!
//! The pieces of the drag-driven split, free of any GUI type:
//!
//! - [`ContainerGeometry`]: bounding box of the comparison surface, read per event
//! - [`PointerInput`] / [`PointerEvent`]: mouse and touch normalized to one x coordinate
//! - [`DragSession`]: `Idle` / `Dragging` state machine
//! - [`SplitSlider`]: the reducer combining them

pub mod geometry;
pub mod pointer;
pub mod session;
pub mod slider;

pub use geometry::ContainerGeometry;
pub use pointer::{PointerEvent, PointerInput, PointerSource};
pub use session::DragSession;
pub use slider::SplitSlider;
