// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `Event` reported to the parent, and a `view`
//! taking a `ViewContext`.
//!
//! - [`compare`] - Before/after comparison surface
//! - [`toolbar`] - Actions and split readout
//! - [`widgets`] - Custom Iced widgets (split clip)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod compare;
pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod toolbar;
pub mod widgets;
