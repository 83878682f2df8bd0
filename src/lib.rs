// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison viewer built with the
//! Iced GUI framework.
//!
//! The core is a drag-driven split slider ([`domain::compare::SplitSlider`])
//! wrapped in a small application with localization (Fluent), user
//! preferences and light/dark theming.

#![doc(html_root_url = "https://docs.rs/iced_compare/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
