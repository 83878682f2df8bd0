// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for the comparison chrome.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub divider: Color,
    pub handle_fill: Color,
    pub handle_border: Color,
    pub handle_glyph: Color,
    pub label_background: Color,
    pub label_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            divider: palette::WHITE,
            handle_fill: palette::WHITE,
            handle_border: palette::PRIMARY_600,
            handle_glyph: palette::GRAY_900,
            label_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            label_text: palette::GRAY_900,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            divider: palette::WHITE,
            handle_fill: palette::GRAY_900,
            handle_border: palette::PRIMARY_400,
            handle_glyph: palette::WHITE,
            label_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            label_text: palette::WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Next mode in the Light → Dark → System cycle.
    #[must_use]
    pub fn cycled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    /// i18n key naming this mode.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-mode-light",
            ThemeMode::Dark => "theme-mode-dark",
            ThemeMode::System => "theme-mode-system",
        }
    }

    /// Iced theme matching the effective mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Chrome colors matching the effective mode.
    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }
}
