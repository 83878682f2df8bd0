// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Primary action (opening images).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Secondary toolbar action; greyed out when disabled.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette.background.strong.color, palette.background.strong.text)
        }
        button::Status::Disabled => (palette.background.weak.color, palette::GRAY_400),
        button::Status::Active => (palette.background.weak.color, palette.background.weak.text),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}
