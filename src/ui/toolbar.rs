// SPDX-License-Identifier: MPL-2.0
//! Toolbar above the comparison.
//!
//! Opens images on either side, swaps or clears them, recentres the split,
//! cycles the theme, and shows the current split percentage.

use crate::domain::ui::SplitPosition;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// At least one side is loaded.
    pub has_images: bool,
    /// Split readout, present once both sides are loaded.
    pub position: Option<SplitPosition>,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone)]
pub enum Message {
    OpenBefore,
    OpenAfter,
    Swap,
    Reset,
    Clear,
    CycleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenBefore,
    OpenAfter,
    Swap,
    Reset,
    Clear,
    CycleTheme,
}

/// Process a toolbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::OpenBefore => Event::OpenBefore,
        Message::OpenAfter => Event::OpenAfter,
        Message::Swap => Event::Swap,
        Message::Reset => Event::Reset,
        Message::Clear => Event::Clear,
        Message::CycleTheme => Event::CycleTheme,
    }
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let open_before = button(Text::new(ctx.i18n.tr("toolbar-open-before")))
        .on_press(Message::OpenBefore)
        .style(styles::button::primary);
    let open_after = button(Text::new(ctx.i18n.tr("toolbar-open-after")))
        .on_press(Message::OpenAfter)
        .style(styles::button::primary);

    let swap = button(Text::new(ctx.i18n.tr("toolbar-swap")))
        .on_press_maybe(ctx.has_images.then_some(Message::Swap))
        .style(styles::button::secondary);
    let reset = button(Text::new(ctx.i18n.tr("toolbar-reset")))
        .on_press_maybe(ctx.position.map(|_| Message::Reset))
        .style(styles::button::secondary);
    let clear = button(Text::new(ctx.i18n.tr("toolbar-clear")))
        .on_press_maybe(ctx.has_images.then_some(Message::Clear))
        .style(styles::button::secondary);

    let mode = ctx.i18n.tr(ctx.theme_mode.i18n_key());
    let theme = button(Text::new(
        ctx.i18n.tr_with_args("toolbar-theme", &[("mode", mode.as_str())]),
    ))
    .on_press(Message::CycleTheme)
    .style(styles::button::secondary);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .push(open_before)
        .push(open_after)
        .push(swap)
        .push(reset)
        .push(clear)
        .push(theme);

    if let Some(position) = ctx.position {
        let percent = position.to_string();
        let readout = Text::new(
            ctx.i18n
                .tr_with_args("toolbar-split-readout", &[("percent", percent.as_str())]),
        )
        .size(typography::CAPTION);

        row = row.push(
            Container::new(readout)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_maps_to_its_event() {
        assert_eq!(update(Message::OpenBefore), Event::OpenBefore);
        assert_eq!(update(Message::OpenAfter), Event::OpenAfter);
        assert_eq!(update(Message::Swap), Event::Swap);
        assert_eq!(update(Message::Reset), Event::Reset);
        assert_eq!(update(Message::Clear), Event::Clear);
        assert_eq!(update(Message::CycleTheme), Event::CycleTheme);
    }
}
