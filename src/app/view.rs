// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: toolbar, optional notice banner and
//! the comparison filling the rest of the window.

use super::{Message, Notice};
use crate::i18n::fluent::I18n;
use crate::ui::compare;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::toolbar;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub comparison: &'a compare::State,
    pub theme_mode: ThemeMode,
    pub notice: Option<&'a Notice>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        has_images: ctx.comparison.before().is_some() || ctx.comparison.after().is_some(),
        position: ctx
            .comparison
            .is_ready()
            .then(|| ctx.comparison.position()),
    })
    .map(Message::Toolbar);

    let comparison = compare::view(
        ctx.comparison,
        compare::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.theme_mode.colors(),
        },
    )
    .map(Message::Compare);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill).push(toolbar);

    if let Some(notice) = ctx.notice {
        column = column.push(notice_banner(ctx.i18n, notice));
    }

    column
        .push(
            Container::new(comparison)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn notice_banner<'a>(i18n: &'a I18n, notice: &'a Notice) -> Element<'a, Message> {
    let text = match &notice.path {
        Some(path) => i18n.tr_with_args(&notice.key, &[("path", path.as_str())]),
        None => i18n.tr(&notice.key),
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(text).size(typography::BODY)).width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("error-dismiss")).size(typography::CAPTION))
                .on_press(Message::DismissNotice)
                .style(styles::button::secondary),
        );

    Container::new(
        Container::new(row)
            .padding([spacing::XS, spacing::SM])
            .width(Length::Fill)
            .style(styles::container::error_banner),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .into()
}
