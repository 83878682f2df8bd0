// SPDX-License-Identifier: MPL-2.0
//! Rendering of the comparison surface.
//!
//! Layers, bottom to top: the *after* image, the *before* image clipped to
//! the left of the split, the corner labels and keyboard hint, then the
//! overlay canvas that draws the divider and receives pointer input. Both images fill the
//! surface with [`ContentFit::Cover`] so they stay pixel-aligned.

use super::overlay::ComparisonOverlay;
use super::{LoadedImage, Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::split_clip;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, responsive, Canvas, Column, Container, Stack, Text};
use iced::{Border, ContentFit, Element, Length, Size, Theme};

/// How the comparison chrome is drawn.
///
/// Selected from a single `compact` flag; the slider logic is identical
/// for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    Regular,
    Compact,
}

impl RenderStrategy {
    #[must_use]
    pub fn select(compact: bool) -> Self {
        if compact {
            RenderStrategy::Compact
        } else {
            RenderStrategy::Regular
        }
    }

    #[must_use]
    pub fn handle_radius(self) -> f32 {
        match self {
            RenderStrategy::Regular => sizing::HANDLE_RADIUS,
            RenderStrategy::Compact => sizing::HANDLE_RADIUS_COMPACT,
        }
    }

    #[must_use]
    pub fn shows_chevrons(self) -> bool {
        self == RenderStrategy::Regular
    }

    /// Corner labels are drawn in the regular layout when enabled.
    #[must_use]
    pub fn shows_labels(self, enabled: bool) -> bool {
        enabled && self == RenderStrategy::Regular
    }

    #[must_use]
    pub fn shows_keyboard_hint(self) -> bool {
        self == RenderStrategy::Regular
    }
}

/// Contextual data needed to render the comparison.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let (Some(before), Some(after)) = (state.before(), state.after()) else {
        return placeholder(state, &ctx);
    };

    responsive(move |available: Size| surface(state, before, after, &ctx, available)).into()
}

fn surface<'a>(
    state: &'a State,
    before: &'a LoadedImage,
    after: &'a LoadedImage,
    ctx: &ViewContext<'a>,
    available: Size,
) -> Element<'a, Message> {
    let settings = state.settings();
    let compact = settings.compact_breakpoint.is_compact(available.width);
    let strategy = RenderStrategy::select(compact);
    let position = state.position();

    let after_layer = image(after.image.handle.clone())
        .width(Length::Fill)
        .height(Length::Fill)
        .content_fit(ContentFit::Cover);

    let before_layer = split_clip(
        image(before.image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
        position.as_fraction(),
    );

    let overlay = Canvas::new(ComparisonOverlay {
        position,
        capturing: state.captures_pointer(),
        strategy,
        colors: ctx.colors.clone(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(after_layer)
        .push(before_layer);

    if strategy.shows_labels(settings.show_labels) {
        layers = layers
            .push(badge(
                ctx.i18n.tr("compare-label-before"),
                Horizontal::Left,
                Vertical::Top,
                &ctx.colors,
            ))
            .push(badge(
                ctx.i18n.tr("compare-label-after"),
                Horizontal::Right,
                Vertical::Top,
                &ctx.colors,
            ));
    }

    if strategy.shows_keyboard_hint() {
        layers = layers.push(badge(
            ctx.i18n.tr("compare-keyboard-hint"),
            Horizontal::Center,
            Vertical::Bottom,
            &ctx.colors,
        ));
    }

    layers.push(overlay).into()
}

/// A caption on a translucent badge, pinned to one edge of the surface.
fn badge<'a>(
    label: String,
    align_x: Horizontal,
    align_y: Vertical,
    colors: &ColorScheme,
) -> Element<'a, Message> {
    let background = colors.label_background;
    let text_color = colors.label_text;

    let badge = Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(move |_theme: &Theme| container::Style {
            background: Some(background.into()),
            text_color: Some(text_color),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..Default::default()
        });

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(match align_y {
            Vertical::Bottom => spacing::MD,
            _ => spacing::SM,
        })
        .align_x(align_x)
        .align_y(align_y)
        .into()
}

/// Shown until both sides are loaded. The slider is not interactive here.
fn placeholder<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("compare-empty-title")).size(typography::TITLE_MD));

    let hint = placeholder_hint_key(state.before().is_some(), state.after().is_some());
    column = column.push(Text::new(ctx.i18n.tr(hint)).size(typography::BODY));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// i18n key telling the user which image is still missing.
fn placeholder_hint_key(has_before: bool, has_after: bool) -> &'static str {
    match (has_before, has_after) {
        (false, false) => "compare-empty-hint",
        (false, true) => "compare-missing-before",
        (true, _) => "compare-missing-after",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_flag_selects_strategy() {
        assert_eq!(RenderStrategy::select(true), RenderStrategy::Compact);
        assert_eq!(RenderStrategy::select(false), RenderStrategy::Regular);
    }

    #[test]
    fn compact_strategy_hides_chrome() {
        let compact = RenderStrategy::Compact;
        assert!(!compact.shows_chevrons());
        assert!(!compact.shows_labels(true));
        assert!(!compact.shows_keyboard_hint());
        assert!(RenderStrategy::Regular.shows_keyboard_hint());
        assert!(compact.handle_radius() < RenderStrategy::Regular.handle_radius());
    }

    #[test]
    fn regular_labels_follow_setting() {
        assert!(RenderStrategy::Regular.shows_labels(true));
        assert!(!RenderStrategy::Regular.shows_labels(false));
    }

    #[test]
    fn placeholder_names_the_missing_side() {
        assert_eq!(placeholder_hint_key(false, false), "compare-empty-hint");
        assert_eq!(placeholder_hint_key(false, true), "compare-missing-before");
        assert_eq!(placeholder_hint_key(true, false), "compare-missing-after");
    }
}
