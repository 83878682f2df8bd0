// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::{Message, Notice, Side};
use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::compare::{self, Event as CompareEvent, LoadedImage};
use crate::ui::theming::ThemeMode;
use crate::ui::toolbar::{self, Event as ToolbarEvent};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a mut Config,
    pub comparison: &'a mut compare::State,
    pub theme_mode: &'a mut ThemeMode,
    pub notice: &'a mut Option<Notice>,
    pub mount: &'a mut u64,
    pub pending: &'a mut PendingLoads,
}

/// Image decodes in flight, at most one per side.
///
/// Every load gets a fresh request id; a result is applied to whichever side
/// still waits on that id, so a newer request for the same side supersedes
/// an older one and a swap carries the pending request along with the image.
#[derive(Debug, Default)]
pub struct PendingLoads {
    last_request: u64,
    before: Option<u64>,
    after: Option<u64>,
}

impl PendingLoads {
    /// Registers a new load for `side` and returns its request id.
    pub fn start(&mut self, side: Side) -> u64 {
        self.last_request += 1;
        *self.slot_mut(side) = Some(self.last_request);
        self.last_request
    }

    /// Side waiting on `request`, which is no longer pending afterwards.
    /// `None` when the request was superseded or cleared.
    pub fn finish(&mut self, request: u64) -> Option<Side> {
        let side = [Side::Before, Side::After]
            .into_iter()
            .find(|side| self.slot(*side) == Some(request))?;
        *self.slot_mut(side) = None;
        Some(side)
    }

    pub fn is_pending(&self, side: Side) -> bool {
        self.slot(side).is_some()
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.before, &mut self.after);
    }

    #[cfg(test)]
    pub fn last_request(&self) -> u64 {
        self.last_request
    }

    pub fn clear(&mut self) {
        self.before = None;
        self.after = None;
    }

    fn slot(&self, side: Side) -> Option<u64> {
        match side {
            Side::Before => self.before,
            Side::After => self.after,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<u64> {
        match side {
            Side::Before => &mut self.before,
            Side::After => &mut self.after,
        }
    }
}

pub fn handle_compare_message(
    ctx: &mut UpdateContext<'_>,
    message: compare::Message,
) -> Task<Message> {
    match ctx.comparison.update(message) {
        CompareEvent::None => {}
        CompareEvent::SplitChanged(position) => {
            tracing::trace!(%position, "split changed");
        }
    }
    Task::none()
}

pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
) -> Task<Message> {
    match toolbar::update(message) {
        ToolbarEvent::OpenBefore => open_dialog(ctx.i18n, Side::Before),
        ToolbarEvent::OpenAfter => open_dialog(ctx.i18n, Side::After),
        ToolbarEvent::Swap => {
            ctx.comparison.swap();
            ctx.pending.swap();
            Task::none()
        }
        ToolbarEvent::Reset => handle_compare_message(ctx, compare::Message::Reset),
        ToolbarEvent::Clear => {
            remount(ctx);
            Task::none()
        }
        ToolbarEvent::CycleTheme => {
            *ctx.theme_mode = ctx.theme_mode.cycled();
            ctx.config.general.theme_mode = *ctx.theme_mode;
            if let Err(err) = config::save(ctx.config) {
                tracing::warn!(error = %err, "failed to persist theme mode");
                *ctx.notice = Some(Notice::new("notification-config-save-error"));
            }
            Task::none()
        }
    }
}

/// Tears the current comparison down and mounts a fresh, centred one.
fn remount(ctx: &mut UpdateContext<'_>) {
    let settings = ctx.comparison.settings();
    ctx.comparison.teardown();
    *ctx.comparison = compare::State::new(settings);
    ctx.pending.clear();
    *ctx.mount += 1;
    tracing::debug!(mount = *ctx.mount, "comparison remounted");
}

pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    side: Side,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => start_load(ctx.pending, side, path),
        // User cancelled, do nothing
        None => Task::none(),
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    request: u64,
    path: PathBuf,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    let Some(side) = ctx.pending.finish(request) else {
        tracing::debug!(
            request,
            path = %path.display(),
            "discarding image load that was superseded or cleared"
        );
        return Task::none();
    };

    match result {
        Ok(image) => {
            tracing::info!(
                ?side,
                path = %path.display(),
                width = image.width,
                height = image.height,
                "image loaded"
            );
            if ctx.notice.as_ref().is_some_and(Notice::is_load_error) {
                *ctx.notice = None;
            }
            let loaded = LoadedImage::new(image, path);
            match side {
                Side::Before => ctx.comparison.set_before(loaded),
                Side::After => ctx.comparison.set_after(loaded),
            }
        }
        Err(err) => {
            tracing::warn!(?side, path = %path.display(), error = %err, "failed to load image");
            *ctx.notice = Some(Notice::with_path(err.i18n_key(), &path));
        }
    }
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if !media::is_supported(&path) {
        tracing::debug!(path = %path.display(), "ignoring dropped file with unsupported extension");
        *ctx.notice = Some(Notice::with_path("error-drop-unsupported", &path));
        return Task::none();
    }
    let side = drop_target(ctx.comparison, ctx.pending);
    start_load(ctx.pending, side, path)
}

/// Side a dropped file goes to: "before" while it is neither shown nor
/// loading, otherwise "after".
pub fn drop_target(comparison: &compare::State, pending: &PendingLoads) -> Side {
    if comparison.before().is_none() && !pending.is_pending(Side::Before) {
        Side::Before
    } else {
        Side::After
    }
}

/// Registers a load for `side` and decodes `path` off the UI thread.
pub fn start_load(pending: &mut PendingLoads, side: Side, path: PathBuf) -> Task<Message> {
    let request = pending.start(side);
    tracing::debug!(?side, request, path = %path.display(), "loading image");
    Task::perform(media::load_image_async(path.clone()), move |result| {
        Message::ImageLoaded {
            request,
            path: path.clone(),
            result,
        }
    })
}

fn open_dialog(i18n: &I18n, side: Side) -> Task<Message> {
    let title = i18n.tr(side.dialog_title_key());
    let filter_name = i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter_name, media::SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        move |path| Message::OpenDialogResult { side, path },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;

    fn loaded(name: &str) -> LoadedImage {
        LoadedImage::new(ImageData::from_rgba(1, 1, vec![0; 4]), PathBuf::from(name))
    }

    #[test]
    fn drops_fill_before_first() {
        let pending = PendingLoads::default();
        let mut comparison = compare::State::default();
        assert_eq!(drop_target(&comparison, &pending), Side::Before);

        comparison.set_before(loaded("a.png"));
        assert_eq!(drop_target(&comparison, &pending), Side::After);

        comparison.set_after(loaded("b.png"));
        assert_eq!(drop_target(&comparison, &pending), Side::After);
    }

    #[test]
    fn only_after_loaded_still_fills_before() {
        let pending = PendingLoads::default();
        let mut comparison = compare::State::default();
        comparison.set_after(loaded("b.png"));
        assert_eq!(drop_target(&comparison, &pending), Side::Before);
    }

    #[test]
    fn before_still_loading_sends_drop_to_after() {
        let mut pending = PendingLoads::default();
        let comparison = compare::State::default();
        pending.start(Side::Before);

        assert_eq!(drop_target(&comparison, &pending), Side::After);
    }

    #[test]
    fn newer_request_supersedes_older_for_same_side() {
        let mut pending = PendingLoads::default();
        let first = pending.start(Side::Before);
        let second = pending.start(Side::Before);

        assert_eq!(pending.finish(first), None);
        assert_eq!(pending.finish(second), Some(Side::Before));
        assert!(!pending.is_pending(Side::Before));
    }

    #[test]
    fn swapped_request_lands_on_other_side() {
        let mut pending = PendingLoads::default();
        let request = pending.start(Side::After);
        pending.swap();

        assert!(pending.is_pending(Side::Before));
        assert_eq!(pending.finish(request), Some(Side::Before));
    }

    #[test]
    fn cleared_requests_are_not_finished() {
        let mut pending = PendingLoads::default();
        let request = pending.start(Side::Before);
        pending.clear();

        assert_eq!(pending.finish(request), None);
    }
}
