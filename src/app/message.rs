// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::compare;
use crate::ui::toolbar;
use std::path::PathBuf;

/// Side of the comparison an image is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Before,
    After,
}

impl Side {
    /// i18n key of the open dialog title for this side.
    pub fn dialog_title_key(self) -> &'static str {
        match self {
            Side::Before => "dialog-open-before-title",
            Side::After => "dialog-open-after-title",
        }
    }
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Compare(compare::Message),
    Toolbar(toolbar::Message),
    /// Result from an open file dialog.
    OpenDialogResult { side: Side, path: Option<PathBuf> },
    /// A decoded image (or the reason it could not be decoded).
    ///
    /// `request` identifies the load; results for a request that was
    /// superseded or cleared are discarded.
    ImageLoaded {
        request: u64,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    DismissNotice,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g., `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Image shown on the left of the split.
    pub before: Option<String>,
    /// Image shown on the right of the split.
    pub after: Option<String>,
}
