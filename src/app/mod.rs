// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the toolbar and the
//! comparison.
//!
//! The `App` struct wires together the comparison, localization and settings
//! and translates messages into side effects like image loading, file
//! dialogs or config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Side};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::compare::{self, Settings as CompareSettings};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// A message shown in the banner under the toolbar until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// i18n key of the message.
    pub key: String,
    /// File the message is about, substituted for `{ $path }`.
    pub path: Option<String>,
}

impl Notice {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: None,
        }
    }

    pub fn with_path(key: impl Into<String>, path: &std::path::Path) -> Self {
        Self {
            key: key.into(),
            path: Some(path.display().to_string()),
        }
    }

    /// Whether this reports an image that failed to load; a later
    /// successful load makes it stale.
    pub fn is_load_error(&self) -> bool {
        self.key.starts_with("error-load-")
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    comparison: compare::State,
    theme_mode: ThemeMode,
    notice: Option<Notice>,
    /// Incremented every time the comparison is remounted.
    mount: u64,
    pending: update::PendingLoads,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mount", &self.mount)
            .field("pending", &self.pending)
            .field("comparison_ready", &self.comparison.is_ready())
            .field("position", &self.comparison.position())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot; flags are only consumed the first time.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, then starts decoding any images
    /// passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(config, flags.lang.clone());
        if let Some(key) = config_warning {
            app.notice = Some(Notice::new(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "starting"
        );

        let tasks: Vec<_> = [
            (Side::Before, flags.before),
            (Side::After, flags.after),
        ]
        .into_iter()
        .filter_map(|(side, path)| {
            path.map(|path| update::start_load(&mut app.pending, side, PathBuf::from(path)))
        })
        .collect();

        let task = Task::batch(tasks);
        (app, task)
    }

    /// Builds the application around an already loaded configuration.
    fn with_config(config: Config, lang: Option<String>) -> Self {
        let i18n = I18n::new(lang, &config);
        Self {
            i18n,
            comparison: compare::State::new(CompareSettings::from(&config.compare)),
            theme_mode: config.general.theme_mode,
            config,
            notice: None,
            mount: 0,
            pending: update::PendingLoads::default(),
        }
    }

    fn title(&self) -> String {
        match (self.comparison.before(), self.comparison.after()) {
            (Some(before), Some(after)) => self.i18n.tr_with_args(
                "app-title-with-names",
                &[
                    ("before", before.display_name().as_str()),
                    ("after", after.display_name().as_str()),
                ],
            ),
            _ => self.i18n.tr("app-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.comparison.captures_pointer())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            config: &mut self.config,
            comparison: &mut self.comparison,
            theme_mode: &mut self.theme_mode,
            notice: &mut self.notice,
            mount: &mut self.mount,
            pending: &mut self.pending,
        };

        match message {
            Message::Compare(compare_message) => {
                update::handle_compare_message(&mut ctx, compare_message)
            }
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message)
            }
            Message::OpenDialogResult { side, path } => {
                update::handle_open_dialog_result(&mut ctx, side, path)
            }
            Message::ImageLoaded {
                request,
                path,
                result,
            } => update::handle_image_loaded(&mut ctx, request, path, result),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            comparison: &self.comparison,
            theme_mode: self.theme_mode,
            notice: self.notice.as_ref(),
        })
    }
}
