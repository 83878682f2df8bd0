// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison component.
//!
//! Owns the [`SplitSlider`] and the two images being compared. Pointer input
//! arrives already translated by the overlay canvas, together with the
//! container geometry measured for that very event.

pub mod overlay;
pub mod view;

use crate::config::CompareConfig;
use crate::domain::compare::{ContainerGeometry, PointerEvent, SplitSlider};
use crate::domain::ui::{CompactBreakpoint, KeyboardStep, SplitPosition};
use crate::media::ImageData;
use std::path::{Path, PathBuf};

pub use view::{view, RenderStrategy, ViewContext};

/// An image placed on one side of the comparison.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: ImageData,
    pub path: PathBuf,
}

impl LoadedImage {
    pub fn new(image: ImageData, path: PathBuf) -> Self {
        Self { image, path }
    }

    /// File name shown in the window title.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Keyboard commands understood by the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    StepLeft,
    StepRight,
    JumpStart,
    JumpEnd,
    Recenter,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activity over (or, while dragging, outside) the container.
    Pointer {
        event: PointerEvent,
        geometry: ContainerGeometry,
    },
    Key(KeyCommand),
    Reset,
    /// The window lost focus; any drag in progress ends.
    FocusLost,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    None,
    SplitChanged(SplitPosition),
}

impl From<Option<SplitPosition>> for Event {
    fn from(change: Option<SplitPosition>) -> Self {
        change.map_or(Event::None, Event::SplitChanged)
    }
}

/// Comparison settings read from `[compare]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub keyboard_step: KeyboardStep,
    pub show_labels: bool,
    pub compact_breakpoint: CompactBreakpoint,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&CompareConfig::default())
    }
}

impl From<&CompareConfig> for Settings {
    fn from(config: &CompareConfig) -> Self {
        Self {
            keyboard_step: config.keyboard_step(),
            show_labels: config.show_labels(),
            compact_breakpoint: config.compact_breakpoint(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    slider: SplitSlider,
    before: Option<LoadedImage>,
    after: Option<LoadedImage>,
    settings: Settings,
}

impl State {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Pointer { event, geometry } => {
                if !self.is_ready() {
                    return Event::None;
                }
                let was_dragging = self.slider.is_dragging();
                let change = self.slider.handle(event, geometry);
                self.trace_session(was_dragging);
                change.into()
            }
            Message::Key(command) => {
                if !self.is_ready() {
                    return Event::None;
                }
                self.apply_key(command).into()
            }
            Message::Reset => self.slider.reset().into(),
            Message::FocusLost => {
                if self.slider.cancel_drag() {
                    tracing::debug!(position = %self.slider.position(), "drag cancelled on focus loss");
                }
                Event::None
            }
        }
    }

    fn apply_key(&mut self, command: KeyCommand) -> Option<SplitPosition> {
        let step = self.settings.keyboard_step.value();
        match command {
            KeyCommand::StepLeft => self.slider.nudge(-step),
            KeyCommand::StepRight => self.slider.nudge(step),
            KeyCommand::JumpStart => self.slider.set_position(SplitPosition::MIN),
            KeyCommand::JumpEnd => self.slider.set_position(SplitPosition::MAX),
            KeyCommand::Recenter => self.slider.reset(),
        }
    }

    fn trace_session(&self, was_dragging: bool) {
        match (was_dragging, self.slider.session()) {
            (false, session) if session.is_dragging() => {
                tracing::debug!(?session, position = %self.slider.position(), "drag started");
            }
            (true, session) if !session.is_dragging() => {
                tracing::debug!(position = %self.slider.position(), "drag ended");
            }
            _ => {}
        }
    }

    pub fn set_before(&mut self, image: LoadedImage) {
        self.before = Some(image);
    }

    pub fn set_after(&mut self, image: LoadedImage) {
        self.after = Some(image);
    }

    /// Exchanges the two sides. The split position and any drag are kept.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.before, &mut self.after);
    }

    /// Unmounts the comparison: ends any drag so no pointer input is
    /// followed any more, and drops both images.
    pub fn teardown(&mut self) {
        if self.slider.is_dragging() {
            tracing::debug!("comparison torn down during a drag");
        }
        self.slider.teardown();
        self.before = None;
        self.after = None;
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub fn position(&self) -> SplitPosition {
        self.slider.position()
    }

    /// Whether pointer input outside the container must still be delivered.
    #[must_use]
    pub fn captures_pointer(&self) -> bool {
        self.slider.captures_pointer()
    }

    /// Both sides are present and the slider is interactive.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.before.is_some() && self.after.is_some()
    }

    #[must_use]
    pub fn before(&self) -> Option<&LoadedImage> {
        self.before.as_ref()
    }

    #[must_use]
    pub fn after(&self) -> Option<&LoadedImage> {
        self.after.as_ref()
    }

    #[must_use]
    pub fn before_path(&self) -> Option<&Path> {
        self.before.as_ref().map(|loaded| loaded.path.as_path())
    }

    #[must_use]
    pub fn after_path(&self) -> Option<&Path> {
        self.after.as_ref().map(|loaded| loaded.path.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::compare::{PointerInput, PointerSource};

    fn loaded(name: &str) -> LoadedImage {
        LoadedImage::new(
            ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
            PathBuf::from(name),
        )
    }

    fn ready_state() -> State {
        let mut state = State::default();
        state.set_before(loaded("before.png"));
        state.set_after(loaded("after.png"));
        state
    }

    fn geometry() -> ContainerGeometry {
        ContainerGeometry::new(100.0, 400.0)
    }

    fn press(x: f32) -> Message {
        Message::Pointer {
            event: PointerEvent::Pressed(PointerInput::Mouse { x }),
            geometry: geometry(),
        }
    }

    fn moved(x: f32) -> Message {
        Message::Pointer {
            event: PointerEvent::Moved(PointerInput::Mouse { x }),
            geometry: geometry(),
        }
    }

    #[test]
    fn press_reports_new_split() {
        let mut state = ready_state();
        let event = state.update(press(200.0));
        assert_eq!(event, Event::SplitChanged(SplitPosition::new(25.0)));

        let event = state.update(moved(300.0));
        assert_eq!(event, Event::SplitChanged(SplitPosition::new(50.0)));
        assert!(state.captures_pointer());
    }

    #[test]
    fn pointer_is_ignored_until_both_sides_are_loaded() {
        let mut state = State::default();
        state.set_before(loaded("before.png"));

        assert_eq!(state.update(press(150.0)), Event::None);
        assert!(!state.captures_pointer());
        assert_eq!(state.position(), SplitPosition::CENTER);
    }

    #[test]
    fn release_ends_capture() {
        let mut state = ready_state();
        state.update(press(150.0));
        state.update(Message::Pointer {
            event: PointerEvent::Released(PointerSource::Mouse),
            geometry: geometry(),
        });

        assert!(!state.captures_pointer());
        assert_eq!(state.update(moved(400.0)), Event::None);
    }

    #[test]
    fn focus_loss_cancels_drag_without_moving() {
        let mut state = ready_state();
        state.update(press(150.0));
        let before = state.position();

        assert_eq!(state.update(Message::FocusLost), Event::None);
        assert!(!state.captures_pointer());
        assert_eq!(state.position(), before);
    }

    #[test]
    fn keyboard_nudges_by_configured_step() {
        let mut state = ready_state();
        state.set_settings(Settings {
            keyboard_step: KeyboardStep::new(10.0),
            ..Settings::default()
        });

        let event = state.update(Message::Key(KeyCommand::StepLeft));
        assert_eq!(event, Event::SplitChanged(SplitPosition::new(40.0)));
        state.update(Message::Key(KeyCommand::JumpEnd));
        assert!(state.position().is_max());
        assert_eq!(state.update(Message::Key(KeyCommand::StepRight)), Event::None);
        state.update(Message::Key(KeyCommand::Recenter));
        assert_eq!(state.position(), SplitPosition::CENTER);
    }

    #[test]
    fn swap_keeps_position() {
        let mut state = ready_state();
        state.update(press(200.0));
        state.swap();

        assert_eq!(state.before_path(), Some(Path::new("after.png")));
        assert_eq!(state.after_path(), Some(Path::new("before.png")));
        assert_eq!(state.position(), SplitPosition::new(25.0));
    }

    #[test]
    fn teardown_mid_drag_stops_following() {
        let mut state = ready_state();
        state.update(press(200.0));
        state.teardown();

        assert!(!state.captures_pointer());
        assert!(!state.is_ready());
        assert_eq!(state.update(moved(450.0)), Event::None);
    }

    #[test]
    fn reset_reports_only_actual_changes() {
        let mut state = ready_state();
        assert_eq!(state.update(Message::Reset), Event::None);
        state.update(press(120.0));
        assert_eq!(
            state.update(Message::Reset),
            Event::SplitChanged(SplitPosition::CENTER)
        );
    }

    #[test]
    fn display_name_uses_file_name() {
        let image = loaded("/tmp/shots/after.png");
        assert_eq!(image.display_name(), "after.png");
    }
}
