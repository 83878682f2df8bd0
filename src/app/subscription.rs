// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts and file drops are always routed. Window focus loss is
//! only listened to while the comparison holds a drag, so no window-level
//! listener outlives the drag session.

use super::Message;
use crate::ui::compare::{self, KeyCommand};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Event, Subscription};

/// Creates the event subscription for the current drag state.
pub fn create_event_subscription(capturing: bool) -> Subscription<Message> {
    if capturing {
        event::listen_with(|event, status, _window_id| {
            if let Event::Window(window::Event::Unfocused) = &event {
                return Some(Message::Compare(compare::Message::FocusLost));
            }
            route_common(&event, status)
        })
    } else {
        event::listen_with(|event, status, _window_id| route_common(&event, status))
    }
}

fn route_common(event: &Event, status: event::Status) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path.clone())),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => match status {
            event::Status::Ignored => key_command(key, *modifiers)
                .map(|command| Message::Compare(compare::Message::Key(command))),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Maps a key press onto a comparison command.
///
/// Shortcuts combined with Ctrl/Cmd or Alt are left to the platform.
pub fn key_command(key: &Key, modifiers: Modifiers) -> Option<KeyCommand> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(KeyCommand::StepLeft),
        Key::Named(Named::ArrowRight) => Some(KeyCommand::StepRight),
        Key::Named(Named::Home) => Some(KeyCommand::JumpStart),
        Key::Named(Named::End) => Some(KeyCommand::JumpEnd),
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => Some(KeyCommand::Recenter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_edges_map_to_commands() {
        let none = Modifiers::default();
        assert_eq!(
            key_command(&Key::Named(Named::ArrowLeft), none),
            Some(KeyCommand::StepLeft)
        );
        assert_eq!(
            key_command(&Key::Named(Named::ArrowRight), none),
            Some(KeyCommand::StepRight)
        );
        assert_eq!(
            key_command(&Key::Named(Named::Home), none),
            Some(KeyCommand::JumpStart)
        );
        assert_eq!(
            key_command(&Key::Named(Named::End), none),
            Some(KeyCommand::JumpEnd)
        );
    }

    #[test]
    fn r_recentres_in_either_case() {
        let none = Modifiers::default();
        assert_eq!(
            key_command(&Key::Character("r".into()), none),
            Some(KeyCommand::Recenter)
        );
        assert_eq!(
            key_command(&Key::Character("R".into()), Modifiers::SHIFT),
            Some(KeyCommand::Recenter)
        );
    }

    #[test]
    fn platform_shortcuts_are_ignored() {
        assert_eq!(key_command(&Key::Character("r".into()), Modifiers::CTRL), None);
        assert_eq!(key_command(&Key::Named(Named::ArrowLeft), Modifiers::ALT), None);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(key_command(&Key::Named(Named::Space), Modifiers::default()), None);
        assert_eq!(
            key_command(&Key::Character("x".into()), Modifiers::default()),
            None
        );
    }

    #[test]
    fn captured_keys_are_not_rerouted() {
        let event = Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Home),
            modified_key: Key::Named(Named::Home),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Home),
            location: keyboard::Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        });

        assert!(route_common(&event, event::Status::Captured).is_none());
        assert!(matches!(
            route_common(&event, event::Status::Ignored),
            Some(Message::Compare(compare::Message::Key(KeyCommand::JumpStart)))
        ));
    }
}
