// SPDX-License-Identifier: MPL-2.0
//! Drag session state machine.
//!
//! Two states, `Idle` and `Dragging`, with no terminal state. The session
//! remembers which pointer started it so a second finger (or a stray mouse
//! release during a touch drag) cannot steal or end someone else's drag.

use super::pointer::PointerSource;

/// Whether a pointer currently controls the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { source: PointerSource },
}

impl DragSession {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    /// Returns true when `source` owns the running drag.
    #[must_use]
    pub fn is_driven_by(&self, source: PointerSource) -> bool {
        matches!(self, DragSession::Dragging { source: owner } if *owner == source)
    }

    /// `Idle → Dragging`. A press while already dragging keeps the
    /// first owner. Returns whether a transition happened.
    pub fn begin(&mut self, source: PointerSource) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = DragSession::Dragging { source };
        true
    }

    /// `Dragging → Idle` when `source` owns the drag.
    /// Returns whether a transition happened.
    pub fn release(&mut self, source: PointerSource) -> bool {
        if !self.is_driven_by(source) {
            return false;
        }
        *self = DragSession::Idle;
        true
    }

    /// `Dragging → Idle` unconditionally.
    /// Returns whether a transition happened.
    pub fn cancel(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = DragSession::Idle;
        was_dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_idle() {
        assert!(!DragSession::default().is_dragging());
    }

    #[test]
    fn begin_then_release_by_owner() {
        let mut session = DragSession::default();
        assert!(session.begin(PointerSource::Mouse));
        assert!(session.is_driven_by(PointerSource::Mouse));
        assert!(session.release(PointerSource::Mouse));
        assert_eq!(session, DragSession::Idle);
    }

    #[test]
    fn second_press_keeps_first_owner() {
        let mut session = DragSession::default();
        session.begin(PointerSource::Touch(1));
        assert!(!session.begin(PointerSource::Touch(2)));
        assert!(session.is_driven_by(PointerSource::Touch(1)));
    }

    #[test]
    fn release_from_other_source_is_ignored() {
        let mut session = DragSession::default();
        session.begin(PointerSource::Touch(1));
        assert!(!session.release(PointerSource::Mouse));
        assert!(!session.release(PointerSource::Touch(2)));
        assert!(session.is_dragging());
    }

    #[test]
    fn cancel_ends_any_drag() {
        let mut session = DragSession::default();
        session.begin(PointerSource::Touch(4));
        assert!(session.cancel());
        assert!(!session.is_dragging());
        assert!(!session.cancel());
    }
}
