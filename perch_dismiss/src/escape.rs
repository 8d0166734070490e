// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escape key presses anywhere in the document.

use crate::{DismissReason, ListenerChange, lifecycle::Lifecycle};

/// The `KeyboardEvent.key` value that requests dismissal.
pub const ESCAPE_KEY: &str = "Escape";

/// Reports Escape key presses while active, regardless of focus.
#[derive(Clone, Debug, Default)]
pub struct EscapeKeyDetector {
    life: Lifecycle,
}

impl EscapeKeyDetector {
    /// An inactive detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach while `active`, detach otherwise.
    pub fn set_active(&mut self, active: bool) -> ListenerChange {
        let change = self.life.set_active(active);
        if change != ListenerChange::Unchanged {
            tracing::trace!(?change, "escape listener");
        }
        change
    }

    /// Whether the document listener is attached.
    pub fn is_listening(&self) -> bool {
        self.life.is_attached()
    }

    /// Handle a document-level key press, given its `key` value.
    pub fn on_key_down(&self, key: &str) -> Option<DismissReason> {
        if self.life.is_attached() && key == ESCAPE_KEY {
            tracing::debug!("escape pressed");
            Some(DismissReason::EscapeKey)
        } else {
            None
        }
    }

    /// Detach for good. Idempotent.
    pub fn dispose(&mut self) -> ListenerChange {
        self.life.dispose()
    }
}

#[cfg(test)]
mod tests {
    use super::EscapeKeyDetector;
    use crate::{DismissReason, ListenerChange};

    #[test]
    fn only_escape_while_active() {
        let mut d = EscapeKeyDetector::new();
        assert_eq!(d.on_key_down("Escape"), None);
        assert_eq!(d.set_active(true), ListenerChange::Attached);
        assert_eq!(d.on_key_down("Enter"), None);
        assert_eq!(d.on_key_down("escape"), None);
        assert_eq!(d.on_key_down("Escape"), Some(DismissReason::EscapeKey));
    }

    #[test]
    fn dispose_silences_the_detector() {
        let mut d = EscapeKeyDetector::new();
        d.set_active(true);
        assert_eq!(d.dispose(), ListenerChange::Detached);
        assert_eq!(d.set_active(true), ListenerChange::Unchanged);
        assert!(!d.is_listening());
        assert_eq!(d.on_key_down("Escape"), None);
    }
}
