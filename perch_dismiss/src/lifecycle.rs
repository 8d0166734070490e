// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener attach/detach bookkeeping shared by the detectors.

/// How a call changed a detector's global listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListenerChange {
    /// The listener should now be registered.
    Attached,
    /// The listener should now be removed.
    Detached,
    /// No change.
    Unchanged,
}

#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct Lifecycle {
    attached: bool,
    disposed: bool,
}

impl Lifecycle {
    pub(crate) fn set_active(&mut self, active: bool) -> ListenerChange {
        if self.disposed {
            return ListenerChange::Unchanged;
        }
        match (self.attached, active) {
            (false, true) => {
                self.attached = true;
                ListenerChange::Attached
            }
            (true, false) => {
                self.attached = false;
                ListenerChange::Detached
            }
            _ => ListenerChange::Unchanged,
        }
    }

    pub(crate) fn dispose(&mut self) -> ListenerChange {
        self.disposed = true;
        if core::mem::take(&mut self.attached) {
            ListenerChange::Detached
        } else {
            ListenerChange::Unchanged
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn is_disposed(&self) -> bool {
        self.disposed
    }
}
