// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer presses outside a set of tracked elements.

use smallvec::SmallVec;

use crate::{DismissReason, ElementTree, ListenerChange, lifecycle::Lifecycle};

/// Reports pointer-down events that land outside every tracked element.
///
/// The detector models one document-level `pointerdown` listener. The host
/// mirrors [`ListenerChange`] values onto its real listener and forwards
/// presses to [`ClickOutsideDetector::on_pointer_down`] while attached.
///
/// ```
/// use perch_dismiss::{ClickOutsideDetector, DismissReason, ListenerChange, ParentMap};
///
/// // 10 is the panel, 11 a button inside it, 20 unrelated content.
/// let tree = ParentMap::new().with(11_u32, 10);
/// let mut detector = ClickOutsideDetector::new();
/// detector.track(10);
///
/// // Inactive: presses are ignored.
/// assert_eq!(detector.on_pointer_down(Some(&20), &tree), None);
///
/// assert_eq!(detector.set_active(true), ListenerChange::Attached);
/// assert_eq!(detector.on_pointer_down(Some(&11), &tree), None);
/// assert_eq!(
///     detector.on_pointer_down(Some(&20), &tree),
///     Some(DismissReason::PointerDownOutside)
/// );
/// ```
#[derive(Clone, Debug)]
pub struct ClickOutsideDetector<K> {
    inside: SmallVec<[K; 2]>,
    life: Lifecycle,
}

impl<K: Copy + Eq> Default for ClickOutsideDetector<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> ClickOutsideDetector<K> {
    /// An inactive detector with no inside elements.
    pub fn new() -> Self {
        Self {
            inside: SmallVec::new(),
            life: Lifecycle::default(),
        }
    }

    /// Elements currently treated as "inside".
    pub fn inside(&self) -> &[K] {
        &self.inside
    }

    /// Treat presses within `element` as inside. Tracking twice is a no-op.
    pub fn track(&mut self, element: K) {
        if !self.inside.contains(&element) {
            self.inside.push(element);
        }
    }

    /// Stop treating `element` as inside. Returns `true` if it was tracked.
    pub fn untrack(&mut self, element: &K) -> bool {
        let before = self.inside.len();
        self.inside.retain(|k| *k != *element);
        self.inside.len() != before
    }

    /// Replace the inside set.
    pub fn set_inside(&mut self, elements: impl IntoIterator<Item = K>) {
        self.inside.clear();
        for element in elements {
            self.track(element);
        }
    }

    /// Attach while `active`, detach otherwise.
    pub fn set_active(&mut self, active: bool) -> ListenerChange {
        let change = self.life.set_active(active);
        if change != ListenerChange::Unchanged {
            tracing::trace!(?change, "click-outside listener");
        }
        change
    }

    /// Whether the document listener is attached.
    pub fn is_listening(&self) -> bool {
        self.life.is_attached()
    }

    /// Handle a document-level pointer press.
    ///
    /// `target` is the element under the pointer; `None` (for example the
    /// document itself) counts as outside. Returns a dismissal request at most
    /// once per call, and only while attached.
    pub fn on_pointer_down(
        &self,
        target: Option<&K>,
        tree: &impl ElementTree<K>,
    ) -> Option<DismissReason> {
        if !self.life.is_attached() {
            return None;
        }
        let inside = target.is_some_and(|t| self.inside.iter().any(|k| tree.contains(k, t)));
        if inside {
            None
        } else {
            tracing::debug!("pointer down outside");
            Some(DismissReason::PointerDownOutside)
        }
    }

    /// Detach for good. Idempotent; later [`ClickOutsideDetector::set_active`]
    /// calls do nothing.
    pub fn dispose(&mut self) -> ListenerChange {
        self.life.dispose()
    }

    /// Whether [`ClickOutsideDetector::dispose`] was called.
    pub fn is_disposed(&self) -> bool {
        self.life.is_disposed()
    }
}
