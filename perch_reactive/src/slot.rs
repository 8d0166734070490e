// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element slots: a reference to an element that mounts and unmounts over time.
//!
//! Hosts report "this element is now in the render tree" (or "gone") by calling
//! [`ElementSlot::set`] after their render pass. The returned [`SlotChange`]
//! is the explicit transition that controllers react to: unbind listeners on
//! [`SlotChange::Unmounted`], bind on [`SlotChange::Mounted`], and do both on
//! [`SlotChange::Replaced`].
//!
//! Whether an element *exists* is tracked here; whether a panel is visually
//! *open* is a separate flag owned by the host.

/// Transition produced by [`ElementSlot::set`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlotChange<K> {
    /// The slot held the same element (or stayed empty).
    Unchanged,
    /// The slot went from empty to holding an element.
    Mounted(K),
    /// The slot went from holding an element to empty.
    Unmounted(K),
    /// The slot swapped one element for another.
    Replaced {
        /// Element that left the slot.
        from: K,
        /// Element that entered the slot.
        to: K,
    },
}

impl<K> SlotChange<K> {
    /// Element that left the slot, if any.
    pub fn departed(&self) -> Option<&K> {
        match self {
            Self::Unmounted(k) | Self::Replaced { from: k, .. } => Some(k),
            Self::Unchanged | Self::Mounted(_) => None,
        }
    }

    /// Element that entered the slot, if any.
    pub fn arrived(&self) -> Option<&K> {
        match self {
            Self::Mounted(k) | Self::Replaced { to: k, .. } => Some(k),
            Self::Unchanged | Self::Unmounted(_) => None,
        }
    }

    /// Returns `true` for [`SlotChange::Unchanged`].
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Holds the current element for one role (for example "trigger" or "panel").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ElementSlot<K> {
    current: Option<K>,
}

impl<K> Default for ElementSlot<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: Copy + Eq> ElementSlot<K> {
    /// An empty slot.
    pub const fn empty() -> Self {
        Self { current: None }
    }

    /// A slot already holding `element`.
    pub const fn with(element: K) -> Self {
        Self {
            current: Some(element),
        }
    }

    /// The element currently in the slot.
    pub fn get(&self) -> Option<K> {
        self.current
    }

    /// Returns `true` if an element is mounted.
    pub fn is_mounted(&self) -> bool {
        self.current.is_some()
    }

    /// Store `element` and report the transition.
    pub fn set(&mut self, element: Option<K>) -> SlotChange<K> {
        let previous = core::mem::replace(&mut self.current, element);
        match (previous, element) {
            (None, None) => SlotChange::Unchanged,
            (Some(a), Some(b)) if a == b => SlotChange::Unchanged,
            (None, Some(b)) => SlotChange::Mounted(b),
            (Some(a), None) => SlotChange::Unmounted(a),
            (Some(a), Some(b)) => SlotChange::Replaced { from: a, to: b },
        }
    }

    /// Empty the slot, returning the transition.
    pub fn clear(&mut self) -> SlotChange<K> {
        self.set(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementSlot, SlotChange};

    #[test]
    fn transitions_cover_all_cases() {
        let mut slot: ElementSlot<u32> = ElementSlot::empty();
        assert_eq!(slot.set(None), SlotChange::Unchanged);
        assert_eq!(slot.set(Some(1)), SlotChange::Mounted(1));
        assert_eq!(slot.set(Some(1)), SlotChange::Unchanged);
        assert_eq!(slot.set(Some(2)), SlotChange::Replaced { from: 1, to: 2 });
        assert_eq!(slot.clear(), SlotChange::Unmounted(2));
        assert!(!slot.is_mounted());
    }

    #[test]
    fn departed_and_arrived() {
        let replaced = SlotChange::Replaced { from: 3_u32, to: 4 };
        assert_eq!(replaced.departed(), Some(&3));
        assert_eq!(replaced.arrived(), Some(&4));
        assert_eq!(SlotChange::Mounted(5_u32).departed(), None);
        assert_eq!(SlotChange::Unmounted(5_u32).arrived(), None);
        assert!(SlotChange::<u32>::Unchanged.is_unchanged());
    }
}
