// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener bookkeeping for a trigger/panel pair.

use perch_reactive::{ElementSlot, SlotChange};

bitflags::bitflags! {
    /// Set of `(surface, event)` listeners a controller has bound.
    ///
    /// Hosts mirror this set onto real event listeners: after any call that
    /// may rebind, compare the previous and current sets and add/remove the
    /// difference. Events for listeners not in the set are ignored.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u16 {
        /// `click` on the trigger.
        const TRIGGER_CLICK = 1 << 0;
        /// `pointerenter` on the trigger.
        const TRIGGER_POINTER_ENTER = 1 << 1;
        /// `pointerleave` on the trigger.
        const TRIGGER_POINTER_LEAVE = 1 << 2;
        /// `focusin` on the trigger.
        const TRIGGER_FOCUS_IN = 1 << 3;
        /// `focusout` on the trigger.
        const TRIGGER_FOCUS_OUT = 1 << 4;
        /// `pointerenter` on the panel.
        const PANEL_POINTER_ENTER = 1 << 5;
        /// `pointerleave` on the panel.
        const PANEL_POINTER_LEAVE = 1 << 6;
        /// `focusout` on the panel.
        const PANEL_FOCUS_OUT = 1 << 7;

        /// Every trigger listener.
        const TRIGGER_ALL = Self::TRIGGER_CLICK.bits()
            | Self::TRIGGER_POINTER_ENTER.bits()
            | Self::TRIGGER_POINTER_LEAVE.bits()
            | Self::TRIGGER_FOCUS_IN.bits()
            | Self::TRIGGER_FOCUS_OUT.bits();
        /// Every panel listener.
        const PANEL_ALL = Self::PANEL_POINTER_ENTER.bits()
            | Self::PANEL_POINTER_LEAVE.bits()
            | Self::PANEL_FOCUS_OUT.bits();
    }
}

/// Which element an event was dispatched on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The element that opens the panel.
    Trigger,
    /// The floating panel itself.
    Panel,
}

/// DOM events the controllers understand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriggerEvent<K> {
    /// `click`.
    Click,
    /// `pointerenter`.
    PointerEnter,
    /// `pointerleave`.
    PointerLeave,
    /// `focusin`.
    FocusIn,
    /// `focusout`, with the element receiving focus (`relatedTarget`).
    FocusOut {
        /// Element gaining focus, or `None` if focus left the document.
        related_target: Option<K>,
    },
}

impl<K> TriggerEvent<K> {
    /// The listener that must be bound for this event to be delivered on `surface`.
    pub fn listener(&self, surface: Surface) -> Listeners {
        match (surface, self) {
            (Surface::Trigger, Self::Click) => Listeners::TRIGGER_CLICK,
            (Surface::Trigger, Self::PointerEnter) => Listeners::TRIGGER_POINTER_ENTER,
            (Surface::Trigger, Self::PointerLeave) => Listeners::TRIGGER_POINTER_LEAVE,
            (Surface::Trigger, Self::FocusIn) => Listeners::TRIGGER_FOCUS_IN,
            (Surface::Trigger, Self::FocusOut { .. }) => Listeners::TRIGGER_FOCUS_OUT,
            (Surface::Panel, Self::PointerEnter) => Listeners::PANEL_POINTER_ENTER,
            (Surface::Panel, Self::PointerLeave) => Listeners::PANEL_POINTER_LEAVE,
            (Surface::Panel, Self::FocusOut { .. }) => Listeners::PANEL_FOCUS_OUT,
            (Surface::Panel, Self::Click | Self::FocusIn) => Listeners::empty(),
        }
    }
}

/// Trigger and panel slots plus the listeners bound on them.
///
/// Listeners are bound on an element only while it is mounted. Every change
/// removes the old listeners before adding new ones.
#[derive(Clone, Debug)]
pub(crate) struct Bindings<K> {
    trigger: ElementSlot<K>,
    panel: ElementSlot<K>,
    bound: Listeners,
}

impl<K: Copy + Eq> Bindings<K> {
    pub(crate) fn new() -> Self {
        Self {
            trigger: ElementSlot::empty(),
            panel: ElementSlot::empty(),
            bound: Listeners::empty(),
        }
    }

    pub(crate) fn bound(&self) -> Listeners {
        self.bound
    }

    pub(crate) fn is_bound(&self, listener: Listeners) -> bool {
        !listener.is_empty() && self.bound.contains(listener)
    }

    pub(crate) fn trigger(&self) -> Option<K> {
        self.trigger.get()
    }

    pub(crate) fn panel(&self) -> Option<K> {
        self.panel.get()
    }

    /// Swap the trigger element, rebinding `wanted` on the new one.
    pub(crate) fn set_trigger(&mut self, element: Option<K>, wanted: Listeners) -> SlotChange<K> {
        let change = self.trigger.set(element);
        if !change.is_unchanged() {
            self.bind(Listeners::TRIGGER_ALL, self.trigger.is_mounted(), wanted);
        }
        change
    }

    /// Swap the panel element, rebinding `wanted` on the new one.
    pub(crate) fn set_panel(&mut self, element: Option<K>, wanted: Listeners) -> SlotChange<K> {
        let change = self.panel.set(element);
        if !change.is_unchanged() {
            self.bind(Listeners::PANEL_ALL, self.panel.is_mounted(), wanted);
        }
        change
    }

    /// Tear everything down, then bind `trigger` and `panel` sets on whatever is mounted.
    pub(crate) fn rebind(&mut self, trigger: Listeners, panel: Listeners) {
        self.unbind_all();
        self.bind(Listeners::TRIGGER_ALL, self.trigger.is_mounted(), trigger);
        self.bind(Listeners::PANEL_ALL, self.panel.is_mounted(), panel);
    }

    pub(crate) fn unbind_all(&mut self) {
        if !self.bound.is_empty() {
            tracing::trace!(listeners = ?self.bound, "unbind");
        }
        self.bound = Listeners::empty();
    }

    fn bind(&mut self, surface: Listeners, mounted: bool, wanted: Listeners) {
        if self.bound.intersects(surface) {
            tracing::trace!(listeners = ?(self.bound & surface), "unbind");
        }
        self.bound.remove(surface);
        if mounted {
            let added = wanted & surface;
            if !added.is_empty() {
                tracing::trace!(listeners = ?added, "bind");
            }
            self.bound.insert(added);
        }
    }
}

#[cfg(test)]
mod tests {
    use perch_reactive::SlotChange;

    use super::{Bindings, Listeners, Surface, TriggerEvent};

    const HOVER_TRIGGER: Listeners =
        Listeners::TRIGGER_POINTER_ENTER.union(Listeners::TRIGGER_POINTER_LEAVE);
    const HOVER_PANEL: Listeners =
        Listeners::PANEL_POINTER_ENTER.union(Listeners::PANEL_POINTER_LEAVE);

    #[test]
    fn event_listener_mapping() {
        assert_eq!(
            TriggerEvent::<u32>::Click.listener(Surface::Trigger),
            Listeners::TRIGGER_CLICK
        );
        assert_eq!(
            TriggerEvent::<u32>::FocusOut {
                related_target: None
            }.listener(Surface::Panel),
            Listeners::PANEL_FOCUS_OUT
        );
        assert!(TriggerEvent::<u32>::Click.listener(Surface::Panel).is_empty());
    }

    #[test]
    fn panel_listeners_follow_mounting() {
        let mut b: Bindings<u32> = Bindings::new();
        b.set_trigger(Some(1), HOVER_TRIGGER);
        assert_eq!(b.bound(), HOVER_TRIGGER);

        assert_eq!(b.set_panel(Some(2), HOVER_PANEL), SlotChange::Mounted(2));
        assert_eq!(b.bound(), HOVER_TRIGGER | HOVER_PANEL);

        assert_eq!(b.set_panel(None, HOVER_PANEL), SlotChange::Unmounted(2));
        assert_eq!(b.bound(), HOVER_TRIGGER);
    }

    #[test]
    fn rebind_replaces_previous_set() {
        let mut b: Bindings<u32> = Bindings::new();
        b.set_trigger(Some(1), HOVER_TRIGGER);
        b.set_panel(Some(2), HOVER_PANEL);
        b.rebind(Listeners::TRIGGER_CLICK, Listeners::empty());
        assert_eq!(b.bound(), Listeners::TRIGGER_CLICK);
        assert!(b.is_bound(Listeners::TRIGGER_CLICK));
        assert!(!b.is_bound(Listeners::empty()));
    }

    #[test]
    fn nothing_binds_without_elements() {
        let mut b: Bindings<u32> = Bindings::new();
        b.rebind(HOVER_TRIGGER, HOVER_PANEL);
        assert!(b.bound().is_empty());
    }
}
