// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and focus tooltips.

use perch_reactive::{Signal, SlotChange};

use crate::listeners::Bindings;
use crate::{DEFAULT_HOVER_DELAY_MS, Listeners, Surface, Timer, TriggerEvent};

/// Tooltip behaviour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TooltipConfig {
    /// Whether the pointer may move from the trigger into the tooltip.
    ///
    /// Enterable tooltips close after [`TooltipConfig::close_delay_ms`];
    /// others close as soon as the pointer leaves the trigger.
    pub enterable: bool,
    /// Close delay for enterable tooltips, in milliseconds.
    pub close_delay_ms: u64,
    /// Disabled tooltips never open.
    pub disabled: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            enterable: false,
            close_delay_ms: DEFAULT_HOVER_DELAY_MS,
            disabled: false,
        }
    }
}

impl TooltipConfig {
    /// Set [`TooltipConfig::enterable`].
    #[must_use]
    pub const fn with_enterable(mut self, enterable: bool) -> Self {
        self.enterable = enterable;
        self
    }

    /// Set [`TooltipConfig::close_delay_ms`].
    #[must_use]
    pub const fn with_close_delay(mut self, ms: u64) -> Self {
        self.close_delay_ms = ms;
        self
    }

    /// Set [`TooltipConfig::disabled`].
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn trigger_listeners(self) -> Listeners {
        if self.disabled {
            return Listeners::empty();
        }
        Listeners::TRIGGER_POINTER_ENTER
            | Listeners::TRIGGER_POINTER_LEAVE
            | Listeners::TRIGGER_FOCUS_IN
            | Listeners::TRIGGER_FOCUS_OUT
    }

    fn panel_listeners(self) -> Listeners {
        if self.disabled || !self.enterable {
            return Listeners::empty();
        }
        Listeners::PANEL_POINTER_ENTER | Listeners::PANEL_POINTER_LEAVE
    }
}

/// Opens a tooltip on hover or focus of its trigger.
///
/// ```
/// use perch_reactive::Signal;
/// use perch_trigger::{Surface, TooltipConfig, TooltipController, TriggerEvent};
///
/// let open = Signal::new(false);
/// let config = TooltipConfig::default().with_enterable(true);
/// let mut tip = TooltipController::new(open.clone(), config);
/// tip.set_trigger(Some(1_u32));
/// tip.set_panel(Some(2));
///
/// tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
/// tip.handle(Surface::Trigger, TriggerEvent::PointerLeave, 10);
/// tip.handle(Surface::Panel, TriggerEvent::PointerEnter, 50);
/// tip.tick(1_000);
/// assert!(open.get());
/// ```
#[derive(Debug)]
pub struct TooltipController<K> {
    open: Signal<bool>,
    config: TooltipConfig,
    bindings: Bindings<K>,
    close_timer: Timer,
    disposed: bool,
}

impl<K: Copy + Eq> TooltipController<K> {
    /// Create a controller writing to `open`.
    pub fn new(open: Signal<bool>, config: TooltipConfig) -> Self {
        Self {
            open,
            config,
            bindings: Bindings::new(),
            close_timer: Timer::new(),
            disposed: false,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> TooltipConfig {
        self.config
    }

    /// Current value of the open flag.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Listeners currently bound.
    pub fn listeners(&self) -> Listeners {
        self.bindings.bound()
    }

    /// Deadline of the pending close, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        self.close_timer.deadline()
    }

    /// Report the trigger element.
    pub fn set_trigger(&mut self, trigger: Option<K>) -> SlotChange<K> {
        if self.disposed {
            return SlotChange::Unchanged;
        }
        self.bindings
            .set_trigger(trigger, self.config.trigger_listeners())
    }

    /// Report the tooltip element.
    pub fn set_panel(&mut self, panel: Option<K>) -> SlotChange<K> {
        if self.disposed {
            return SlotChange::Unchanged;
        }
        self.bindings.set_panel(panel, self.config.panel_listeners())
    }

    /// Toggle whether the pointer may enter the tooltip.
    pub fn set_enterable(&mut self, enterable: bool) {
        if self.config.enterable == enterable {
            return;
        }
        self.config.enterable = enterable;
        self.close_timer.cancel();
        self.rebind();
    }

    /// Disable or re-enable the tooltip. Disabling closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.config.disabled == disabled {
            return;
        }
        self.config.disabled = disabled;
        self.close_timer.cancel();
        if disabled {
            self.write_open(false);
        }
        self.rebind();
    }

    /// Deliver an event dispatched on `surface` at time `now`.
    ///
    /// Returns `false` if the event was ignored.
    pub fn handle(&mut self, surface: Surface, event: TriggerEvent<K>, now: u64) -> bool {
        if self.disposed || !self.bindings.is_bound(event.listener(surface)) {
            return false;
        }
        match (surface, event) {
            (Surface::Trigger, TriggerEvent::PointerEnter | TriggerEvent::FocusIn) => {
                self.close_timer.cancel();
                self.write_open(true);
            }
            (Surface::Trigger, TriggerEvent::PointerLeave) if !self.config.enterable => {
                self.write_open(false);
            }
            (Surface::Trigger | Surface::Panel, TriggerEvent::PointerLeave) => {
                self.close_timer.schedule(now, self.config.close_delay_ms);
            }
            (Surface::Panel, TriggerEvent::PointerEnter) => {
                self.close_timer.cancel();
            }
            (Surface::Trigger, TriggerEvent::FocusOut { .. }) => {
                self.close_timer.cancel();
                self.write_open(false);
            }
            _ => return false,
        }
        true
    }

    /// Advance time. Returns `true` if a delayed close fired.
    pub fn tick(&mut self, now: u64) -> bool {
        if !self.close_timer.fire(now) || self.disposed {
            return false;
        }
        self.write_open(false)
    }

    /// Unbind and go inert. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.bindings.unbind_all();
        self.close_timer.cancel();
    }

    /// Whether [`TooltipController::dispose`] was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn rebind(&mut self) {
        if self.disposed {
            return;
        }
        self.bindings
            .rebind(self.config.trigger_listeners(), self.config.panel_listeners());
    }

    fn write_open(&self, open: bool) -> bool {
        let changed = self.open.set(open);
        if changed {
            tracing::debug!(open, "tooltip");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use perch_reactive::Signal;

    use super::{TooltipConfig, TooltipController};
    use crate::{Listeners, Surface, TriggerEvent};

    fn tooltip(config: TooltipConfig) -> (Signal<bool>, TooltipController<u32>) {
        let open = Signal::new(false);
        let mut tip = TooltipController::new(open.clone(), config);
        tip.set_trigger(Some(1));
        tip.set_panel(Some(2));
        (open, tip)
    }

    #[test]
    fn plain_tooltip_closes_immediately() {
        let (open, mut tip) = tooltip(TooltipConfig::default());
        assert!(!tip.listeners().intersects(Listeners::PANEL_ALL));
        tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
        assert!(open.get());
        tip.handle(Surface::Trigger, TriggerEvent::PointerLeave, 5);
        assert!(!open.get());
        assert_eq!(tip.next_deadline(), None);
    }

    #[test]
    fn enterable_tooltip_waits_for_delay() {
        let (open, mut tip) = tooltip(TooltipConfig::default().with_enterable(true));
        tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
        tip.handle(Surface::Trigger, TriggerEvent::PointerLeave, 100);
        assert!(!tip.tick(299));
        assert!(open.get());
        assert!(tip.tick(300));
        assert!(!open.get());
    }

    #[test]
    fn pointer_inside_enterable_tooltip_keeps_it_open() {
        let (open, mut tip) = tooltip(TooltipConfig::default().with_enterable(true));
        tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
        tip.handle(Surface::Trigger, TriggerEvent::PointerLeave, 10);
        tip.handle(Surface::Panel, TriggerEvent::PointerEnter, 20);
        assert!(!tip.tick(5_000));
        assert!(open.get());

        tip.handle(Surface::Panel, TriggerEvent::PointerLeave, 5_000);
        assert!(tip.tick(5_200));
        assert!(!open.get());
    }

    #[test]
    fn focus_opens_and_blur_closes() {
        let (open, mut tip) = tooltip(TooltipConfig::default());
        tip.handle(Surface::Trigger, TriggerEvent::FocusIn, 0);
        assert!(open.get());
        tip.handle(
            Surface::Trigger,
            TriggerEvent::FocusOut {
                related_target: None,
            },
            1,
        );
        assert!(!open.get());
    }

    #[test]
    fn disabling_closes_and_ignores_input() {
        let (open, mut tip) = tooltip(TooltipConfig::default());
        tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
        tip.set_disabled(true);
        assert!(!open.get());
        assert!(tip.listeners().is_empty());
        assert!(!tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 1));
        assert!(!open.get());

        tip.set_disabled(false);
        assert!(tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 2));
        assert!(open.get());
    }

    #[test]
    fn disposed_timer_never_closes() {
        let (open, mut tip) = tooltip(TooltipConfig::default().with_enterable(true));
        tip.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
        tip.handle(Surface::Trigger, TriggerEvent::PointerLeave, 0);
        tip.dispose();
        assert!(!tip.tick(1_000));
        assert!(open.get());
        assert!(tip.is_disposed());
    }
}
