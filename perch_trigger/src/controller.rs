// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger interaction controller.
//!
//! ## State machine
//!
//! | Mode | Event | Effect |
//! |---|---|---|
//! | `Manual` | any | ignored (nothing bound) |
//! | `Click` | trigger `click` | toggle |
//! | `Hover` | trigger `pointerenter` | cancel close timer, open |
//! | `Hover` | trigger `pointerleave` | start close timer |
//! | `Hover` | panel `pointerenter` | cancel close timer |
//! | `Hover` | panel `pointerleave` | restart close timer |
//! | `Focus` | trigger `focusin` | open |
//! | `Focus` | trigger/panel `focusout` | queue a focus check |
//!
//! The close timer fires from [`TriggerController::tick`]. A queued focus check
//! runs from [`TriggerController::run_microtasks`] and closes unless the newly
//! focused element is inside the trigger or the panel at that point.
//!
//! ## Host loop
//!
//! 1. After each render pass, report elements with `set_trigger`/`set_panel`.
//! 2. Forward events for bound [`Listeners`] to [`TriggerController::handle`].
//! 3. After each event dispatch, call `run_microtasks`.
//! 4. On every timer tick (or a host timeout armed at [`TriggerController::next_deadline`]),
//!    call `tick`.

use perch_dismiss::ElementTree;
use perch_reactive::{Signal, SlotChange};

use crate::listeners::Bindings;
use crate::{Listeners, Surface, Timer, TriggerConfig, TriggerEvent, TriggerMode};

/// Drives a host-owned open flag from trigger and panel events.
///
/// ```
/// use perch_reactive::Signal;
/// use perch_trigger::{Surface, TriggerConfig, TriggerController, TriggerEvent, TriggerMode};
///
/// let open = Signal::new(false);
/// let mut ctl = TriggerController::new(open.clone(), TriggerConfig::new(TriggerMode::Hover));
/// ctl.set_trigger(Some(1_u32));
///
/// ctl.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0);
/// assert!(open.get());
///
/// ctl.handle(Surface::Trigger, TriggerEvent::PointerLeave, 10);
/// ctl.tick(209);
/// assert!(open.get());
/// ctl.tick(210);
/// assert!(!open.get());
/// ```
#[derive(Debug)]
pub struct TriggerController<K> {
    open: Signal<bool>,
    config: TriggerConfig,
    bindings: Bindings<K>,
    close_timer: Timer,
    /// `relatedTarget` of the last `focusout`, awaiting the microtask check.
    pending_focus_check: Option<Option<K>>,
    disposed: bool,
}

impl<K: Copy + Eq> TriggerController<K> {
    /// Create a controller writing to `open`.
    ///
    /// No listeners are bound until a trigger element is reported.
    pub fn new(open: Signal<bool>, config: TriggerConfig) -> Self {
        Self {
            open,
            config,
            bindings: Bindings::new(),
            close_timer: Timer::new(),
            pending_focus_check: None,
            disposed: false,
        }
    }

    /// The open flag this controller writes to.
    pub fn open_signal(&self) -> &Signal<bool> {
        &self.open
    }

    /// Current value of the open flag.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Active configuration.
    pub fn config(&self) -> TriggerConfig {
        self.config
    }

    /// Active mode.
    pub fn mode(&self) -> TriggerMode {
        self.config.mode
    }

    /// Listeners currently bound.
    pub fn listeners(&self) -> Listeners {
        self.bindings.bound()
    }

    /// Trigger element, if mounted.
    pub fn trigger(&self) -> Option<K> {
        self.bindings.trigger()
    }

    /// Panel element, if mounted.
    pub fn panel(&self) -> Option<K> {
        self.bindings.panel()
    }

    /// Whether a hover close is scheduled.
    pub fn has_pending_close(&self) -> bool {
        self.close_timer.is_pending()
    }

    /// Deadline of the pending hover close, for hosts that arm a real timeout.
    pub fn next_deadline(&self) -> Option<u64> {
        self.close_timer.deadline()
    }

    /// Whether a focus check is waiting for [`TriggerController::run_microtasks`].
    pub fn has_pending_microtask(&self) -> bool {
        self.pending_focus_check.is_some()
    }

    /// Whether [`TriggerController::dispose`] was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Switch modes at runtime.
    ///
    /// All listeners of the old mode are removed, and any pending close or
    /// focus check is dropped, before the new mode's listeners are bound.
    pub fn set_mode(&mut self, mode: TriggerMode) {
        if self.disposed || mode == self.config.mode {
            return;
        }
        tracing::debug!(from = self.config.mode.as_str(), to = mode.as_str(), "trigger mode");
        self.bindings.unbind_all();
        self.close_timer.cancel();
        self.pending_focus_check = None;
        self.config.mode = mode;
        self.bindings
            .rebind(mode.trigger_listeners(), mode.panel_listeners());
    }

    /// Change the hover close delay. Applies to closes scheduled afterwards.
    pub fn set_hover_delay(&mut self, ms: u64) {
        self.config.hover_delay_ms = ms;
    }

    /// Report the trigger element after a render pass.
    pub fn set_trigger(&mut self, trigger: Option<K>) -> SlotChange<K> {
        if self.disposed {
            return SlotChange::Unchanged;
        }
        self.bindings
            .set_trigger(trigger, self.config.mode.trigger_listeners())
    }

    /// Report the panel element after a render pass.
    ///
    /// Panels typically exist only while open, so this runs on every open and
    /// close; listeners follow the element, not the open flag.
    pub fn set_panel(&mut self, panel: Option<K>) -> SlotChange<K> {
        if self.disposed {
            return SlotChange::Unchanged;
        }
        self.bindings
            .set_panel(panel, self.config.mode.panel_listeners())
    }

    /// Deliver an event dispatched on `surface` at time `now` (milliseconds).
    ///
    /// Returns `false` if no listener for the event is bound (the event is ignored).
    pub fn handle(&mut self, surface: Surface, event: TriggerEvent<K>, now: u64) -> bool {
        if self.disposed || !self.bindings.is_bound(event.listener(surface)) {
            return false;
        }
        match (surface, event) {
            (Surface::Trigger, TriggerEvent::Click) => {
                let next = !self.open.get();
                self.write_open(next);
            }
            (Surface::Trigger, TriggerEvent::PointerEnter) => {
                self.close_timer.cancel();
                self.write_open(true);
            }
            (Surface::Panel, TriggerEvent::PointerEnter) => {
                self.close_timer.cancel();
            }
            (Surface::Trigger | Surface::Panel, TriggerEvent::PointerLeave) => {
                self.close_timer.schedule(now, self.config.hover_delay_ms);
            }
            (Surface::Trigger, TriggerEvent::FocusIn) => {
                self.pending_focus_check = None;
                self.write_open(true);
            }
            (Surface::Trigger | Surface::Panel, TriggerEvent::FocusOut { related_target }) => {
                self.pending_focus_check = Some(related_target);
            }
            // Not bindable; `is_bound` rejected these above.
            (Surface::Panel, TriggerEvent::Click | TriggerEvent::FocusIn) => return false,
        }
        true
    }

    /// Advance time. Returns `true` if the hover close fired and closed the panel.
    pub fn tick(&mut self, now: u64) -> bool {
        if !self.close_timer.fire(now) || self.disposed {
            return false;
        }
        self.write_open(false)
    }

    /// Run the deferred focus check, if one is queued.
    ///
    /// Returns `true` if it closed the panel.
    pub fn run_microtasks(&mut self, tree: &impl ElementTree<K>) -> bool {
        let Some(related) = self.pending_focus_check.take() else {
            return false;
        };
        if self.disposed {
            return false;
        }
        let stays_inside = related.is_some_and(|r| {
            [self.bindings.trigger(), self.bindings.panel()]
                .into_iter()
                .flatten()
                .any(|container| tree.contains(&container, &r))
        });
        if stays_inside {
            return false;
        }
        self.write_open(false)
    }

    /// Remove every listener, drop pending work and go inert. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.bindings.unbind_all();
        self.close_timer.cancel();
        self.pending_focus_check = None;
    }

    fn write_open(&self, open: bool) -> bool {
        if self.disposed {
            return false;
        }
        let changed = self.open.set(open);
        if changed {
            tracing::debug!(open, mode = self.config.mode.as_str(), "trigger");
        }
        changed
    }
}
