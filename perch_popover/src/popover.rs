// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use perch_dismiss::{ClickOutsideDetector, DismissReason, EscapeKeyDetector};
use perch_position::{PanelPosition, Placement, Positioner};
use perch_reactive::{Signal, SlotChange};
use perch_trigger::{Listeners, Surface, TriggerController, TriggerEvent, TriggerMode};

use crate::{PopoverConfig, PopoverHost};

/// A trigger, a floating panel and everything that opens, closes and places it.
///
/// The popover follows one `Signal<bool>`. Every method that can change the
/// flag resynchronises before returning: opening arms the dismissal detectors
/// and positions the panel; closing disarms them and forgets the position.
/// If the host writes the flag itself (for example in
/// [`TriggerMode::Manual`]), call [`Popover::sync`] afterwards.
#[derive(Debug)]
pub struct Popover<K> {
    open: Signal<bool>,
    config: PopoverConfig,
    trigger: TriggerController<K>,
    click_outside: ClickOutsideDetector<K>,
    escape: EscapeKeyDetector,
    positioner: Positioner<K>,
    /// Open state the detectors and positioner were last synced to.
    armed: bool,
    disposed: bool,
}

impl<K: Copy + Eq> Popover<K> {
    /// A closed popover driven by `open`.
    pub fn new(open: Signal<bool>, config: PopoverConfig) -> Self {
        Self {
            trigger: TriggerController::new(open.clone(), config.trigger),
            click_outside: ClickOutsideDetector::new(),
            escape: EscapeKeyDetector::new(),
            positioner: Positioner::new(config.placement).with_offset(config.offset),
            open,
            config,
            armed: false,
            disposed: false,
        }
    }

    /// The open flag.
    pub fn open_signal(&self) -> &Signal<bool> {
        &self.open
    }

    /// Current value of the open flag.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Active configuration.
    pub fn config(&self) -> PopoverConfig {
        self.config
    }

    /// Last computed panel position.
    pub fn position(&self) -> Option<PanelPosition> {
        self.positioner.position()
    }

    /// Side actually used by the last computation.
    pub fn resolved_placement(&self) -> Option<Placement> {
        self.positioner.resolved_placement()
    }

    /// Trigger and panel listeners the host should have bound.
    pub fn listeners(&self) -> Listeners {
        self.trigger.listeners()
    }

    /// Whether the document `pointerdown` listener should be attached.
    pub fn listens_for_pointer_down(&self) -> bool {
        self.click_outside.is_listening()
    }

    /// Whether the document `keydown` listener should be attached.
    pub fn listens_for_key_down(&self) -> bool {
        self.escape.is_listening()
    }

    /// Deadline the host should wake up at to call [`Popover::tick`].
    pub fn next_deadline(&self) -> Option<u64> {
        self.trigger.next_deadline()
    }

    /// Whether a focus check waits for [`Popover::run_microtasks`].
    pub fn has_pending_microtask(&self) -> bool {
        self.trigger.has_pending_microtask()
    }

    /// Whether [`Popover::dispose`] was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Report the trigger element after a render pass.
    pub fn set_trigger(&mut self, trigger: Option<K>, host: &impl PopoverHost<K>) -> SlotChange<K> {
        let change = self.trigger.set_trigger(trigger);
        self.positioner.set_trigger(trigger, host);
        self.refresh_inside();
        self.sync(host);
        change
    }

    /// Report the panel element after a render pass.
    pub fn set_panel(&mut self, panel: Option<K>, host: &impl PopoverHost<K>) -> SlotChange<K> {
        let change = self.trigger.set_panel(panel);
        self.positioner.set_panel(panel, host);
        self.refresh_inside();
        self.sync(host);
        change
    }

    /// Switch trigger modes.
    pub fn set_mode(&mut self, mode: TriggerMode) {
        self.trigger.set_mode(mode);
        self.config.trigger.mode = mode;
    }

    /// Change the hover close delay. Applies from the next pointer leave.
    pub fn set_hover_delay(&mut self, ms: u64) {
        self.trigger.set_hover_delay(ms);
        self.config.trigger.hover_delay_ms = ms;
    }

    /// Change the preferred placement, repositioning if open.
    pub fn set_placement(
        &mut self,
        placement: Placement,
        host: &impl PopoverHost<K>,
    ) -> Option<PanelPosition> {
        self.config.placement = placement;
        self.positioner.set_placement(placement, host)
    }

    /// Change the gap between trigger and panel, repositioning if open.
    pub fn set_offset(&mut self, offset: f64, host: &impl PopoverHost<K>) -> Option<PanelPosition> {
        self.config.offset = offset;
        self.positioner.set_offset(offset, host)
    }

    /// Toggle click-outside dismissal. Takes effect immediately while open.
    pub fn set_close_on_click_outside(&mut self, close: bool) {
        self.config.close_on_click_outside = close;
        if !self.disposed {
            self.click_outside.set_active(self.armed && close);
        }
    }

    /// Toggle Escape dismissal. Takes effect immediately while open.
    pub fn set_close_on_escape(&mut self, close: bool) {
        self.config.close_on_escape = close;
        if !self.disposed {
            self.escape.set_active(self.armed && close);
        }
    }

    /// Deliver a trigger or panel event.
    pub fn handle(
        &mut self,
        surface: Surface,
        event: TriggerEvent<K>,
        now: u64,
        host: &impl PopoverHost<K>,
    ) -> bool {
        let handled = self.trigger.handle(surface, event, now);
        self.sync(host);
        handled
    }

    /// Advance time, firing a pending hover close.
    pub fn tick(&mut self, now: u64, host: &impl PopoverHost<K>) -> bool {
        let closed = self.trigger.tick(now);
        self.sync(host);
        closed
    }

    /// Run the deferred focus check.
    pub fn run_microtasks(&mut self, host: &impl PopoverHost<K>) -> bool {
        let closed = self.trigger.run_microtasks(host);
        self.sync(host);
        closed
    }

    /// A document-level pointer press. Returns the reason if it closed the popover.
    pub fn pointer_down(
        &mut self,
        target: Option<&K>,
        host: &impl PopoverHost<K>,
    ) -> Option<DismissReason> {
        let reason = self.click_outside.on_pointer_down(target, host)?;
        self.dismiss(reason, host)
    }

    /// A document-level key press. Returns the reason if it closed the popover.
    pub fn key_down(&mut self, key: &str, host: &impl PopoverHost<K>) -> Option<DismissReason> {
        let reason = self.escape.on_key_down(key)?;
        self.dismiss(reason, host)
    }

    /// The document scrolled.
    pub fn on_scroll(&mut self, host: &impl PopoverHost<K>) -> Option<PanelPosition> {
        self.positioner.on_scroll(host)
    }

    /// The viewport was resized.
    pub fn on_resize(&mut self, host: &impl PopoverHost<K>) -> Option<PanelPosition> {
        self.positioner.on_resize(host)
    }

    /// Bring detectors and position in line with the open flag.
    pub fn sync(&mut self, host: &impl PopoverHost<K>) -> Option<PanelPosition> {
        if self.disposed {
            return None;
        }
        let open = self.open.get();
        if open == self.armed {
            return self.positioner.position();
        }
        self.armed = open;
        self.click_outside
            .set_active(open && self.config.close_on_click_outside);
        self.escape.set_active(open && self.config.close_on_escape);
        tracing::debug!(open, "popover");
        self.positioner.set_open(open, host)
    }

    /// Tear everything down. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.trigger.dispose();
        self.click_outside.dispose();
        self.escape.dispose();
    }

    fn dismiss(
        &mut self,
        reason: DismissReason,
        host: &impl PopoverHost<K>,
    ) -> Option<DismissReason> {
        if self.disposed || !self.open.set(false) {
            return None;
        }
        tracing::debug!(?reason, "popover dismissed");
        self.sync(host);
        Some(reason)
    }

    fn refresh_inside(&mut self) {
        let inside = [self.trigger.trigger(), self.trigger.panel()];
        self.click_outside.set_inside(inside.into_iter().flatten());
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::{Rect, Size};
    use perch_dismiss::DismissReason;
    use perch_position::Placement;
    use perch_reactive::Signal;
    use perch_trigger::{Surface, TriggerEvent, TriggerMode};

    use super::Popover;
    use crate::{PopoverConfig, SnapshotHost};

    const TRIGGER: u32 = 1;
    const PANEL: u32 = 2;
    const PANEL_BUTTON: u32 = 3;
    const OUTSIDE: u32 = 9;

    fn host() -> SnapshotHost<u32> {
        SnapshotHost::new(Size::new(1024.0, 768.0))
            .with_rect(TRIGGER, Rect::new(200.0, 730.0, 260.0, 760.0))
            .with_rect(PANEL, Rect::new(0.0, 0.0, 100.0, 50.0))
            .with_child(PANEL, PANEL_BUTTON)
    }

    fn popover(config: PopoverConfig, host: &SnapshotHost<u32>) -> (Signal<bool>, Popover<u32>) {
        let open = Signal::new(false);
        let mut popover = Popover::new(open.clone(), config);
        popover.set_trigger(Some(TRIGGER), host);
        (open, popover)
    }

    #[test]
    fn hover_into_panel_then_out_closes_once() {
        let host = host();
        let (open, mut p) = popover(
            PopoverConfig::default()
                .with_mode(TriggerMode::Hover)
                .with_hover_delay(100),
            &host,
        );
        let closes = Rc::new(Cell::new(0));
        let _sub = {
            let closes = Rc::clone(&closes);
            open.subscribe(move |v| {
                if !*v {
                    closes.set(closes.get() + 1);
                }
            })
        };

        p.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0, &host);
        assert!(open.get());
        p.set_panel(Some(PANEL), &host);

        p.handle(Surface::Trigger, TriggerEvent::PointerLeave, 10, &host);
        p.handle(Surface::Panel, TriggerEvent::PointerEnter, 60, &host);
        p.tick(110, &host);
        assert!(open.get());

        p.handle(Surface::Panel, TriggerEvent::PointerLeave, 200, &host);
        p.tick(299, &host);
        assert!(open.get());
        p.tick(300, &host);
        assert!(!open.get());
        p.tick(1_000, &host);
        assert_eq!(closes.get(), 1);
        assert!(!p.listens_for_pointer_down());
    }

    #[test]
    fn hover_delay_changes_mid_session() {
        let host = host();
        let (open, mut p) = popover(
            PopoverConfig::default()
                .with_mode(TriggerMode::Hover)
                .with_hover_delay(100),
            &host,
        );
        p.handle(Surface::Trigger, TriggerEvent::PointerEnter, 0, &host);
        p.set_hover_delay(300);
        assert_eq!(p.config().trigger.hover_delay_ms, 300);

        p.handle(Surface::Trigger, TriggerEvent::PointerLeave, 10, &host);
        assert_eq!(p.next_deadline(), Some(310));
        p.tick(110, &host);
        assert!(open.get());
        p.tick(310, &host);
        assert!(!open.get());
    }

    #[test]
    fn offset_and_placement_change_while_open() {
        let host = host();
        let (_open, mut p) = popover(PopoverConfig::default(), &host);
        p.set_panel(Some(PANEL), &host);
        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        assert_eq!(p.position().map(|pos| pos.top), Some(672));

        let pos = p.set_offset(20.0, &host).unwrap();
        assert_eq!((pos.top, pos.left), (660, 180));

        p.set_placement(Placement::Top, &host);
        assert_eq!(p.config().placement, Placement::Top);
        assert_eq!(p.resolved_placement(), Some(Placement::Top));
    }

    #[test]
    fn opening_positions_and_flips() {
        let host = host();
        let (_open, mut p) = popover(PopoverConfig::default(), &host);
        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        // The panel is not mounted yet.
        assert_eq!(p.position(), None);
        p.set_panel(Some(PANEL), &host);
        let pos = p.position().unwrap();
        assert_eq!((pos.top, pos.left), (672, 180));
        assert_eq!(p.resolved_placement(), Some(Placement::Top));

        p.handle(Surface::Trigger, TriggerEvent::Click, 1, &host);
        assert_eq!(p.position(), None);
    }

    #[test]
    fn focus_moving_into_panel_stays_open() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default().with_mode(TriggerMode::Focus), &host);
        p.handle(Surface::Trigger, TriggerEvent::FocusIn, 0, &host);
        p.set_panel(Some(PANEL), &host);
        p.handle(
            Surface::Trigger,
            TriggerEvent::FocusOut {
                related_target: Some(PANEL),
            },
            1,
            &host,
        );
        assert!(!p.run_microtasks(&host));
        assert!(open.get());

        p.handle(
            Surface::Panel,
            TriggerEvent::FocusOut {
                related_target: None,
            },
            2,
            &host,
        );
        assert!(p.run_microtasks(&host));
        assert!(!open.get());
    }

    #[test]
    fn click_outside_closes_and_inside_does_not() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default(), &host);
        assert_eq!(p.pointer_down(Some(&OUTSIDE), &host), None);

        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        p.set_panel(Some(PANEL), &host);
        assert!(p.listens_for_pointer_down());
        assert_eq!(p.pointer_down(Some(&PANEL_BUTTON), &host), None);
        assert_eq!(p.pointer_down(Some(&TRIGGER), &host), None);
        assert!(open.get());

        assert_eq!(
            p.pointer_down(Some(&OUTSIDE), &host),
            Some(DismissReason::PointerDownOutside)
        );
        assert!(!open.get());
        assert!(!p.listens_for_pointer_down());
        assert!(!p.listens_for_key_down());
    }

    #[test]
    fn escape_respects_config() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default().with_close_on_escape(false), &host);
        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        assert!(!p.listens_for_key_down());
        assert_eq!(p.key_down("Escape", &host), None);
        assert!(open.get());

        p.set_close_on_escape(true);
        assert_eq!(p.key_down("Enter", &host), None);
        assert_eq!(p.key_down("Escape", &host), Some(DismissReason::EscapeKey));
        assert!(!open.get());
    }

    #[test]
    fn repeated_cycles_do_not_stack_listeners() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default(), &host);
        for i in 0..3 {
            p.handle(Surface::Trigger, TriggerEvent::Click, i, &host);
            assert!(p.listens_for_key_down());
            assert_eq!(p.key_down("Escape", &host), Some(DismissReason::EscapeKey));
            // A second Escape finds nothing to close.
            assert_eq!(p.key_down("Escape", &host), None);
        }
        assert!(!open.get());
    }

    #[test]
    fn manual_mode_follows_host_writes() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default().with_mode(TriggerMode::Manual), &host);
        p.set_panel(Some(PANEL), &host);
        assert!(!p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host));

        open.set(true);
        assert!(p.sync(&host).is_some());
        assert!(p.listens_for_pointer_down());

        open.set(false);
        assert_eq!(p.sync(&host), None);
        assert!(!p.listens_for_pointer_down());
    }

    #[test]
    fn resize_repositions_while_open() {
        let mut host = host();
        let (_open, mut p) = popover(PopoverConfig::default(), &host);
        p.set_panel(Some(PANEL), &host);
        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        assert_eq!(p.position().map(|pos| pos.top), Some(672));

        host.set_viewport(Size::new(1024.0, 2_000.0));
        let pos = p.on_resize(&host).unwrap();
        assert_eq!((pos.top, pos.left), (768, 180));
        assert_eq!(p.resolved_placement(), Some(Placement::Bottom));
    }

    #[test]
    fn disposed_popover_is_inert() {
        let host = host();
        let (open, mut p) = popover(PopoverConfig::default(), &host);
        p.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
        p.dispose();
        p.dispose();
        assert!(p.is_disposed());
        assert!(!p.listens_for_pointer_down());
        assert_eq!(p.key_down("Escape", &host), None);
        assert!(!p.handle(Surface::Trigger, TriggerEvent::Click, 1, &host));
        assert!(open.get());
    }
}
