// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Trigger: how a trigger element opens and closes its panel.
//!
//! [`TriggerController`] implements the four [`TriggerMode`]s of a popover:
//!
//! - `Manual`: the owner writes the open flag; nothing is bound.
//! - `Click`: clicking the trigger toggles.
//! - `Hover`: entering the trigger opens, leaving trigger and panel closes
//!   after [`TriggerConfig::hover_delay_ms`]. Moving from the trigger into the
//!   panel within the delay keeps it open.
//! - `Focus`: focus entering the trigger opens. When focus leaves the trigger
//!   or the panel, a check is queued and run from
//!   [`TriggerController::run_microtasks`]; it closes unless focus landed
//!   inside the trigger or the panel.
//!
//! [`TooltipController`] is the simpler sibling used by tooltips, with an
//! optional "enterable" delay.
//!
//! Time is explicit. Events carry a host timestamp in milliseconds and pending
//! closes fire from `tick(now)`, so tests and hosts drive the same [`Timer`].
//!
//! ```rust
//! use perch_dismiss::NoTree;
//! use perch_reactive::Signal;
//! use perch_trigger::{Surface, TriggerConfig, TriggerController, TriggerEvent, TriggerMode};
//!
//! let open = Signal::new(false);
//! let mut ctl = TriggerController::new(open.clone(), TriggerConfig::new(TriggerMode::Focus));
//! ctl.set_trigger(Some(1_u32));
//!
//! ctl.handle(Surface::Trigger, TriggerEvent::FocusIn, 0);
//! assert!(open.get());
//!
//! ctl.handle(Surface::Trigger, TriggerEvent::FocusOut { related_target: None }, 5);
//! ctl.run_microtasks(&NoTree);
//! assert!(!open.get());
//! ```
//!
//! Listener bookkeeping is exposed as [`Listeners`] so a host can mirror it
//! onto real DOM (or toolkit) listeners. Element presence is reported after
//! every render with `set_trigger`/`set_panel`; a panel that only exists while
//! open gets its listeners bound on mount and removed on unmount.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod listeners;
mod mode;
mod timer;
mod tooltip;

pub use controller::TriggerController;
pub use listeners::{Listeners, Surface, TriggerEvent};
pub use mode::{DEFAULT_HOVER_DELAY_MS, ParseTriggerModeError, TriggerConfig, TriggerMode};
pub use timer::Timer;
pub use tooltip::{TooltipConfig, TooltipController};
