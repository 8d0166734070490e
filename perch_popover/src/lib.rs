// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Popover: the owning component that ties the other Perch crates together.
//!
//! A [`Popover`] owns:
//!
//! - a [`TriggerController`](perch_trigger::TriggerController) that writes the
//!   open flag from trigger and panel events,
//! - a [`ClickOutsideDetector`](perch_dismiss::ClickOutsideDetector) and an
//!   [`EscapeKeyDetector`](perch_dismiss::EscapeKeyDetector), armed only while open,
//! - a [`Positioner`](perch_position::Positioner) that places the panel on open
//!   and on scroll or resize.
//!
//! The host reports elements and forwards events; the popover returns what to
//! bind and where to draw.
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use perch_popover::{Popover, PopoverConfig, SnapshotHost};
//! use perch_reactive::Signal;
//! use perch_trigger::{Surface, TriggerEvent};
//!
//! let host = SnapshotHost::new(Size::new(1024.0, 768.0))
//!     .with_rect(1_u32, Rect::new(200.0, 100.0, 260.0, 130.0))
//!     .with_rect(2, Rect::new(0.0, 0.0, 100.0, 50.0));
//!
//! let open = Signal::new(false);
//! let mut popover = Popover::new(open.clone(), PopoverConfig::default());
//! popover.set_trigger(Some(1), &host);
//!
//! popover.handle(Surface::Trigger, TriggerEvent::Click, 0, &host);
//! // The panel renders once open.
//! popover.set_panel(Some(2), &host);
//! assert_eq!(popover.position().unwrap().to_string(), "top: 138px; left: 180px");
//!
//! popover.key_down("Escape", &host);
//! assert!(!open.get());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod host;
mod popover;

pub use config::PopoverConfig;
pub use host::{PopoverHost, SnapshotHost};
pub use popover::Popover;
