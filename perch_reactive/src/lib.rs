// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Reactive: the small amount of reactivity the Perch controllers need.
//!
//! Perch controllers are plain state machines. They do not depend on a UI
//! framework's reactive runtime; instead, two explicit pieces cross the
//! boundary between host and controller:
//!
//! - [`Signal`]: a shared, observable value such as a panel's "is open" flag.
//!   The host owns it, controllers hold a clone and write to it, and anyone can
//!   [`Signal::subscribe`] to changes.
//! - [`ElementSlot`]: a reference to an element that mounts and unmounts over
//!   time. [`ElementSlot::set`] reports a [`SlotChange`], which controllers
//!   use to (re)bind listeners after each render pass.
//!
//! ```rust
//! use perch_reactive::{ElementSlot, Signal, SlotChange};
//!
//! let open = Signal::new(false);
//! let mut panel: ElementSlot<u32> = ElementSlot::empty();
//!
//! open.set(true);
//! // The host rendered the panel as element 7.
//! assert_eq!(panel.set(Some(7)), SlotChange::Mounted(7));
//!
//! open.set(false);
//! assert_eq!(panel.set(None), SlotChange::Unmounted(7));
//! ```
//!
//! Everything here is single-threaded (`Rc` based), matching the event-loop
//! model of the hosts Perch targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod signal;
mod slot;

pub use signal::{Signal, Subscription};
pub use slot::{ElementSlot, SlotChange};
