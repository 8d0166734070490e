// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Toast: a toast queue the application owns and passes around.
//!
//! [`ToastStore`] holds the toasts currently on screen. It is an ordinary
//! value: construct it once (for example next to the application state), hand
//! out references, and render [`ToastStore::at`] for each [`ToastPosition`].
//!
//! Repeats fold. A request whose message, variant, position and target match a
//! held toast bumps that toast's [`Toast::count`] and restarts its lifetime
//! instead of stacking a duplicate.
//!
//! ```rust
//! use perch_toast::{ToastConfig, ToastPosition, ToastRequest, ToastStore};
//!
//! let mut store = ToastStore::new(ToastConfig::default().with_max_visible(3));
//! store.push(ToastRequest::new("Upload failed").with_duration(2_000), 0);
//! store.push(ToastRequest::new("Upload failed").with_duration(2_000), 10);
//!
//! let shown: Vec<_> = store.at(ToastPosition::TopRight).collect();
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].count, 2);
//!
//! assert_eq!(store.expire(2_010).len(), 1);
//! assert!(store.is_empty());
//! ```
//!
//! Time is passed in as host milliseconds; call [`ToastStore::expire`] from a
//! timer armed at [`ToastStore::next_deadline`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod store;
mod toast;

pub use store::{DEFAULT_DURATION_MS, DEFAULT_MAX_VISIBLE, ToastConfig, ToastStore};
pub use toast::{
    ParseToastPositionError, ParseToastVariantError, Toast, ToastId, ToastPosition, ToastRequest,
    ToastVariant,
};
