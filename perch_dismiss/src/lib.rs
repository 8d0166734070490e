// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Dismiss: "this panel should close" detectors.
//!
//! Two independent detectors, each modelling one document-level listener:
//!
//! - [`ClickOutsideDetector`]: a pointer press landed outside every tracked
//!   element (typically the trigger and the panel).
//! - [`EscapeKeyDetector`]: the Escape key was pressed, wherever focus is.
//!
//! Both share the same lifecycle. [`set_active`](ClickOutsideDetector::set_active)
//! attaches or detaches the listener and reports the edge as a
//! [`ListenerChange`], so repeated open/close cycles never stack listeners.
//! `dispose` detaches for good.
//!
//! Detectors never close anything. They return a [`DismissReason`] and the
//! owner decides what to do with it.
//!
//! Containment is answered by the host through [`ElementTree`]. [`NoTree`]
//! treats each element as a leaf; [`ParentMap`] (feature `parent_map`, on by
//! default) is a small child→parent map.
//!
//! ```rust
//! use perch_dismiss::{DismissReason, EscapeKeyDetector};
//!
//! let mut escape = EscapeKeyDetector::new();
//! escape.set_active(true);
//! assert_eq!(escape.on_key_down("Escape"), Some(DismissReason::EscapeKey));
//! assert_eq!(escape.on_key_down("a"), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod click_outside;
mod escape;
mod lifecycle;
mod tree;

pub use click_outside::ClickOutsideDetector;
pub use escape::{ESCAPE_KEY, EscapeKeyDetector};
pub use lifecycle::ListenerChange;
#[cfg(feature = "parent_map")]
pub use tree::ParentMap;
pub use tree::{ElementTree, NoTree};

/// Why a detector asked for its panel to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// A pointer press landed outside the tracked elements.
    PointerDownOutside,
    /// The Escape key was pressed.
    EscapeKey,
}
