// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Navigator: "what is current" for a file or slide viewer.
//!
//! A viewer opened on one file (the *anchor*) usually lets the user step
//! through related files and drill into children, for example the entries of
//! an archive or the pages of a document. [`FileNavigationStack`] keeps that
//! state:
//!
//! - a sibling set, the anchor plus its related items deduplicated by
//!   [`Navigable::id`], walked with `next`/`prev` and `go_to`;
//! - a drill-down stack, pushed by `dive_into_child` and popped by
//!   `back_from_child` or `back_to_depth`;
//! - derived view state: `has_next`, `has_prev`, `slide_label` and
//!   [`Breadcrumb`]s.
//!
//! ```rust
//! use perch_navigator::FileNavigationStack;
//!
//! let mut nav = FileNavigationStack::new("report.pdf", &["notes.md", "data.zip"]);
//! assert_eq!(nav.slide_label(), "1 / 3");
//!
//! nav.go_to(&"data.zip");
//! nav.dive_into_child("data.zip/readme.txt");
//! assert!(!nav.has_prev());
//! assert_eq!(nav.breadcrumbs().len(), 2);
//!
//! nav.back_from_child();
//! assert_eq!(nav.slide_label(), "3 / 3");
//! ```
//!
//! Rendering a large sibling set is the job of `perch_carousel`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod item;
mod stack;
mod state;

pub use item::Navigable;
pub use stack::FileNavigationStack;
pub use state::{Breadcrumb, NavigationState};
