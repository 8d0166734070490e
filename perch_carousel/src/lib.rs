// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Carousel: "what should be mounted" for a slide viewer.
//!
//! A file viewer may page through thousands of siblings, but only the current
//! slide and a few neighbours need to exist at any time. This crate computes
//! that window:
//!
//! - [`compute_window`]: a pure function from sequence length, current index
//!   and buffer sizes to a [`CarouselWindow`]. Same inputs, same window.
//! - [`VirtualCarousel`]: a small controller that stores those inputs, caches
//!   the last window and hands out [`VirtualSlide`]s for a slice of items.
//!
//! Exactly one returned slide is active whenever the sequence is non-empty,
//! and the window is clamped to the sequence without wrapping around.
//!
//! ```rust
//! use perch_carousel::{VirtualCarousel, compute_window};
//!
//! let w = compute_window(1_000, 500, 1, 1);
//! assert_eq!(w.indices(), 499..502);
//!
//! let pages: Vec<u32> = (1..=1_000).collect();
//! let mut carousel = VirtualCarousel::new(pages.len(), 1);
//! carousel.set_current(999);
//! let slides = carousel.slides(&pages);
//! assert_eq!(slides.len(), 2);
//! assert!(slides[1].is_active);
//! ```
//!
//! The host keeps its own notion of which item is current (for example a
//! `perch_navigator` stack) and mirrors the index here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod window;

pub use carousel::{DEFAULT_BUFFER, VirtualCarousel, VirtualSlide};
pub use window::{CarouselWindow, compute_window};
