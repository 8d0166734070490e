// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Position: viewport-aware placement for floating panels.
//!
//! This crate answers one question: given a trigger's bounding box, a panel's
//! size and the viewport, where should the panel's top-left corner go?
//!
//! - [`resolve`] places a panel on a preferred [`Placement`] side of a trigger,
//!   flips to the opposite side once if the preferred side overflows, and
//!   clamps the result into the viewport.
//! - [`resolve_anchored`] places a menu-style panel relative to a point and
//!   reports whether a submenu would still fit to its right.
//! - [`Positioner`] wraps [`resolve`] with the state a popover needs: the
//!   trigger and panel elements as they mount, the open flag, and recomputation
//!   on scroll and resize. Geometry comes from a host [`ViewportGeometry`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use perch_position::{Placement, resolve};
//!
//! let trigger = Rect::new(400.0, 300.0, 460.0, 330.0);
//! let panel = Size::new(100.0, 50.0);
//! let viewport = Size::new(1024.0, 768.0);
//!
//! let pos = resolve(Placement::Right, trigger, panel, viewport, 8.0);
//! assert_eq!((pos.top, pos.left), (290, 468));
//! ```
//!
//! Everything is expressed in viewport pixels. Results are whole pixels so they
//! can be written straight into `top`/`left` styles of a fixed-position panel.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds of `kurbo`.
//! - `serde`: `Serialize`/`Deserialize` for [`Placement`], [`PanelPosition`]
//!   and [`AnchorOptions`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod placement;
mod positioner;
mod resolve;

pub use placement::{ParsePlacementError, Placement};
pub use positioner::{FixedGeometry, Positioner, ViewportGeometry};
pub use resolve::{
    AnchorOptions, AnchoredPosition, DEFAULT_OFFSET, PanelPosition, Resolution, resolve,
    resolve_anchored, resolve_detailed,
};
