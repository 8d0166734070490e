// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure placement functions.
//!
//! Both functions take snapshots of geometry and return integer pixel
//! coordinates in the same (viewport) space. They never panic: zero-sized or
//! oversized panels degrade to valid coordinates, and non-finite arithmetic
//! collapses to `0`.

use core::fmt;

use kurbo::{Point, Rect, Size};

use crate::Placement;

/// Default gap in pixels between a trigger and its panel.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Resolved top/left of a panel, in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelPosition {
    /// Distance from the top of the viewport.
    pub top: i32,
    /// Distance from the left of the viewport.
    pub left: i32,
}

/// Renders as CSS declarations, for hosts that position with inline styles.
///
/// ```
/// use perch_position::PanelPosition;
///
/// let pos = PanelPosition { top: 672, left: 180 };
/// assert_eq!(pos.to_string(), "top: 672px; left: 180px");
/// ```
impl fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top: {}px; left: {}px", self.top, self.left)
    }
}

/// Result of [`resolve_detailed`]: the position and the side actually used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Side the panel ended up on after auto-flip.
    pub placement: Placement,
    /// Clamped position.
    pub position: PanelPosition,
}

impl Resolution {
    /// Returns `true` if auto-flip moved the panel away from `requested`.
    #[must_use]
    pub fn flipped_from(&self, requested: Placement) -> bool {
        self.placement != requested
    }
}

/// Position a panel next to `trigger` on the `placement` side.
///
/// - The panel is centered on the trigger along the cross axis and separated by
///   `offset` along the main axis.
/// - If that would overflow the viewport on the main axis, the opposite side is
///   used instead (once; no cascading).
/// - The result is clamped to `[0, viewport - panel]` on both axes. When the
///   panel is larger than the viewport the lower bound wins.
///
/// Only the size of the panel matters; its current position is irrelevant.
///
/// ```
/// use kurbo::{Rect, Size};
/// use perch_position::{Placement, resolve};
///
/// let trigger = Rect::new(200.0, 730.0, 260.0, 760.0);
/// let panel = Size::new(100.0, 50.0);
/// let viewport = Size::new(1024.0, 768.0);
///
/// // Not enough room below, so the panel flips above the trigger.
/// let pos = resolve(Placement::Bottom, trigger, panel, viewport, 8.0);
/// assert_eq!(pos.top, 730 - 50 - 8);
/// assert_eq!(pos.left, 180);
/// ```
#[must_use]
pub fn resolve(
    placement: Placement,
    trigger: Rect,
    panel: Size,
    viewport: Size,
    offset: f64,
) -> PanelPosition {
    resolve_detailed(placement, trigger, panel, viewport, offset).position
}

/// Like [`resolve`], but also reports which side was used.
#[must_use]
pub fn resolve_detailed(
    placement: Placement,
    trigger: Rect,
    panel: Size,
    viewport: Size,
    offset: f64,
) -> Resolution {
    let natural = natural_origin(placement, trigger, panel, offset);
    let (placement, origin) = if overflows_main_axis(placement, natural, panel, viewport) {
        let flipped = placement.opposite();
        (flipped, natural_origin(flipped, trigger, panel, offset))
    } else {
        (placement, natural)
    };

    let top = clamp_low_wins(origin.y, 0.0, viewport.height - panel.height);
    let left = clamp_low_wins(origin.x, 0.0, viewport.width - panel.width);

    Resolution {
        placement,
        position: PanelPosition {
            top: to_px(top),
            left: to_px(left),
        },
    }
}

/// Top-left corner of the panel for `placement`, before flip and clamp.
fn natural_origin(placement: Placement, trigger: Rect, panel: Size, offset: f64) -> Point {
    let center = trigger.center();
    match placement {
        Placement::Bottom => Point::new(center.x - panel.width / 2.0, trigger.y1 + offset),
        Placement::Top => Point::new(
            center.x - panel.width / 2.0,
            trigger.y0 - panel.height - offset,
        ),
        Placement::Right => Point::new(trigger.x1 + offset, center.y - panel.height / 2.0),
        Placement::Left => Point::new(
            trigger.x0 - panel.width - offset,
            center.y - panel.height / 2.0,
        ),
    }
}

fn overflows_main_axis(placement: Placement, origin: Point, panel: Size, viewport: Size) -> bool {
    match placement {
        Placement::Bottom => origin.y + panel.height > viewport.height,
        Placement::Top => origin.y < 0.0,
        Placement::Right => origin.x + panel.width > viewport.width,
        Placement::Left => origin.x < 0.0,
    }
}

/// Options for [`resolve_anchored`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorOptions {
    /// Center the panel horizontally on the anchor and keep `padding` below it.
    ///
    /// When `false` the panel's top-left corner sits exactly on the anchor.
    pub center_on_anchor: bool,
    /// Gap below the anchor (when centering) and minimum distance from the
    /// left and right viewport edges.
    pub padding: f64,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            center_on_anchor: true,
            padding: DEFAULT_OFFSET,
        }
    }
}

impl AnchorOptions {
    /// Set [`AnchorOptions::center_on_anchor`].
    #[must_use]
    pub const fn with_center_on_anchor(mut self, center: bool) -> Self {
        self.center_on_anchor = center;
        self
    }

    /// Set [`AnchorOptions::padding`].
    #[must_use]
    pub const fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }
}

/// Result of [`resolve_anchored`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AnchoredPosition {
    /// Distance from the top of the viewport.
    pub top: i32,
    /// Distance from the left of the viewport.
    pub left: i32,
    /// Whether the panel was moved above the anchor.
    pub flipped: bool,
    /// A submenu as wide as this panel would not fit to its right.
    pub near_right_edge: bool,
}

/// Position a menu-style panel relative to an arbitrary anchor point.
///
/// Used for context menus and similar floating elements that hang off a point
/// (for example the pointer position) rather than a trigger element.
///
/// ```
/// use kurbo::{Point, Size};
/// use perch_position::{AnchorOptions, resolve_anchored};
///
/// let viewport = Size::new(800.0, 600.0);
/// let menu = Size::new(200.0, 100.0);
///
/// let pos = resolve_anchored(Point::new(400.0, 100.0), menu, viewport, AnchorOptions::default());
/// assert_eq!((pos.left, pos.top), (300, 108));
/// assert!(!pos.near_right_edge);
///
/// // Close to the right edge: clamped, and a submenu would need to flip.
/// let pos = resolve_anchored(Point::new(790.0, 100.0), menu, viewport, AnchorOptions::default());
/// assert_eq!(pos.left, 800 - 200 - 8);
/// assert!(pos.near_right_edge);
/// ```
#[must_use]
pub fn resolve_anchored(
    anchor: Point,
    panel: Size,
    viewport: Size,
    options: AnchorOptions,
) -> AnchoredPosition {
    let AnchorOptions {
        center_on_anchor,
        padding,
    } = options;

    let mut left = if center_on_anchor {
        anchor.x - panel.width / 2.0
    } else {
        anchor.x
    };
    let mut top = if center_on_anchor {
        anchor.y + padding
    } else {
        anchor.y
    };

    let flipped = top + panel.height > viewport.height;
    if flipped {
        top = if center_on_anchor {
            anchor.y - panel.height - padding
        } else {
            anchor.y - panel.height
        };
    }
    // Flipping above must not push the panel off the top edge either.
    top = top.max(0.0);

    left = clamp_low_wins(left, padding, viewport.width - panel.width - padding);

    AnchoredPosition {
        top: to_px(top),
        left: to_px(left),
        flipped,
        near_right_edge: left + panel.width * 2.0 > viewport.width,
    }
}

/// Clamp into `[lo, hi]`, preferring `lo` when the range is empty.
fn clamp_low_wins(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

/// Round half away from zero to whole pixels; non-finite values become `0`.
fn to_px(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let shifted = if value < 0.0 { value - 0.5 } else { value + 0.5 };
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Pixel coordinates saturate at the i32 range"
    )]
    let px = shifted as i32;
    px
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{AnchorOptions, resolve, resolve_anchored, resolve_detailed, to_px};
    use crate::Placement;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);
    const PANEL: Size = Size::new(100.0, 50.0);

    fn trigger_at(x: f64, y: f64) -> Rect {
        Rect::new(x, y, x + 60.0, y + 30.0)
    }

    fn fits(pos: super::PanelPosition, panel: Size, viewport: Size) -> bool {
        pos.top >= 0
            && pos.left >= 0
            && f64::from(pos.top) + panel.height <= viewport.height
            && f64::from(pos.left) + panel.width <= viewport.width
    }

    #[test]
    fn natural_positions_in_open_space() {
        let t = trigger_at(400.0, 300.0); // center (430, 315)
        assert_eq!(
            resolve(Placement::Bottom, t, PANEL, VIEWPORT, 8.0),
            super::PanelPosition { top: 338, left: 380 }
        );
        assert_eq!(
            resolve(Placement::Top, t, PANEL, VIEWPORT, 8.0),
            super::PanelPosition { top: 242, left: 380 }
        );
        assert_eq!(
            resolve(Placement::Right, t, PANEL, VIEWPORT, 8.0),
            super::PanelPosition { top: 290, left: 468 }
        );
        assert_eq!(
            resolve(Placement::Left, t, PANEL, VIEWPORT, 8.0),
            super::PanelPosition { top: 290, left: 292 }
        );
    }

    #[test]
    fn bottom_flips_to_top_near_viewport_bottom() {
        let t = Rect::new(200.0, 730.0, 260.0, 760.0);
        let r = resolve_detailed(Placement::Bottom, t, PANEL, VIEWPORT, 8.0);
        assert_eq!(r.placement, Placement::Top);
        assert!(r.flipped_from(Placement::Bottom));
        assert_eq!(r.position.top, 672);
        assert_eq!(r.position.left, 180);
    }

    #[test]
    fn each_side_flips_on_its_own_overflow() {
        let top = resolve_detailed(Placement::Top, trigger_at(400.0, 10.0), PANEL, VIEWPORT, 8.0);
        assert_eq!(top.placement, Placement::Bottom);
        assert_eq!(top.position.top, 48);

        let left = resolve_detailed(Placement::Left, trigger_at(20.0, 300.0), PANEL, VIEWPORT, 8.0);
        assert_eq!(left.placement, Placement::Right);
        assert_eq!(left.position.left, 88);

        let right =
            resolve_detailed(Placement::Right, trigger_at(950.0, 300.0), PANEL, VIEWPORT, 8.0);
        assert_eq!(right.placement, Placement::Left);
        assert_eq!(right.position.left, 842);
    }

    #[test]
    fn flip_does_not_cascade_and_clamp_keeps_panel_on_screen() {
        // Tall panel in a short viewport: both sides overflow.
        let viewport = Size::new(300.0, 200.0);
        let panel = Size::new(80.0, 150.0);
        let t = Rect::new(100.0, 90.0, 140.0, 110.0);
        let r = resolve_detailed(Placement::Bottom, t, panel, viewport, 8.0);
        assert_eq!(r.placement, Placement::Top);
        assert_eq!(r.position.top, 0);
        assert!(fits(r.position, panel, viewport));
    }

    #[test]
    fn cross_axis_is_clamped() {
        // Trigger hugging the left edge: centered panel would start at x < 0.
        let t = Rect::new(0.0, 300.0, 20.0, 320.0);
        let pos = resolve(Placement::Bottom, t, PANEL, VIEWPORT, 8.0);
        assert_eq!(pos.left, 0);
        let t = Rect::new(1004.0, 300.0, 1024.0, 320.0);
        let pos = resolve(Placement::Bottom, t, PANEL, VIEWPORT, 8.0);
        assert_eq!(pos.left, 924);
    }

    #[test]
    fn fitting_inputs_stay_inside_viewport() {
        for placement in Placement::ALL {
            for x in (0..=960).step_by(80) {
                for y in (0..=738).step_by(41) {
                    let t = trigger_at(f64::from(x), f64::from(y));
                    let pos = resolve(placement, t, PANEL, VIEWPORT, 8.0);
                    assert!(fits(pos, PANEL, VIEWPORT), "{placement} at ({x}, {y}) -> {pos:?}");
                }
            }
        }
    }

    #[test]
    fn zero_sizes_degrade_gracefully() {
        let pos = resolve(Placement::Top, Rect::ZERO, Size::ZERO, VIEWPORT, 8.0);
        // Top of a zero rect at the origin overflows, so it flips below.
        assert_eq!(pos, super::PanelPosition { top: 8, left: 0 });
        let pos = resolve(Placement::Bottom, Rect::ZERO, PANEL, Size::ZERO, 8.0);
        assert_eq!(pos, super::PanelPosition { top: 0, left: 0 });
    }

    #[test]
    fn resolve_is_deterministic() {
        let t = trigger_at(123.0, 456.0);
        let a = resolve(Placement::Right, t, PANEL, VIEWPORT, 12.0);
        let b = resolve(Placement::Right, t, PANEL, VIEWPORT, 12.0);
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_inputs_collapse_to_zero() {
        assert_eq!(to_px(f64::NAN), 0);
        assert_eq!(to_px(f64::INFINITY), 0);
        assert_eq!(to_px(2.5), 3);
        assert_eq!(to_px(-2.5), -3);
        let t = Rect::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);
        let pos = resolve(Placement::Bottom, t, PANEL, VIEWPORT, 8.0);
        assert!(fits(pos, PANEL, VIEWPORT));
    }

    #[test]
    fn anchored_without_centering_sits_on_anchor() {
        let opts = AnchorOptions::default().with_center_on_anchor(false);
        let pos = resolve_anchored(Point::new(100.0, 100.0), PANEL, VIEWPORT, opts);
        assert_eq!((pos.left, pos.top), (100, 100));
        assert!(!pos.flipped);
    }

    #[test]
    fn anchored_flips_above_near_bottom() {
        let opts = AnchorOptions::default();
        let pos = resolve_anchored(Point::new(300.0, 740.0), PANEL, VIEWPORT, opts);
        assert!(pos.flipped);
        assert_eq!(pos.top, 740 - 50 - 8);

        let opts = opts.with_center_on_anchor(false);
        let pos = resolve_anchored(Point::new(300.0, 740.0), PANEL, VIEWPORT, opts);
        assert_eq!(pos.top, 690);
    }

    #[test]
    fn anchored_clamps_left_edge_to_padding() {
        let pos = resolve_anchored(Point::new(10.0, 10.0), PANEL, VIEWPORT, AnchorOptions::default());
        assert_eq!(pos.left, 8);
    }

    #[test]
    fn anchored_reports_submenu_room() {
        let opts = AnchorOptions::default().with_center_on_anchor(false);
        // left + 2 * width = 800 + 200 = 1000 <= 1024
        let pos = resolve_anchored(Point::new(800.0, 10.0), PANEL, VIEWPORT, opts);
        assert!(!pos.near_right_edge);
        // left + 2 * width = 830 + 200 = 1030 > 1024
        let pos = resolve_anchored(Point::new(830.0, 10.0), PANEL, VIEWPORT, opts);
        assert!(pos.near_right_edge);
    }
}
