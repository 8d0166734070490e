// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful wrapper that keeps a panel positioned while it is open.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use perch_reactive::{ElementSlot, SlotChange};

use crate::{DEFAULT_OFFSET, PanelPosition, Placement, Resolution, resolve_detailed};

/// Host-provided geometry queries.
///
/// Implementations read live layout (for example `getBoundingClientRect` and the
/// window's inner size). Perch calls these only while a panel is open.
pub trait ViewportGeometry<K> {
    /// Bounding box of `element` in viewport coordinates, or `None` if the
    /// element is not laid out.
    fn rect_of(&self, element: &K) -> Option<Rect>;

    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// A fixed geometry snapshot.
///
/// Handy for tests and for hosts that collect layout once per frame.
#[derive(Clone, Debug)]
pub struct FixedGeometry<K> {
    viewport: Size,
    rects: Vec<(K, Rect)>,
}

impl<K: PartialEq> FixedGeometry<K> {
    /// Snapshot with the given viewport and no elements.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
        }
    }

    /// Add or replace the rect for `element`.
    #[must_use]
    pub fn with_rect(mut self, element: K, rect: Rect) -> Self {
        self.set_rect(element, rect);
        self
    }

    /// Add or replace the rect for `element`.
    pub fn set_rect(&mut self, element: K, rect: Rect) {
        match self.rects.iter_mut().find(|(k, _)| *k == element) {
            Some(entry) => entry.1 = rect,
            None => self.rects.push((element, rect)),
        }
    }

    /// Change the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

impl<K: PartialEq> ViewportGeometry<K> for FixedGeometry<K> {
    fn rect_of(&self, element: &K) -> Option<Rect> {
        self.rects
            .iter()
            .find_map(|(k, r)| (k == element).then_some(*r))
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

/// Keeps a panel's [`PanelPosition`] in sync with its trigger.
///
/// Call the mutators as the corresponding host events happen. Each one
/// recomputes while the panel is open and returns the current position.
/// Missing elements (or elements the geometry does not know) leave the last
/// position untouched.
///
/// ```
/// use kurbo::{Rect, Size};
/// use perch_position::{FixedGeometry, Placement, Positioner};
///
/// const TRIGGER: u32 = 1;
/// const PANEL: u32 = 2;
///
/// let geometry = FixedGeometry::new(Size::new(1024.0, 768.0))
///     .with_rect(TRIGGER, Rect::new(200.0, 100.0, 260.0, 130.0))
///     .with_rect(PANEL, Rect::new(0.0, 0.0, 100.0, 50.0));
///
/// let mut positioner = Positioner::new(Placement::Bottom);
/// positioner.set_trigger(Some(TRIGGER), &geometry);
/// positioner.set_open(true, &geometry);
/// // Nothing to position until the panel mounts.
/// assert_eq!(positioner.position(), None);
///
/// positioner.set_panel(Some(PANEL), &geometry);
/// let pos = positioner.position().unwrap();
/// assert_eq!((pos.top, pos.left), (138, 180));
/// ```
#[derive(Clone, Debug)]
pub struct Positioner<K> {
    placement: Placement,
    offset: f64,
    trigger: ElementSlot<K>,
    panel: ElementSlot<K>,
    open: bool,
    resolution: Option<Resolution>,
}

impl<K: Copy + Eq> Positioner<K> {
    /// Create a closed positioner preferring `placement`, with [`DEFAULT_OFFSET`].
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            offset: DEFAULT_OFFSET,
            trigger: ElementSlot::empty(),
            panel: ElementSlot::empty(),
            open: false,
            resolution: None,
        }
    }

    /// Set the main-axis gap used for subsequent computations.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Requested placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Placement used by the last computation, after auto-flip.
    pub fn resolved_placement(&self) -> Option<Placement> {
        self.resolution.map(|r| r.placement)
    }

    /// Last computed position, or `None` while closed or before the first
    /// successful computation.
    pub fn position(&self) -> Option<PanelPosition> {
        self.resolution.map(|r| r.position)
    }

    /// Whether the panel is considered open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Change the requested placement.
    pub fn set_placement(
        &mut self,
        placement: Placement,
        geometry: &impl ViewportGeometry<K>,
    ) -> Option<PanelPosition> {
        self.placement = placement;
        self.update(geometry)
    }

    /// Change the main-axis gap.
    pub fn set_offset(
        &mut self,
        offset: f64,
        geometry: &impl ViewportGeometry<K>,
    ) -> Option<PanelPosition> {
        self.offset = offset;
        self.update(geometry)
    }

    /// Report the trigger element after a render pass.
    pub fn set_trigger(
        &mut self,
        trigger: Option<K>,
        geometry: &impl ViewportGeometry<K>,
    ) -> SlotChange<K> {
        let change = self.trigger.set(trigger);
        if !change.is_unchanged() {
            self.update(geometry);
        }
        change
    }

    /// Report the panel element after a render pass.
    pub fn set_panel(
        &mut self,
        panel: Option<K>,
        geometry: &impl ViewportGeometry<K>,
    ) -> SlotChange<K> {
        let change = self.panel.set(panel);
        if !change.is_unchanged() {
            self.update(geometry);
        }
        change
    }

    /// Follow the open flag. Opening computes a position; closing forgets it.
    pub fn set_open(
        &mut self,
        open: bool,
        geometry: &impl ViewportGeometry<K>,
    ) -> Option<PanelPosition> {
        self.open = open;
        if !open {
            self.resolution = None;
            return None;
        }
        self.update(geometry)
    }

    /// Scroll happened somewhere in the document.
    pub fn on_scroll(&mut self, geometry: &impl ViewportGeometry<K>) -> Option<PanelPosition> {
        self.update(geometry)
    }

    /// The viewport was resized.
    pub fn on_resize(&mut self, geometry: &impl ViewportGeometry<K>) -> Option<PanelPosition> {
        self.update(geometry)
    }

    /// Recompute if open and both elements can be measured.
    pub fn update(&mut self, geometry: &impl ViewportGeometry<K>) -> Option<PanelPosition> {
        if !self.open {
            return None;
        }
        let measured = self
            .trigger
            .get()
            .zip(self.panel.get())
            .and_then(|(t, p)| Some((geometry.rect_of(&t)?, geometry.rect_of(&p)?)));
        let Some((trigger, panel)) = measured else {
            return self.position();
        };
        let resolution = resolve_detailed(
            self.placement,
            trigger,
            panel.size(),
            geometry.viewport(),
            self.offset,
        );
        if resolution.flipped_from(self.placement) {
            tracing::trace!(
                requested = self.placement.as_str(),
                used = resolution.placement.as_str(),
                "panel flipped"
            );
        }
        self.resolution = Some(resolution);
        Some(resolution.position)
    }
}
