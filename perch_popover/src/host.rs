// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a popover needs to know about the host's element tree.

use core::hash::Hash;

use kurbo::{Rect, Size};
use perch_dismiss::{ElementTree, ParentMap};
use perch_position::{FixedGeometry, ViewportGeometry};

/// Layout and containment queries, answered by the host.
///
/// Blanket-implemented for anything that is both a [`ViewportGeometry`] and an
/// [`ElementTree`].
pub trait PopoverHost<K: Copy + Eq>: ViewportGeometry<K> + ElementTree<K> {}

impl<K: Copy + Eq, H: ViewportGeometry<K> + ElementTree<K>> PopoverHost<K> for H {}

/// A frozen snapshot of layout and parentage.
#[derive(Clone, Debug)]
pub struct SnapshotHost<K> {
    geometry: FixedGeometry<K>,
    tree: ParentMap<K>,
}

impl<K: Copy + Eq + Hash> SnapshotHost<K> {
    /// Empty snapshot with a `viewport`.
    pub fn new(viewport: Size) -> Self {
        Self {
            geometry: FixedGeometry::new(viewport),
            tree: ParentMap::new(),
        }
    }

    /// Place `element` at `rect`.
    #[must_use]
    pub fn with_rect(mut self, element: K, rect: Rect) -> Self {
        self.geometry.set_rect(element, rect);
        self
    }

    /// Make `parent` the parent of `child`.
    #[must_use]
    pub fn with_child(mut self, parent: K, child: K) -> Self {
        self.tree.insert(child, parent);
        self
    }

    /// Move or resize `element`.
    pub fn set_rect(&mut self, element: K, rect: Rect) {
        self.geometry.set_rect(element, rect);
    }

    /// Resize the viewport.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.geometry.set_viewport(viewport);
    }
}

impl<K: Copy + Eq> ViewportGeometry<K> for SnapshotHost<K> {
    fn rect_of(&self, element: &K) -> Option<Rect> {
        self.geometry.rect_of(element)
    }

    fn viewport(&self) -> Size {
        self.geometry.viewport()
    }
}

impl<K: Copy + Eq + Hash> ElementTree<K> for SnapshotHost<K> {
    fn parent_of(&self, node: &K) -> Option<K> {
        self.tree.parent_of(node)
    }
}
