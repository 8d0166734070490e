// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// One entry of [`FileNavigationStack::breadcrumbs`](crate::FileNavigationStack::breadcrumbs).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb<'a, T> {
    /// The item at this level.
    pub item: &'a T,
    /// Pass to [`back_to_depth`](crate::FileNavigationStack::back_to_depth) to return here.
    pub depth: usize,
    /// Whether this is the item being viewed.
    pub is_current: bool,
}

/// Owned snapshot of a [`FileNavigationStack`](crate::FileNavigationStack).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState<T> {
    /// The item being viewed.
    pub current_item: T,
    /// Index into the navigation set.
    pub current_index: usize,
    /// Items the drill-down started from, outermost first.
    pub child_stack: Vec<T>,
}

impl<T> NavigationState<T> {
    /// Whether next/prev may move, that is, no child is being viewed.
    pub fn can_navigate_siblings(&self) -> bool {
        self.child_stack.is_empty()
    }
}
