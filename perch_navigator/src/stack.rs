// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::item::sibling_set;
use crate::{Breadcrumb, Navigable, NavigationState};

#[derive(Clone, Debug)]
struct StackEntry<T> {
    item: T,
    /// Sibling index to resume at when this entry is popped back to root.
    index: usize,
}

type NavigateCallback<T> = Box<dyn FnMut(&T)>;

/// Current-item pointer over a sibling set, plus a drill-down stack.
///
/// The sibling set is the anchor followed by the related items, deduplicated
/// by id. [`next`](Self::next) and [`prev`](Self::prev) walk it without
/// wrapping. [`dive_into_child`](Self::dive_into_child) leaves sibling
/// navigation and views an arbitrary child; [`back_from_child`](Self::back_from_child)
/// returns.
///
/// Every operation that changes the current item calls the
/// [`on_navigate`](Self::on_navigate) callback exactly once. Operations that
/// change nothing do not call it and return `false`.
pub struct FileNavigationStack<T: Navigable> {
    anchor: T,
    siblings: Vec<T>,
    current: T,
    current_index: usize,
    child_stack: Vec<StackEntry<T>>,
    on_navigate: Option<NavigateCallback<T>>,
}

impl<T: Navigable + fmt::Debug> fmt::Debug for FileNavigationStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileNavigationStack")
            .field("anchor", &self.anchor)
            .field("siblings", &self.siblings)
            .field("current", &self.current)
            .field("current_index", &self.current_index)
            .field("child_stack", &self.child_stack)
            .field("on_navigate", &self.on_navigate.is_some())
            .finish()
    }
}

impl<T: Navigable + Clone> FileNavigationStack<T> {
    /// Start at `anchor` with `related` as its siblings.
    pub fn new(anchor: T, related: &[T]) -> Self {
        let siblings = sibling_set(&anchor, related);
        Self {
            current: anchor.clone(),
            anchor,
            siblings,
            current_index: 0,
            child_stack: Vec::new(),
            on_navigate: None,
        }
    }

    /// Register the callback run after each navigation. Replaces any previous one.
    pub fn on_navigate(&mut self, callback: impl FnMut(&T) + 'static) {
        self.on_navigate = Some(Box::new(callback));
    }

    /// Builder form of [`FileNavigationStack::on_navigate`].
    #[must_use]
    pub fn with_on_navigate(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_navigate(callback);
        self
    }

    /// The anchor item.
    pub fn anchor(&self) -> &T {
        &self.anchor
    }

    /// The item being viewed.
    pub fn current(&self) -> &T {
        &self.current
    }

    /// Index of the current item in [`navigation_set`](Self::navigation_set).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of drill-down levels below the sibling set.
    pub fn depth(&self) -> usize {
        self.child_stack.len()
    }

    /// Whether a child is being viewed.
    pub fn is_in_child(&self) -> bool {
        !self.child_stack.is_empty()
    }

    /// The deduplicated sibling set, anchor first.
    pub fn all_files(&self) -> &[T] {
        &self.siblings
    }

    /// The set [`current_index`](Self::current_index) indexes into: the sibling
    /// set, or just the current item while viewing a child.
    pub fn navigation_set(&self) -> &[T] {
        if self.is_in_child() {
            core::slice::from_ref(&self.current)
        } else {
            &self.siblings
        }
    }

    /// Whether [`next`](Self::next) would move.
    pub fn has_next(&self) -> bool {
        !self.is_in_child() && self.current_index + 1 < self.siblings.len()
    }

    /// Whether [`prev`](Self::prev) would move.
    pub fn has_prev(&self) -> bool {
        !self.is_in_child() && self.current_index > 0
    }

    /// `"{position} / {count}"`, or empty with one item or while viewing a child.
    pub fn slide_label(&self) -> String {
        let count = self.navigation_set().len();
        if count <= 1 {
            return String::new();
        }
        format!("{} / {}", self.current_index + 1, count)
    }

    /// Stack entries from the root, then the current item.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb<'_, T>> {
        let mut crumbs: Vec<_> = self
            .child_stack
            .iter()
            .enumerate()
            .map(|(depth, entry)| Breadcrumb {
                item: &entry.item,
                depth,
                is_current: false,
            })
            .collect();
        crumbs.push(Breadcrumb {
            item: &self.current,
            depth: self.child_stack.len(),
            is_current: true,
        });
        crumbs
    }

    /// Owned snapshot of the navigation state.
    pub fn state(&self) -> NavigationState<T> {
        NavigationState {
            current_item: self.current.clone(),
            current_index: self.current_index,
            child_stack: self.child_stack.iter().map(|e| e.item.clone()).collect(),
        }
    }

    /// Move to the next sibling. No-op at the end or while viewing a child.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.move_to(self.current_index + 1)
    }

    /// Move to the previous sibling. No-op at the start or while viewing a child.
    pub fn prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.move_to(self.current_index - 1)
    }

    /// Jump to `item` in the sibling set, leaving any child view.
    ///
    /// Items not in the sibling set are ignored.
    pub fn go_to(&mut self, item: &T) -> bool {
        let Some(index) = self.siblings.iter().position(|s| s.id() == item.id()) else {
            tracing::debug!(
                siblings = self.siblings.len(),
                "go_to: item is not in the sibling set"
            );
            return false;
        };
        if index == self.current_index && !self.is_in_child() {
            return false;
        }
        self.child_stack.clear();
        self.move_to(index)
    }

    /// View `child`, remembering where we came from.
    pub fn dive_into_child(&mut self, child: T) {
        let parent = core::mem::replace(&mut self.current, child);
        self.child_stack.push(StackEntry {
            item: parent,
            index: self.current_index,
        });
        self.current_index = 0;
        self.notify();
    }

    /// Return to the item viewed before the last dive. No-op with nothing to pop.
    pub fn back_from_child(&mut self) -> bool {
        let Some(entry) = self.child_stack.pop() else {
            return false;
        };
        self.restore(entry);
        true
    }

    /// Return to the breadcrumb at `depth`, popping every level above it.
    ///
    /// `depth` 0 is the sibling-set item the first dive started from. Depths at
    /// or beyond the current depth are no-ops.
    pub fn back_to_depth(&mut self, depth: usize) -> bool {
        if depth >= self.child_stack.len() {
            return false;
        }
        let mut popped = self.child_stack.drain(depth..);
        let entry = popped.next();
        drop(popped);
        let Some(entry) = entry else {
            return false;
        };
        self.restore(entry);
        true
    }

    /// Back to the anchor at index 0 with an empty stack. Always notifies.
    pub fn reset(&mut self) {
        self.child_stack.clear();
        self.current = self.anchor.clone();
        self.current_index = 0;
        self.notify();
    }

    /// Replace anchor and siblings. Resets if the anchor's id changed.
    pub fn set_anchor(&mut self, anchor: T, related: &[T]) {
        if anchor.id() == self.anchor.id() {
            self.anchor = anchor;
            self.set_related(related);
            return;
        }
        self.siblings = sibling_set(&anchor, related);
        self.anchor = anchor;
        self.reset();
    }

    /// Replace the related items, keeping the anchor.
    ///
    /// The position is kept if the item it refers to (the current item, or the
    /// root of the child stack) is still a sibling, and that item is refreshed
    /// from the new data. Otherwise this resets.
    pub fn set_related(&mut self, related: &[T]) {
        self.siblings = sibling_set(&self.anchor, related);
        let root = self
            .child_stack
            .first()
            .map_or(&self.current, |entry| &entry.item);
        let Some(index) = self.siblings.iter().position(|s| s.id() == root.id()) else {
            self.reset();
            return;
        };
        let fresh = self.siblings[index].clone();
        match self.child_stack.first_mut() {
            Some(entry) => {
                entry.item = fresh;
                entry.index = index;
            }
            None => {
                self.current = fresh;
                self.current_index = index;
            }
        }
    }

    fn move_to(&mut self, index: usize) -> bool {
        let Some(item) = self.siblings.get(index) else {
            return false;
        };
        self.current = item.clone();
        self.current_index = index;
        self.notify();
        true
    }

    fn restore(&mut self, entry: StackEntry<T>) {
        self.current = entry.item;
        self.current_index = if self.child_stack.is_empty() {
            entry.index
        } else {
            0
        };
        self.notify();
    }

    fn notify(&mut self) {
        tracing::trace!(
            index = self.current_index,
            depth = self.child_stack.len(),
            "navigate"
        );
        if let Some(callback) = self.on_navigate.as_mut() {
            callback(&self.current);
        }
    }
}
