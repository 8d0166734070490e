// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the current index and caches the window.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{CarouselWindow, compute_window};

/// Slides mounted on each side of the current one by default.
pub const DEFAULT_BUFFER: usize = 1;

/// One mounted slide.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VirtualSlide<'a, T> {
    /// The slide's item.
    pub item: &'a T,
    /// Index of the item in the full sequence.
    pub index: usize,
    /// Whether this is the current slide.
    pub is_active: bool,
}

/// Controller for a windowed carousel.
///
/// Stores the sequence length, the requested index and the buffers, and caches
/// the last [`CarouselWindow`] until one of them changes. The requested index
/// is kept as given; [`current`](Self::current) clamps it to the length, so a
/// request made while the sequence is short takes effect once it grows.
///
/// ```
/// use perch_carousel::VirtualCarousel;
///
/// let files = ["a.png", "b.png", "c.png", "d.png", "e.png"];
/// let mut carousel = VirtualCarousel::new(files.len(), 1);
/// carousel.set_current(3);
///
/// let mounted: Vec<_> = carousel.slides(&files).iter().map(|s| *s.item).collect();
/// assert_eq!(mounted, ["c.png", "d.png", "e.png"]);
/// ```
#[derive(Clone, Debug)]
pub struct VirtualCarousel {
    len: usize,
    requested: usize,
    buffer_before: usize,
    buffer_after: usize,

    dirty: bool,
    last_window: CarouselWindow,
}

impl Default for VirtualCarousel {
    fn default() -> Self {
        Self::new(0, DEFAULT_BUFFER)
    }
}

impl VirtualCarousel {
    /// A carousel over `len` slides at index 0, with a symmetric `buffer`.
    #[must_use]
    pub fn new(len: usize, buffer: usize) -> Self {
        Self {
            len,
            requested: 0,
            buffer_before: buffer,
            buffer_after: buffer,
            dirty: true,
            last_window: CarouselWindow::default(),
        }
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index. Always `< len` unless the carousel is empty.
    #[must_use]
    pub const fn current(&self) -> usize {
        let last = self.len.saturating_sub(1);
        if self.requested < last {
            self.requested
        } else {
            last
        }
    }

    /// Buffers before and after the current slide.
    #[must_use]
    pub const fn buffer(&self) -> (usize, usize) {
        (self.buffer_before, self.buffer_after)
    }

    /// Change the number of slides. The current index reads as clamped to the
    /// new length; the requested index is kept.
    pub fn set_len(&mut self, len: usize) {
        if len != self.len {
            self.len = len;
            self.dirty = true;
        }
    }

    /// Move to `index`. Reads back clamped to the last slide.
    pub fn set_current(&mut self, index: usize) {
        if index != self.requested {
            self.requested = index;
            self.dirty = true;
        }
    }

    /// Move one slide forward. Returns `false` at the end.
    pub fn next(&mut self) -> bool {
        let current = self.current();
        if current + 1 >= self.len {
            return false;
        }
        self.set_current(current + 1);
        true
    }

    /// Move one slide back. Returns `false` at the start.
    pub fn prev(&mut self) -> bool {
        let current = self.current();
        if current == 0 {
            return false;
        }
        self.set_current(current - 1);
        true
    }

    /// Change the buffers.
    pub fn set_buffer(&mut self, before: usize, after: usize) {
        if before != self.buffer_before || after != self.buffer_after {
            self.buffer_before = before;
            self.buffer_after = after;
            self.dirty = true;
        }
    }

    /// Computes or returns the cached window.
    #[must_use]
    pub fn window(&mut self) -> CarouselWindow {
        if self.dirty {
            self.last_window = compute_window(
                self.len,
                self.current(),
                self.buffer_before,
                self.buffer_after,
            );
            self.dirty = false;
            tracing::trace!(
                start = self.last_window.start,
                end = self.last_window.end,
                "carousel window"
            );
        }
        self.last_window
    }

    /// Mounted indices.
    pub fn mounted_indices(&mut self) -> Range<usize> {
        self.window().indices()
    }

    /// Whether `index` is mounted.
    #[must_use]
    pub fn is_mounted(&mut self, index: usize) -> bool {
        self.window().contains(index)
    }

    /// The mounted slides of `items`.
    ///
    /// The length is synced to `items.len()` first, so the result is always
    /// in bounds.
    pub fn slides<'a, T>(&mut self, items: &'a [T]) -> Vec<VirtualSlide<'a, T>> {
        self.set_len(items.len());
        let window = self.window();
        let current = self.current();
        items[window.indices()]
            .iter()
            .zip(window.indices())
            .map(|(item, index)| VirtualSlide {
                item,
                index,
                is_active: index == current,
            })
            .collect()
    }

    /// [`slides`](Self::slides) with the current index set to `current` in
    /// the same step, clamped against `items.len()`.
    pub fn slides_at<'a, T>(
        &mut self,
        items: &'a [T],
        current: usize,
    ) -> Vec<VirtualSlide<'a, T>> {
        self.set_current(current);
        self.slides(items)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::VirtualCarousel;

    #[test]
    fn exactly_one_active_slide() {
        let items: Vec<usize> = (0..50).collect();
        let mut c = VirtualCarousel::new(items.len(), 2);
        for current in [0, 1, 25, 48, 49] {
            c.set_current(current);
            let slides = c.slides(&items);
            let active: Vec<_> = slides.iter().filter(|s| s.is_active).collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].index, current);
            assert_eq!(*active[0].item, current);
        }
    }

    #[test]
    fn window_is_cached_until_inputs_change() {
        let mut c = VirtualCarousel::new(10, 1);
        let first = c.window();
        assert!(!c.dirty);
        c.set_current(0);
        assert!(!c.dirty);
        assert_eq!(c.window(), first);
        c.set_buffer(1, 2);
        assert!(c.dirty);
        assert_eq!(c.mounted_indices(), 0..3);
    }

    #[test]
    fn shrinking_pulls_current_in() {
        let mut c = VirtualCarousel::new(10, 1);
        c.set_current(9);
        c.set_len(4);
        assert_eq!(c.current(), 3);
        assert!(c.is_mounted(3));
        assert!(!c.is_mounted(0));
    }

    #[test]
    fn index_survives_a_short_sequence() {
        let long: Vec<usize> = (0..40).collect();
        let mut c = VirtualCarousel::new(long.len(), 2);
        c.set_current(34);
        c.slides(&long);
        // A one-item child view in between.
        c.slides_at(&[99], 0);
        c.set_current(34);
        assert_eq!(c.current(), 0);

        let active: Vec<_> = c
            .slides(&long)
            .iter()
            .filter(|s| s.is_active)
            .map(|s| s.index)
            .collect();
        assert_eq!(active, [34]);
        assert_eq!(c.current(), 34);
        assert_eq!(c.mounted_indices(), 32..37);
    }

    #[test]
    fn slides_at_clamps_against_the_given_items() {
        let items = ["a", "b", "c"];
        let mut c = VirtualCarousel::new(1, 1);
        let slides = c.slides_at(&items, 2);
        assert_eq!(slides.len(), 2);
        assert!(slides[1].is_active);
        assert_eq!(*slides[1].item, "c");

        let slides = c.slides_at(&items, 10);
        assert_eq!(slides.iter().filter(|s| s.is_active).count(), 1);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn next_and_prev_stop_at_bounds() {
        let mut c = VirtualCarousel::new(2, 0);
        assert!(!c.prev());
        assert!(c.next());
        assert!(!c.next());
        assert_eq!(c.current(), 1);
        assert_eq!(c.mounted_indices(), 1..2);
    }

    #[test]
    fn empty_items_yield_no_slides() {
        let mut c = VirtualCarousel::default();
        let items: [u8; 0] = [];
        assert!(c.slides(&items).is_empty());
        assert!(c.is_empty());
    }

    #[test]
    fn stable_for_same_inputs() {
        let items = ["a", "b", "c", "d"];
        let mut a = VirtualCarousel::new(4, 1);
        let mut b = VirtualCarousel::new(4, 1);
        a.set_current(2);
        b.set_current(2);
        assert_eq!(a.slides(&items), b.slides(&items));
    }
}
