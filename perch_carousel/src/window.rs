// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The windowing function.

use core::ops::Range;

/// The slides to mount for a given current index.
///
/// Indices `start..end` are mounted. `before` and `after` count the slides
/// left out on each side, for hosts that render placeholders or a scrollbar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CarouselWindow {
    /// First mounted index (inclusive).
    pub start: usize,
    /// One past the last mounted index.
    pub end: usize,
    /// Slides before `start`.
    pub before: usize,
    /// Slides at or after `end`.
    pub after: usize,
}

impl CarouselWindow {
    /// Returns `true` if nothing is mounted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of mounted slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether `index` is mounted.
    #[must_use]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Mounted indices.
    #[must_use]
    pub fn indices(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Compute the mounted window around `current` in a sequence of `len` slides.
///
/// `current` is clamped to the last slide. The window holds up to
/// `buffer_before` slides before it and `buffer_after` after it, cut at the
/// ends of the sequence. It never wraps around.
///
/// ```
/// use perch_carousel::compute_window;
///
/// let w = compute_window(100, 0, 2, 2);
/// assert_eq!((w.start, w.end, w.before, w.after), (0, 3, 0, 97));
///
/// let w = compute_window(100, 50, 2, 2);
/// assert_eq!((w.start, w.end), (48, 53));
/// ```
#[must_use]
pub fn compute_window(
    len: usize,
    current: usize,
    buffer_before: usize,
    buffer_after: usize,
) -> CarouselWindow {
    if len == 0 {
        return CarouselWindow::default();
    }
    let current = current.min(len - 1);
    let start = current.saturating_sub(buffer_before);
    let end = current
        .saturating_add(buffer_after)
        .saturating_add(1)
        .min(len);
    CarouselWindow {
        start,
        end,
        before: start,
        after: len - end,
    }
}

#[cfg(test)]
mod tests {
    use super::{CarouselWindow, compute_window};

    #[test]
    fn empty_sequence_mounts_nothing() {
        let w = compute_window(0, 5, 2, 2);
        assert!(w.is_empty());
        assert_eq!(w, CarouselWindow::default());
    }

    #[test]
    fn clamps_at_the_end() {
        let w = compute_window(10, 9, 2, 2);
        assert_eq!((w.start, w.end, w.before, w.after), (7, 10, 7, 0));
        assert!(w.contains(9));
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(compute_window(4, 40, 1, 1), compute_window(4, 3, 1, 1));
    }

    #[test]
    fn asymmetric_buffers() {
        let w = compute_window(20, 10, 0, 3);
        assert_eq!(w.indices(), 10..14);
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn current_is_always_inside() {
        for len in 1..8 {
            for current in 0..len {
                for buffer in 0..3 {
                    let w = compute_window(len, current, buffer, buffer);
                    assert!(w.contains(current));
                    assert_eq!(w.before + w.len() + w.after, len);
                    assert!(w.len() <= 2 * buffer + 1);
                }
            }
        }
    }

    #[test]
    fn huge_buffers_do_not_overflow() {
        let w = compute_window(5, 2, usize::MAX, usize::MAX);
        assert_eq!(w.indices(), 0..5);
    }
}
