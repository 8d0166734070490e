// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A cancellable one-shot deadline.

/// One-shot timer driven by host timestamps.
///
/// The timer does not own a clock. Callers pass the current time (in
/// milliseconds, from any monotonic source) to [`Timer::schedule`] and
/// [`Timer::fire`]. Rescheduling replaces the previous deadline.
///
/// ```
/// use perch_trigger::Timer;
///
/// let mut timer = Timer::new();
/// timer.schedule(1_000, 200);
/// assert!(!timer.fire(1_199));
/// assert!(timer.fire(1_200));
/// // Fires at most once.
/// assert!(!timer.fire(5_000));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<u64>,
}

impl Timer {
    /// An idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` milliseconds after `now`.
    pub fn schedule(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarm the timer. Returns `true` if it was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether the timer is armed.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Absolute deadline, if armed.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Milliseconds left at `now`, if armed.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline.map(|d| d.saturating_sub(now))
    }

    /// Fire if the deadline has passed. Disarms the timer when it fires.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Timer;

    #[test]
    fn reschedule_replaces_deadline() {
        let mut t = Timer::new();
        t.schedule(0, 100);
        t.schedule(50, 100);
        assert_eq!(t.deadline(), Some(150));
        assert!(!t.fire(149));
        assert!(t.fire(150));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut t = Timer::new();
        t.schedule(0, 10);
        assert!(t.cancel());
        assert!(!t.cancel());
        assert!(!t.fire(1_000));
    }

    #[test]
    fn remaining_counts_down() {
        let mut t = Timer::new();
        assert_eq!(t.remaining(0), None);
        t.schedule(100, 200);
        assert_eq!(t.remaining(150), Some(150));
        assert_eq!(t.remaining(400), Some(0));
    }

    #[test]
    fn saturates_near_the_end_of_time() {
        let mut t = Timer::new();
        t.schedule(u64::MAX - 1, 10);
        assert_eq!(t.deadline(), Some(u64::MAX));
        assert!(t.fire(u64::MAX));
    }
}
