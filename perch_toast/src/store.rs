// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toast queue.

use alloc::vec::Vec;

use crate::{Toast, ToastId, ToastPosition, ToastRequest};

/// Default toast lifetime, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 4_000;

/// Default cap on toasts held at once.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Store-wide settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToastConfig {
    /// Lifetime of toasts that do not set one. `0` means they stay until dismissed.
    pub default_duration_ms: u64,
    /// Maximum toasts held at once; pushing past it evicts the oldest.
    pub max_visible: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl ToastConfig {
    /// Set [`ToastConfig::default_duration_ms`].
    #[must_use]
    pub const fn with_default_duration(mut self, ms: u64) -> Self {
        self.default_duration_ms = ms;
        self
    }

    /// Set [`ToastConfig::max_visible`].
    #[must_use]
    pub const fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max;
        self
    }
}

/// One shared queue of toasts.
///
/// Create one when the application starts and pass it by reference to
/// whatever raises toasts. There is no global instance.
///
/// Requests with the same message, variant, position and target fold into a
/// single toast: its [`Toast::count`] goes up and its expiry restarts.
///
/// ```
/// use perch_toast::{ToastRequest, ToastStore, ToastVariant};
///
/// let mut toasts = ToastStore::default();
/// let saved = ToastRequest::new("Saved").with_variant(ToastVariant::Success);
///
/// let id = toasts.push(saved.clone(), 0);
/// assert_eq!(toasts.push(saved, 1_000), id);
/// assert_eq!(toasts.len(), 1);
/// assert_eq!(toasts.get(id).unwrap().count, 2);
///
/// // The repeat restarted the 4 s lifetime.
/// assert!(toasts.expire(4_500).is_empty());
/// assert_eq!(toasts.expire(5_000), [id]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ToastStore {
    config: ToastConfig,
    /// Oldest first.
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStore {
    /// An empty store.
    pub fn new(config: ToastConfig) -> Self {
        Self {
            config,
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> ToastConfig {
        self.config
    }

    /// Number of toasts held.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` if no toasts are held.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// All toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Toasts stacked at `position`, oldest first.
    pub fn at(&self, position: ToastPosition) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.position == position)
    }

    /// Look a toast up by id.
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Show `request` at time `now`, or fold it into an identical toast.
    pub fn push(&mut self, request: ToastRequest, now: u64) -> ToastId {
        let duration = request
            .duration_ms
            .unwrap_or(self.config.default_duration_ms);
        let expires_at = (duration > 0).then(|| now.saturating_add(duration));

        if let Some(existing) = self.toasts.iter_mut().find(|t| t.matches(&request)) {
            existing.count = existing.count.saturating_add(1);
            existing.updated_at = now;
            existing.expires_at = expires_at;
            tracing::trace!(id = existing.id.0, count = existing.count, "toast repeated");
            return existing.id;
        }

        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: request.message,
            variant: request.variant,
            position: request.position,
            target: request.target,
            count: 1,
            updated_at: now,
            expires_at,
        });
        self.evict_overflow();
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Remove every toast.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Remove the toasts that have expired at `now` and return their ids.
    pub fn expire(&mut self, now: u64) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.toasts.retain(|t| {
            let keep = !t.is_expired(now);
            if !keep {
                expired.push(t.id);
            }
            keep
        });
        expired
    }

    /// Earliest expiry among held toasts, for hosts that arm a timeout.
    pub fn next_deadline(&self) -> Option<u64> {
        self.toasts.iter().filter_map(|t| t.expires_at).min()
    }

    fn evict_overflow(&mut self) {
        let max = self.config.max_visible.max(1);
        if self.toasts.len() > max {
            let overflow = self.toasts.len() - max;
            tracing::debug!(overflow, max, "evicting oldest toasts");
            self.toasts.drain(..overflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{ToastConfig, ToastStore};
    use crate::{ToastId, ToastPosition, ToastRequest, ToastVariant};

    #[test]
    fn different_keys_do_not_fold() {
        let mut store = ToastStore::default();
        let a = store.push(ToastRequest::new("Saved"), 0);
        let b = store.push(
            ToastRequest::new("Saved").with_variant(ToastVariant::Warning),
            0,
        );
        let c = store.push(ToastRequest::new("Saved").with_target("sidebar"), 0);
        let d = store.push(
            ToastRequest::new("Saved").with_position(ToastPosition::BottomLeft),
            0,
        );
        assert_eq!(store.len(), 4);
        assert_eq!(vec![a, b, c, d], vec![ToastId(0), ToastId(1), ToastId(2), ToastId(3)]);
    }

    #[test]
    fn sticky_toasts_never_expire() {
        let mut store = ToastStore::new(ToastConfig::default().with_default_duration(0));
        let id = store.push(ToastRequest::new("Offline"), 0);
        assert!(store.expire(u64::MAX).is_empty());
        assert_eq!(store.next_deadline(), None);
        assert!(store.dismiss(id));
        assert!(!store.dismiss(id));
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut store = ToastStore::new(ToastConfig::default().with_max_visible(2));
        store.push(ToastRequest::new("one"), 0);
        store.push(ToastRequest::new("two"), 1);
        store.push(ToastRequest::new("three"), 2);
        let messages: Vec<_> = store.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["two", "three"]);
    }

    #[test]
    fn grouped_by_position() {
        let mut store = ToastStore::default();
        store.push(ToastRequest::new("a"), 0);
        store.push(
            ToastRequest::new("b").with_position(ToastPosition::BottomCenter),
            0,
        );
        store.push(ToastRequest::new("c"), 0);
        let top: Vec<_> = store
            .at(ToastPosition::TopRight)
            .map(|t| t.message.as_str())
            .collect();
        assert_eq!(top, ["a", "c"]);
        assert_eq!(store.at(ToastPosition::TopLeft).count(), 0);
    }

    #[test]
    fn expire_returns_due_ids_only() {
        let mut store = ToastStore::default();
        let short = store.push(ToastRequest::new("short").with_duration(100), 0);
        let long = store.push(ToastRequest::new("long").with_duration(1_000), 0);
        assert_eq!(store.next_deadline(), Some(100));
        assert_eq!(store.expire(99), Vec::<ToastId>::new());
        assert_eq!(store.expire(100), vec![short]);
        assert!(store.get(long).is_some());
        store.clear();
        assert!(store.is_empty());
    }
}
