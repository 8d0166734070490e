// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single-threaded observable value.
//!
//! [`Signal`] is a shared handle: cloning it yields another handle to the same
//! value. Writers call [`Signal::set`]; readers either poll [`Signal::get`] /
//! [`Signal::version`] or register a callback with [`Signal::subscribe`].
//!
//! ## Notification rules
//!
//! - Subscribers run synchronously inside `set`, in subscription order.
//! - Setting an equal value is a no-op and notifies nobody.
//! - A subscriber may call `set` on the same signal. The nested write notifies
//!   every *other* subscriber with the newer value and the outer notification
//!   stops, so nobody observes a stale value after a newer one.
//! - A subscriber that is already running is never re-entered.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Shared, observable value with synchronous change notification.
///
/// ```
/// use core::cell::Cell;
/// use std::rc::Rc;
/// use perch_reactive::Signal;
///
/// let open = Signal::new(false);
/// let seen = Rc::new(Cell::new(0));
/// let sub = {
///     let seen = Rc::clone(&seen);
///     open.subscribe(move |v| {
///         if *v {
///             seen.set(seen.get() + 1);
///         }
///     })
/// };
///
/// assert!(open.set(true));
/// assert!(!open.set(true)); // unchanged, no notification
/// assert_eq!(seen.get(), 1);
///
/// drop(sub);
/// open.set(false);
/// open.set(true);
/// assert_eq!(seen.get(), 1);
/// ```
pub struct Signal<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Signal")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Default + 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: 'static> Signal<T> {
    /// Create a signal holding `value` at version 0.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Number of committed changes since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Borrow the current value.
    ///
    /// The closure must not write to this signal.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Register `callback` to run after every change.
    ///
    /// The returned [`Subscription`] detaches the callback when dropped.
    #[must_use = "dropping the subscription detaches the callback immediately"]
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        inner.subscribers.push((id, callback));
        let weak = Rc::downgrade(&self.inner);
        let source: Weak<dyn Detach> = weak;
        Subscription {
            source: Some(source),
            id,
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Returns `true` if both handles point at the same value.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Clone out the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    /// Replace the value and notify subscribers.
    ///
    /// Returns `false` (and notifies nobody) if `value` equals the current value.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value;
            inner.version += 1;
        }
        self.notify();
        true
    }

    /// Modify the value in place through a copy and commit it with [`Signal::set`].
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut value = self.get();
        f(&mut value);
        self.set(value)
    }

    fn notify(&self) {
        let (value, version, subscribers) = {
            let inner = self.inner.borrow();
            let subscribers: Vec<Callback<T>> = inner
                .subscribers
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect();
            (inner.value.clone(), inner.version, subscribers)
        };
        for callback in subscribers {
            // A nested `set` already delivered a newer value.
            if self.inner.borrow().version != version {
                break;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(&value);
            }
        }
    }
}

trait Detach {
    fn detach(&self, id: u64);
}

impl<T> Detach for RefCell<Inner<T>> {
    fn detach(&self, id: u64) {
        self.borrow_mut().subscribers.retain(|(sub, _)| *sub != id);
    }
}

/// Handle for a callback registered with [`Signal::subscribe`].
///
/// Dropping it detaches the callback. Use [`Subscription::leak`] to keep the
/// callback attached for as long as the signal lives.
pub struct Subscription {
    source: Option<Weak<dyn Detach>>,
    id: u64,
}

impl Subscription {
    /// Detach the callback now.
    pub fn unsubscribe(mut self) {
        self.detach();
    }

    /// Keep the callback attached for the lifetime of the signal.
    pub fn leak(mut self) {
        self.source = None;
    }

    /// Returns `true` if the signal this subscription belongs to is still alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| source.strong_count() > 0)
    }

    fn detach(&mut self) {
        if let Some(source) = self.source.take().and_then(|s| s.upgrade()) {
            source.detach(self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &self.is_attached())
            .finish_non_exhaustive()
    }
}
