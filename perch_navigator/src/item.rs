// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// An item with a stable identity.
///
/// Navigation compares items by [`Navigable::id`] only; two items with the
/// same id are the same file even if other fields differ.
pub trait Navigable {
    /// Identity type.
    type Id: Eq + Hash;

    /// This item's identity.
    fn id(&self) -> &Self::Id;
}

impl<'a> Navigable for &'a str {
    type Id = &'a str;

    fn id(&self) -> &Self::Id {
        self
    }
}

impl Navigable for String {
    type Id = Self;

    fn id(&self) -> &Self::Id {
        self
    }
}

/// `anchor` followed by `related`, keeping the first item for each id.
pub(crate) fn sibling_set<T: Navigable + Clone>(anchor: &T, related: &[T]) -> Vec<T> {
    let mut seen: HashSet<&T::Id> = HashSet::with_capacity(related.len() + 1);
    seen.insert(anchor.id());
    let mut out = Vec::with_capacity(related.len() + 1);
    out.push(anchor.clone());
    for item in related {
        if seen.insert(item.id()) {
            out.push(item.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::sibling_set;

    #[test]
    fn anchor_first_and_duplicates_collapse() {
        let set = sibling_set(&"1", &["1", "2", "3", "2"]);
        assert_eq!(set, vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_related_is_just_the_anchor() {
        assert_eq!(sibling_set(&"a", &[]), vec!["a"]);
    }
}
