// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element containment queries.

/// Parent lookup over the host's element tree.
///
/// Implement [`ElementTree::parent_of`]; the provided [`ElementTree::contains`]
/// walks parents from the node upward. Hosts with a native containment query
/// (for example DOM `Node.contains`) should override `contains` directly.
pub trait ElementTree<K: Copy + Eq> {
    /// Parent of `node`, or `None` at a root.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &K, node: &K) -> bool {
        let mut cur = *node;
        // Caller ensures acyclic ancestry.
        loop {
            if cur == *ancestor {
                return true;
            }
            match self.parent_of(&cur) {
                Some(parent) => cur = parent,
                None => return false,
            }
        }
    }
}

/// A tree where every element is its own root.
///
/// With `NoTree`, an element only "contains" itself.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTree;

impl<K: Copy + Eq> ElementTree<K> for NoTree {
    fn parent_of(&self, _: &K) -> Option<K> {
        None
    }
}

#[cfg(feature = "parent_map")]
pub use parent_map::ParentMap;

#[cfg(feature = "parent_map")]
mod parent_map {
    use core::hash::Hash;

    use hashbrown::HashMap;

    use super::ElementTree;

    /// Child → parent map implementing [`ElementTree`].
    #[derive(Clone, Debug, Default)]
    pub struct ParentMap<K> {
        parents: HashMap<K, K>,
    }

    impl<K: Copy + Eq + Hash> ParentMap<K> {
        /// An empty map.
        pub fn new() -> Self {
            Self {
                parents: HashMap::new(),
            }
        }

        /// Record `parent` as the parent of `child`, returning the previous parent.
        pub fn insert(&mut self, child: K, parent: K) -> Option<K> {
            self.parents.insert(child, parent)
        }

        /// Detach `child` from its parent.
        pub fn remove(&mut self, child: &K) -> Option<K> {
            self.parents.remove(child)
        }

        /// Builder form of [`ParentMap::insert`].
        #[must_use]
        pub fn with(mut self, child: K, parent: K) -> Self {
            self.insert(child, parent);
            self
        }
    }

    impl<K: Copy + Eq + Hash> ElementTree<K> for ParentMap<K> {
        fn parent_of(&self, node: &K) -> Option<K> {
            self.parents.get(node).copied()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementTree, NoTree};

    #[test]
    fn no_tree_contains_only_itself() {
        assert!(NoTree.contains(&1_u32, &1));
        assert!(!NoTree.contains(&1_u32, &2));
    }

    #[cfg(feature = "parent_map")]
    #[test]
    fn parent_map_walks_ancestors() {
        use super::ParentMap;

        // 1 ─ 2 ─ 3
        //   └ 4
        let tree = ParentMap::new().with(2_u32, 1).with(3, 2).with(4, 1);
        assert!(tree.contains(&1, &3));
        assert!(tree.contains(&2, &3));
        assert!(!tree.contains(&2, &4));
        assert!(!tree.contains(&3, &2));
    }
}
