//! Common interface over the four containers

use crate::avl::BalancedTree;
use crate::chained::ChainedHashTable;
use crate::error::Result;
use crate::probing::ProbingHashTable;
use crate::splay::AdaptiveTree;

/// A set of `i32` keys supporting insert and membership
///
/// `contains_key` takes `&mut self` because a splay tree restructures itself
/// on every lookup.
pub trait KeySet {
    /// Insert a key; `Ok(true)` if it was new, `Ok(false)` for a duplicate
    fn insert_key(&mut self, key: i32) -> Result<bool>;

    /// Check whether `key` is present
    fn contains_key(&mut self, key: i32) -> bool;

    /// Number of keys stored
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short container name
    fn kind(&self) -> &'static str;
}

impl KeySet for BalancedTree {
    fn insert_key(&mut self, key: i32) -> Result<bool> {
        Ok(self.insert(key))
    }

    fn contains_key(&mut self, key: i32) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        BalancedTree::len(self)
    }

    fn kind(&self) -> &'static str {
        "avl"
    }
}

impl KeySet for AdaptiveTree {
    fn insert_key(&mut self, key: i32) -> Result<bool> {
        Ok(self.insert(key))
    }

    fn contains_key(&mut self, key: i32) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        AdaptiveTree::len(self)
    }

    fn kind(&self) -> &'static str {
        "splay"
    }
}

impl KeySet for ChainedHashTable {
    fn insert_key(&mut self, key: i32) -> Result<bool> {
        Ok(self.insert(key))
    }

    fn contains_key(&mut self, key: i32) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        ChainedHashTable::len(self)
    }

    fn kind(&self) -> &'static str {
        "chaining"
    }
}

impl KeySet for ProbingHashTable {
    fn insert_key(&mut self, key: i32) -> Result<bool> {
        self.insert(key)
    }

    fn contains_key(&mut self, key: i32) -> bool {
        self.contains(key)
    }

    fn len(&self) -> usize {
        ProbingHashTable::len(self)
    }

    fn kind(&self) -> &'static str {
        "quadratic"
    }
}
