//! Separately chained hash table
//!
//! A fixed number of buckets, each holding its keys in insertion order.
//! The table never resizes; chains grow without bound.

use log::debug;

use crate::config::TableSizing;
use crate::error::{KeysetError, Result};
use crate::hashing::home_slot;

/// Hash table resolving collisions by chaining
#[derive(Clone, Debug)]
pub struct ChainedHashTable {
    buckets: Vec<Vec<i32>>,
    size: usize,
}

impl ChainedHashTable {
    /// Create a table with `capacity` buckets
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(KeysetError::invalid_capacity(capacity));
        }
        debug!("chained table: {} buckets", capacity);

        Ok(ChainedHashTable {
            buckets: vec![Vec::new(); capacity],
            size: 0,
        })
    }

    /// Create a table with the bucket count from a sizing preset
    pub fn with_sizing(sizing: &TableSizing) -> Result<Self> {
        Self::new(sizing.chaining_buckets)
    }

    /// Insert a key at the end of its bucket
    ///
    /// Returns true if inserted, false if the key was already present
    pub fn insert(&mut self, key: i32) -> bool {
        let home = home_slot(key, self.buckets.len());
        let bucket = &mut self.buckets[home];
        if bucket.contains(&key) {
            return false;
        }
        bucket.push(key);
        self.size += 1;
        true
    }

    /// Check whether `key` is present
    pub fn contains(&self, key: i32) -> bool {
        self.buckets[home_slot(key, self.buckets.len())].contains(&key)
    }

    /// Keys of bucket `index` in insertion order
    ///
    /// An out-of-range index yields an empty chain rather than an error.
    pub fn chain(&self, index: usize) -> &[i32] {
        self.buckets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Get current size
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Keys per bucket
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Length of the longest chain
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let table = ChainedHashTable::new(50).unwrap();
        assert_eq!(table.capacity(), 50);
        assert_eq!(table.len(), 0);
        assert_eq!(table.longest_chain(), 0);
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(
            ChainedHashTable::new(0).unwrap_err(),
            KeysetError::InvalidCapacity { capacity: 0 }
        );
    }

    #[test]
    fn test_collisions_keep_insertion_order() {
        let mut table = ChainedHashTable::new(10).unwrap();
        for key in [5, 15, 25] {
            assert!(table.insert(key));
        }

        assert_eq!(table.chain(5), &[5, 15, 25]);
        assert_eq!(table.longest_chain(), 3);
        assert!(table.chain(4).is_empty());
    }

    #[test]
    fn test_distinct_buckets() {
        let mut table = ChainedHashTable::new(50).unwrap();
        for key in [5, 15, 25] {
            table.insert(key);
        }
        assert_eq!(table.chain(5), &[5]);
        assert_eq!(table.chain(15), &[15]);
        assert_eq!(table.chain(25), &[25]);
    }

    #[test]
    fn test_duplicate_is_noop() {
        let mut table = ChainedHashTable::new(10).unwrap();
        assert!(table.insert(15));
        assert!(!table.insert(15));
        assert_eq!(table.len(), 1);
        assert_eq!(table.chain(5), &[15]);
    }

    #[test]
    fn test_negative_keys() {
        let mut table = ChainedHashTable::new(10).unwrap();
        table.insert(-15);
        table.insert(-1);

        assert_eq!(table.chain(5), &[-15]);
        assert_eq!(table.chain(9), &[-1]);
        assert!(table.contains(-15));
        assert!(!table.contains(15));
    }

    #[test]
    fn test_out_of_range_chain() {
        let mut table = ChainedHashTable::new(10).unwrap();
        table.insert(3);
        assert!(table.chain(10).is_empty());
        assert!(table.chain(usize::MAX).is_empty());
    }

    #[test]
    fn test_load_factor() {
        let mut table = ChainedHashTable::new(4).unwrap();
        for key in 0..10 {
            table.insert(key);
        }
        assert!((table.load_factor() - 2.5).abs() < f64::EPSILON);
    }
}
