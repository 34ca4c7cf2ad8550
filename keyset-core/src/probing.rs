//! Open-addressing hash table with quadratic probing
//!
//! Provides:
//! - Probe sequence idx_j = (h(key) + j²) mod m for j in 0..m
//! - Tombstone slots that keep probe chains intact and are reused on insert
//! - An explicit error when no resting place exists for a key
//!
//! When m is not prime the quadratic sequence may revisit slots and miss
//! others before j reaches m. The j < m bound only caps the walk; it does not
//! promise that every slot is tried, so a table can report full while empty
//! slots remain elsewhere.

use log::{debug, warn};

use crate::config::TableSizing;
use crate::error::{KeysetError, Result};
use crate::hashing::home_slot;

/// State of one table slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Never used; terminates lookups
    Empty,
    /// Previously occupied; lookups probe past it, inserts may reuse it
    Tombstone,
    /// Holds a key
    Occupied(i32),
}

/// Hash table resolving collisions by quadratic probing
#[derive(Clone, Debug)]
pub struct ProbingHashTable {
    slots: Vec<Slot>,
    size: usize,
}

impl ProbingHashTable {
    /// Create a table with `capacity` slots
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(KeysetError::invalid_capacity(capacity));
        }
        debug!("probing table: {} slots", capacity);

        Ok(ProbingHashTable {
            slots: vec![Slot::Empty; capacity],
            size: 0,
        })
    }

    /// Create a table with the slot count from a sizing preset
    pub fn with_sizing(sizing: &TableSizing) -> Result<Self> {
        Self::new(sizing.probing_slots)
    }

    /// Generate the probe sequence for `key`
    ///
    /// Offsets are squared in 128-bit arithmetic so no capacity can overflow.
    #[inline(always)]
    fn probe_sequence(&self, key: i32) -> impl Iterator<Item = usize> {
        let capacity = self.slots.len();
        let home = home_slot(key, capacity) as u128;
        (0..capacity).map(move |j| {
            let j = j as u128;
            ((home + j * j) % capacity as u128) as usize
        })
    }

    /// Insert a key
    ///
    /// Returns `Ok(true)` if inserted and `Ok(false)` if the key was already
    /// present. The key goes to the first tombstone seen on its probe walk, or
    /// else to the first empty slot. Fails with `TableFull` when the walk
    /// finds neither; the table is unchanged in that case.
    pub fn insert(&mut self, key: i32) -> Result<bool> {
        let mut first_tombstone = None;
        let mut resting_place = None;

        for idx in self.probe_sequence(key) {
            match self.slots[idx] {
                Slot::Empty => {
                    resting_place = Some(first_tombstone.unwrap_or(idx));
                    break;
                }
                Slot::Occupied(existing) if existing == key => return Ok(false),
                Slot::Tombstone if first_tombstone.is_none() => first_tombstone = Some(idx),
                _ => {}
            }
        }

        match resting_place.or(first_tombstone) {
            Some(idx) => {
                self.slots[idx] = Slot::Occupied(key);
                self.size += 1;
                Ok(true)
            }
            None => {
                warn!("probing table full: no slot for {} among {}", key, self.slots.len());
                Err(KeysetError::table_full(key, self.slots.len()))
            }
        }
    }

    /// Check whether `key` is present
    pub fn contains(&self, key: i32) -> bool {
        self.index_of(key).is_some()
    }

    /// Slot index holding `key`, or None if absent
    ///
    /// Stops at the first empty slot; tombstones are probed past.
    pub fn index_of(&self, key: i32) -> Option<usize> {
        for idx in self.probe_sequence(key) {
            match self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(existing) if existing == key => return Some(idx),
                _ => {}
            }
        }
        None
    }

    /// State of slot `index`, or None when out of range
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get current size
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get load factor
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Turn an occupied slot into a tombstone
    #[cfg(test)]
    pub(crate) fn bury(&mut self, index: usize) {
        if let Slot::Occupied(_) = self.slots[index] {
            self.slots[index] = Slot::Tombstone;
            self.size -= 1;
        }
    }
}
