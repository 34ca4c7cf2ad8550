//! Keyset - four associative containers for `i32` keys
//!
//! Core library providing:
//! - AVL tree with cached subtree heights
//! - Splay tree that promotes every accessed key to the root
//! - Separately chained hash table with a fixed bucket count
//! - Quadratic open-addressing hash table with tombstone reuse

pub mod avl;
pub mod splay;
pub mod chained;
pub mod probing;
pub mod hashing;
pub mod error;
pub mod config;
pub mod keyset;

pub use avl::BalancedTree;
pub use splay::AdaptiveTree;
pub use chained::ChainedHashTable;
pub use probing::{ProbingHashTable, Slot};
pub use error::{KeysetError, Result};
pub use config::{Scale, TableSizing};
pub use keyset::KeySet;
