//! Error type shared by the containers and their configuration

use thiserror::Error;

/// Errors raised by keyset containers
///
/// Lookup misses are not errors; they surface as `false` or `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeysetError {
    /// A hash table was asked for zero buckets or slots
    #[error("Invalid capacity: {capacity} (must be positive)")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// Quadratic probing ran out of positions for a key
    #[error("Hash table is full: cannot insert {key} into {capacity} slots")]
    TableFull {
        /// The key that could not be placed
        key: i32,
        /// Slot count of the table
        capacity: usize,
    },

    /// Unknown scale name in configuration
    #[error("Invalid scale: {value:?} (expected small, medium or large)")]
    InvalidScale {
        /// The rejected value
        value: String,
    },
}

impl KeysetError {
    /// Create an invalid capacity error
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a table full error
    pub fn table_full(key: i32, capacity: usize) -> Self {
        Self::TableFull { key, capacity }
    }

    /// Create an invalid scale error
    pub fn invalid_scale<S: Into<String>>(value: S) -> Self {
        Self::InvalidScale { value: value.into() }
    }

    /// Short label for log lines
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidCapacity { .. } => "config",
            Self::TableFull { .. } => "capacity",
            Self::InvalidScale { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeysetError>;
