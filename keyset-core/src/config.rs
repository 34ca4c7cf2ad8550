//! Table sizing presets
//!
//! Three workload scales, each pairing a key count with a bucket count for
//! the chained table and a slot count for the probing table. The probing
//! sizes are primes at roughly twice the key count, so a fully loaded
//! probing table stays under half full.
//!
//! Sizing can be read from the environment:
//! - `KEYSET_SCALE` = `small` | `medium` | `large` (default `small`)
//! - `KEYSET_CHAINING_BUCKETS`, `KEYSET_PROBING_SLOTS` override the preset

use std::env;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{KeysetError, Result};

/// Workload scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scale {
    /// 1,000 keys
    #[default]
    Small,
    /// 10,000 keys
    Medium,
    /// 100,000 keys
    Large,
}

impl Scale {
    /// Every scale, smallest first
    pub const ALL: [Scale; 3] = [Scale::Small, Scale::Medium, Scale::Large];

    /// Lower-case name as accepted by `from_str`
    pub fn name(self) -> &'static str {
        match self {
            Scale::Small => "small",
            Scale::Medium => "medium",
            Scale::Large => "large",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = KeysetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Scale::Small),
            "medium" => Ok(Scale::Medium),
            "large" => Ok(Scale::Large),
            _ => Err(KeysetError::invalid_scale(s)),
        }
    }
}

/// Capacities for one workload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSizing {
    /// Number of keys the workload inserts
    pub key_count: usize,
    /// Bucket count for `ChainedHashTable`
    pub chaining_buckets: usize,
    /// Slot count for `ProbingHashTable`
    pub probing_slots: usize,
}

impl TableSizing {
    /// Create a sizing, rejecting zero capacities
    pub fn new(key_count: usize, chaining_buckets: usize, probing_slots: usize) -> Result<Self> {
        let sizing = TableSizing {
            key_count,
            chaining_buckets,
            probing_slots,
        };
        sizing.validate()?;
        Ok(sizing)
    }

    /// Preset for a scale
    pub fn for_scale(scale: Scale) -> Self {
        match scale {
            Scale::Small => TableSizing {
                key_count: 1_000,
                chaining_buckets: 928,
                probing_slots: 2_003,
            },
            Scale::Medium => TableSizing {
                key_count: 10_000,
                chaining_buckets: 8_329,
                probing_slots: 20_011,
            },
            Scale::Large => TableSizing {
                key_count: 100_000,
                chaining_buckets: 83_329,
                probing_slots: 200_003,
            },
        }
    }

    /// Check that both table capacities are positive
    pub fn validate(&self) -> Result<()> {
        if self.chaining_buckets == 0 {
            return Err(KeysetError::invalid_capacity(self.chaining_buckets));
        }
        if self.probing_slots == 0 {
            return Err(KeysetError::invalid_capacity(self.probing_slots));
        }
        Ok(())
    }

    /// Keys per probing slot once the workload is loaded
    pub fn probing_load_factor(&self) -> f64 {
        self.key_count as f64 / self.probing_slots as f64
    }

    /// Read sizing from `KEYSET_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_prefix("KEYSET_")
    }

    /// Read sizing from environment variables with a custom prefix
    pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_lookup(prefix, |name| env::var(name).ok())
    }

    fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scale = match lookup(&format!("{}SCALE", prefix)) {
            Some(value) => value.parse()?,
            None => Scale::default(),
        };

        let mut sizing = Self::for_scale(scale);
        if let Some(value) = lookup(&format!("{}CHAINING_BUCKETS", prefix)) {
            sizing.chaining_buckets = parse_capacity(&value)?;
        }
        if let Some(value) = lookup(&format!("{}PROBING_SLOTS", prefix)) {
            sizing.probing_slots = parse_capacity(&value)?;
        }
        sizing.validate()?;

        debug!(
            "sizing from env: scale={} chaining={} probing={}",
            scale, sizing.chaining_buckets, sizing.probing_slots
        );
        Ok(sizing)
    }
}

impl Default for TableSizing {
    fn default() -> Self {
        Self::for_scale(Scale::default())
    }
}

fn parse_capacity(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| KeysetError::invalid_capacity(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_scale_parse() {
        assert_eq!("small".parse::<Scale>().unwrap(), Scale::Small);
        assert_eq!(" Medium ".parse::<Scale>().unwrap(), Scale::Medium);
        assert_eq!("LARGE".parse::<Scale>().unwrap(), Scale::Large);
        assert_eq!(
            "huge".parse::<Scale>().unwrap_err(),
            KeysetError::InvalidScale { value: "huge".to_string() }
        );
    }

    #[test]
    fn test_scale_display_round_trips() {
        for scale in Scale::ALL {
            assert_eq!(scale.to_string().parse::<Scale>().unwrap(), scale);
        }
    }

    #[test]
    fn test_presets() {
        let small = TableSizing::for_scale(Scale::Small);
        assert_eq!(small.chaining_buckets, 928);
        assert_eq!(small.probing_slots, 2_003);
        assert!(small.probing_load_factor() < 0.5);

        for scale in Scale::ALL {
            assert!(TableSizing::for_scale(scale).validate().is_ok());
        }
        assert_eq!(TableSizing::default(), small);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(TableSizing::new(10, 0, 11).is_err());
        assert!(TableSizing::new(10, 7, 0).is_err());
        assert!(TableSizing::new(10, 7, 11).is_ok());
    }

    #[test]
    fn test_lookup_defaults() {
        let sizing = TableSizing::from_lookup("KEYSET_", lookup_from(&[])).unwrap();
        assert_eq!(sizing, TableSizing::for_scale(Scale::Small));
    }

    #[test]
    fn test_lookup_overrides() {
        let lookup = lookup_from(&[
            ("APP_SCALE", "medium"),
            ("APP_PROBING_SLOTS", "20021"),
        ]);
        let sizing = TableSizing::from_lookup("APP_", lookup).unwrap();
        assert_eq!(sizing.key_count, 10_000);
        assert_eq!(sizing.chaining_buckets, 8_329);
        assert_eq!(sizing.probing_slots, 20_021);
    }

    #[test]
    fn test_lookup_rejects_bad_values() {
        let lookup = lookup_from(&[("KEYSET_SCALE", "tiny")]);
        assert!(TableSizing::from_lookup("KEYSET_", lookup).is_err());

        let lookup = lookup_from(&[("KEYSET_CHAINING_BUCKETS", "-3")]);
        assert!(TableSizing::from_lookup("KEYSET_", lookup).is_err());

        let lookup = lookup_from(&[("KEYSET_PROBING_SLOTS", "0")]);
        assert_eq!(
            TableSizing::from_lookup("KEYSET_", lookup).unwrap_err(),
            KeysetError::InvalidCapacity { capacity: 0 }
        );
    }
}
