//! Modulo-division hashing for integer keys

/// Home bucket of `key` in a table of `capacity` slots
///
/// The remainder is normalized into `[0, capacity)` so negative keys land in
/// valid buckets. `capacity` must be non-zero; both tables reject zero at
/// construction.
#[inline(always)]
pub fn home_slot(key: i32, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    (i64::from(key).rem_euclid(capacity as i64)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_keys() {
        assert_eq!(home_slot(0, 10), 0);
        assert_eq!(home_slot(5, 10), 5);
        assert_eq!(home_slot(25, 10), 5);
        assert_eq!(home_slot(21, 7), 0);
    }

    #[test]
    fn test_negative_keys() {
        assert_eq!(home_slot(-1, 10), 9);
        assert_eq!(home_slot(-10, 10), 0);
        assert_eq!(home_slot(-15, 10), 5);
        assert_eq!(home_slot(i32::MIN, 7), (i64::from(i32::MIN).rem_euclid(7)) as usize);
    }

    #[test]
    fn test_extremes_stay_in_range() {
        for capacity in [1usize, 2, 7, 928, 2003] {
            for key in [i32::MIN, -1, 0, 1, i32::MAX] {
                assert!(home_slot(key, capacity) < capacity);
            }
        }
    }
}
