//! DJB2 string hashing and bucket index reduction

/// Initial accumulator value of the DJB2 hash
const DJB2_SEED: u64 = 5381;

/// Hashes a key with the XOR variant of DJB2 (`hash * 33 ^ c`).
///
/// Each character contributes its Unicode scalar value. The accumulator is a `u64` and
/// overflow wraps, so the result is deterministic for a given key and never depends on the
/// size of the table it is used with.
#[must_use]
pub fn djb2(key: &str) -> u64 {
    key.chars().fold(DJB2_SEED, |hash, c| hash.wrapping_shl(5).wrapping_add(hash) ^ u64::from(c))
}

/// Maps a key onto a bucket index in `[0, capacity)`.
///
/// A zero `capacity` maps everything to bucket 0; tables never construct one.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    // the remainder is below `capacity`, so narrowing back to usize is lossless
    djb2(key).checked_rem(capacity as u64).unwrap_or(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_seed() {
        assert_eq!(djb2(""), 5381);
    }

    #[test]
    fn test_known_values() {
        // 5381 * 33 = 177573, 177573 ^ 'a' (97) = 177604
        assert_eq!(djb2("a"), 177_604);
        // 177604 * 33 = 5860932, 5860932 ^ 'b' (98) = 5860902
        assert_eq!(djb2("ab"), 5_860_902);
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(djb2("ab"), djb2("ba"));
    }

    #[test]
    fn test_long_keys_wrap_instead_of_overflowing() {
        let key = "x".repeat(10_000);
        assert_eq!(djb2(&key), djb2(&key));
    }

    #[test]
    fn test_non_ascii_keys_use_code_points() {
        // 'é' is U+00E9, so it must hash like a single character with value 0xE9
        let expected = DJB2_SEED.wrapping_mul(33) ^ 0xE9;
        assert_eq!(djb2("é"), expected);
    }

    #[test]
    fn test_bucket_index_in_range() {
        for capacity in 1..64 {
            for key in ["", "a", "line_1", "line_2", "line_3", "Linked list saves the day!"] {
                assert!(bucket_index(key, capacity) < capacity);
            }
        }
    }

    #[test]
    fn test_bucket_index_single_bucket() {
        assert_eq!(bucket_index("anything", 1), 0);
    }

    #[test]
    fn test_bucket_index_zero_capacity() {
        assert_eq!(bucket_index("anything", 0), 0);
    }
}
