//! Raw counter unit conversion.
//!
//! Converters are total over the whole unsigned input domain; there is no
//! error case.

/// Maps a raw counter value to the unit the output metric reports.
pub type ValueConverter = fn(u64) -> f64;

/// Identity conversion for counters that are already in event-count units
/// (drops, errors).
pub fn no_convert(value: u64) -> f64 {
    value as f64
}

/// Converts throughput counters from bits to bytes (integer division).
pub fn bits_to_bytes(value: u64) -> f64 {
    (value / 8) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_convert_is_identity() {
        assert_eq!(no_convert(0), 0.0);
        assert_eq!(no_convert(1234), 1234.0);
    }

    #[test]
    fn test_bits_to_bytes_divides_by_eight() {
        assert_eq!(bits_to_bytes(0), 0.0);
        assert_eq!(bits_to_bytes(8), 1.0);
        assert_eq!(bits_to_bytes(8000), 1000.0);
        // Integer division: remainders are truncated.
        assert_eq!(bits_to_bytes(15), 1.0);
    }

    #[test]
    fn test_bits_to_bytes_covers_full_domain() {
        assert_eq!(bits_to_bytes(u64::MAX), (u64::MAX / 8) as f64);
    }
}
