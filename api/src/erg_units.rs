//! Conversions between ERG and its smallest unit, the nanoErg.

/// Number of nanoErgs in one ERG.
pub const NANO_ERGS_PER_ERG: u64 = 1_000_000_000;

/// Converts an ERG amount to nanoErgs, rounding to the nearest unit.
///
/// Negative and NaN inputs saturate to zero; amounts beyond `u64::MAX`
/// nanoErgs saturate to `u64::MAX`.
pub fn ergs_to_nano_ergs(ergs: f64) -> u64 {
    (ergs * NANO_ERGS_PER_ERG as f64).round() as u64
}

/// Converts nanoErgs to a floating point ERG amount.
pub fn nano_ergs_to_ergs(nano_ergs: u64) -> f64 {
    nano_ergs as f64 / NANO_ERGS_PER_ERG as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_fractional_ergs() {
        assert_eq!(ergs_to_nano_ergs(0.0), 0);
        assert_eq!(ergs_to_nano_ergs(1.0), NANO_ERGS_PER_ERG);
        assert_eq!(ergs_to_nano_ergs(2.0), 2_000_000_000);
        assert_eq!(ergs_to_nano_ergs(0.1), 100_000_000);
        assert_eq!(ergs_to_nano_ergs(1.000000001), 1_000_000_001);
    }

    #[test]
    fn out_of_range_inputs_saturate() {
        assert_eq!(ergs_to_nano_ergs(-5.0), 0);
        assert_eq!(ergs_to_nano_ergs(f64::NAN), 0);
        assert_eq!(ergs_to_nano_ergs(f64::INFINITY), u64::MAX);
    }

    #[test]
    fn back_to_ergs() {
        assert_eq!(nano_ergs_to_ergs(1_500_000_000), 1.5);
        assert_eq!(nano_ergs_to_ergs(ergs_to_nano_ergs(42.25)), 42.25);
    }
}
