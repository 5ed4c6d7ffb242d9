/// Rounds `value` to `precision` decimal places, halves away from zero.
///
/// Every comparison in the shape validation is precision sensitive, so all
/// computed values pass through here before they are compared or reported.
pub fn to_fixed(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Converts metres to kilometres at the given precision.
pub fn to_km(metres: f64, precision: u32) -> f64 {
    to_fixed(metres / 1000.0, precision)
}

/// Relative difference of `measured` against `reference` in percent.
///
/// Returns exactly `0.0` when the reference rounds to zero at `precision`,
/// instead of an amplified or infinite value.
pub fn percent_difference(measured: f64, reference: f64, precision: u32) -> f64 {
    if to_fixed(reference, precision) == 0.0 {
        return 0.0;
    }
    to_fixed((measured - reference) / reference * 100.0, precision)
}

pub fn in_range(min: f64, value: f64, max: f64) -> bool {
    min <= value && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(to_fixed(1.25, 1), 1.3);
        assert_eq!(to_fixed(-1.25, 1), -1.3);
        assert_eq!(to_fixed(2.5, 0), 3.0);
        assert_eq!(to_fixed(-2.5, 0), -3.0);
        assert_eq!(to_fixed(0.0004, 3), 0.0);
    }

    #[test]
    fn rounding_is_idempotent() {
        for value in [0.123456, -98.7654321, 1113.19492, 0.0005, 6371.0088] {
            for precision in 0..8 {
                let once = to_fixed(value, precision);
                assert_eq!(once, to_fixed(once, precision));
            }
        }
    }

    #[test]
    fn converts_metres_to_km() {
        assert_eq!(to_km(1111.11, 4), 1.1111);
        assert_eq!(to_km(0.04, 4), 0.0);
    }

    #[test]
    fn percent_difference_of_near_zero_reference_is_zero() {
        assert_eq!(percent_difference(1.0, 0.0, 3), 0.0);
        assert_eq!(percent_difference(1.0, 0.0004, 3), 0.0);
        assert_eq!(percent_difference(-5.0, -0.0001, 3), 0.0);
        assert!(percent_difference(1.0, 0.0004, 3).is_finite());
    }

    #[test]
    fn percent_difference_is_relative_to_reference() {
        assert_eq!(percent_difference(1.1, 1.0, 3), 10.0);
        assert_eq!(percent_difference(0.9, 1.0, 3), -10.0);
        assert_eq!(percent_difference(1.0, 1.1111, 3), -9.999);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(in_range(0.001, 0.001, 1.0));
        assert!(in_range(0.001, 1.0, 1.0));
        assert!(!in_range(0.001, 1.0001, 1.0));
        assert!(!in_range(-90.0, f64::NAN, 90.0));
    }
}
