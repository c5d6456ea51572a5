//! Logarithmic magnitude conversion.
//!
//! `log10(0)` is undefined, so zero (and any non-positive or NaN) magnitude is
//! mapped to a caller-supplied floor instead of `-inf`. Positive magnitudes are
//! converted exactly, even when they fall below the floor; clipping those is
//! left to the axis range of whatever draws them.

/// Convert a linear magnitude to dB, substituting `floor_db` for magnitudes
/// that have no logarithm.
#[inline]
pub fn magnitude_to_db(magnitude: f64, floor_db: f64) -> f64 {
    if magnitude > 0.0 {
        20.0 * magnitude.log10()
    } else {
        floor_db
    }
}

/// Convert a whole magnitude sequence, see [`magnitude_to_db`].
pub fn magnitudes_to_db(magnitudes: &[f64], floor_db: f64) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&m| magnitude_to_db(m, floor_db))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_magnitude_is_zero_db() {
        assert_eq!(magnitude_to_db(1.0, -120.0), 0.0);
    }

    #[test]
    fn test_positive_magnitudes_follow_20_log10() {
        for &m in &[0.5, 0.1, 1e-3, 1e-9] {
            let expected = 20.0 * f64::log10(m);
            assert!((magnitude_to_db(m, -120.0) - expected).abs() < 1e-12);
        }
        // Below the floor is still reported exactly
        assert!((magnitude_to_db(1e-9, -120.0) - (-180.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_maps_to_floor() {
        assert_eq!(magnitude_to_db(0.0, -120.0), -120.0);
        assert_eq!(magnitude_to_db(-0.0, -80.0), -80.0);
    }

    #[test]
    fn test_nan_and_negative_map_to_floor() {
        assert_eq!(magnitude_to_db(f64::NAN, -120.0), -120.0);
        assert_eq!(magnitude_to_db(-1.0, -120.0), -120.0);
    }

    #[test]
    fn test_sequence_never_contains_non_finite() {
        let db = magnitudes_to_db(&[1.0, 0.0, 0.25, 0.0], -120.0);
        assert_eq!(db.len(), 4);
        assert!(db.iter().all(|v| v.is_finite()));
        assert_eq!(db[1], -120.0);
    }
}
