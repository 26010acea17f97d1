//! Limb Symmetry Index for return-to-sport decisions

/// Conventional return-to-sport threshold, in percent
pub const RETURN_TO_SPORT_LSI: f64 = 90.0;

/// Affected limb as a percentage of the unaffected limb.
///
/// `None` when the unaffected value is zero, negative or not finite, since
/// there is nothing to compare against.
pub fn limb_symmetry_index(affected: f64, unaffected: f64) -> Option<f64> {
    if !unaffected.is_finite() || !affected.is_finite() || unaffected <= 0.0 {
        return None;
    }
    Some(affected / unaffected * 100.0)
}

pub fn meets_return_to_sport(lsi: f64) -> bool {
    lsi >= RETURN_TO_SPORT_LSI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsi() {
        assert_eq!(limb_symmetry_index(90.0, 100.0), Some(90.0));
        assert_eq!(limb_symmetry_index(120.0, 120.0), Some(100.0));
        assert_eq!(limb_symmetry_index(50.0, 0.0), None);
        assert_eq!(limb_symmetry_index(50.0, -10.0), None);
        assert_eq!(limb_symmetry_index(f64::NAN, 100.0), None);
    }

    #[test]
    fn test_return_to_sport_threshold() {
        assert!(meets_return_to_sport(90.0));
        assert!(meets_return_to_sport(104.2));
        assert!(!meets_return_to_sport(89.9));
    }
}
