//! Joint angle validation against the anatomical ROM table
//!
//! A measured angle falls into one of four nested bands, checked from the
//! outside in:
//!
//! | Band                         | valid | severity   | corrected angle |
//! |------------------------------|-------|------------|-----------------|
//! | `|angle| > hypermobility`    | no    | severe     | `max`           |
//! | `|angle| > max`              | no    | moderate   | `max`           |
//! | `|angle| > warning`          | yes   | mild       | -               |
//! | otherwise                    | yes   | -          | -               |
//!
//! Only the magnitude of the angle matters, so `-150` and `150` produce the
//! same verdict. Movements without a table entry are unconstrained.
//!
//! A NaN or infinite reading never reaches the bands: it is rejected as
//! severe and corrected to the neutral position, on the anatomical and the
//! postoperative path alike.

use tracing::{debug, warn};

use crate::models::{JointMovement, RomLimit, Severity, ValidationResult};
use crate::rom_limits::{rom_limit, AgeAdjustment};

/// Validates measured angles, optionally age-adjusting the limits first
#[derive(Debug, Clone, Copy, Default)]
pub struct JointAngleValidator {
    age_adjustment: AgeAdjustment,
}

impl JointAngleValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age_adjustment(age_adjustment: AgeAdjustment) -> Self {
        Self { age_adjustment }
    }

    pub fn age_adjustment(&self) -> &AgeAdjustment {
        &self.age_adjustment
    }

    /// Validate against the unadjusted anatomical limits
    pub fn validate(&self, movement: JointMovement, angle: f64) -> ValidationResult {
        match rom_limit(movement) {
            Some(limit) => validate_against_limit(movement, &limit, angle),
            None => {
                debug!(%movement, "no ROM limit defined, treating as unconstrained");
                ValidationResult::unconstrained()
            }
        }
    }

    /// Validate against limits scaled down for the patient's age
    pub fn validate_for_age(&self, movement: JointMovement, angle: f64, age: u32) -> ValidationResult {
        match rom_limit(movement) {
            Some(base) => {
                let limit = self.age_adjustment.apply(base, age);
                validate_against_limit(movement, &limit, angle)
            }
            None => {
                debug!(%movement, age, "no ROM limit defined, treating as unconstrained");
                ValidationResult::unconstrained()
            }
        }
    }
}

/// Verdict for a reading that is not a finite number, `None` for any other
/// angle. Every validator checks this before comparing against a limit.
pub fn reject_non_finite(movement: JointMovement, angle: f64) -> Option<ValidationResult> {
    if angle.is_finite() {
        return None;
    }

    warn!(%movement, angle, "non-finite angle rejected");
    Some(ValidationResult {
        valid: false,
        severity: Some(Severity::Severe),
        warning: Some(format!("{}: ogiltigt mätvärde ({})", movement.label(), angle)),
        corrected_angle: Some(0.0),
        recommendation: Some("Mätningen kunde inte tolkas. Mät om vinkeln.".to_string()),
    })
}

/// Classify an angle against one limit. This is the band logic shared by
/// the generic and age-adjusted paths.
pub fn validate_against_limit(movement: JointMovement, limit: &RomLimit, angle: f64) -> ValidationResult {
    if let Some(rejected) = reject_non_finite(movement, angle) {
        return rejected;
    }

    let abs_angle = angle.abs();

    let result = if abs_angle > limit.hypermobility {
        ValidationResult {
            valid: false,
            severity: Some(Severity::Severe),
            warning: Some(format!(
                "{}: {}° överstiger gränsen för hypermobilitet ({}°)",
                movement.label(),
                abs_angle,
                limit.hypermobility
            )),
            corrected_angle: Some(limit.max),
            recommendation: Some(
                "Mät om vinkeln. Om värdet bekräftas bör leden utredas för hypermobilitet."
                    .to_string(),
            ),
        }
    } else if abs_angle > limit.max {
        ValidationResult {
            valid: false,
            severity: Some(Severity::Moderate),
            warning: Some(format!(
                "{}: {}° överstiger normalt maximum ({}°)",
                movement.label(),
                abs_angle,
                limit.max
            )),
            corrected_angle: Some(limit.max),
            recommendation: Some(
                "Värdet kan bero på ett mätfel. Kontrollera mätningen.".to_string(),
            ),
        }
    } else if abs_angle > limit.warning {
        ValidationResult {
            valid: true,
            severity: Some(Severity::Mild),
            warning: Some(format!(
                "{} är nära ytterläget ({}° av max {}°)",
                movement.label(),
                abs_angle,
                limit.max
            )),
            corrected_angle: None,
            recommendation: Some(
                "Normalt rörelseomfång men nära maximalt. Forcera inte rörelsen.".to_string(),
            ),
        }
    } else {
        ValidationResult::unconstrained()
    };

    debug!(
        %movement,
        angle,
        max = limit.max,
        valid = result.valid,
        severity = ?result.severity,
        "joint angle validated"
    );

    result
}

/// Validate a measured angle against the anatomical ROM table
pub fn validate_joint_angle(movement: JointMovement, angle: f64) -> ValidationResult {
    JointAngleValidator::new().validate(movement, angle)
}

/// Validate a measured angle against the age-adjusted ROM table
pub fn validate_joint_angle_for_age(movement: JointMovement, angle: f64, age: u32) -> ValidationResult {
    JointAngleValidator::new().validate_for_age(movement, angle, age)
}

/// String-keyed entry point for the UI layer. An identifier that does not
/// name a known movement is unconstrained rather than an error.
pub fn validate_joint_angle_by_id(movement_id: &str, angle: f64) -> ValidationResult {
    match movement_id.parse::<JointMovement>() {
        Ok(movement) => validate_joint_angle(movement, angle),
        Err(e) => {
            warn!(error = %e, "unknown movement, skipping ROM validation");
            ValidationResult::unconstrained()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_knee_flexion_within_normal_range() {
        let result = validate_joint_angle(JointMovement::KneeFlexion, 100.0);
        assert_eq!(result, ValidationResult::unconstrained());
    }

    #[test]
    fn test_knee_flexion_near_end_range() {
        let result = validate_joint_angle(JointMovement::KneeFlexion, 138.0);
        assert!(result.valid);
        assert_eq!(result.severity, Some(Severity::Mild));
        assert!(result.warning.as_deref().unwrap().contains("nära ytterläget"));
        assert!(result.recommendation.is_some());
        assert_eq!(result.corrected_angle, None);
    }

    #[test]
    fn test_knee_flexion_above_normal_max() {
        let result = validate_joint_angle(JointMovement::KneeFlexion, 150.0);
        assert!(!result.valid);
        assert_eq!(result.severity, Some(Severity::Moderate));
        assert_eq!(result.corrected_angle, Some(140.0));
        let warning = result.warning.unwrap();
        assert!(warning.contains("Knäflexion"));
        assert!(warning.contains("150°"));
        assert!(warning.contains("140°"));
        assert!(result.recommendation.unwrap().contains("mätfel"));
    }

    #[test]
    fn test_knee_flexion_above_hypermobility() {
        let result = validate_joint_angle(JointMovement::KneeFlexion, 160.0);
        assert!(!result.valid);
        assert_eq!(result.severity, Some(Severity::Severe));
        assert_eq!(result.corrected_angle, Some(140.0));
        let warning = result.warning.unwrap();
        assert!(warning.contains("160°"));
        assert!(warning.contains("155°"));
        assert!(result.recommendation.unwrap().contains("hypermobilitet"));
    }

    #[test]
    fn test_band_boundaries_are_exclusive() {
        // Exactly on a threshold stays in the lower band
        assert_eq!(validate_joint_angle(JointMovement::KneeFlexion, 135.0).severity, None);
        assert_eq!(
            validate_joint_angle(JointMovement::KneeFlexion, 140.0).severity,
            Some(Severity::Mild)
        );
        assert_eq!(
            validate_joint_angle(JointMovement::KneeFlexion, 155.0).severity,
            Some(Severity::Moderate)
        );
    }

    #[test]
    fn test_negative_angles_use_magnitude() {
        let positive = validate_joint_angle(JointMovement::HipFlexion, 125.0);
        let negative = validate_joint_angle(JointMovement::HipFlexion, -125.0);
        assert_eq!(positive, negative);
        assert_eq!(negative.severity, Some(Severity::Moderate));
    }

    #[test]
    fn test_age_adjusted_validation_is_stricter() {
        // At 65 knee flexion max drops to 112, warning to 108
        let young = validate_joint_angle_for_age(JointMovement::KneeFlexion, 115.0, 25);
        assert_eq!(young, ValidationResult::unconstrained());

        let older = validate_joint_angle_for_age(JointMovement::KneeFlexion, 115.0, 65);
        assert!(!older.valid);
        assert_eq!(older.severity, Some(Severity::Moderate));
        assert_eq!(older.corrected_angle, Some(112.0));

        let near = validate_joint_angle_for_age(JointMovement::KneeFlexion, 110.0, 65);
        assert_eq!(near.severity, Some(Severity::Mild));
    }

    #[test]
    fn test_age_adjustment_keeps_hypermobility_threshold() {
        let result = validate_joint_angle_for_age(JointMovement::KneeFlexion, 150.0, 80);
        assert_eq!(result.severity, Some(Severity::Moderate));
        let result = validate_joint_angle_for_age(JointMovement::KneeFlexion, 156.0, 80);
        assert_eq!(result.severity, Some(Severity::Severe));
    }

    #[test]
    fn test_unknown_identifier_fails_open() {
        let result = validate_joint_angle_by_id("wristFlexion", 500.0);
        assert_eq!(result, ValidationResult::unconstrained());

        let result = validate_joint_angle_by_id("kneeFlexion", 150.0);
        assert_eq!(result.severity, Some(Severity::Moderate));
    }

    #[test]
    fn test_custom_validator_uses_its_adjustment() {
        let validator = JointAngleValidator::with_age_adjustment(AgeAdjustment {
            cutoff_age: 60,
            reduction_per_year: 0.005,
            floor: 0.7,
        });
        // 65 is only five years past this cutoff: max = 140 * 0.975 = 136.5 -> 137
        let result = validator.validate_for_age(JointMovement::KneeFlexion, 115.0, 65);
        assert_eq!(result, ValidationResult::unconstrained());
        let result = validator.validate_for_age(JointMovement::KneeFlexion, 138.0, 65);
        assert_eq!(result.corrected_angle, Some(137.0));
    }

    #[test]
    fn test_non_finite_angles_rejected() {
        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = validate_joint_angle(JointMovement::KneeFlexion, angle);
            assert!(!result.valid, "{}", angle);
            assert_eq!(result.severity, Some(Severity::Severe));
            assert_eq!(result.corrected_angle, Some(0.0));
            assert!(result.warning.unwrap().contains("ogiltigt mätvärde"));

            let aged = validate_joint_angle_for_age(JointMovement::KneeFlexion, angle, 70);
            assert!(!aged.valid);
        }
        assert_eq!(reject_non_finite(JointMovement::KneeFlexion, 1e300), None);
    }

    proptest! {
        #[test]
        fn test_sign_does_not_change_verdict(angle in 0.0f64..400.0) {
            for movement in JointMovement::ALL {
                prop_assert_eq!(
                    validate_joint_angle(movement, angle),
                    validate_joint_angle(movement, -angle)
                );
            }
        }

        #[test]
        fn test_repeated_calls_are_identical(angle in -400.0f64..400.0, age in 0u32..110) {
            let first = validate_joint_angle_for_age(JointMovement::ShoulderFlexion, angle, age);
            let second = validate_joint_angle_for_age(JointMovement::ShoulderFlexion, angle, age);
            prop_assert_eq!(first, second);
        }
    }
}
