//! Anatomical range-of-motion reference table and age adjustment
//!
//! Normal ranges follow the AAOS / Norkin & White goniometry references. The
//! `warning` band marks the last few degrees before the normal maximum, and
//! `hypermobility` is the point above which a reading is more likely a
//! hypermobile joint (Beighton-style) than a measurement artefact.
//!
//! Ranges degrade gradually with age, so for patients older than the cutoff
//! the normal maximum and the warning threshold are scaled down:
//!
//! ```text
//! factor = max(1 - (age - 25) * 0.005, 0.7)
//! ```
//!
//! The hypermobility threshold is never adjusted.

use serde::{Deserialize, Serialize};

use crate::models::{JointMovement, RomLimit};

const fn limit(max: f64, warning: f64, hypermobility: f64, description: &'static str) -> RomLimit {
    RomLimit {
        min: 0.0,
        max,
        warning,
        hypermobility,
        description,
    }
}

static ROM_LIMITS: &[(JointMovement, RomLimit)] = &[
    // Elbow
    (JointMovement::ElbowFlexion, limit(150.0, 145.0, 160.0, "Böjning i armbågen, normalt 0–150°")),
    (JointMovement::ElbowExtension, limit(10.0, 5.0, 15.0, "Översträckning i armbågen, normalt upp till 10°")),
    // Shoulder
    (JointMovement::ShoulderFlexion, limit(180.0, 170.0, 190.0, "Lyfta armen framåt, normalt 0–180°")),
    (JointMovement::ShoulderExtension, limit(60.0, 50.0, 75.0, "Föra armen bakåt, normalt 0–60°")),
    (JointMovement::ShoulderAbduction, limit(180.0, 170.0, 190.0, "Lyfta armen ut åt sidan, normalt 0–180°")),
    (JointMovement::ShoulderInternalRotation, limit(70.0, 60.0, 90.0, "Inåtrotation i axeln, normalt 0–70°")),
    (JointMovement::ShoulderExternalRotation, limit(90.0, 80.0, 105.0, "Utåtrotation i axeln, normalt 0–90°")),
    // Hip
    (JointMovement::HipFlexion, limit(120.0, 110.0, 135.0, "Böjning i höften, normalt 0–120°")),
    (JointMovement::HipExtension, limit(30.0, 20.0, 40.0, "Sträckning bakåt i höften, normalt 0–30°")),
    (JointMovement::HipAbduction, limit(45.0, 40.0, 55.0, "Föra benet ut åt sidan, normalt 0–45°")),
    (JointMovement::HipAdduction, limit(30.0, 25.0, 40.0, "Föra benet inåt, normalt 0–30°")),
    (JointMovement::HipInternalRotation, limit(45.0, 35.0, 55.0, "Inåtrotation i höften, normalt 0–45°")),
    (JointMovement::HipExternalRotation, limit(45.0, 40.0, 60.0, "Utåtrotation i höften, normalt 0–45°")),
    // Knee
    (JointMovement::KneeFlexion, limit(140.0, 135.0, 155.0, "Böjning i knät, normalt 0–140°")),
    (JointMovement::KneeExtension, limit(10.0, 5.0, 15.0, "Översträckning i knät, normalt upp till 10°")),
    // Ankle
    (JointMovement::AnkleDorsiflexion, limit(20.0, 15.0, 30.0, "Dra upp foten, normalt 0–20°")),
    (JointMovement::AnklePlantarflexion, limit(50.0, 45.0, 60.0, "Sträcka ned foten, normalt 0–50°")),
    (JointMovement::AnkleInversion, limit(35.0, 30.0, 45.0, "Vinkla foten inåt, normalt 0–35°")),
    (JointMovement::AnkleEversion, limit(15.0, 10.0, 25.0, "Vinkla foten utåt, normalt 0–15°")),
    // Lumbar spine
    (JointMovement::LumbarFlexion, limit(60.0, 50.0, 75.0, "Framåtböjning i ländryggen, normalt 0–60°")),
    (JointMovement::LumbarExtension, limit(25.0, 20.0, 35.0, "Bakåtböjning i ländryggen, normalt 0–25°")),
    (JointMovement::LumbarLateralFlexion, limit(25.0, 20.0, 35.0, "Sidoböjning i ländryggen, normalt 0–25°")),
    // Thoracic spine
    (JointMovement::ThoracicFlexion, limit(40.0, 35.0, 50.0, "Framåtböjning i bröstryggen, normalt 0–40°")),
    (JointMovement::ThoracicExtension, limit(25.0, 20.0, 35.0, "Bakåtböjning i bröstryggen, normalt 0–25°")),
    (JointMovement::ThoracicRotation, limit(35.0, 30.0, 45.0, "Rotation i bröstryggen, normalt 0–35°")),
    // Cervical spine
    (JointMovement::CervicalFlexion, limit(50.0, 45.0, 60.0, "Böja huvudet framåt, normalt 0–50°")),
    (JointMovement::CervicalExtension, limit(60.0, 55.0, 75.0, "Böja huvudet bakåt, normalt 0–60°")),
    (JointMovement::CervicalLateralFlexion, limit(45.0, 40.0, 55.0, "Böja huvudet åt sidan, normalt 0–45°")),
    (JointMovement::CervicalRotation, limit(80.0, 70.0, 90.0, "Vrida huvudet, normalt 0–80°")),
];

/// Look up the anatomical limit for a movement.
///
/// `None` means no constraint is known; callers must not treat it as an error.
pub fn rom_limit(movement: JointMovement) -> Option<RomLimit> {
    ROM_LIMITS
        .iter()
        .find(|(m, _)| *m == movement)
        .map(|(_, limit)| *limit)
}

/// Every defined limit, in table order
pub fn all_limits() -> impl Iterator<Item = (JointMovement, RomLimit)> {
    ROM_LIMITS.iter().copied()
}

/// Parameters for scaling ROM limits down with age
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeAdjustment {
    /// Ages at or below this are not adjusted
    pub cutoff_age: u32,
    /// Fractional reduction per year above the cutoff
    pub reduction_per_year: f64,
    /// Lowest factor ever applied
    pub floor: f64,
}

impl Default for AgeAdjustment {
    fn default() -> Self {
        Self {
            cutoff_age: 25,
            reduction_per_year: 0.005,
            floor: 0.7,
        }
    }
}

impl AgeAdjustment {
    /// Multiplier applied to `max` and `warning` for the given age.
    ///
    /// Always within `[floor, 1.0]`.
    pub fn factor(&self, age: u32) -> f64 {
        if age <= self.cutoff_age {
            return 1.0;
        }
        let years_over = (age - self.cutoff_age) as f64;
        (1.0 - years_over * self.reduction_per_year)
            .max(self.floor)
            .min(1.0)
    }

    /// Scale `max` and `warning`, rounding to whole degrees. `min` and
    /// `hypermobility` pass through untouched.
    pub fn apply(&self, base: RomLimit, age: u32) -> RomLimit {
        if age <= self.cutoff_age {
            return base;
        }
        let factor = self.factor(age);
        RomLimit {
            max: (base.max * factor).round(),
            warning: (base.warning * factor).round(),
            ..base
        }
    }
}

/// Age-adjusted limit using the default adjustment parameters.
///
/// Returns `None` when the movement has no base limit.
pub fn get_age_adjusted_rom(movement: JointMovement, age: u32) -> Option<RomLimit> {
    rom_limit(movement).map(|base| AgeAdjustment::default().apply(base, age))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_movement_has_a_limit() {
        for movement in JointMovement::ALL {
            assert!(rom_limit(movement).is_some(), "missing limit for {}", movement);
        }
        assert_eq!(all_limits().count(), JointMovement::ALL.len());
    }

    #[test]
    fn test_knee_flexion_reference_values() {
        let knee = rom_limit(JointMovement::KneeFlexion).unwrap();
        assert_eq!(knee.min, 0.0);
        assert_eq!(knee.max, 140.0);
        assert_eq!(knee.warning, 135.0);
        assert_eq!(knee.hypermobility, 155.0);
    }

    #[test]
    fn test_no_adjustment_at_or_below_cutoff() {
        let base = rom_limit(JointMovement::KneeFlexion).unwrap();
        assert_eq!(get_age_adjusted_rom(JointMovement::KneeFlexion, 20).unwrap(), base);
        assert_eq!(get_age_adjusted_rom(JointMovement::KneeFlexion, 25).unwrap(), base);
    }

    #[test]
    fn test_age_adjustment_values() {
        // 65 years: factor = 1 - 40 * 0.005 = 0.8
        let adjusted = get_age_adjusted_rom(JointMovement::KneeFlexion, 65).unwrap();
        assert_eq!(adjusted.max, 112.0); // 140 * 0.8
        assert_eq!(adjusted.warning, 108.0); // 135 * 0.8
        assert_eq!(adjusted.hypermobility, 155.0);
        assert_eq!(adjusted.min, 0.0);

        // 35 years: factor = 0.95, 135 * 0.95 = 128.25 -> 128
        let adjusted = get_age_adjusted_rom(JointMovement::KneeFlexion, 35).unwrap();
        assert_eq!(adjusted.max, 133.0);
        assert_eq!(adjusted.warning, 128.0);
    }

    #[test]
    fn test_age_adjustment_floor() {
        let adjustment = AgeAdjustment::default();
        assert_eq!(adjustment.factor(85), 0.7);
        assert_eq!(adjustment.factor(110), 0.7);

        let adjusted = get_age_adjusted_rom(JointMovement::KneeFlexion, 100).unwrap();
        assert_eq!(adjusted.max, 98.0); // 140 * 0.7
        assert_eq!(adjusted.warning, 95.0); // 135 * 0.7 = 94.5 -> 95
    }

    #[test]
    fn test_custom_adjustment_parameters() {
        let adjustment = AgeAdjustment {
            cutoff_age: 40,
            reduction_per_year: 0.01,
            floor: 0.8,
        };
        assert_eq!(adjustment.factor(40), 1.0);
        assert!((adjustment.factor(50) - 0.9).abs() < 1e-12);
        assert_eq!(adjustment.factor(90), 0.8);
    }

    #[test]
    fn test_adjusted_bands_keep_their_ordering() {
        for age in [30, 50, 70, 90] {
            for (movement, _) in all_limits() {
                let adjusted = get_age_adjusted_rom(movement, age).unwrap();
                assert!(
                    adjusted.warning < adjusted.max && adjusted.max < adjusted.hypermobility,
                    "{} at age {}: {:?}",
                    movement,
                    age,
                    adjusted
                );
            }
        }
    }
}
