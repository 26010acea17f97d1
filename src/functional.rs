//! Functional ROM requirements for everyday activities
//!
//! Minimum angles are taken from gait and ADL motion-analysis studies
//! (Rowe et al. 2000 for the knee, Hemmerich et al. 2006 for the hip,
//! Namdari et al. 2012 for the shoulder). Each record lists only the
//! movements that actually limit the activity, in the order they are
//! reported back to the patient.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::{FunctionalActivity, JointMovement, Measurement};

type Requirement = &'static [(JointMovement, f64)];

static FUNCTIONAL_REQUIREMENTS: &[(FunctionalActivity, Requirement)] = &[
    (
        FunctionalActivity::Walking,
        &[
            (JointMovement::KneeFlexion, 65.0),
            (JointMovement::HipFlexion, 30.0),
            (JointMovement::HipExtension, 10.0),
            (JointMovement::AnkleDorsiflexion, 10.0),
            (JointMovement::AnklePlantarflexion, 20.0),
        ],
    ),
    (
        FunctionalActivity::StairAscent,
        &[
            (JointMovement::KneeFlexion, 85.0),
            (JointMovement::HipFlexion, 65.0),
            (JointMovement::AnkleDorsiflexion, 15.0),
        ],
    ),
    (
        FunctionalActivity::StairDescent,
        &[
            (JointMovement::KneeFlexion, 90.0),
            (JointMovement::HipFlexion, 35.0),
            (JointMovement::AnkleDorsiflexion, 20.0),
        ],
    ),
    (
        FunctionalActivity::SitToStand,
        &[
            (JointMovement::KneeFlexion, 95.0),
            (JointMovement::HipFlexion, 95.0),
            (JointMovement::AnkleDorsiflexion, 10.0),
        ],
    ),
    (
        FunctionalActivity::TieShoes,
        &[
            (JointMovement::HipFlexion, 110.0),
            (JointMovement::KneeFlexion, 105.0),
        ],
    ),
    (
        FunctionalActivity::Bathing,
        &[
            (JointMovement::KneeFlexion, 135.0),
            (JointMovement::HipFlexion, 100.0),
        ],
    ),
    (
        FunctionalActivity::Squatting,
        &[
            (JointMovement::KneeFlexion, 130.0),
            (JointMovement::HipFlexion, 115.0),
            (JointMovement::AnkleDorsiflexion, 20.0),
        ],
    ),
    (
        FunctionalActivity::Cycling,
        &[
            (JointMovement::KneeFlexion, 110.0),
            (JointMovement::HipFlexion, 100.0),
        ],
    ),
    (
        FunctionalActivity::Running,
        &[
            (JointMovement::KneeFlexion, 90.0),
            (JointMovement::HipFlexion, 65.0),
            (JointMovement::HipExtension, 20.0),
            (JointMovement::AnkleDorsiflexion, 15.0),
        ],
    ),
    (
        FunctionalActivity::CombHair,
        &[
            (JointMovement::ShoulderFlexion, 120.0),
            (JointMovement::ShoulderAbduction, 110.0),
            (JointMovement::ShoulderExternalRotation, 60.0),
            (JointMovement::ElbowFlexion, 120.0),
        ],
    ),
    (
        FunctionalActivity::ReachOverhead,
        &[
            (JointMovement::ShoulderFlexion, 150.0),
            (JointMovement::ShoulderAbduction, 140.0),
        ],
    ),
    (
        FunctionalActivity::Eating,
        &[
            (JointMovement::ElbowFlexion, 130.0),
            (JointMovement::ShoulderFlexion, 45.0),
        ],
    ),
    (
        FunctionalActivity::ReachBehindBack,
        &[
            (JointMovement::ShoulderInternalRotation, 60.0),
            (JointMovement::ShoulderExtension, 45.0),
        ],
    ),
    (
        FunctionalActivity::Driving,
        &[
            (JointMovement::CervicalRotation, 60.0),
            (JointMovement::ThoracicRotation, 20.0),
        ],
    ),
];

/// Required angles for an activity, in reporting order.
///
/// `None` means no requirement record exists.
pub fn requirements(activity: FunctionalActivity) -> Option<Requirement> {
    FUNCTIONAL_REQUIREMENTS
        .iter()
        .find(|(a, _)| *a == activity)
        .map(|(_, req)| *req)
}

/// Outcome of comparing a patient's ROM with one activity's requirements
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionalCheck {
    pub activity: FunctionalActivity,
    pub sufficient: bool,
    /// One line per movement short of the requirement, e.g.
    /// `kneeFlexion: 60° (behöver 65°)`
    pub deficits: Vec<String>,
}

/// Compare current ROM with the activity's requirements.
///
/// Movements missing from `current_rom` count as 0°.
pub fn check_functional_rom(
    activity: FunctionalActivity,
    current_rom: &HashMap<JointMovement, f64>,
) -> FunctionalCheck {
    let deficits: Vec<String> = requirements(activity)
        .unwrap_or_default()
        .iter()
        .filter_map(|&(movement, required)| {
            let current = current_rom.get(&movement).copied().unwrap_or(0.0);
            (current < required).then(|| format!("{}: {}° (behöver {}°)", movement, current, required))
        })
        .collect();

    debug!(%activity, deficits = deficits.len(), "functional ROM checked");

    FunctionalCheck {
        activity,
        sufficient: deficits.is_empty(),
        deficits,
    }
}

/// String-keyed variant. An unknown activity has no known requirements and
/// yields `None`, never an error.
pub fn check_functional_rom_by_id(
    activity_id: &str,
    current_rom: &HashMap<JointMovement, f64>,
) -> Option<FunctionalCheck> {
    match activity_id.parse::<FunctionalActivity>() {
        Ok(activity) => Some(check_functional_rom(activity, current_rom)),
        Err(e) => {
            warn!(error = %e, "unknown activity, skipping functional check");
            None
        }
    }
}

/// Check every known activity, in table order
pub fn functional_profile(current_rom: &HashMap<JointMovement, f64>) -> Vec<FunctionalCheck> {
    FunctionalActivity::ALL
        .iter()
        .map(|&activity| check_functional_rom(activity, current_rom))
        .collect()
}

/// Collapse measurements into a current-ROM map, keeping the largest
/// magnitude seen for each movement
pub fn current_rom_from_measurements(measurements: &[Measurement]) -> HashMap<JointMovement, f64> {
    let mut rom: HashMap<JointMovement, f64> = HashMap::new();
    for m in measurements {
        let entry = rom.entry(m.movement).or_insert(0.0);
        *entry = entry.max(m.angle.abs());
    }
    rom
}
