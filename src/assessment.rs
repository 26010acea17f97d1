//! Session-level assessment of a batch of goniometer readings
//!
//! A session carries whatever patient context is known. Each reading is
//! routed to the most specific validator that context allows:
//!
//! 1. surgery and weeks known: postoperative phase ceilings
//! 2. age known: age-adjusted anatomical limits
//! 3. otherwise: plain anatomical limits

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::{JointMovement, Measurement, Severity, SurgeryType, ValidationResult};
use crate::postop::{get_postop_phase, validate_postop_rom};
use crate::validation::JointAngleValidator;

/// What is known about the patient at measurement time
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientContext {
    pub age: Option<u32>,
    pub surgery: Option<SurgeryType>,
    pub weeks_post_op: Option<i64>,
}

impl PatientContext {
    pub fn route(&self) -> ValidationRoute {
        match (self.surgery, self.weeks_post_op, self.age) {
            (Some(_), Some(_), _) => ValidationRoute::PostOp,
            (_, _, Some(_)) => ValidationRoute::AgeAdjusted,
            _ => ValidationRoute::Anatomical,
        }
    }
}

/// Which limit table a reading was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationRoute {
    PostOp,
    AgeAdjusted,
    Anatomical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementVerdict {
    pub movement: JointMovement,
    pub angle: f64,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub route: ValidationRoute,
    /// Active protocol phase when the postoperative route was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<u8>,
    pub verdicts: Vec<MeasurementVerdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_severity: Option<Severity>,
    pub invalid_count: usize,
    /// Readings replaced by their corrected angle, for playback
    pub corrected: Vec<Measurement>,
}

impl AssessmentReport {
    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }
}

/// Assess a session with the default age adjustment
pub fn assess_session(context: &PatientContext, measurements: &[Measurement]) -> AssessmentReport {
    assess_session_with(&JointAngleValidator::new(), context, measurements)
}

/// Assess a session using a configured validator for the age-adjusted route
pub fn assess_session_with(
    validator: &JointAngleValidator,
    context: &PatientContext,
    measurements: &[Measurement],
) -> AssessmentReport {
    let route = context.route();

    let phase = match (route, context.surgery, context.weeks_post_op) {
        (ValidationRoute::PostOp, Some(surgery), Some(weeks)) => {
            get_postop_phase(surgery, weeks).map(|p| p.phase)
        }
        _ => None,
    };

    let verdicts: Vec<MeasurementVerdict> = measurements
        .iter()
        .map(|m| {
            let result = match (route, context.surgery, context.weeks_post_op, context.age) {
                (ValidationRoute::PostOp, Some(surgery), Some(weeks), _) => {
                    validate_postop_rom(surgery, weeks, m.movement, m.angle)
                }
                (ValidationRoute::AgeAdjusted, _, _, Some(age)) => {
                    validator.validate_for_age(m.movement, m.angle, age)
                }
                _ => validator.validate(m.movement, m.angle),
            };
            MeasurementVerdict {
                movement: m.movement,
                angle: m.angle,
                result,
            }
        })
        .collect();

    let worst_severity = verdicts.iter().filter_map(|v| v.result.severity).max();
    let invalid_count = verdicts.iter().filter(|v| !v.result.valid).count();
    let corrected = verdicts
        .iter()
        .map(|v| Measurement {
            movement: v.movement,
            angle: v.result.effective_angle(v.angle),
        })
        .collect();

    if invalid_count > 0 {
        info!(
            ?route,
            readings = verdicts.len(),
            invalid = invalid_count,
            worst = ?worst_severity,
            "session has out-of-range readings"
        );
    } else {
        debug!(?route, readings = verdicts.len(), "session assessed");
    }

    AssessmentReport {
        route,
        phase,
        verdicts,
        worst_severity,
        invalid_count,
        corrected,
    }
}
