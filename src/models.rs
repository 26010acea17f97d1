use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Lowercase and drop `_`, `-` and spaces so `kneeFlexion`, `knee_flexion`
/// and `Knee Flexion` all compare equal.
fn normalize_id(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Anatomical joint movement, one per direction where the directions are
/// clinically distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointMovement {
    ElbowFlexion,
    ElbowExtension,
    ShoulderFlexion,
    ShoulderExtension,
    ShoulderAbduction,
    ShoulderInternalRotation,
    ShoulderExternalRotation,
    HipFlexion,
    HipExtension,
    HipAbduction,
    HipAdduction,
    HipInternalRotation,
    HipExternalRotation,
    KneeFlexion,
    KneeExtension,
    AnkleDorsiflexion,
    AnklePlantarflexion,
    AnkleInversion,
    AnkleEversion,
    LumbarFlexion,
    LumbarExtension,
    LumbarLateralFlexion,
    ThoracicFlexion,
    ThoracicExtension,
    ThoracicRotation,
    CervicalFlexion,
    CervicalExtension,
    CervicalLateralFlexion,
    CervicalRotation,
}

impl JointMovement {
    pub const ALL: [JointMovement; 29] = [
        JointMovement::ElbowFlexion,
        JointMovement::ElbowExtension,
        JointMovement::ShoulderFlexion,
        JointMovement::ShoulderExtension,
        JointMovement::ShoulderAbduction,
        JointMovement::ShoulderInternalRotation,
        JointMovement::ShoulderExternalRotation,
        JointMovement::HipFlexion,
        JointMovement::HipExtension,
        JointMovement::HipAbduction,
        JointMovement::HipAdduction,
        JointMovement::HipInternalRotation,
        JointMovement::HipExternalRotation,
        JointMovement::KneeFlexion,
        JointMovement::KneeExtension,
        JointMovement::AnkleDorsiflexion,
        JointMovement::AnklePlantarflexion,
        JointMovement::AnkleInversion,
        JointMovement::AnkleEversion,
        JointMovement::LumbarFlexion,
        JointMovement::LumbarExtension,
        JointMovement::LumbarLateralFlexion,
        JointMovement::ThoracicFlexion,
        JointMovement::ThoracicExtension,
        JointMovement::ThoracicRotation,
        JointMovement::CervicalFlexion,
        JointMovement::CervicalExtension,
        JointMovement::CervicalLateralFlexion,
        JointMovement::CervicalRotation,
    ];

    /// Stable identifier used by the UI and pose-estimation layers
    pub fn id(&self) -> &'static str {
        match self {
            JointMovement::ElbowFlexion => "elbowFlexion",
            JointMovement::ElbowExtension => "elbowExtension",
            JointMovement::ShoulderFlexion => "shoulderFlexion",
            JointMovement::ShoulderExtension => "shoulderExtension",
            JointMovement::ShoulderAbduction => "shoulderAbduction",
            JointMovement::ShoulderInternalRotation => "shoulderInternalRotation",
            JointMovement::ShoulderExternalRotation => "shoulderExternalRotation",
            JointMovement::HipFlexion => "hipFlexion",
            JointMovement::HipExtension => "hipExtension",
            JointMovement::HipAbduction => "hipAbduction",
            JointMovement::HipAdduction => "hipAdduction",
            JointMovement::HipInternalRotation => "hipInternalRotation",
            JointMovement::HipExternalRotation => "hipExternalRotation",
            JointMovement::KneeFlexion => "kneeFlexion",
            JointMovement::KneeExtension => "kneeExtension",
            JointMovement::AnkleDorsiflexion => "ankleDorsiflexion",
            JointMovement::AnklePlantarflexion => "anklePlantarflexion",
            JointMovement::AnkleInversion => "ankleInversion",
            JointMovement::AnkleEversion => "ankleEversion",
            JointMovement::LumbarFlexion => "lumbarFlexion",
            JointMovement::LumbarExtension => "lumbarExtension",
            JointMovement::LumbarLateralFlexion => "lumbarLateralFlexion",
            JointMovement::ThoracicFlexion => "thoracicFlexion",
            JointMovement::ThoracicExtension => "thoracicExtension",
            JointMovement::ThoracicRotation => "thoracicRotation",
            JointMovement::CervicalFlexion => "cervicalFlexion",
            JointMovement::CervicalExtension => "cervicalExtension",
            JointMovement::CervicalLateralFlexion => "cervicalLateralFlexion",
            JointMovement::CervicalRotation => "cervicalRotation",
        }
    }

    /// Patient-facing (Swedish) name
    pub fn label(&self) -> &'static str {
        match self {
            JointMovement::ElbowFlexion => "Armbågsflexion",
            JointMovement::ElbowExtension => "Armbågsextension",
            JointMovement::ShoulderFlexion => "Axelflexion",
            JointMovement::ShoulderExtension => "Axelextension",
            JointMovement::ShoulderAbduction => "Axelabduktion",
            JointMovement::ShoulderInternalRotation => "Axel inåtrotation",
            JointMovement::ShoulderExternalRotation => "Axel utåtrotation",
            JointMovement::HipFlexion => "Höftflexion",
            JointMovement::HipExtension => "Höftextension",
            JointMovement::HipAbduction => "Höftabduktion",
            JointMovement::HipAdduction => "Höftadduktion",
            JointMovement::HipInternalRotation => "Höft inåtrotation",
            JointMovement::HipExternalRotation => "Höft utåtrotation",
            JointMovement::KneeFlexion => "Knäflexion",
            JointMovement::KneeExtension => "Knäextension",
            JointMovement::AnkleDorsiflexion => "Dorsalflexion fotled",
            JointMovement::AnklePlantarflexion => "Plantarflexion fotled",
            JointMovement::AnkleInversion => "Inversion fotled",
            JointMovement::AnkleEversion => "Eversion fotled",
            JointMovement::LumbarFlexion => "Ländrygg flexion",
            JointMovement::LumbarExtension => "Ländrygg extension",
            JointMovement::LumbarLateralFlexion => "Ländrygg lateralflexion",
            JointMovement::ThoracicFlexion => "Bröstrygg flexion",
            JointMovement::ThoracicExtension => "Bröstrygg extension",
            JointMovement::ThoracicRotation => "Bröstrygg rotation",
            JointMovement::CervicalFlexion => "Halsrygg flexion",
            JointMovement::CervicalExtension => "Halsrygg extension",
            JointMovement::CervicalLateralFlexion => "Halsrygg lateralflexion",
            JointMovement::CervicalRotation => "Halsrygg rotation",
        }
    }
}

impl fmt::Display for JointMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for JointMovement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_id(s);
        JointMovement::ALL
            .iter()
            .copied()
            .find(|m| normalize_id(m.id()) == wanted)
            .ok_or_else(|| ParseError::UnknownMovement(s.to_string()))
    }
}

/// Anatomical range-of-motion thresholds for one movement, in degrees
///
/// Invariant: `0 <= warning < max < hypermobility`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RomLimit {
    pub min: f64,
    /// Upper bound of the normal range
    pub max: f64,
    /// Near end-range advisory threshold
    pub warning: f64,
    /// Above this the reading is treated as possible hypermobility
    pub hypermobility: f64,
    pub description: &'static str,
}

/// Escalation level of a validation verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// Verdict for a single angle measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Clamped value a caller may substitute for the measurement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl ValidationResult {
    /// A passing verdict with nothing to report. Also used when no
    /// constraint is known for the input.
    pub fn unconstrained() -> Self {
        Self {
            valid: true,
            severity: None,
            warning: None,
            corrected_angle: None,
            recommendation: None,
        }
    }

    /// Angle a downstream consumer should use: the corrected value when one
    /// was produced, otherwise the measurement itself. Limits are magnitudes,
    /// so the correction takes the sign of the measurement.
    pub fn effective_angle(&self, measured: f64) -> f64 {
        match self.corrected_angle {
            Some(corrected) => corrected.copysign(measured),
            None => measured,
        }
    }
}

/// Surgeries with a postoperative rehabilitation protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurgeryType {
    AclReconstruction,
    TotalKneeReplacement,
    TotalHipReplacement,
    AchillesRepair,
    RotatorCuffRepair,
    BankartRepair,
    MpflReconstruction,
    MeniscusRepair,
    HipArthroscopy,
    AnkleOrif,
    LumbarFusion,
    CervicalFusion,
}

impl SurgeryType {
    pub const ALL: [SurgeryType; 12] = [
        SurgeryType::AclReconstruction,
        SurgeryType::TotalKneeReplacement,
        SurgeryType::TotalHipReplacement,
        SurgeryType::AchillesRepair,
        SurgeryType::RotatorCuffRepair,
        SurgeryType::BankartRepair,
        SurgeryType::MpflReconstruction,
        SurgeryType::MeniscusRepair,
        SurgeryType::HipArthroscopy,
        SurgeryType::AnkleOrif,
        SurgeryType::LumbarFusion,
        SurgeryType::CervicalFusion,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SurgeryType::AclReconstruction => "acl_reconstruction",
            SurgeryType::TotalKneeReplacement => "total_knee_replacement",
            SurgeryType::TotalHipReplacement => "total_hip_replacement",
            SurgeryType::AchillesRepair => "achilles_repair",
            SurgeryType::RotatorCuffRepair => "rotator_cuff_repair",
            SurgeryType::BankartRepair => "bankart_repair",
            SurgeryType::MpflReconstruction => "mpfl_reconstruction",
            SurgeryType::MeniscusRepair => "meniscus_repair",
            SurgeryType::HipArthroscopy => "hip_arthroscopy",
            SurgeryType::AnkleOrif => "ankle_orif",
            SurgeryType::LumbarFusion => "lumbar_fusion",
            SurgeryType::CervicalFusion => "cervical_fusion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SurgeryType::AclReconstruction => "Främre korsbandsrekonstruktion (ACL)",
            SurgeryType::TotalKneeReplacement => "Knäprotes",
            SurgeryType::TotalHipReplacement => "Höftprotes",
            SurgeryType::AchillesRepair => "Sutur av hälsena",
            SurgeryType::RotatorCuffRepair => "Rotatorcuffsutur",
            SurgeryType::BankartRepair => "Bankartoperation",
            SurgeryType::MpflReconstruction => "MPFL-rekonstruktion",
            SurgeryType::MeniscusRepair => "Menisksutur",
            SurgeryType::HipArthroscopy => "Höftartroskopi",
            SurgeryType::AnkleOrif => "Fotledsfraktur, ORIF",
            SurgeryType::LumbarFusion => "Steloperation ländrygg",
            SurgeryType::CervicalFusion => "Steloperation halsrygg",
        }
    }
}

impl fmt::Display for SurgeryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SurgeryType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_id(s);
        SurgeryType::ALL
            .iter()
            .copied()
            .find(|t| normalize_id(t.id()) == wanted)
            .ok_or_else(|| ParseError::UnknownSurgery(s.to_string()))
    }
}

/// Inclusive range of weeks after surgery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRange {
    pub min: i64,
    pub max: i64,
}

impl WeekRange {
    pub fn contains(&self, weeks: i64) -> bool {
        weeks >= self.min && weeks <= self.max
    }
}

/// Phase-specific ceiling for one movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRomLimit {
    pub movement: JointMovement,
    pub max: f64,
    pub weight_bearing: bool,
    pub resistance_allowed: bool,
}

/// One time-bounded stage of a postoperative protocol
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostOpPhase {
    pub phase: u8,
    pub name: &'static str,
    pub week_range: WeekRange,
    /// Only the movements this phase restricts
    pub rom_limits: &'static [PhaseRomLimit],
    pub restrictions: &'static [&'static str],
    pub goals: &'static [&'static str],
}

impl PostOpPhase {
    pub fn limit_for(&self, movement: JointMovement) -> Option<&PhaseRomLimit> {
        self.rom_limits.iter().find(|l| l.movement == movement)
    }
}

/// Everyday activities with literature-derived ROM requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalActivity {
    Walking,
    StairAscent,
    StairDescent,
    SitToStand,
    TieShoes,
    Bathing,
    Squatting,
    Cycling,
    Running,
    CombHair,
    ReachOverhead,
    Eating,
    ReachBehindBack,
    Driving,
}

impl FunctionalActivity {
    pub const ALL: [FunctionalActivity; 14] = [
        FunctionalActivity::Walking,
        FunctionalActivity::StairAscent,
        FunctionalActivity::StairDescent,
        FunctionalActivity::SitToStand,
        FunctionalActivity::TieShoes,
        FunctionalActivity::Bathing,
        FunctionalActivity::Squatting,
        FunctionalActivity::Cycling,
        FunctionalActivity::Running,
        FunctionalActivity::CombHair,
        FunctionalActivity::ReachOverhead,
        FunctionalActivity::Eating,
        FunctionalActivity::ReachBehindBack,
        FunctionalActivity::Driving,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FunctionalActivity::Walking => "walking",
            FunctionalActivity::StairAscent => "stair_ascent",
            FunctionalActivity::StairDescent => "stair_descent",
            FunctionalActivity::SitToStand => "sit_to_stand",
            FunctionalActivity::TieShoes => "tie_shoes",
            FunctionalActivity::Bathing => "bathing",
            FunctionalActivity::Squatting => "squatting",
            FunctionalActivity::Cycling => "cycling",
            FunctionalActivity::Running => "running",
            FunctionalActivity::CombHair => "comb_hair",
            FunctionalActivity::ReachOverhead => "reach_overhead",
            FunctionalActivity::Eating => "eating",
            FunctionalActivity::ReachBehindBack => "reach_behind_back",
            FunctionalActivity::Driving => "driving",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FunctionalActivity::Walking => "Gång",
            FunctionalActivity::StairAscent => "Gå uppför trappa",
            FunctionalActivity::StairDescent => "Gå nedför trappa",
            FunctionalActivity::SitToStand => "Resa sig från stol",
            FunctionalActivity::TieShoes => "Knyta skorna",
            FunctionalActivity::Bathing => "Kliva i och ur badkar",
            FunctionalActivity::Squatting => "Djup knäböj",
            FunctionalActivity::Cycling => "Cykling",
            FunctionalActivity::Running => "Löpning",
            FunctionalActivity::CombHair => "Kamma håret",
            FunctionalActivity::ReachOverhead => "Nå en hylla ovanför huvudet",
            FunctionalActivity::Eating => "Äta",
            FunctionalActivity::ReachBehindBack => "Nå bakfickan",
            FunctionalActivity::Driving => "Bilkörning",
        }
    }
}

impl fmt::Display for FunctionalActivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FunctionalActivity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_id(s);
        FunctionalActivity::ALL
            .iter()
            .copied()
            .find(|a| normalize_id(a.id()) == wanted)
            .ok_or_else(|| ParseError::UnknownActivity(s.to_string()))
    }
}

/// A single measured angle, as supplied by pose estimation or manual entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub movement: JointMovement,
    pub angle: f64,
}

impl FromStr for Measurement {
    type Err = ParseError;

    /// Parse `movement=angle`, e.g. `kneeFlexion=95`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (movement, angle) = s.split_once('=').ok_or_else(|| ParseError::InvalidMeasurement {
            input: s.to_string(),
            reason: "expected movement=angle".to_string(),
        })?;

        let movement = movement.trim().parse::<JointMovement>()?;
        let angle = angle
            .trim()
            .parse::<f64>()
            .map_err(|e| ParseError::InvalidMeasurement {
                input: s.to_string(),
                reason: e.to_string(),
            })?;

        if !angle.is_finite() {
            return Err(ParseError::InvalidMeasurement {
                input: s.to_string(),
                reason: "angle must be finite".to_string(),
            });
        }

        Ok(Measurement { movement, angle })
    }
}
