use rehabrs::assessment::{assess_session, PatientContext, ValidationRoute};
use rehabrs::functional::{check_functional_rom, check_functional_rom_by_id};
use rehabrs::models::{FunctionalActivity, JointMovement, Measurement, Severity, SurgeryType, ValidationResult};
use rehabrs::postop::{
    generate_postop_exercise_guide, get_postop_phase, get_postop_phase_by_id, validate_postop_rom,
    validate_postop_rom_by_id,
};
use rehabrs::tables::verify_reference_tables;
use rehabrs::validation::{validate_joint_angle, validate_joint_angle_by_id};
use std::collections::HashMap;

/// End-to-end checks of the documented reference behaviour

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_knee_flexion_reference_bands() {
        let normal = validate_joint_angle(JointMovement::KneeFlexion, 100.0);
        assert_eq!(normal, ValidationResult::unconstrained());

        let near = validate_joint_angle(JointMovement::KneeFlexion, 138.0);
        assert!(near.valid);
        assert_eq!(near.severity, Some(Severity::Mild));

        let over = validate_joint_angle(JointMovement::KneeFlexion, 150.0);
        assert!(!over.valid);
        assert_eq!(over.severity, Some(Severity::Moderate));
        assert_eq!(over.corrected_angle, Some(140.0));

        let hyper = validate_joint_angle(JointMovement::KneeFlexion, 160.0);
        assert!(!hyper.valid);
        assert_eq!(hyper.severity, Some(Severity::Severe));
        assert_eq!(hyper.corrected_angle, Some(140.0));
    }

    #[test]
    fn test_acl_phase_lookup() {
        let phase = get_postop_phase(SurgeryType::AclReconstruction, 1).unwrap();
        assert_eq!(phase.phase, 1);
        assert_eq!((phase.week_range.min, phase.week_range.max), (0, 2));

        let phase = get_postop_phase(SurgeryType::AclReconstruction, 100).unwrap();
        assert_eq!(phase.phase, 5);
        assert_eq!((phase.week_range.min, phase.week_range.max), (24, 52));

        assert!(get_postop_phase_by_id("not_a_surgery", 1).is_none());
    }

    #[test]
    fn test_acl_early_knee_flexion_blocked() {
        let result = validate_postop_rom(SurgeryType::AclReconstruction, 1, JointMovement::KneeFlexion, 100.0);
        assert!(!result.valid);
        assert_eq!(result.severity, Some(Severity::Severe));
        assert_eq!(result.corrected_angle, Some(90.0));

        let by_id = validate_postop_rom_by_id("acl_reconstruction", 1, "kneeFlexion", 100.0);
        assert_eq!(by_id, result);
    }

    #[test]
    fn test_unknown_identifiers_fail_open() {
        assert_eq!(validate_joint_angle_by_id("tailWag", 720.0), ValidationResult::unconstrained());
        assert_eq!(
            validate_postop_rom_by_id("unknown", 3, "kneeFlexion", 170.0),
            ValidationResult::unconstrained()
        );
        assert!(check_functional_rom_by_id("juggling", &HashMap::new()).is_none());
    }

    #[test]
    fn test_walking_deficit_format() {
        let current: HashMap<JointMovement, f64> = [
            (JointMovement::KneeFlexion, 60.0),
            (JointMovement::HipFlexion, 30.0),
            (JointMovement::HipExtension, 10.0),
            (JointMovement::AnkleDorsiflexion, 10.0),
            (JointMovement::AnklePlantarflexion, 20.0),
        ]
        .into_iter()
        .collect();

        let check = check_functional_rom(FunctionalActivity::Walking, &current);
        assert!(!check.sufficient);
        assert_eq!(check.deficits, vec!["kneeFlexion: 60° (behöver 65°)".to_string()]);
    }

    #[test]
    fn test_guide_follows_phase_resolution() {
        for surgery in SurgeryType::ALL {
            for weeks in [-2, 0, 5, 13, 30, 80] {
                let phase = get_postop_phase(surgery, weeks).unwrap();
                let guide = generate_postop_exercise_guide(surgery, weeks);
                assert!(
                    guide.starts_with(&format!("Fas {}: {}\n", phase.phase, phase.name)),
                    "{} week {}",
                    surgery,
                    weeks
                );
            }
        }
    }

    #[test]
    fn test_session_from_parsed_measurements() {
        let measurements: Vec<Measurement> = ["kneeFlexion=100", "hipFlexion=95", "ankleDorsiflexion=-10"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();

        let context = PatientContext {
            age: Some(45),
            surgery: Some(SurgeryType::AclReconstruction),
            weeks_post_op: Some(4),
        };
        let report = assess_session(&context, &measurements);

        assert_eq!(report.route, ValidationRoute::PostOp);
        assert_eq!(report.phase, Some(2));
        assert!(report.all_valid());
        assert_eq!(report.corrected, measurements);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let context = PatientContext::default();
        let report = assess_session(
            &context,
            &[Measurement { movement: JointMovement::KneeFlexion, angle: 150.0 }],
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["route"], "anatomical");
        assert_eq!(json["invalidCount"], 1);
        assert_eq!(json["worstSeverity"], "moderate");
        assert_eq!(json["verdicts"][0]["movement"], "kneeFlexion");
        assert_eq!(json["verdicts"][0]["result"]["correctedAngle"], 140.0);
        assert!(json.get("phase").is_none());
    }

    #[test]
    fn test_reference_tables_verify() {
        verify_reference_tables().unwrap();
    }
}
