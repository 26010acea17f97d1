// Library interface for RehabRS modules
// The CLI and the integration tests both go through this crate root

pub mod assessment;
pub mod config;
pub mod error;
pub mod functional;
pub mod logging;
pub mod models;
pub mod postop;
pub mod rom_limits;
pub mod symmetry;
pub mod tables;
pub mod validation;

// Re-export commonly used types for convenience
pub use models::*;
pub use assessment::{assess_session, AssessmentReport, PatientContext, ValidationRoute};
pub use functional::{check_functional_rom, functional_profile, FunctionalCheck};
pub use postop::{generate_postop_exercise_guide, get_postop_phase, validate_postop_rom, weeks_post_op};
pub use rom_limits::{get_age_adjusted_rom, rom_limit, AgeAdjustment};
pub use validation::{validate_joint_angle, validate_joint_angle_for_age, JointAngleValidator};
pub use error::{RehabRsError, Result};
pub use logging::{LogConfig, LogLevel, LogFormat};
