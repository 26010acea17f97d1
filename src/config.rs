use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assessment::PatientContext;
use crate::error::RehabRsError;
use crate::logging::LogConfig;
use crate::models::SurgeryType;
use crate::postop::weeks_post_op;
use crate::rom_limits::AgeAdjustment;
use crate::validation::JointAngleValidator;

/// Main application configuration
///
/// The ROM and protocol tables are compiled in; only the age adjustment
/// parameters and the patient defaults are configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    #[serde(default)]
    pub metadata: ConfigMetadata,

    /// Logging output
    #[serde(default)]
    pub logging: LogConfig,

    /// Age-related scaling of the anatomical limits
    #[serde(default)]
    pub age_adjustment: AgeAdjustment,

    /// Patient context used when the command line does not supply one
    #[serde(default)]
    pub patient: PatientDefaults,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Stored patient context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientDefaults {
    pub age: Option<u32>,
    pub surgery: Option<SurgeryType>,
    /// Date of surgery; weeks post-op are derived from it
    pub surgery_date: Option<NaiveDate>,
}

impl PatientDefaults {
    /// Build an assessment context as of `today`
    pub fn to_context(&self, today: NaiveDate) -> PatientContext {
        PatientContext {
            age: self.age,
            surgery: self.surgery,
            weeks_post_op: self.surgery_date.map(|date| weeks_post_op(date, today)),
        }
    }
}

impl Default for ConfigMetadata {
    fn default() -> Self {
        let now = Utc::now();

        ConfigMetadata {
            version: "1.0".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            metadata: ConfigMetadata::default(),
            logging: LogConfig::default(),
            age_adjustment: AgeAdjustment::default(),
            patient: PatientDefaults::default(),
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rehabrs")
            .join("config.toml")
    }

    /// Load configuration with fallback to defaults
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(Self::default_config_path())
    }

    /// Load `path`, falling back to defaults. A missing file is expected; a
    /// file that exists but cannot be used is reported.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{:#}", e), "ignoring unusable config file");
                Self::default()
            }
        }
    }

    /// Reject age adjustment parameters that would loosen limits or zero them out
    pub fn validate(&self) -> std::result::Result<(), RehabRsError> {
        let adj = &self.age_adjustment;
        if !(adj.floor > 0.0 && adj.floor <= 1.0) {
            return Err(RehabRsError::Configuration(format!(
                "age_adjustment.floor must be in (0, 1], got {}",
                adj.floor
            )));
        }
        if !(adj.reduction_per_year >= 0.0 && adj.reduction_per_year.is_finite()) {
            return Err(RehabRsError::Configuration(format!(
                "age_adjustment.reduction_per_year must be non-negative, got {}",
                adj.reduction_per_year
            )));
        }
        Ok(())
    }

    /// Validator carrying the configured age adjustment
    pub fn validator(&self) -> JointAngleValidator {
        JointAngleValidator::with_age_adjustment(self.age_adjustment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.metadata.version, deserialized.metadata.version);
        assert_eq!(config.age_adjustment, deserialized.age_adjustment);
        assert_eq!(config.logging, deserialized.logging);
    }

    #[test]
    fn test_config_file_io() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut original = AppConfig::default();
        original.patient = PatientDefaults {
            age: Some(58),
            surgery: Some(SurgeryType::TotalKneeReplacement),
            surgery_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        };
        original.logging.level = LogLevel::Debug;

        original.save_to_file(&config_path).unwrap();
        let loaded = AppConfig::load_from_file(&config_path).unwrap();

        assert_eq!(loaded.patient, original.patient);
        assert_eq!(loaded.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[metadata]
version = "1.0"
created_at = "2024-01-01T00:00:00Z"
updated_at = "2024-01-01T00:00:00Z"

[patient]
age = 72
surgery = "total_hip_replacement"
"#,
        )
        .unwrap();

        let config = AppConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.age_adjustment, AgeAdjustment::default());
        assert_eq!(config.patient.age, Some(72));
        assert_eq!(config.patient.surgery, Some(SurgeryType::TotalHipReplacement));
        assert_eq!(config.patient.surgery_date, None);
    }

    #[test]
    fn test_metadata_table_is_optional() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[patient]\nage = 64\n").unwrap();

        let config = AppConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config.metadata.version, "1.0");
        assert_eq!(config.patient.age, Some(64));

        let fallback = AppConfig::load_or_default_from(&config_path);
        assert_eq!(fallback.patient.age, Some(64));
    }

    #[test]
    fn test_unusable_file_falls_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[age_adjustment]\nfloor = 2.0\n").unwrap();

        assert!(AppConfig::load_from_file(&config_path).is_err());
        let config = AppConfig::load_or_default_from(&config_path);
        assert_eq!(config.age_adjustment, AgeAdjustment::default());

        let missing = AppConfig::load_or_default_from(temp_dir.path().join("absent.toml"));
        assert_eq!(missing.patient, PatientDefaults::default());
    }

    #[test]
    fn test_invalid_floor_rejected() {
        let mut config = AppConfig::default();
        config.age_adjustment.floor = 1.5;
        assert!(matches!(config.validate(), Err(RehabRsError::Configuration(_))));

        config.age_adjustment.floor = 0.7;
        config.age_adjustment.reduction_per_year = -0.01;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_patient_context_from_defaults() {
        let defaults = PatientDefaults {
            age: Some(40),
            surgery: Some(SurgeryType::AclReconstruction),
            surgery_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        };
        let context = defaults.to_context(NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
        assert_eq!(context.weeks_post_op, Some(3));
        assert_eq!(context.surgery, Some(SurgeryType::AclReconstruction));

        let no_date = PatientDefaults::default().to_context(NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
        assert_eq!(no_date.weeks_post_op, None);
    }

    #[test]
    fn test_default_path() {
        let path = AppConfig::default_config_path();
        assert!(path.ends_with(".rehabrs/config.toml"));
    }
}
