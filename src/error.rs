//! Unified error hierarchy for RehabRS
//!
//! The validation core is fail-open and never returns these errors: an
//! unknown movement or surgery is "no constraint known". Errors only arise at
//! the edges, when parsing identifiers, verifying the compiled-in reference
//! tables, or loading configuration.

use thiserror::Error;

/// Top-level error type for all RehabRS operations
#[derive(Debug, Error)]
pub enum RehabRsError {
    /// Identifier or measurement parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reference table consistency errors
    #[error("Reference table error: {0}")]
    TableIntegrity(#[from] TableIntegrityError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors raised when turning caller-supplied text into domain identifiers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unknown joint movement: {0}")]
    UnknownMovement(String),

    #[error("Unknown surgery type: {0}")]
    UnknownSurgery(String),

    #[error("Unknown functional activity: {0}")]
    UnknownActivity(String),

    /// A `movement=angle` pair that could not be split or parsed
    #[error("Invalid measurement '{input}': {reason}")]
    InvalidMeasurement { input: String, reason: String },
}

/// Violations of the invariants the static reference tables must satisfy
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableIntegrityError {
    /// `warning < max < hypermobility` does not hold
    #[error("{movement}: expected warning < max < hypermobility, got {warning} / {max} / {hypermobility}")]
    BandOrdering {
        movement: String,
        warning: f64,
        max: f64,
        hypermobility: f64,
    },

    /// Protocol has no phases at all
    #[error("{surgery}: protocol defines no phases")]
    EmptyProtocol { surgery: String },

    /// Phase numbers are not 1..n in order
    #[error("{surgery}: expected phase {expected}, found phase {found}")]
    PhaseOrder {
        surgery: String,
        expected: u8,
        found: u8,
    },

    /// Week ranges are not contiguous, or the first does not start at week 0
    #[error("{surgery}: phase {phase} starts at week {found}, expected week {expected}")]
    PhaseGap {
        surgery: String,
        phase: u8,
        expected: i64,
        found: i64,
    },

    /// A phase has `min > max`
    #[error("{surgery}: phase {phase} has an inverted week range {min}-{max}")]
    InvertedRange {
        surgery: String,
        phase: u8,
        min: i64,
        max: i64,
    },

    /// A postoperative ceiling is looser than the anatomical maximum
    #[error("{surgery}: phase {phase} allows {movement} up to {ceiling}°, above anatomical max {anatomical_max}°")]
    CeilingAboveAnatomical {
        surgery: String,
        phase: u8,
        movement: String,
        ceiling: f64,
        anatomical_max: f64,
    },
}

/// Result type alias for RehabRS operations
pub type Result<T> = std::result::Result<T, RehabRsError>;

impl RehabRsError {
    /// First `RehabRsError` in an `anyhow` chain, looking through any context
    /// added on the way up
    pub fn find_in(err: &anyhow::Error) -> Option<&RehabRsError> {
        err.chain().find_map(|cause| cause.downcast_ref::<RehabRsError>())
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RehabRsError::Parse(_) => ErrorSeverity::Warning,
            RehabRsError::Configuration(_) => ErrorSeverity::Error,
            RehabRsError::TableIntegrity(_) => ErrorSeverity::Critical,
        }
    }

    /// Get user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            RehabRsError::Parse(ParseError::UnknownMovement(id)) => {
                format!(
                    "'{}' is not a known joint movement. Run `rehabrs limits` to list them.",
                    id
                )
            }
            RehabRsError::Parse(ParseError::UnknownSurgery(id)) => {
                format!("'{}' is not a supported surgery type.", id)
            }
            RehabRsError::Parse(ParseError::UnknownActivity(id)) => {
                format!(
                    "'{}' is not a known activity. Run `rehabrs activities` to list them.",
                    id
                )
            }
            RehabRsError::TableIntegrity(inner) => {
                format!("Built-in reference data is inconsistent: {}", inner)
            }
            RehabRsError::Configuration(reason) => {
                format!(
                    "Invalid configuration: {}. Fix the file or remove it to use the defaults.",
                    reason
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Critical system error requiring immediate attention
    Critical,
    /// Error that prevents operation but system can continue
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Critical => tracing::Level::ERROR,
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}
