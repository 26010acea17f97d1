//! Consistency checks for the compiled-in reference tables
//!
//! The tables are static data, so nothing in the validators re-checks them at
//! lookup time. Run this once at startup (the CLI's `check-tables` does) or
//! from tests after editing a table.

use tracing::{debug, info};

use crate::error::{Result, TableIntegrityError};
use crate::models::SurgeryType;
use crate::postop::protocols::phases;
use crate::rom_limits::{all_limits, rom_limit};

/// Verify every reference table, stopping at the first violation
pub fn verify_reference_tables() -> Result<()> {
    verify_rom_limits()?;
    for surgery in SurgeryType::ALL {
        verify_protocol(surgery)?;
    }
    info!("reference tables verified");
    Ok(())
}

/// `0 <= warning < max < hypermobility` for every anatomical limit
pub fn verify_rom_limits() -> std::result::Result<(), TableIntegrityError> {
    for (movement, limit) in all_limits() {
        if !(0.0 <= limit.warning && limit.warning < limit.max && limit.max < limit.hypermobility) {
            return Err(TableIntegrityError::BandOrdering {
                movement: movement.to_string(),
                warning: limit.warning,
                max: limit.max,
                hypermobility: limit.hypermobility,
            });
        }
    }
    Ok(())
}

/// Phase numbering, week continuity and ceilings for one surgery
pub fn verify_protocol(surgery: SurgeryType) -> std::result::Result<(), TableIntegrityError> {
    let protocol = phases(surgery);
    if protocol.is_empty() {
        return Err(TableIntegrityError::EmptyProtocol {
            surgery: surgery.to_string(),
        });
    }

    let mut expected_start = 0;
    for (index, phase) in protocol.iter().enumerate() {
        let expected_number = (index + 1) as u8;
        if phase.phase != expected_number {
            return Err(TableIntegrityError::PhaseOrder {
                surgery: surgery.to_string(),
                expected: expected_number,
                found: phase.phase,
            });
        }

        if phase.week_range.min > phase.week_range.max {
            return Err(TableIntegrityError::InvertedRange {
                surgery: surgery.to_string(),
                phase: phase.phase,
                min: phase.week_range.min,
                max: phase.week_range.max,
            });
        }

        if phase.week_range.min != expected_start {
            return Err(TableIntegrityError::PhaseGap {
                surgery: surgery.to_string(),
                phase: phase.phase,
                expected: expected_start,
                found: phase.week_range.min,
            });
        }
        expected_start = phase.week_range.max + 1;

        for ceiling in phase.rom_limits {
            if let Some(anatomical) = rom_limit(ceiling.movement) {
                if ceiling.max > anatomical.max {
                    return Err(TableIntegrityError::CeilingAboveAnatomical {
                        surgery: surgery.to_string(),
                        phase: phase.phase,
                        movement: ceiling.movement.to_string(),
                        ceiling: ceiling.max,
                        anatomical_max: anatomical.max,
                    });
                }
            }
        }
    }

    debug!(%surgery, phases = protocol.len(), "protocol verified");
    Ok(())
}
