//! Patient-facing text for the current rehabilitation phase

use tracing::warn;

use crate::models::{PostOpPhase, SurgeryType};

use super::get_postop_phase;

/// Shown when no phase can be resolved
pub const NO_GUIDE_AVAILABLE: &str =
    "Ingen information tillgänglig för denna operationstyp. Följ instruktionerna från din fysioterapeut.";

/// Render the guide for the phase a patient is in.
///
/// ```text
/// Fas 1: Skyddsfas
/// Främre korsbandsrekonstruktion (ACL), vecka 0–2 efter operation
///
/// Rörelsebegränsningar:
/// • Knäflexion: max 90° (belastning tillåten)
/// ...
/// ```
pub fn generate_postop_exercise_guide(surgery: SurgeryType, weeks: i64) -> String {
    match get_postop_phase(surgery, weeks) {
        Some(phase) => render_phase(surgery, phase),
        None => NO_GUIDE_AVAILABLE.to_string(),
    }
}

/// String-keyed variant; unknown surgeries get the fallback text
pub fn generate_postop_exercise_guide_by_id(surgery_id: &str, weeks: i64) -> String {
    match surgery_id.parse::<SurgeryType>() {
        Ok(surgery) => generate_postop_exercise_guide(surgery, weeks),
        Err(e) => {
            warn!(error = %e, "unknown surgery, no exercise guide");
            NO_GUIDE_AVAILABLE.to_string()
        }
    }
}

/// Format one phase. Sections always appear in the same order.
pub fn render_phase(surgery: SurgeryType, phase: &PostOpPhase) -> String {
    let mut out = String::new();

    out.push_str(&format!("Fas {}: {}\n", phase.phase, phase.name));
    out.push_str(&format!(
        "{}, vecka {}–{} efter operation\n",
        surgery.label(),
        phase.week_range.min,
        phase.week_range.max
    ));

    out.push_str("\nRörelsebegränsningar:\n");
    if phase.rom_limits.is_empty() {
        out.push_str("• Inga fasspecifika begränsningar, normala rörelseomfång gäller\n");
    }
    for limit in phase.rom_limits {
        let mut flags = Vec::new();
        if limit.weight_bearing {
            flags.push("belastning tillåten");
        }
        if limit.resistance_allowed {
            flags.push("motstånd tillåtet");
        }

        out.push_str(&format!("• {}: max {}°", limit.movement.label(), limit.max));
        if !flags.is_empty() {
            out.push_str(&format!(" ({})", flags.join(", ")));
        }
        out.push('\n');
    }

    out.push_str("\nRestriktioner:\n");
    for restriction in phase.restrictions {
        out.push_str(&format!("• {}\n", restriction));
    }

    out.push_str("\nMål:\n");
    for goal in phase.goals {
        out.push_str(&format!("• {}\n", goal));
    }

    out
}
