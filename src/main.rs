use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};
use tracing::{error, warn, Level};

use rehabrs::assessment::{assess_session_with, AssessmentReport, PatientContext};
use rehabrs::config::AppConfig;
use rehabrs::error::RehabRsError;
use rehabrs::functional::{check_functional_rom, current_rom_from_measurements, requirements, FunctionalCheck};
use rehabrs::logging::init_logging;
use rehabrs::models::{
    FunctionalActivity, JointMovement, Measurement, PostOpPhase, Severity, SurgeryType, ValidationResult,
};
use rehabrs::postop::{generate_postop_exercise_guide, get_postop_phase, validate_postop_rom};
use rehabrs::rom_limits::{all_limits, rom_limit};
use rehabrs::symmetry::{limb_symmetry_index, meets_return_to_sport, RETURN_TO_SPORT_LSI};
use rehabrs::tables::verify_reference_tables;

/// RehabRS - Range-of-motion and postoperative protocol checks
///
/// Validates goniometer or pose-estimation angles against anatomical norms,
/// age-adjusted norms, and the ceilings of postoperative rehabilitation
/// phases.
#[derive(Parser)]
#[command(name = "rehabrs")]
#[command(author = "RehabRS Contributors")]
#[command(version = "0.1.0")]
#[command(about = "ROM constraint and postoperative phase engine", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List anatomical ROM limits
    Limits {
        /// Show limits adjusted for this age
        #[arg(short, long)]
        age: Option<u32>,
    },

    /// Validate one measured angle against anatomical limits
    Validate {
        /// Movement id, e.g. kneeFlexion
        movement: JointMovement,

        /// Measured angle in degrees
        #[arg(allow_hyphen_values = true)]
        angle: f64,

        /// Patient age for age-adjusted limits
        #[arg(short, long)]
        age: Option<u32>,
    },

    /// Check whether current ROM allows an everyday activity
    Functional {
        /// Activity id, e.g. stair_ascent
        activity: FunctionalActivity,

        /// Current ROM as movement=degrees, repeatable
        #[arg(short, long = "rom", value_name = "MOVEMENT=DEG")]
        rom: Vec<Measurement>,
    },

    /// List activities and their ROM requirements
    Activities,

    /// Show the active postoperative phase
    Phase {
        /// Surgery id, e.g. acl_reconstruction
        surgery: SurgeryType,

        /// Weeks since surgery
        #[arg(allow_hyphen_values = true)]
        weeks: i64,
    },

    /// Validate an angle against the active postoperative phase
    Postop {
        surgery: SurgeryType,
        #[arg(allow_hyphen_values = true)]
        weeks: i64,
        movement: JointMovement,
        #[arg(allow_hyphen_values = true)]
        angle: f64,
    },

    /// Print the patient guide for the active phase
    Guide {
        surgery: SurgeryType,
        #[arg(allow_hyphen_values = true)]
        weeks: i64,
    },

    /// Assess a batch of measurements using the most specific limits known
    Session {
        /// Measurements as movement=degrees, repeatable
        #[arg(short, long = "rom", value_name = "MOVEMENT=DEG", required = true)]
        rom: Vec<Measurement>,

        /// Patient age (falls back to the config file)
        #[arg(short, long)]
        age: Option<u32>,

        /// Surgery id (falls back to the config file)
        #[arg(short, long)]
        surgery: Option<SurgeryType>,

        /// Weeks since surgery (falls back to the configured surgery date)
        #[arg(short, long, allow_hyphen_values = true)]
        weeks: Option<i64>,
    },

    /// Limb Symmetry Index of an affected limb against the unaffected one
    Lsi {
        /// Affected limb value (strength, hop distance, ...)
        affected: f64,

        /// Unaffected limb value, same unit
        unaffected: f64,
    },

    /// Verify the built-in reference tables
    CheckTables,
}

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "Movement")]
    movement: String,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Max")]
    max: f64,
    #[tabled(rename = "Warning")]
    warning: f64,
    #[tabled(rename = "Hypermobility")]
    hypermobility: f64,
}

#[derive(Tabled)]
struct RequirementRow {
    #[tabled(rename = "Activity")]
    activity: String,
    #[tabled(rename = "Requirements")]
    requirements: String,
}

#[derive(Tabled)]
struct VerdictRow {
    #[tabled(rename = "Movement")]
    movement: String,
    #[tabled(rename = "Angle")]
    angle: f64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Corrected")]
    corrected: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Domain errors get their user message and are logged at their own level;
/// anything else is printed with its full context chain.
fn report_error(err: &anyhow::Error) {
    match RehabRsError::find_in(err) {
        Some(domain) => {
            if domain.severity().to_tracing_level() == Level::ERROR {
                error!(error = %err, "command failed");
            } else {
                warn!(error = %err, "command failed");
            }
            eprintln!("{} {}", "Error:".red().bold(), domain.user_message());
        }
        None => {
            error!(error = %err, "command failed");
            eprintln!("{} {:#}", "Error:".red().bold(), err);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    init_logging(&config.logging.clone().with_verbosity(cli.verbose))?;

    let validator = config.validator();

    match cli.command {
        Commands::Limits { age } => {
            let limits: Vec<_> = all_limits()
                .map(|(movement, base)| {
                    let limit = age.map_or(base, |a| validator.age_adjustment().apply(base, a));
                    (movement, limit)
                })
                .collect();

            if cli.json {
                print_json(&limits)?;
            } else {
                let rows: Vec<LimitRow> = limits
                    .iter()
                    .map(|(movement, limit)| LimitRow {
                        movement: movement.to_string(),
                        label: movement.label(),
                        max: limit.max,
                        warning: limit.warning,
                        hypermobility: limit.hypermobility,
                    })
                    .collect();

                match age {
                    Some(age) => println!("{}", format!("ROM limits adjusted for age {}", age).cyan().bold()),
                    None => println!("{}", "Anatomical ROM limits".cyan().bold()),
                }
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
        }

        Commands::Validate { movement, angle, age } => {
            let result = match age.or(config.patient.age) {
                Some(age) => validator.validate_for_age(movement, angle, age),
                None => validator.validate(movement, angle),
            };
            if cli.json {
                print_json(&result)?;
            } else {
                print_verdict(movement, angle, &result);
            }
        }

        Commands::Functional { activity, rom } => {
            let current = current_rom_from_measurements(&rom);
            let check = check_functional_rom(activity, &current);
            if cli.json {
                print_json(&check)?;
            } else {
                print_functional(&check);
            }
        }

        Commands::Activities => {
            if cli.json {
                let all: Vec<_> = FunctionalActivity::ALL
                    .iter()
                    .map(|&a| (a, requirements(a).unwrap_or_default()))
                    .collect();
                print_json(&all)?;
            } else {
                let rows: Vec<RequirementRow> = FunctionalActivity::ALL
                    .iter()
                    .map(|&activity| RequirementRow {
                        activity: format!("{} ({})", activity, activity.label()),
                        requirements: requirements(activity)
                            .unwrap_or_default()
                            .iter()
                            .map(|(m, deg)| format!("{} ≥ {}°", m, deg))
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
                    .collect();
                println!("{}", Table::new(rows).with(Style::rounded()));
            }
        }

        Commands::Phase { surgery, weeks } => match get_postop_phase(surgery, weeks) {
            Some(phase) if cli.json => print_json(phase)?,
            Some(phase) => print_phase(surgery, phase),
            None => println!("{}", format!("No protocol for {}", surgery).yellow()),
        },

        Commands::Postop { surgery, weeks, movement, angle } => {
            let result = validate_postop_rom(surgery, weeks, movement, angle);
            if cli.json {
                print_json(&result)?;
            } else {
                print_verdict(movement, angle, &result);
            }
        }

        Commands::Guide { surgery, weeks } => {
            let guide = generate_postop_exercise_guide(surgery, weeks);
            if cli.json {
                print_json(&guide)?;
            } else {
                println!("{}", guide);
            }
        }

        Commands::Session { rom, age, surgery, weeks } => {
            let stored = config.patient.to_context(Local::now().date_naive());
            let context = PatientContext {
                age: age.or(stored.age),
                surgery: surgery.or(stored.surgery),
                weeks_post_op: weeks.or(stored.weeks_post_op),
            };
            let report = assess_session_with(&validator, &context, &rom);
            if cli.json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }

        Commands::Lsi { affected, unaffected } => {
            let lsi = limb_symmetry_index(affected, unaffected);
            if cli.json {
                print_json(&serde_json::json!({
                    "lsi": lsi,
                    "returnToSport": lsi.map(meets_return_to_sport),
                }))?;
            } else {
                match lsi {
                    Some(lsi) if meets_return_to_sport(lsi) => {
                        println!("{}", format!("LSI {:.1} % (≥ {} %)", lsi, RETURN_TO_SPORT_LSI).green())
                    }
                    Some(lsi) => {
                        println!("{}", format!("LSI {:.1} % (< {} %)", lsi, RETURN_TO_SPORT_LSI).yellow())
                    }
                    None => println!("{}", "Unaffected value must be positive".red()),
                }
            }
        }

        Commands::CheckTables => {
            verify_reference_tables()?;
            if cli.json {
                print_json(&serde_json::json!({ "ok": true }))?;
            } else {
                println!("{}", "✓ Reference tables are consistent".green());
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn status_label(result: &ValidationResult) -> ColoredString {
    match result.severity {
        None => "OK".green(),
        Some(Severity::Mild) => "MILD".yellow(),
        Some(Severity::Moderate) => "MODERATE".bright_red(),
        Some(Severity::Severe) => "SEVERE".red().bold(),
    }
}

fn print_verdict(movement: JointMovement, angle: f64, result: &ValidationResult) {
    println!("{} {}°  {}", movement.label().bold(), angle, status_label(result));
    if let Some(limit) = rom_limit(movement) {
        println!("  {}", limit.description.dimmed());
    }
    if let Some(warning) = &result.warning {
        println!("  {}", warning);
    }
    if let Some(corrected) = result.corrected_angle {
        println!("  Korrigerad vinkel: {}°", corrected);
    }
    if let Some(recommendation) = &result.recommendation {
        println!("  {}", recommendation.italic());
    }
}

fn print_functional(check: &FunctionalCheck) {
    if check.sufficient {
        println!("{} {}", "✓".green(), check.activity.label().bold());
    } else {
        println!("{} {}", "✗".red(), check.activity.label().bold());
        for deficit in &check.deficits {
            println!("  - {}", deficit);
        }
    }
}

fn print_phase(surgery: SurgeryType, phase: &PostOpPhase) {
    println!(
        "{}",
        format!("{}: fas {} ({})", surgery.label(), phase.phase, phase.name).cyan().bold()
    );
    println!("  Vecka {}–{}", phase.week_range.min, phase.week_range.max);
    for limit in phase.rom_limits {
        println!("  {}: max {}°", limit.movement.label(), limit.max);
    }
}

fn print_report(report: &AssessmentReport) {
    let route = match report.phase {
        Some(phase) => format!("{:?} (fas {})", report.route, phase),
        None => format!("{:?}", report.route),
    };
    println!("{}", format!("Session assessed against {}", route).cyan().bold());

    let rows: Vec<VerdictRow> = report
        .verdicts
        .iter()
        .map(|v| VerdictRow {
            movement: v.movement.to_string(),
            angle: v.angle,
            status: status_label(&v.result).to_string(),
            corrected: v
                .result
                .corrected_angle
                .map(|a| format!("{}°", a))
                .unwrap_or_default(),
        })
        .collect();
    println!("{}", Table::new(rows).with(Style::rounded()));

    for verdict in report.verdicts.iter().filter(|v| v.result.warning.is_some()) {
        if let Some(warning) = &verdict.result.warning {
            println!("  {}", warning);
        }
    }

    if report.all_valid() {
        println!("{}", "✓ All readings within limits".green());
    } else {
        println!(
            "{}",
            format!("✗ {} reading(s) out of range", report.invalid_count).red()
        );
    }
}
