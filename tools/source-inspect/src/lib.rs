pub mod artifact;
pub mod checks;
pub mod config;
pub mod error;
pub mod reporter;

use std::io::Write;
use std::time::Instant;

use artifact::load_artifact;
use checks::{evaluate_checks, CheckResult, CHECK_DEFINITIONS};
use config::InspectorConfig;
use error::InspectError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load the artifact, report it, and return the check outcomes.
/// Outcomes never affect the return value; only a failed read (or JSON
/// rendering) does. `color` applies to the text report only.
pub fn run(
    config: &InspectorConfig,
    format: OutputFormat,
    color: bool,
    out: &mut impl Write,
) -> Result<CheckResult, InspectError> {
    let debug_timing = std::env::var("SOURCE_INSPECT_TIMING").is_ok();

    let start = Instant::now();
    let artifact = load_artifact(&config.artifact_path)?;
    if debug_timing {
        eprintln!("  [{:>6.0?}] load {}", start.elapsed(), config.display_path().display());
    }

    let start = Instant::now();
    let results = evaluate_checks(&artifact, CHECK_DEFINITIONS);
    if debug_timing {
        eprintln!("  [{:>6.0?}] evaluate {} check(s)", start.elapsed(), results.len());
    }

    match format {
        OutputFormat::Text => {
            reporter::print_artifact(out, &artifact, color);
            reporter::print_results(out, &results, color);
        }
        OutputFormat::Json => reporter::print_json(out, config.display_path(), &results)?,
    }

    Ok(results)
}
