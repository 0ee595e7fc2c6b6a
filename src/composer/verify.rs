//! Post-evaluation checks
//!
//! Re-runs the evaluation and confirms the result is reproducible and obeys
//! the derivation rules linking config fields to output fields.

use super::{evaluate, OutputRecord, NUMBERS, VERSION_SEPARATOR};
use crate::config::ConfigRecord;
use crate::error::{ComposerError, ErrorCode, Result};
use crate::library::Library;
use crate::output::{render, OutputFormat};
use serde_json::Value;
use std::fmt::Display;
use tracing::{debug, info};

fn mismatch(field: &str, expected: impl Display, found: impl Display) -> ComposerError {
    ComposerError::computation(
        ErrorCode::COMPUTE_GENERIC,
        "compose",
        format!("{} should be {} but is {}", field, expected, found),
        Some(found.to_string()),
    )
}

/// Pure: Confirm `output` was derived from `config` through `library`
pub fn check_derivation<L: Library + ?Sized>(
    config: &ConfigRecord,
    output: &OutputRecord,
    library: &L,
) -> Result<()> {
    let expected_name = library.to_upper(&config.name);
    if output.name != expected_name {
        return Err(mismatch("name", expected_name, &output.name));
    }
    if output.version != config.version {
        return Err(mismatch("version", &config.version, &output.version));
    }
    if output.system != config.system {
        return Err(mismatch(
            "system",
            format!("{:?}", config.system),
            format!("{:?}", output.system),
        ));
    }

    let suffix = VERSION_SEPARATOR.to_string() + &config.version;
    let expected_joined = library.concat(&config.name, &suffix);
    if output.calculated.name_with_version != expected_joined {
        return Err(mismatch(
            "calculated.nameWithVersion",
            expected_joined,
            &output.calculated.name_with_version,
        ));
    }

    let expected_numbers = library.sum(&NUMBERS)?;
    if output.calculated.numbers != expected_numbers {
        return Err(mismatch(
            "calculated.numbers",
            expected_numbers,
            output.calculated.numbers,
        ));
    }

    Ok(())
}

/// Evaluate twice and fail unless both runs render byte-identical JSON
///
/// Returns the record from the first run.
pub fn verify_evaluation<L: Library + ?Sized>(attrs: &Value, library: &L) -> Result<OutputRecord> {
    let first = evaluate(attrs, library)?;
    let second = evaluate(attrs, library)?;

    let first_text = render(&first, OutputFormat::Json, true)?;
    let second_text = render(&second, OutputFormat::Json, true)?;
    if first_text != second_text {
        return Err(ComposerError::computation(
            ErrorCode::COMPUTE_NONDETERMINISTIC,
            "compose",
            "two evaluations of the same configuration differ",
            Some(second_text.trim_end().to_string()),
        ));
    }
    debug!("Repeated evaluation is byte-identical");

    let config = ConfigRecord::from_value(attrs)?;
    check_derivation(&config, &first, library)?;
    info!("Verification passed");

    Ok(first)
}
