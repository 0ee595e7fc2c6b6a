//! Composition of the output record
//!
//! Reads a [`ConfigRecord`] and applies [`Library`] functions to it. There is
//! no branching and no state; the same inputs always produce the same record.

use crate::config::attrs::value_kind;
use crate::config::{ConfigRecord, SystemDescriptor};
use crate::error::{ComposerError, ErrorCode, Result};
use crate::library::Library;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub mod verify;

pub use verify::{check_derivation, verify_evaluation};

/// Literal list summed into `calculated.numbers`
pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Separator spliced between name and version
pub const VERSION_SEPARATOR: &str = "-";

/// Values computed from the configuration rather than copied from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculated {
    pub name_with_version: String,
    pub numbers: i64,
}

/// The derived record produced by one evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub version: String,
    pub system: SystemDescriptor,
    pub calculated: Calculated,
}

/// The summed list as an untyped value
pub fn numbers_attrs() -> Value {
    Value::from(NUMBERS.to_vec())
}

fn assemble<L: Library + ?Sized>(
    config: &ConfigRecord,
    numbers: i64,
    library: &L,
) -> OutputRecord {
    let suffix = VERSION_SEPARATOR.to_string() + &config.version;

    OutputRecord {
        name: library.to_upper(&config.name),
        version: config.version.clone(),
        system: config.system.clone(),
        calculated: Calculated {
            name_with_version: library.concat(&config.name, &suffix),
            numbers,
        },
    }
}

/// Pure: Build the output record from a configuration
pub fn compose<L: Library + ?Sized>(config: &ConfigRecord, library: &L) -> Result<OutputRecord> {
    debug!(name = %config.name, version = %config.version, "Composing output record");
    let numbers = library.sum(&NUMBERS)?;
    Ok(assemble(config, numbers, library))
}

/// Pure: Extract the configuration from an attribute set and compose it
///
/// A malformed attribute set aborts before any library function runs.
pub fn evaluate<L: Library + ?Sized>(attrs: &Value, library: &L) -> Result<OutputRecord> {
    evaluate_with_numbers(attrs, &numbers_attrs(), library)
}

/// Pure: Like [`evaluate`], summing an untyped list into `calculated.numbers`
///
/// `numbers` must be a list of integers; anything else is a computation
/// error of `sum`.
pub fn evaluate_with_numbers<L: Library + ?Sized>(
    attrs: &Value,
    numbers: &Value,
    library: &L,
) -> Result<OutputRecord> {
    let config = ConfigRecord::from_value(attrs)?;
    debug!(name = %config.name, version = %config.version, "Configuration extracted");

    let list = numbers.as_array().ok_or_else(|| {
        ComposerError::computation(
            ErrorCode::COMPUTE_INVALID_ARGUMENT,
            "sum",
            format!("expected a list, found {}", value_kind(numbers)),
            Some(numbers.to_string()),
        )
    })?;
    let total = library.sum_values(list)?;

    Ok(assemble(&config, total, library))
}
