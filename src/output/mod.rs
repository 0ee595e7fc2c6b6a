//! Rendering records to text
//!
//! Records are serialized with serde; the format is picked on the command
//! line. Only writing to a file touches the filesystem.

use crate::error::{ComposerError, ErrorCode, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Pure: Render a record in the given format
///
/// `compact` produces single-line JSON and has no effect on other formats.
/// The result always ends with a newline.
pub fn render<T: Serialize>(record: &T, format: OutputFormat, compact: bool) -> Result<String> {
    let mut text = match format {
        OutputFormat::Json if compact => serde_json::to_string(record)?,
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Yaml => serde_yaml::to_string(record)?,
        OutputFormat::Toml => toml::to_string_pretty(record)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Write rendered text to `path`, replacing any existing file
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    std::fs::write(path, contents).map_err(|e| {
        ComposerError::output_with_code(
            ErrorCode::OUTPUT_WRITE_FAILED,
            "Failed to write output file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })
}
