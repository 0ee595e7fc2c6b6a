//! Application configuration
//!
//! Settings that control how a result is reported. Nothing here feeds the
//! evaluation itself.

use crate::output::OutputFormat;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Format used to render records
    pub format: OutputFormat,
    /// Render JSON on a single line
    pub compact: bool,
    /// Write the record to this file instead of stdout
    pub output: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_by_verbosity() {
        assert_eq!(AppConfig::new(0).log_level(), "info");
        assert_eq!(AppConfig::new(1).log_level(), "debug");
        assert_eq!(AppConfig::new(2).log_level(), "trace");
        assert_eq!(AppConfig::new(5).log_level(), "trace");
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new(1)
            .with_format(OutputFormat::Yaml)
            .with_compact(true)
            .with_output(Some(PathBuf::from("out.yaml")));

        assert_eq!(config.verbose, 1);
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(config.compact);
        assert_eq!(config.output, Some(PathBuf::from("out.yaml")));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.compact);
        assert!(config.output.is_none());
    }
}
