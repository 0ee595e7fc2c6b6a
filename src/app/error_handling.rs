//! Error handling utilities
//!
//! This module provides centralized error handling for the binary.

use crate::error::ComposerError;
use tracing::debug;

/// Exit status for a failed run
///
/// Evaluation errors carry their own code; anything else is a general
/// failure (1).
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<ComposerError>()
        .map(ComposerError::exit_code)
        .unwrap_or(1)
}

/// Report a fatal error and exit with the matching status code
///
/// - `verbose = 0`: User-friendly message only
/// - `verbose >= 1`: Includes the developer message with the error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    debug!("Fatal error: {}", error);

    if let Some(composer_err) = error.downcast_ref::<ComposerError>() {
        eprintln!("{}", composer_err.user_message());
        if verbose >= 1 {
            eprintln!("\nContext Chain:\n{}", composer_err.developer_message());
        }
    } else {
        eprintln!("Error: {error}");
        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }
    }

    std::process::exit(exit_code_for(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_composer_errors() {
        let err = anyhow::Error::new(ComposerError::missing_field("name"));
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), 1);
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = anyhow::Error::new(ComposerError::missing_field("name")).context("evaluating");
        assert_eq!(exit_code_for(&err), 2);
    }
}
