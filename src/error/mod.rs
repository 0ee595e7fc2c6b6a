use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for an evaluation pass
///
/// Every variant is terminal: evaluation aborts and no partial output is
/// produced.
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        field: Option<String>,
    },

    #[error("[E{code:04}] Computation error in '{function}': {message}")]
    Computation {
        code: u16,
        message: String,
        function: String,
        value: Option<String>,
    },

    #[error("[E{code:04}] Output error: {message}")]
    Output {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ComposerError {
    /// Create a configuration error with default code
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            code: ErrorCode::CONFIG_GENERIC,
            message: message.into(),
            field: None,
        }
    }

    /// A required field is absent from the configuration
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::Config {
            code: ErrorCode::CONFIG_MISSING_FIELD,
            message: format!("required field '{}' is missing", field),
            field: Some(field),
        }
    }

    /// A configuration field is present but holds the wrong kind of value
    pub fn invalid_type(field: impl Into<String>, expected: &str, found: impl Display) -> Self {
        let field = field.into();
        Self::Config {
            code: ErrorCode::CONFIG_INVALID_TYPE,
            message: format!("field '{}' must be {}, found {}", field, expected, found),
            field: Some(field),
        }
    }

    /// Create a computation error for a library function
    pub fn computation(
        code: u16,
        function: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::Computation {
            code,
            message: message.into(),
            function: function.into(),
            value,
        }
    }

    /// Create an output error with specific code and optional path
    pub fn output_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Add a source error to an output error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Output { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Computation { .. } => 3,
            Self::Output { .. } => 4,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Computation { code, .. }
            | Self::Output { code, .. } => *code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
            Self::Computation {
                message,
                function,
                value,
                ..
            } => match value {
                Some(v) => format!("{} failed on {}: {}", function, v, message),
                None => format!("{} failed: {}", function, message),
            },
            Self::Output { message, path, .. } => match path {
                Some(p) => format!("Output error at {}: {}", p.display(), message),
                None => format!("Output error: {}", message),
            },
        }
    }

    /// Get a developer-friendly error message with full chain
    pub fn developer_message(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        msg.push_str(&format!("\n  ({})", describe_error_code(self.code())));
        msg
    }
}

/// Type alias for Results using ComposerError
pub type Result<T> = std::result::Result<T, ComposerError>;

impl From<serde_json::Error> for ComposerError {
    fn from(err: serde_json::Error) -> Self {
        ComposerError::output_with_code(
            ErrorCode::OUTPUT_SERIALIZATION,
            "Failed to render JSON",
            None,
        )
        .with_source(err)
    }
}

impl From<serde_yaml::Error> for ComposerError {
    fn from(err: serde_yaml::Error) -> Self {
        ComposerError::output_with_code(
            ErrorCode::OUTPUT_SERIALIZATION,
            "Failed to render YAML",
            None,
        )
        .with_source(err)
    }
}

impl From<toml::ser::Error> for ComposerError {
    fn from(err: toml::ser::Error) -> Self {
        ComposerError::output_with_code(
            ErrorCode::OUTPUT_SERIALIZATION,
            "Failed to render TOML",
            None,
        )
        .with_source(err)
    }
}
