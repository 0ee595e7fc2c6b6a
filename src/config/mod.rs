//! Input configuration record
//!
//! The configuration is literal data baked into the program. It exists in two
//! shapes: the untyped attribute set returned by [`example_attrs`], and the
//! typed [`ConfigRecord`] extracted from it by [`ConfigRecord::from_value`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub mod attrs;

use crate::error::Result;

/// Target platform of the configured system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemDescriptor {
    pub arch: String,
    pub os: String,
}

impl SystemDescriptor {
    pub fn new(arch: impl Into<String>, os: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            os: os.into(),
        }
    }
}

/// The static configuration every evaluation starts from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub name: String,
    pub version: String,
    pub system: SystemDescriptor,
}

impl ConfigRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        system: SystemDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            system,
        }
    }

    /// The built-in configuration, already typed
    pub fn example() -> Self {
        Self::new("example", "1.0.0", SystemDescriptor::new("x86_64", "linux"))
    }

    /// Extract a typed record from an attribute set
    ///
    /// Fails with a configuration error naming the first missing or
    /// mistyped field, e.g. `system.os`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = attrs::require_object(value, "<root>")?;
        let system = attrs::require_object(attrs::require_field(root, "system", "")?, "system")?;

        Ok(Self {
            name: attrs::require_str(root, "name", "")?,
            version: attrs::require_str(root, "version", "")?,
            system: SystemDescriptor {
                arch: attrs::require_str(system, "arch", "system")?,
                os: attrs::require_str(system, "os", "system")?,
            },
        })
    }
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self::example()
    }
}

/// The built-in configuration as an untyped attribute set
pub fn example_attrs() -> Value {
    json!({
        "name": "example",
        "version": "1.0.0",
        "system": {
            "arch": "x86_64",
            "os": "linux"
        }
    })
}
