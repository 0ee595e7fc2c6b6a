//! # config-composer
//!
//! Evaluates a static configuration record into a derived output record by
//! applying a small library of pure functions.
//!
//! ## Usage
//!
//! ```bash
//! config-composer eval [--format json|yaml|toml] [--compact] [-o PATH]
//! ```
//!
//! ## Modules
//!
//! - `app` - Application configuration, logging and fatal error reporting
//! - `cli` - Argument parsing and command routing
//! - `composer` - Builds the output record and verifies it
//! - `config` - The literal input record and typed field extraction
//! - `error` - Error taxonomy with stable codes and exit statuses
//! - `library` - Pure helpers: `to_upper`, `concat`, `sum`
//! - `output` - Rendering records as JSON, YAML or TOML
//!
//! ## Example
//!
//! ```
//! use config_composer::composer::compose;
//! use config_composer::config::ConfigRecord;
//! use config_composer::library::StandardLibrary;
//!
//! let output = compose(&ConfigRecord::example(), &StandardLibrary).unwrap();
//! assert_eq!(output.name, "\"example\"");
//! assert_eq!(output.calculated.name_with_version, "example-1.0.0");
//! assert_eq!(output.calculated.numbers, 15);
//! ```
pub mod app;
pub mod cli;
pub mod composer;
pub mod config;
pub mod error;
pub mod library;
pub mod output;
