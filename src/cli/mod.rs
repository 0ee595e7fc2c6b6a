//! Command-line interface
//!
//! - `args` - clap argument structures
//! - `router` - dispatch of parsed commands

pub mod args;
pub mod router;

pub use args::{Cli, Commands};
pub use router::{action_for, app_config, execute_command, Action};
