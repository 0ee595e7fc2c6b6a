//! Command routing and execution
//!
//! This module routes CLI commands to the evaluation pipeline. The
//! configuration and library are constructed here, once, and passed down.

use crate::app::AppConfig;
use crate::cli::args::{Cli, Commands};
use crate::composer::{evaluate, verify_evaluation};
use crate::config::{example_attrs, ConfigRecord};
use crate::library::StandardLibrary;
use crate::output::{render, write_output};
use anyhow::Result;
use tracing::info;

/// Build the application configuration from parsed arguments
pub fn app_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::new(cli.verbose);
    match &cli.command {
        Some(Commands::Eval {
            format,
            compact,
            output,
        }) => config
            .with_format(*format)
            .with_compact(*compact)
            .with_output(output.clone()),
        Some(Commands::Config { format }) => config.with_format(*format),
        Some(Commands::Verify) | None => config,
    }
}

/// What to run; every setting it needs lives in [`AppConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Eval,
    Config,
    Verify,
}

/// Pick the action for a parsed command; no subcommand means `eval`
pub fn action_for(command: Option<&Commands>) -> Action {
    match command {
        Some(Commands::Eval { .. }) | None => Action::Eval,
        Some(Commands::Config { .. }) => Action::Config,
        Some(Commands::Verify) => Action::Verify,
    }
}

/// Execute an action with the settings from `config`
pub fn execute_command(action: Action, config: &AppConfig) -> Result<()> {
    match action {
        Action::Eval => run_eval(config),
        Action::Config => run_config(config),
        Action::Verify => run_verify(),
    }
}

fn run_eval(config: &AppConfig) -> Result<()> {
    let record = evaluate(&example_attrs(), &StandardLibrary)?;
    let text = render(&record, config.format, config.compact)?;

    match &config.output {
        Some(path) => {
            write_output(path, &text)?;
            info!("Wrote {} output to {}", config.format, path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn run_config(config: &AppConfig) -> Result<()> {
    let record = ConfigRecord::from_value(&example_attrs())?;
    print!("{}", render(&record, config.format, false)?);
    Ok(())
}

fn run_verify() -> Result<()> {
    let record = verify_evaluation(&example_attrs(), &StandardLibrary)?;
    println!(
        "Verification succeeded: {} is reproducible",
        record.calculated.name_with_version
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_app_config_from_eval_args() {
        let cli = Cli::parse_from(["config-composer", "eval", "--compact", "-o", "out.json"]);
        let config = app_config(&cli);
        assert!(config.compact);
        assert_eq!(config.output, Some(PathBuf::from("out.json")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_app_config_defaults_without_subcommand() {
        let cli = Cli::parse_from(["config-composer", "-v"]);
        let config = app_config(&cli);
        assert_eq!(config.verbose, 1);
        assert!(config.output.is_none());
    }

    #[test]
    fn test_eval_writes_artifact() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("record.toml");
        let config = AppConfig::new(0)
            .with_format(OutputFormat::Toml)
            .with_output(Some(path.clone()));

        execute_command(Action::Eval, &config).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("nameWithVersion = \"example-1.0.0\""));
    }

    #[test]
    fn test_verify_command_succeeds() {
        assert!(execute_command(Action::Verify, &AppConfig::default()).is_ok());
    }

    #[test]
    fn test_action_for_commands() {
        let cli = Cli::parse_from(["config-composer", "config", "-f", "yaml"]);
        assert_eq!(action_for(cli.command.as_ref()), Action::Config);
        assert_eq!(app_config(&cli).format, OutputFormat::Yaml);

        let cli = Cli::parse_from(["config-composer", "verify"]);
        assert_eq!(action_for(cli.command.as_ref()), Action::Verify);

        assert_eq!(action_for(None), Action::Eval);
    }
}
