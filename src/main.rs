use clap::Parser;
use config_composer::app::{handle_fatal_error, init_logging};
use config_composer::cli::{action_for, app_config, execute_command, Cli};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let config = app_config(&cli);
    let action = action_for(cli.command.as_ref());

    init_logging(&config);

    match execute_command(action, &config) {
        Ok(()) => debug!("config-composer completed successfully"),
        Err(e) => handle_fatal_error(e, config.verbose),
    }
}
