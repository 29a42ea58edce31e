use std::process;

use clap::Parser;

use scaffold_cli::devkit::args::Cli;
use scaffold_cli::devkit::commands::{execute_command, validate_command};
use scaffold_cli::error::CliError;
use scaffold_cli::logging::{self, LogConfig};
use scaffold_cli::output;

fn main() {
    let cli = Cli::parse();

    logging::init(&LogConfig::from_debug_flag(cli.debug));

    // Unknown commands are diagnostics only: report the token and the live
    // command registry, then return without forcing a failure exit.
    if let Err(e) = validate_command(&cli) {
        if let CliError::UnknownCommand { token, available } = &e {
            output::error(&format!("unknown command: {}", token));
            output::detail(&format!("available commands: {}", available.join(", ")));
        }
        return;
    }

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
