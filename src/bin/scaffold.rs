use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use scaffold_cli::logging::{self, LogConfig};
use scaffold_cli::scaffold::args::{registered_commands, Cli};
use scaffold_cli::scaffold::commands::execute_command;
use scaffold_cli::{exitcode, output};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => report_parse_failure(e),
    };

    logging::init(&LogConfig::from_debug_flag(cli.debug));

    if let Err(e) = execute_command(&cli) {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

/// Custom failure reporting replacing clap's default exit behavior.
fn report_parse_failure(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            process::exit(exitcode::OK);
        }
        ErrorKind::MissingSubcommand => {
            output::error(
                "a command is required. Pass --help to see all available commands and options.",
            );
            output::detail(&format!("commands: {}", registered_commands().join(", ")));
            process::exit(exitcode::USAGE);
        }
        _ => {
            // Keep clap's rendered message (it carries the closest-match
            // suggestion for unrecognized commands).
            output::error(err.render().to_string().trim_end());
            process::exit(exitcode::USAGE);
        }
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
