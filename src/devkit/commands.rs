use std::process;

use tracing::{debug, instrument};

use crate::devkit::args::{registered_commands, Cli, CloneArgs, Commands, ServiceCommands};
use crate::error::{CliError, CliResult};
use crate::output;
use crate::spawn::Delegate;

/// External executable handling `devkit install`.
pub const INSTALL_PROGRAM: &str = "devkit-installer";

/// Post-parse validation: reject tokens that matched no registered command.
///
/// The parser captures them instead of erroring; the caller inspects the
/// returned value and decides how to report it.
pub fn validate_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::External(tokens)) = &cli.command {
        let token = tokens.first().cloned().unwrap_or_default();
        return Err(CliError::UnknownCommand {
            token,
            available: registered_commands(),
        });
    }
    Ok(())
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Clone(args)) => _clone(args),
        Some(Commands::Service { command }) => match command {
            ServiceCommands::Start { port } => _start(*port),
            ServiceCommands::Stop => _stop(),
        },
        Some(Commands::Install { name }) => _install(name.as_deref()),
        // Unknown tokens are reported by validate_command before dispatch.
        Some(Commands::External(_)) | None => Ok(()),
    }
}

#[instrument]
fn _clone(args: &CloneArgs) -> CliResult<()> {
    debug!(
        "source: {:?}, destination: {:?}, force: {}",
        args.source, args.destination, args.force
    );
    output::action(
        "clone",
        &format!(
            "{} -> {} (force: {})",
            args.source,
            args.destination.as_deref().unwrap_or("."),
            args.force
        ),
    );
    Ok(())
}

#[instrument]
fn _start(port: Option<u16>) -> CliResult<()> {
    match port {
        Some(port) => output::info(&format!("service starting at port {}", port)),
        None => output::info("service starting at default port"),
    }
    Ok(())
}

#[instrument]
fn _stop() -> CliResult<()> {
    output::info("service stopped");
    Ok(())
}

#[instrument]
fn _install(name: Option<&str>) -> CliResult<()> {
    let mut delegate = Delegate::new(INSTALL_PROGRAM);
    if let Some(name) = name {
        delegate = delegate.arg(name);
    }
    let status = delegate.status()?;
    if !status.success() {
        // propagate the child's exit code unchanged
        process::exit(status.code().unwrap_or(crate::exitcode::SOFTWARE));
    }
    Ok(())
}
