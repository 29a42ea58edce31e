use tracing::{debug, instrument};

use crate::error::CliResult;
use crate::output;
use crate::scaffold::args::{Cli, Commands};

/// Immutable parsed-argument record handed to a subcommand handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub command: &'static str,
    pub debug: bool,
    pub registry: Option<String>,
    pub name: Option<String>,
}

impl Record {
    pub fn from_cli(cli: &Cli) -> Self {
        let (command, name) = match &cli.command {
            Commands::Init(args) => ("init", args.project_name().map(str::to_owned)),
            Commands::List => ("list", None),
        };
        Self {
            command,
            debug: cli.debug,
            registry: cli.registry.clone(),
            name,
        }
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Init(_) => _init(cli),
        Commands::List => _list(cli),
    }
}

#[instrument]
fn _init(cli: &Cli) -> CliResult<()> {
    let record = Record::from_cli(cli);
    debug!("record: {:?}", record);
    // Stub contract: a real implementation would materialize the project here.
    output::info(&format!("{:#?}", record));
    Ok(())
}

#[instrument]
fn _list(cli: &Cli) -> CliResult<()> {
    let record = Record::from_cli(cli);
    debug!("record: {:?}", record);
    output::info(&format!("{:#?}", record));
    Ok(())
}
