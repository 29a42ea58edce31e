//! CLI argument definitions using clap

use clap::{CommandFactory, Parser, Subcommand};

/// Static help block replacing the generated usage output.
pub const HELP_TEXT: &str = "\
devkit - drive the local dev workflow

Usage: devkit [-d|--debug] [-e|--envName <envName>] <command>

Commands:
  clone <source> [destination]   clone a repository (-f to force)
  service start [port]           start the local dev service
  service stop                   stop the local dev service
";

/// Drive the local dev workflow
#[derive(Parser, Debug)]
#[command(name = "devkit")]
#[command(version, about, long_about = None)]
#[command(override_help = HELP_TEXT)]
pub struct Cli {
    /// Enable debug output
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Environment profile name
    #[arg(short = 'e', long = "envName", value_name = "envName", global = true)]
    pub env_name: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository
    Clone(CloneArgs),

    /// Manage the local dev service
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Install a package via the external installer
    #[command(alias = "i", hide = true)]
    Install {
        /// Package to install
        name: Option<String>,
    },

    // Tokens that matched no registered command; checked after parse.
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(clap::Args, Debug)]
pub struct CloneArgs {
    /// Source repository
    pub source: String,

    /// Destination directory
    pub destination: Option<String>,

    /// Overwrite an existing destination
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Subcommand, Debug)]
pub enum ServiceCommands {
    /// Start the service
    Start {
        /// Port to listen on
        port: Option<u16>,
    },

    /// Stop the service
    Stop,
}

/// Names of all registered subcommands, hidden ones included.
pub fn registered_commands() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect()
}
