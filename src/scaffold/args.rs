//! CLI argument definitions using clap

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

const EPILOGUE: &str = "\
Project templates are fetched from the configured registry.
Run `scaffold init --help` to get started.";

/// Bootstrap new projects from registry templates
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(version, about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = false)]
#[command(override_usage = "scaffold <command> [options]")]
#[command(after_help = EPILOGUE)]
pub struct Cli {
    /// Bootstrap debug mode
    #[arg(short, long, global = true, help_heading = "Debug Options")]
    pub debug: bool,

    /// Package registry to use: npm or yarn
    #[arg(
        short,
        long,
        global = true,
        value_name = "registry",
        help_heading = "Registry Options"
    )]
    pub registry: Option<String>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap a new project
    Init(InitArgs),

    /// List local packages
    #[command(visible_aliases = ["ll", "la", "ls"])]
    List,
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Name of the project
    pub name: Option<String>,

    /// Name of the project (overrides the positional)
    #[arg(short = 'n', long = "name", value_name = "name")]
    pub name_flag: Option<String>,
}

impl InitArgs {
    /// Resolved project name; the flag wins over the positional.
    pub fn project_name(&self) -> Option<&str> {
        self.name_flag.as_deref().or(self.name.as_deref())
    }
}

/// Names of all registered subcommands, in declaration order.
pub fn registered_commands() -> Vec<String> {
    Cli::command()
        .get_subcommands()
        .map(|c| c.get_name().to_string())
        .collect()
}
