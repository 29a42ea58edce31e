//! Front-end B: dev workflow driver (`devkit`)

pub mod args;
pub mod commands;

pub use args::{Cli, CloneArgs, Commands, ServiceCommands};
pub use commands::{execute_command, validate_command};
