//! Front-end A: declarative project bootstrapper (`scaffold`)

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{execute_command, Record};
