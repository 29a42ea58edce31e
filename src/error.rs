//! Top-level CLI errors shared by both front-ends

use thiserror::Error;

use crate::spawn::SpawnError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// A token in command position matched no registered command.
    /// Produced by post-parse validation, not by the parser itself.
    #[error("unknown command: {token}")]
    UnknownCommand {
        token: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::UnknownCommand { .. } => crate::exitcode::USAGE,
            CliError::Spawn(e) => match e {
                SpawnError::NotFound { .. } => crate::exitcode::UNAVAILABLE,
                SpawnError::Io { .. } => crate::exitcode::OSERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_maps_to_usage_exit_code() {
        let err = CliError::UnknownCommand {
            token: "clnoe".into(),
            available: vec!["clone".into()],
        };
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
        assert_eq!(err.to_string(), "unknown command: clnoe");
    }

    #[test]
    fn unresolvable_spawn_maps_to_unavailable_exit_code() {
        let err = CliError::from(SpawnError::NotFound {
            program: "devkit-installer".into(),
        });
        assert_eq!(err.exit_code(), crate::exitcode::UNAVAILABLE);
    }
}
