//! External executable dispatch.
//!
//! Some commands delegate to a separate installed binary instead of an
//! in-process handler. [`Delegate`] makes that explicit: resolve the program
//! on `PATH`, spawn it with forwarded arguments and inherited stdio, and hand
//! the child's exit status back to the caller to propagate.

use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, instrument};
use which::which;

#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("executable not found on PATH: {program}")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Io {
        program: String,
        source: std::io::Error,
    },
}

/// A pending dispatch to an external executable.
#[derive(Debug, Clone)]
pub struct Delegate {
    program: String,
    args: Vec<String>,
}

impl Delegate {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one forwarded argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append all forwarded arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Resolve the program, run it to completion with inherited stdio, and
    /// return its exit status.
    #[instrument]
    pub fn status(&self) -> Result<ExitStatus, SpawnError> {
        let resolved = which(&self.program).map_err(|_| SpawnError::NotFound {
            program: self.program.clone(),
        })?;
        debug!("delegating to {:?} with args {:?}", resolved, self.args);

        Command::new(resolved)
            .args(&self.args)
            .status()
            .map_err(|source| SpawnError::Io {
                program: self.program.clone(),
                source,
            })
    }
}
