//! Two independent scaffolding CLI front-ends sharing one ambient stack.
//!
//! - `scaffold` (see [`scaffold`]): declarative project bootstrapper with
//!   `init` and `list` subcommands.
//! - `devkit` (see [`devkit`]): dev workflow driver with `clone`, a nested
//!   `service` sub-program, and an `install` command that delegates to an
//!   external executable.
//!
//! Both front-ends are thin configuration layers over `clap`; handlers emit
//! the parsed-argument record or a static status message. There is no
//! cross-invocation state.

pub mod devkit;
pub mod error;
pub mod exitcode;
pub mod logging;
pub mod output;
pub mod scaffold;
pub mod spawn;
pub mod util;
