//! Process executor for the git command bridge.
//!
//! This crate runs a [`CommandSpec`] as a real child process:
//! - No shell: the executable is invoked directly with its argument vector
//! - Stdout and stderr are read line by line into buffers
//! - A configurable timeout (default 120s) kills runaway processes
//! - Cancellation through a watch channel kills the child mid-run
//! - A launch failure (binary missing, bad working directory) is a distinct
//!   error; a non-zero exit is a normal [`ExecutionOutcome`]
//!
//! [`CommandSpec`]: gitbridge_models::CommandSpec
//! [`ExecutionOutcome`]: gitbridge_models::ExecutionOutcome

pub mod error;
pub mod executor;

pub use error::{ExecError, Result};
pub use executor::{ProcessExecutor, DEFAULT_TIMEOUT};
