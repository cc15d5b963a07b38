//! Protocol data model for the git command bridge.
//!
//! This crate defines the types that flow through the bridge:
//! - `ActionRequest` - what a caller submits (action name, working
//!   directory, positional arguments, option map)
//! - `CommandSpec` - a concrete external command invocation (executable,
//!   argument vector, working directory)
//! - `ExecutionOutcome` - captured result of running a command
//! - `Payload` - the shaped success value delivered back to the caller
//!
//! All types are plain data: a request is immutable once dispatched, a
//! command spec is built once per request and never mutated, and an
//! outcome is produced once per run. Wire names are camelCase to match
//! the host application's JSON surface.

pub mod command;
pub mod reply;
pub mod request;

pub use command::{CommandSpec, ExecutionOutcome};
pub use reply::Payload;
pub use request::{ActionRequest, OptionValue};
