//! Action grammar table and command builder for the git command bridge.
//!
//! This crate turns a loosely typed [`ActionRequest`] into a concrete git
//! invocation and shapes the result for the caller:
//! - `GitAction` - closed set of supported actions, one typed variant per
//!   action; parsing a request validates its arguments and options against
//!   the action's grammar
//! - `build` - pure construction of a [`CommandSpec`] from a parsed action;
//!   identical inputs always yield an identical argument vector
//! - `report` - per-action success payload and failure message tables
//!
//! [`ActionRequest`]: gitbridge_models::ActionRequest
//! [`CommandSpec`]: gitbridge_models::CommandSpec

pub mod action;
pub mod builder;
pub mod error;
pub mod report;

pub use action::{GitAction, ACTION_NAMES};
pub use builder::build;
pub use error::{GrammarError, Result};
pub use report::{failure_message, success_payload};
