//! Command-line front end for the git command bridge.
//!
//! Reads a JSON-encoded [`ActionRequest`], dispatches it through the
//! bridge, and prints the shaped reply.
//!
//! [`ActionRequest`]: gitbridge_models::ActionRequest

pub mod cli;
pub mod commands;
