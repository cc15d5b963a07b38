//! Action dispatch bridge for git operations.
//!
//! This crate is the entry point for hosts: it validates incoming
//! requests, schedules them on a bounded worker pool, runs the built git
//! command, and reports exactly one outcome per request:
//! - `GitBridge` - validates, schedules and shuts down
//! - `DispatchHandle` - one-shot reply channel plus cancel trigger
//! - `BridgeEvent` - broadcast stream of action lifecycle events
//!
//! # Example
//!
//! ```ignore
//! use gitbridge_bridge::{BridgeConfig, GitBridge};
//! use gitbridge_models::ActionRequest;
//!
//! #[tokio::main]
//! async fn main() {
//!     let bridge = GitBridge::new(BridgeConfig::default());
//!
//!     let request = ActionRequest::new("status", "/path/to/repo");
//!     let handle = bridge.dispatch(request).await;
//!
//!     match handle.wait().await {
//!         Ok(payload) => println!("ok: {:?}", payload),
//!         Err(err) => eprintln!("error: {}", err),
//!     }
//!
//!     bridge.shutdown().await;
//! }
//! ```
//!
//! # Guarantees
//!
//! - Exactly one reply per dispatched request, never zero, never two
//! - Unknown actions and malformed arguments are rejected synchronously,
//!   before any work is scheduled
//! - Actions against the same working directory never overlap; distinct
//!   directories run concurrently up to the pool size
//! - Cancellation kills the child process and replies with an error
//! - After `shutdown`, no new work is scheduled and in-flight work is
//!   interrupted

pub mod bridge;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;

pub use bridge::GitBridge;
pub use config::BridgeConfig;
pub use dispatch::{ActionReply, CancelHandle, DispatchHandle};
pub use error::{BridgeError, Result};
pub use event::BridgeEvent;
