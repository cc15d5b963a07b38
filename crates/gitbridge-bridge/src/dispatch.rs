//! Dispatch handles: one reply, one cancel trigger per request.

use tokio::sync::{oneshot, watch};

use gitbridge_models::Payload;

use crate::error::BridgeError;

/// The single reply for one dispatched request.
pub type ActionReply = std::result::Result<Payload, BridgeError>;

/// Handle returned by `dispatch`.
///
/// Holds the receiving end of the one-shot reply channel and the cancel
/// trigger for the request. The reply fires exactly once; consuming the
/// handle through [`wait`](DispatchHandle::wait) yields it. Dropping the
/// handle abandons the reply but never the running action; cancel
/// explicitly to stop it.
#[derive(Debug)]
pub struct DispatchHandle {
    reply_rx: oneshot::Receiver<ActionReply>,
    cancel_tx: watch::Sender<bool>,
}

impl DispatchHandle {
    pub(crate) fn new(
        reply_rx: oneshot::Receiver<ActionReply>,
        cancel_tx: watch::Sender<bool>,
    ) -> Self {
        Self {
            reply_rx,
            cancel_tx,
        }
    }

    /// Requests cancellation of the action.
    ///
    /// If the command is already running its process is killed; if it is
    /// still queued it never launches. Either way the reply fires exactly
    /// once, with a `Cancelled` error. Cancelling an already finished
    /// request has no effect.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Waits for the reply.
    pub async fn wait(self) -> ActionReply {
        match self.reply_rx.await {
            Ok(reply) => reply,
            Err(err) => Err(BridgeError::Channel(err.to_string())),
        }
    }

    /// Splits the handle into a cancel trigger and the reply future.
    ///
    /// Useful when one task should be able to cancel while another waits.
    pub fn split(self) -> (CancelHandle, oneshot::Receiver<ActionReply>) {
        (CancelHandle { cancel_tx: self.cancel_tx }, self.reply_rx)
    }
}

/// Standalone cancel trigger for a dispatched request.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancel_tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Requests cancellation of the action.
    pub fn cancel(&self) {
        let _ = self.cancel_tx.send(true);
    }
}
