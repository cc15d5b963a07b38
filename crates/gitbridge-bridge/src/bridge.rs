//! The bridge: validation, scheduling and result reporting.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{broadcast, oneshot, watch, Mutex, Semaphore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use gitbridge_command::{build, failure_message, success_payload, GitAction};
use gitbridge_exec::{ExecError, ProcessExecutor};
use gitbridge_models::{ActionRequest, Payload};

use crate::config::BridgeConfig;
use crate::dispatch::{ActionReply, DispatchHandle};
use crate::error::BridgeError;
use crate::event::BridgeEvent;

/// Dispatches git actions to a bounded worker pool.
///
/// `dispatch` validates a request synchronously and returns at once; the
/// build, execution and reporting happen on a worker task. Every request
/// gets exactly one reply through its one-shot channel. Actions targeting
/// the same working directory are serialized; distinct directories run
/// concurrently up to the pool size.
pub struct GitBridge {
    /// Configuration.
    config: BridgeConfig,
    /// Process executor shared by all workers.
    executor: ProcessExecutor,
    /// Worker pool permits; excess work queues here.
    workers: Arc<Semaphore>,
    /// Per-working-directory locks.
    path_locks: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
    /// Event broadcast channel.
    event_tx: broadcast::Sender<BridgeEvent>,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    /// Shutdown signal receiver (for cloning into workers).
    shutdown_rx: watch::Receiver<bool>,
    /// In-flight worker tasks, drained at shutdown.
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl GitBridge {
    /// Creates a bridge with the given configuration.
    pub fn new(config: BridgeConfig) -> Self {
        let executor = ProcessExecutor::new(config.command_timeout);
        let workers = Arc::new(Semaphore::new(config.max_workers));
        let (event_tx, _) = broadcast::channel(256);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            config,
            executor,
            workers,
            path_locks: Arc::new(Mutex::new(HashMap::new())),
            event_tx,
            shutdown_tx,
            shutdown_rx,
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Subscribe to bridge events.
    pub fn subscribe(&self) -> broadcast::Receiver<BridgeEvent> {
        self.event_tx.subscribe()
    }

    /// Returns true once shutdown has been requested.
    pub fn is_shut_down(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Validates a request and schedules it for execution.
    ///
    /// Returns immediately; the reply arrives later through the handle. A
    /// request that fails validation (unknown action, missing argument,
    /// wrong option kind) gets its error reply before any work is
    /// scheduled, as does any request arriving after shutdown.
    pub async fn dispatch(&self, request: ActionRequest) -> DispatchHandle {
        let (reply_tx, reply_rx) = oneshot::channel();
        let (cancel_tx, cancel_rx) = watch::channel(false);
        let handle = DispatchHandle::new(reply_rx, cancel_tx);

        if self.is_shut_down() {
            warn!(action = %request.name, "dispatch rejected, bridge is shut down");
            let _ = reply_tx.send(Err(BridgeError::ShutDown));
            return handle;
        }

        let action = match GitAction::from_request(&request) {
            Ok(action) => action,
            Err(err) => {
                warn!(action = %request.name, error = %err, "request failed validation");
                let _ = reply_tx.send(Err(err.into()));
                return handle;
            }
        };

        debug!(
            action = action.name(),
            directory = %request.working_directory.display(),
            "action scheduled"
        );
        self.emit_event(BridgeEvent::ActionStarted {
            action: action.name().to_string(),
            working_directory: request.working_directory.clone(),
            at: Utc::now(),
        });

        let worker = Worker {
            action,
            working_directory: request.working_directory,
            program: self.config.git_program.clone(),
            executor: self.executor.clone(),
            workers: Arc::clone(&self.workers),
            path_locks: Arc::clone(&self.path_locks),
            event_tx: self.event_tx.clone(),
            shutdown_rx: self.shutdown_rx.clone(),
        };
        let task = tokio::spawn(worker.run(cancel_rx, reply_tx));

        let mut tasks = self.tasks.lock().await;
        tasks.retain(|t| !t.is_finished());
        tasks.push(task);

        handle
    }

    /// Shuts the bridge down.
    ///
    /// Flips the shutdown flag so no new work is scheduled, interrupts
    /// queued and running actions (their replies fire with an error), and
    /// waits for all worker tasks to finish.
    pub async fn shutdown(&self) {
        if self.shutdown_tx.send_replace(true) {
            debug!("shutdown already requested");
        } else {
            info!("shutting down bridge");
        }

        let tasks: Vec<_> = self.tasks.lock().await.drain(..).collect();
        for task in tasks {
            if let Err(err) = task.await {
                warn!(error = %err, "worker task panicked during shutdown");
            }
        }

        info!("bridge stopped");
    }

    /// Emit an event to all subscribers.
    fn emit_event(&self, event: BridgeEvent) {
        // Ignore send errors (no receivers)
        let _ = self.event_tx.send(event);
    }
}

impl Drop for GitBridge {
    fn drop(&mut self) {
        // Interrupt any workers still running
        let _ = self.shutdown_tx.send(true);
    }
}

/// One unit of work: build, execute, report.
struct Worker {
    action: GitAction,
    working_directory: PathBuf,
    program: String,
    executor: ProcessExecutor,
    workers: Arc<Semaphore>,
    path_locks: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
    event_tx: broadcast::Sender<BridgeEvent>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Worker {
    async fn run(self, mut cancel_rx: watch::Receiver<bool>, reply_tx: oneshot::Sender<ActionReply>) {
        let action_name = self.action.name();
        let result = self.execute(&mut cancel_rx).await;

        match &result {
            Ok(_) => {
                info!(action = action_name, "action completed");
                let _ = self.event_tx.send(BridgeEvent::ActionCompleted {
                    action: action_name.to_string(),
                    at: Utc::now(),
                });
            }
            Err(err) => {
                warn!(action = action_name, error = %err, "action failed");
                let _ = self.event_tx.send(BridgeEvent::ActionFailed {
                    action: action_name.to_string(),
                    error: err.to_string(),
                    at: Utc::now(),
                });
            }
        }

        if reply_tx.send(result).is_err() {
            debug!(action = action_name, "caller dropped the reply handle");
        }
    }

    async fn execute(&self, cancel_rx: &mut watch::Receiver<bool>) -> ActionReply {
        let mut shutdown_rx = self.shutdown_rx.clone();

        // Queue on the worker pool; cancellation and shutdown win while
        // the request waits for a permit.
        let _permit = tokio::select! {
            permit = self.workers.acquire() => {
                permit.map_err(|_| BridgeError::ShutDown)?
            }
            _ = watch_true(cancel_rx) => return Err(BridgeError::Cancelled),
            _ = watch_true(&mut shutdown_rx) => return Err(BridgeError::ShutDown),
        };

        // Serialize actions against the same working directory.
        let path_lock = {
            let mut locks = self.path_locks.lock().await;
            Arc::clone(locks.entry(self.working_directory.clone()).or_default())
        };
        let _guard = tokio::select! {
            guard = path_lock.lock() => guard,
            _ = watch_true(cancel_rx) => return Err(BridgeError::Cancelled),
            _ = watch_true(&mut shutdown_rx) => return Err(BridgeError::ShutDown),
        };

        let spec = build(&self.action, &self.program, &self.working_directory);
        let run = tokio::select! {
            res = self.executor.run_cancellable(&spec, cancel_rx.clone()) => res,
            // Dropping the run future kills the child (kill_on_drop).
            _ = watch_true(&mut shutdown_rx) => return Err(BridgeError::ShutDown),
        };

        let outcome = match run {
            Ok(outcome) => outcome,
            Err(err) => {
                // The repository probe reports any execution failure as a
                // negative result, matching the host's historical
                // semantics. Cancellation still reports as cancelled.
                if self.action.is_probe() && !matches!(err, ExecError::Cancelled) {
                    return Ok(Payload::Flag(false));
                }
                return Err(err.into());
            }
        };

        if outcome.success() {
            Ok(success_payload(&self.action, &outcome))
        } else if self.action.is_probe() {
            Ok(Payload::Flag(false))
        } else {
            Err(BridgeError::CommandFailed {
                message: failure_message(&self.action).to_string(),
                outcome,
            })
        }
    }
}

/// Resolves when the watch value becomes true; pends forever once the
/// sender is gone.
async fn watch_true(rx: &mut watch::Receiver<bool>) {
    loop {
        if *rx.borrow() {
            return;
        }
        if rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
