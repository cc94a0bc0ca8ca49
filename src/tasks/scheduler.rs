use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;

use crate::shutdown::ShutdownHandle;
use crate::tasks::operation::{Operation, OperationKind};
use crate::tasks::transport::Transport;
use crate::ui::events::AppEvent;

/// Identifies one scheduled task. Never reused within a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Cancellation handle for a scheduled operation.
#[derive(Debug)]
pub struct TaskHandle {
    id: TaskId,
    operation: Operation,
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn kind(&self) -> OperationKind {
        self.operation.kind()
    }

    /// Stop the task. Its completion event will not be sent.
    ///
    /// No-op if the task already finished.
    pub fn cancel(&self) {
        if !self.abort.is_finished() {
            tracing::debug!(task = %self.id, kind = ?self.kind(), "Task cancelled");
        }
        self.abort.abort();
    }
}

/// Runs operations on the tokio runtime and reports completions to the
/// UI event channel.
pub struct TaskScheduler {
    runtime: Handle,
    transport: Arc<dyn Transport>,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
    next_id: AtomicU64,
}

impl TaskScheduler {
    pub fn new(
        runtime: Handle,
        transport: Arc<dyn Transport>,
        events: mpsc::Sender<AppEvent>,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            runtime,
            transport,
            events,
            shutdown,
            next_id: AtomicU64::new(1),
        }
    }

    /// Start `operation`. Completion is delivered as
    /// `AppEvent::TaskCompleted` unless the task is cancelled first or
    /// shutdown begins.
    pub fn schedule(&self, operation: Operation) -> TaskHandle {
        let id = TaskId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let work = self.transport.perform(&operation);
        let events = self.events.clone();
        let shutdown = self.shutdown.clone();
        let completed = operation.clone();

        tracing::debug!(task = %id, kind = ?operation.kind(), "Task scheduled");

        let join = self.runtime.spawn(async move {
            tokio::select! {
                _ = work => {
                    tracing::debug!(task = %id, kind = ?completed.kind(), "Task completed");
                    if events
                        .send(AppEvent::TaskCompleted {
                            task: id,
                            operation: completed,
                        })
                        .is_err()
                    {
                        tracing::trace!(task = %id, "Completion dropped (event loop gone)");
                    }
                }
                _ = shutdown.wait() => {
                    tracing::debug!(task = %id, "Task dropped on shutdown");
                }
            }
        });

        TaskHandle {
            id,
            operation,
            abort: join.abort_handle(),
        }
    }
}
