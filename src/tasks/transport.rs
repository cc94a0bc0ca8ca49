use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::config::ConfigStore;
use crate::tasks::operation::{Operation, OperationKind};

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Carries an operation to wherever it is handled.
///
/// Completion of the returned future means the operation succeeded; there
/// is no failure path.
pub trait Transport: Send + Sync + 'static {
    fn perform(&self, operation: &Operation) -> BoxFuture;
}

/// Waits a fixed, configured delay and then succeeds.
///
/// Delays are read from the config store on every call, so a reload
/// applies to the next operation.
pub struct SimulatedTransport {
    config: ConfigStore,
}

impl SimulatedTransport {
    pub fn new(config: ConfigStore) -> Self {
        Self { config }
    }

    pub fn delay_for(&self, kind: OperationKind) -> Duration {
        let timing = self.config.get().timing;
        let millis = match kind {
            OperationKind::Register => timing.submit_delay_ms,
            OperationKind::AddTodo => timing.add_delay_ms,
            OperationKind::SaveEdit => timing.edit_delay_ms,
        };
        Duration::from_millis(millis)
    }
}

impl Transport for SimulatedTransport {
    fn perform(&self, operation: &Operation) -> BoxFuture {
        let delay = self.delay_for(operation.kind());
        // Built lazily: callers may sit outside the runtime.
        Box::pin(async move { tokio::time::sleep(delay).await })
    }
}
