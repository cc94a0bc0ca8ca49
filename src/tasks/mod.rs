//! Asynchronous actions: simulated latency today, a transport hook for
//! real I/O later.
//!
//! The UI never awaits anything. It asks the [`TaskScheduler`] to run an
//! [`Operation`]; the scheduler runs it on the tokio runtime through a
//! [`Transport`] and posts `AppEvent::TaskCompleted` back to the event
//! loop. Every task can be cancelled through its [`TaskHandle`].

mod operation;
mod scheduler;
mod transport;

pub use operation::{Operation, OperationKind};
pub use scheduler::{TaskHandle, TaskId, TaskScheduler};
pub use transport::{BoxFuture, SimulatedTransport, Transport};
