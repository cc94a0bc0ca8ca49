//! Marker trait for intents.

/// Something that happened: a user action or a completed task.
///
/// Intents are handed to a [`Reducer`](super::Reducer) together with the
/// current state.
pub trait Intent: Send + 'static {}
