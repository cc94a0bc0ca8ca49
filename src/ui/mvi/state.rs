//! Marker trait for UI state.

/// Marker trait for component state.
///
/// States are cloneable snapshots, comparable so tests can assert on whole
/// transitions, and defaultable so a reducer can take ownership through
/// `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
