//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Reducers never start timers or touch the terminal. Side effects are
/// derived afterwards from the new state by the owner of the state.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
