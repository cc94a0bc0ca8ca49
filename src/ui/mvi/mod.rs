//! Model-View-Intent primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to render
//! - **Intent**: a keystroke, focus change or timer completion
//! - **Reducer**: the only place a state transition happens

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
