mod ids;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use ids::TodoIdGenerator;
pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{
    AddPhase, EditSession, TodoFocus, TodoItem, TodoListState, ADDED_NOTICE, EMPTY_PLACEHOLDER,
    UPDATED_NOTICE,
};
