mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::RegistrationIntent;
pub use reducer::RegistrationReducer;
pub use state::{FormData, RegistrationState, SubmitPhase, SUCCESS_MESSAGE};
