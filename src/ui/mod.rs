pub mod app;
pub mod events;
pub mod field;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod registration;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod todos;

pub use runtime::run;
