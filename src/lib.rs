pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod tasks;
pub mod ui;
pub mod validation;
