pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;
pub mod menu;

pub use context::Desktop;
