//! Wrappers around the external desktop tools: one module per tool, each
//! pairing command builders with a parser for that tool's output.

pub mod audio;
pub mod brightness;
pub mod keyboard;
pub mod notify;
pub mod pactl;
pub mod picker;
pub mod profile;
pub mod recorder;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use notify::{Notifier, NotifySend};
pub use picker::{MenuRequest, Picker, RofiPicker};

/// Sentinel for state that could not be read.
pub const UNKNOWN: &str = "Unknown";
