//! Terminal input subsystem.
//!
//! `raw` polls crossterm and normalizes terminal events; `service` maps them onto the
//! PIN control's editing and focus actions and runs the blocking input thread.

pub mod raw;
pub mod service;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::input` rather than reaching into submodules.
pub use raw::{RawInputCollector, RawInputEvent};
pub use service::{spawn_input_thread, InputAction, InputService, KeyBindings};
