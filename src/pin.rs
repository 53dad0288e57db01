//! PIN entry control.
//!
//! The controller owns the pin and derives the active cell; the hidden surface is what the
//! user types into; [`PinInput`] composes both with the cell row renderer.

pub mod controller;
pub mod input;
pub mod model;
pub mod surface;

// Public re-exports for convenience. Modules outside this crate should prefer importing
// from `crate::pin` rather than reaching into submodules.
pub use controller::{FocusTarget, PinCallback, PinCallbacks, PinController};
pub use input::{PinInput, PinInputConfig};
pub use model::{
    active_index_signed, derive_active_index, truncate_pin, CompletionMode, PinLength,
    DEFAULT_PIN_LENGTH,
};
pub use surface::{
    ContentType, HiddenInput, KeyboardType, SurfaceEdit, SurfaceEvent, SurfaceOptions,
};
