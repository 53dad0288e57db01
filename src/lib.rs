//! # pincell - Segmented PIN Entry for Terminal UIs
//!
//! A fixed-length code is edited through one hidden text surface while the user sees a
//! row of cells that mirror the entered characters and highlight the active cell.
//!
//! ## Architecture
//!
//! - [`pin`] - The controller, the hidden surface, and the composed [`PinInput`] control
//! - [`render`] - Cell row widget, styles, terminal renderer, and render loop
//! - [`input`] - Terminal event collection and key bindings
//! - [`app`] - Demo application hosting one control
//! - [`error`] - Centralized error types and handling
//!
//! ## Example
//!
//! ```
//! use pincell::{PinInputConfig, SurfaceEdit};
//!
//! let mut pin = PinInputConfig::new(4)
//!     .on_pin_complete(|code| println!("entered {code}"))
//!     .build()
//!     .unwrap();
//!
//! for digit in "1234".chars() {
//!     pin.edit(SurfaceEdit::Insert(digit));
//! }
//! assert!(pin.is_complete());
//! assert_eq!(pin.active_index(), Some(3));
//! ```

// Core modules
pub mod error;
pub mod pin;

// Subsystems
pub mod input;
pub mod render;

pub mod app;
#[cfg(feature = "config")]
pub mod config;

// Re-export commonly used types for convenience
pub use error::{PincellError, Result};

// Public API surface for external usage
pub use app::{AppSettings, Application};
pub use pin::{
    CompletionMode, FocusTarget, PinController, PinInput, PinInputConfig, PinLength,
    SurfaceEdit, SurfaceOptions,
};
pub use render::{CellGeometry, PinCells, PinStyles};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
