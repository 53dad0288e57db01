//! PIN state controller.
//!
//! Reconciles raw text-change events from the hidden surface into a bounded pin, derives
//! the active cell, fires change/completion callbacks, and tracks the focus lifecycle.
//! It knows nothing about how cells are drawn.

use crate::pin::model::{char_len, derive_active_index, truncate_pin, CompletionMode, PinLength};
use log::{debug, info};

/// Callback receiving the normalized pin.
pub type PinCallback = Box<dyn FnMut(&str)>;

/// Anything that can be asked to take or drop keyboard focus.
///
/// The controller never owns the surface it delegates to; callers hand it a handle for
/// the duration of a press.
pub trait FocusTarget {
    fn request_focus(&mut self);
    fn request_blur(&mut self);
}

/// Host notifications bound at construction.
#[derive(Default)]
pub struct PinCallbacks {
    pub on_pin_change: Option<PinCallback>,
    pub on_pin_complete: Option<PinCallback>,
}

impl std::fmt::Debug for PinCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinCallbacks")
            .field("on_pin_change", &self.on_pin_change.is_some())
            .field("on_pin_complete", &self.on_pin_complete.is_some())
            .finish()
    }
}

/// State machine owning the pin and its focus flag.
#[derive(Debug)]
pub struct PinController {
    pin: String,
    length: PinLength,
    focused: bool,
    completion: CompletionMode,
    callbacks: PinCallbacks,
}

impl PinController {
    /// Create a controller. An auto-focused control highlights the first cell immediately,
    /// before the surface reports its focus event.
    pub fn new(length: PinLength, auto_focus: bool) -> Self {
        Self {
            pin: String::new(),
            length,
            focused: auto_focus,
            completion: CompletionMode::default(),
            callbacks: PinCallbacks::default(),
        }
    }

    pub fn with_completion(mut self, completion: CompletionMode) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_callbacks(mut self, callbacks: PinCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Apply a raw change event from the surface.
    ///
    /// The value is truncated to the configured length, `on_pin_change` always fires with
    /// the truncated value, and `on_pin_complete` fires according to the completion mode.
    /// Callbacks must not feed another change back into this controller synchronously.
    pub fn handle_change_text(&mut self, raw: &str) {
        let next = truncate_pin(raw, self.length);
        let completes = self.completion.fires(&self.pin, next, self.length);

        if next.len() < raw.len() {
            debug!(
                "Truncated {}-character input to {} cells",
                char_len(raw),
                self.length
            );
        }

        self.pin.clear();
        self.pin.push_str(next);
        // Changes only come from a focused surface.
        self.focused = true;
        debug!(
            "PIN changed: {}/{} filled, active cell {:?}",
            self.filled(),
            self.length,
            self.active_index()
        );

        if let Some(on_change) = self.callbacks.on_pin_change.as_mut() {
            on_change(&self.pin);
        }

        if completes {
            info!("PIN entry complete ({} cells)", self.length);
            if let Some(on_complete) = self.callbacks.on_pin_complete.as_mut() {
                on_complete(&self.pin);
            }
        }
    }

    pub fn handle_focus(&mut self) {
        self.focused = true;
        debug!("PIN focused, active cell {:?}", self.active_index());
    }

    pub fn handle_blur(&mut self) {
        self.focused = false;
        debug!("PIN blurred");
    }

    /// Delegate a press on the cell row to the surface. The pin is untouched.
    pub fn handle_press(&self, target: &mut dyn FocusTarget) {
        target.request_focus();
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn length(&self) -> PinLength {
        self.length
    }

    pub fn completion(&self) -> CompletionMode {
        self.completion
    }

    pub fn filled(&self) -> usize {
        char_len(&self.pin)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_complete(&self) -> bool {
        self.filled() == self.length.get()
    }

    /// Currently highlighted cell; `None` while blurred.
    pub fn active_index(&self) -> Option<usize> {
        derive_active_index(self.filled(), self.length, self.focused)
    }
}
