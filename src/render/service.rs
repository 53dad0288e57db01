//! Render coordination helpers.
//!
//! Applies input actions to the PIN control and host notifications to the screen state.
//! Both run on the render loop, one at a time, so a completion that triggers a clear is
//! handled in its own update rather than inside the control's callback.

use crate::input::InputAction;
use crate::pin::PinInput;
use crate::render::state::ScreenState;
use log::debug;

/// Notifications posted by the control's callbacks back to the render loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    PinChanged(String),
    PinCompleted(String),
}

/// Tracks render-related state that must persist across input actions and notifications.
#[derive(Debug, Default)]
pub struct RenderLoopState {
    clear_on_complete: bool,
    completions: usize,
}

impl RenderLoopState {
    pub fn new(clear_on_complete: bool) -> Self {
        Self {
            clear_on_complete,
            completions: 0,
        }
    }

    pub fn completions(&self) -> usize {
        self.completions
    }

    /// Apply an input action. Returns false once the loop should stop.
    pub fn process_action(
        &mut self,
        action: InputAction,
        pin_input: &mut PinInput,
        screen: &mut ScreenState,
    ) -> bool {
        match action {
            InputAction::Quit => return false,
            InputAction::Edit(edit) => {
                screen.status_line.clear_message();
                pin_input.edit(edit);
            }
            InputAction::Press { column, row } => {
                if !pin_input.press_at(column, row) {
                    debug!("Press at ({}, {}) outside the cell row", column, row);
                }
            }
            InputAction::Focus => pin_input.focus(),
            InputAction::Blur => pin_input.blur(),
            InputAction::Resize { width, height } => {
                screen.update_terminal_size(width, height);
            }
            InputAction::NoAction | InputAction::InvalidInput => {}
        }
        true
    }

    /// Apply a notification from the control's callbacks.
    pub fn handle_app_event(
        &mut self,
        event: AppEvent,
        pin_input: &mut PinInput,
        screen: &mut ScreenState,
    ) {
        match event {
            AppEvent::PinChanged(pin) => {
                screen.echoed_pin = pin;
            }
            AppEvent::PinCompleted(pin) => {
                self.completions += 1;
                screen.status_line.set_message(format!(
                    "PIN entry complete ({} digits)",
                    pin.chars().count()
                ));
                if self.clear_on_complete {
                    pin_input.clear();
                }
            }
        }
    }
}
