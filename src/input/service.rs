//! High-level input service.
//!
//! Consumes raw events, applies the PIN key bindings, and yields domain-level
//! `InputAction`s that the render loop applies to the control.

use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent};
use crate::pin::SurfaceEdit;
use log::warn;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions emitted by the key bindings/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    /// Edit forwarded to the hidden surface.
    Edit(SurfaceEdit),
    /// Press at a terminal position, hit-tested against the cell row.
    Press { column: u16, row: u16 },
    Focus,
    Blur,
    Quit,
    Resize { width: u16, height: u16 },
    NoAction,
    InvalidInput,
}

/// Key bindings for the PIN screen.
///
/// Printable characters are forwarded as inserts and the surface decides whether its
/// keyboard type accepts them.
#[derive(Debug, Default)]
pub struct KeyBindings;

impl KeyBindings {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL) => InputAction::Quit,
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => InputAction::Edit(SurfaceEdit::Clear),
            (KeyCode::Char(ch), modifiers)
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputAction::Edit(SurfaceEdit::Insert(ch))
            }
            (KeyCode::Backspace, _) => InputAction::Edit(SurfaceEdit::DeleteBackward),
            (KeyCode::Tab, _) | (KeyCode::Enter, _) => InputAction::Focus,
            (KeyCode::Esc, _) => InputAction::Blur,
            _ => InputAction::InvalidInput,
        }
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    bindings: KeyBindings,
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::new(),
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.pop_pending() {
                if let Some(action) = self.process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.pop_pending() {
            if let Some(action) = self.process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(&mut self, event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => self.bindings.handle_key_event(key_event),
            RawInputEvent::Paste(text) => InputAction::Edit(SurfaceEdit::Paste(text)),
            RawInputEvent::Press { column, row } => InputAction::Press { column, row },
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the render loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    warn!("Input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
