//! The hidden editable surface.
//!
//! A single-line text buffer the user actually types into. It is never drawn; the cell
//! row mirrors its value instead. The surface filters input according to its keyboard
//! type, enforces its own maximum length, and reports what happened as a queue of
//! [`SurfaceEvent`]s that the owning control drains and routes into the controller.

use crate::pin::controller::FocusTarget;
use std::collections::VecDeque;

/// Character filtering applied to typed and pasted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    /// ASCII digits only.
    #[default]
    NumberPad,
    /// Any printable character.
    Default,
}

impl KeyboardType {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            KeyboardType::NumberPad => ch.is_ascii_digit(),
            KeyboardType::Default => !ch.is_control(),
        }
    }
}

/// Semantic hint for what the surface holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    /// A code received out of band; enables [`HiddenInput::autofill`].
    #[default]
    OneTimeCode,
    /// Plain text with no autofill.
    None,
}

/// Text-input options forwarded verbatim to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub keyboard_type: KeyboardType,
    pub content_type: ContentType,
    pub secure_text_entry: bool,
    pub mask_char: char,
    pub editable: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            keyboard_type: KeyboardType::NumberPad,
            content_type: ContentType::OneTimeCode,
            secure_text_entry: false,
            mask_char: '•',
            editable: true,
        }
    }
}

/// Observable events raised by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    ChangeText(String),
    Focus,
    Blur,
}

/// Editing operations the surface understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEdit {
    Insert(char),
    DeleteBackward,
    Clear,
    Paste(String),
}

/// Invisible single-line input bound to the pin.
#[derive(Debug)]
pub struct HiddenInput {
    value: String,
    max_length: usize,
    focused: bool,
    options: SurfaceOptions,
    pending: VecDeque<SurfaceEvent>,
}

impl HiddenInput {
    pub fn new(max_length: usize, options: SurfaceOptions) -> Self {
        Self {
            value: String::new(),
            max_length,
            focused: false,
            options,
            pending: VecDeque::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Bind the displayed value. Binding never raises a change event.
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value.clear();
            self.value.push_str(value);
        }
    }

    /// Take focus, raising `Focus` if the surface was not already focused.
    pub fn focus(&mut self) {
        if !self.focused {
            self.focused = true;
            self.pending.push_back(SurfaceEvent::Focus);
        }
    }

    /// Drop focus, raising `Blur` if the surface was focused.
    pub fn blur(&mut self) {
        if self.focused {
            self.focused = false;
            self.pending.push_back(SurfaceEvent::Blur);
        }
    }

    /// Apply an edit from the keyboard. Edits are ignored while blurred or read-only.
    pub fn apply(&mut self, edit: SurfaceEdit) {
        if !self.focused || !self.options.editable {
            return;
        }

        let mut next = self.value.clone();
        match edit {
            SurfaceEdit::Insert(ch) => {
                if !self.options.keyboard_type.accepts(ch) || self.len() >= self.max_length {
                    return;
                }
                next.push(ch);
            }
            SurfaceEdit::DeleteBackward => {
                if next.pop().is_none() {
                    return;
                }
            }
            SurfaceEdit::Clear => {
                if next.is_empty() {
                    return;
                }
                next.clear();
            }
            SurfaceEdit::Paste(text) => {
                let room = self.max_length.saturating_sub(self.len());
                let accepted: String = self.filter(&text).take(room).collect();
                if accepted.is_empty() {
                    return;
                }
                next.push_str(&accepted);
            }
        }
        self.emit_change(next);
    }

    /// Populate the field with an externally received one-time code.
    ///
    /// Autofill replaces the whole value and bypasses the maximum length; the receiver is
    /// responsible for truncation. Returns `false` when the content type does not allow it.
    pub fn autofill(&mut self, code: &str) -> bool {
        if self.options.content_type != ContentType::OneTimeCode || !self.options.editable {
            return false;
        }
        let filled: String = self.filter(code).collect();
        self.emit_change(filled);
        true
    }

    /// Drain queued events in the order they happened.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SurfaceEvent> + '_ {
        self.pending.drain(..)
    }

    fn filter<'a>(&self, text: &'a str) -> impl Iterator<Item = char> + 'a {
        let keyboard = self.options.keyboard_type;
        text.chars().filter(move |&ch| keyboard.accepts(ch))
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn emit_change(&mut self, next: String) {
        self.value.clone_from(&next);
        self.pending.push_back(SurfaceEvent::ChangeText(next));
    }
}

impl FocusTarget for HiddenInput {
    fn request_focus(&mut self) {
        self.focus();
    }

    fn request_blur(&mut self) {
        self.blur();
    }
}
