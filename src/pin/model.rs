//! Value types shared by the controller, the surface, and the cell renderer.
//!
//! Everything here is pure: truncation and active-cell derivation are free functions of
//! their inputs so the controller never stores a value it could recompute.

use crate::error::{PincellError, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Default number of cells when none is configured.
pub const DEFAULT_PIN_LENGTH: usize = 6;

/// Number of cells in a control, fixed for the control's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinLength(NonZeroUsize);

impl PinLength {
    /// Validate a cell count; zero cells is a configuration error.
    pub fn new(length: usize) -> Result<Self> {
        NonZeroUsize::new(length)
            .map(Self)
            .ok_or(PincellError::InvalidPinLength { length })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Index of the last cell.
    pub fn last_index(self) -> usize {
        self.0.get() - 1
    }
}

impl Default for PinLength {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_PIN_LENGTH).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PinLength {
    type Error = PincellError;

    fn try_from(length: usize) -> Result<Self> {
        Self::new(length)
    }
}

impl fmt::Display for PinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When `on_pin_complete` fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionMode {
    /// Fire once per transition into the full state. Any further change that leaves the
    /// pin full, with the same or a different value, stays silent until it drops below
    /// full again.
    #[default]
    Edge,
    /// Fire on every change that leaves the pin full, including replays.
    Level,
}

impl CompletionMode {
    /// Decide whether a change from `previous` to `next` completes the pin.
    pub fn fires(self, previous: &str, next: &str, length: PinLength) -> bool {
        if char_len(next) != length.get() {
            return false;
        }
        match self {
            CompletionMode::Edge => char_len(previous) < length.get(),
            CompletionMode::Level => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompletionMode::Edge => "edge",
            CompletionMode::Level => "level",
        }
    }
}

impl std::str::FromStr for CompletionMode {
    type Err = PincellError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "edge" => Ok(CompletionMode::Edge),
            "level" => Ok(CompletionMode::Level),
            other => Err(PincellError::config(format!(
                "unknown completion mode `{other}` (expected `edge` or `level`)"
            ))),
        }
    }
}

/// Length of a pin in characters.
pub fn char_len(pin: &str) -> usize {
    pin.chars().count()
}

/// Keep the first `length` characters of `raw`, dropping the rest.
pub fn truncate_pin(raw: &str, length: PinLength) -> &str {
    match raw.char_indices().nth(length.get()) {
        Some((byte_offset, _)) => &raw[..byte_offset],
        None => raw,
    }
}

/// Derive the highlighted cell: the next unfilled cell, or the last cell once full.
/// `None` while the surface is blurred.
pub fn derive_active_index(filled: usize, length: PinLength, focused: bool) -> Option<usize> {
    if !focused {
        return None;
    }
    Some(filled.min(length.last_index()))
}

/// Signed form of an active index, with `-1` standing for "no cell focused".
pub fn active_index_signed(index: Option<usize>) -> i64 {
    index.map_or(-1, |i| i as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: usize) -> PinLength {
        PinLength::new(n).unwrap()
    }

    #[test]
    fn test_pin_length_rejects_zero() {
        assert!(matches!(
            PinLength::new(0),
            Err(PincellError::InvalidPinLength { length: 0 })
        ));
        assert_eq!(len(4).get(), 4);
        assert_eq!(len(4).last_index(), 3);
        assert_eq!(PinLength::default().get(), DEFAULT_PIN_LENGTH);
        assert_eq!(PinLength::try_from(1).unwrap().last_index(), 0);
    }

    #[test]
    fn test_truncate_pin() {
        assert_eq!(truncate_pin("123456", len(4)), "1234");
        assert_eq!(truncate_pin("12", len(4)), "12");
        assert_eq!(truncate_pin("", len(4)), "");
        assert_eq!(truncate_pin("1234", len(4)), "1234");
    }

    #[test]
    fn test_truncate_pin_counts_characters_not_bytes() {
        assert_eq!(truncate_pin("١٢٣٤٥", len(3)), "١٢٣");
        assert_eq!(char_len(truncate_pin("é1é2é3", len(4))), 4);
    }

    #[test]
    fn test_derive_active_index() {
        assert_eq!(derive_active_index(0, len(6), true), Some(0));
        assert_eq!(derive_active_index(3, len(4), true), Some(3));
        assert_eq!(derive_active_index(4, len(4), true), Some(3));
        assert_eq!(derive_active_index(2, len(4), false), None);
    }

    #[test]
    fn test_active_index_signed() {
        assert_eq!(active_index_signed(None), -1);
        assert_eq!(active_index_signed(Some(3)), 3);
    }

    #[test]
    fn test_completion_modes() {
        let four = len(4);
        assert!(!CompletionMode::Edge.fires("12", "123", four));
        assert!(CompletionMode::Edge.fires("123", "1234", four));
        assert!(!CompletionMode::Edge.fires("1234", "1234", four));
        assert!(!CompletionMode::Edge.fires("1234", "5678", four));
        assert!(CompletionMode::Edge.fires("", "5678", four));

        assert!(!CompletionMode::Level.fires("12", "123", four));
        assert!(CompletionMode::Level.fires("1234", "1234", four));
    }

    #[test]
    fn test_completion_mode_parsing() {
        assert_eq!("edge".parse::<CompletionMode>().unwrap(), CompletionMode::Edge);
        assert_eq!(" Level ".parse::<CompletionMode>().unwrap(), CompletionMode::Level);
        assert!("sometimes".parse::<CompletionMode>().is_err());
        assert_eq!(CompletionMode::default(), CompletionMode::Edge);
    }
}
