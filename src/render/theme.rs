//! Cell styles and built-in themes using ratatui colors
//!
//! Styles compose as ordered override layers: the theme's layer first, then the caller's
//! overrides, then the focused layer for the active cell. Layering uses
//! [`Style::patch`], so an unset field in a later layer leaves the earlier value alone.

use crate::error::{PincellError, Result};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Style layers for the cell row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinStyles {
    /// Background region holding the row
    pub container: Style,

    /// Border style for every cell
    pub cell: Style,

    /// Border style layered on top of `cell` for the active cell
    pub focused_cell: Style,

    /// Digit style inside a cell
    pub cell_text: Style,

    /// Border shape for idle cells (None keeps the earlier layer's shape)
    pub cell_border: Option<BorderType>,

    /// Border shape for the active cell
    pub focused_border: Option<BorderType>,
}

impl Default for PinStyles {
    /// Light grey rounded cells with a thick blue active cell
    fn default() -> Self {
        Self {
            container: Style::default(),
            cell: Style::default().fg(Color::Rgb(204, 204, 204)),
            focused_cell: Style::default().fg(Color::Rgb(0, 123, 255)),
            cell_text: Style::default().add_modifier(Modifier::BOLD),
            cell_border: Some(BorderType::Rounded),
            focused_border: Some(BorderType::Thick),
        }
    }
}

impl PinStyles {
    /// An empty layer that changes nothing when patched on top of another.
    pub fn empty() -> Self {
        Self {
            container: Style::default(),
            cell: Style::default(),
            focused_cell: Style::default(),
            cell_text: Style::default(),
            cell_border: None,
            focused_border: None,
        }
    }

    /// Theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            container: Style::default(),
            cell: Style::default().fg(Color::Gray),
            focused_cell: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            cell_text: Style::default().fg(Color::White),
            cell_border: Some(BorderType::Plain),
            focused_border: Some(BorderType::Double),
        }
    }

    /// High-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            container: Style::default().bg(Color::Black),
            cell: Style::default().fg(Color::White).bg(Color::Black),
            focused_cell: Style::default().fg(Color::LightYellow),
            cell_text: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            cell_border: Some(BorderType::Plain),
            focused_border: Some(BorderType::Thick),
        }
    }

    /// Look a theme up by name.
    pub fn named(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::default()),
            "monochrome" | "mono" => Ok(Self::monochrome()),
            "high-contrast" | "high_contrast" => Ok(Self::high_contrast()),
            other => Err(PincellError::config(format!("unknown theme `{other}`"))),
        }
    }

    /// Lay `overrides` on top of this layer.
    pub fn patch(self, overrides: PinStyles) -> Self {
        Self {
            container: self.container.patch(overrides.container),
            cell: self.cell.patch(overrides.cell),
            focused_cell: self.focused_cell.patch(overrides.focused_cell),
            cell_text: self.cell_text.patch(overrides.cell_text),
            cell_border: overrides.cell_border.or(self.cell_border),
            focused_border: overrides.focused_border.or(self.focused_border),
        }
    }

    /// Resolved border style for a cell.
    pub fn cell_style(&self, focused: bool) -> Style {
        if focused {
            self.cell.patch(self.focused_cell)
        } else {
            self.cell
        }
    }

    /// Resolved border shape for a cell.
    pub fn border_type(&self, focused: bool) -> BorderType {
        let idle = self.cell_border.unwrap_or(BorderType::Plain);
        if focused {
            self.focused_border.unwrap_or(idle)
        } else {
            idle
        }
    }
}
