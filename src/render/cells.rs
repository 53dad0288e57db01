//! Cell row widget.
//!
//! Draws `length` bordered cells from `(pin, active_index)`. The widget is stateless: it
//! reads the pin and never changes it. The whole container area counts as the press
//! region, so presses between or around cells still reach the surface.

use crate::pin::model::PinLength;
use crate::render::theme::PinStyles;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Widget};

/// Size of a single cell and the space between cells, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    pub width: u16,
    pub height: u16,
    pub gap: u16,
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self {
            width: 5,
            height: 3,
            gap: 1,
        }
    }
}

impl CellGeometry {
    /// Width taken by a row of `count` cells.
    pub fn row_width(&self, count: usize) -> u16 {
        let count = u16::try_from(count).unwrap_or(u16::MAX);
        count
            .saturating_mul(self.width)
            .saturating_add(count.saturating_sub(1).saturating_mul(self.gap))
    }

    /// Rectangles for each cell, centered in `area` and clipped to it.
    pub fn cell_rects(&self, area: Rect, count: usize) -> Vec<Rect> {
        let row_width = self.row_width(count);
        let x0 = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + area.height.saturating_sub(self.height) / 2;
        let step = self.width.saturating_add(self.gap);

        (0..count)
            .map(|index| {
                let offset = u16::try_from(index)
                    .unwrap_or(u16::MAX)
                    .saturating_mul(step);
                Rect::new(x0.saturating_add(offset), y, self.width, self.height)
                    .intersection(area)
            })
            .collect()
    }
}

/// Stateless presentation of the pin as a row of cells.
#[derive(Debug, Clone)]
pub struct PinCells<'a> {
    pin: &'a str,
    active_index: Option<usize>,
    length: PinLength,
    styles: &'a PinStyles,
    geometry: CellGeometry,
    mask: Option<char>,
}

impl<'a> PinCells<'a> {
    pub fn new(
        pin: &'a str,
        active_index: Option<usize>,
        length: PinLength,
        styles: &'a PinStyles,
    ) -> Self {
        Self {
            pin,
            active_index,
            length,
            styles,
            geometry: CellGeometry::default(),
            mask: None,
        }
    }

    pub fn geometry(mut self, geometry: CellGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Show `mask` in filled cells instead of the entered character.
    pub fn mask(mut self, mask: Option<char>) -> Self {
        self.mask = mask;
        self
    }

    /// Text shown in cell `index`.
    pub fn cell_content(&self, index: usize) -> Option<char> {
        let ch = self.pin.chars().nth(index)?;
        Some(self.mask.unwrap_or(ch))
    }
}

impl Widget for PinCells<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.styles.container);

        let mut digits = self.pin.chars();
        for (index, rect) in self
            .geometry
            .cell_rects(area, self.length.get())
            .into_iter()
            .enumerate()
        {
            let digit = digits.next();
            if rect.is_empty() {
                continue;
            }

            let focused = self.active_index == Some(index);
            let block = Block::bordered()
                .border_type(self.styles.border_type(focused))
                .border_style(self.styles.cell_style(focused));

            let text = digit
                .map(|ch| self.mask.unwrap_or(ch).to_string())
                .unwrap_or_default();
            Paragraph::new(Span::styled(text, self.styles.cell_text))
                .alignment(Alignment::Center)
                .block(block)
                .render(rect, buf);
        }
    }
}
