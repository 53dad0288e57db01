//! Rendering subsystem.
//!
//! Hosts the cell row widget and its styles, the screen state shown around the control,
//! the terminal renderer, and the render loop that applies input actions.

pub mod cells;
pub mod renderer;
pub mod service;
pub mod state;
pub mod terminal;
pub mod theme;

pub use cells::{CellGeometry, PinCells};
pub use renderer::UIRenderer;
pub use service::{AppEvent, RenderLoopState};
pub use state::{ScreenState, StatusLine};
pub use terminal::TerminalUI;
pub use theme::PinStyles;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;

pub use ratatui::style::{Color, Style};
