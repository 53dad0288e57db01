//! The PIN control: a hidden surface, the controller, and the cell row composed together.
//!
//! `PinInput` keeps the surface's value bound to the controller's pin, routes surface
//! events into the controller, and forwards presses on the cell row to the surface. Hosts
//! drive focus imperatively through [`PinInput::focus`] and [`PinInput::blur`].

use crate::error::Result;
use crate::pin::controller::{FocusTarget, PinCallbacks, PinController};
use crate::pin::model::{CompletionMode, PinLength, DEFAULT_PIN_LENGTH};
use crate::pin::surface::{HiddenInput, SurfaceEdit, SurfaceEvent, SurfaceOptions};
use crate::render::cells::{CellGeometry, PinCells};
use crate::render::theme::PinStyles;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Construction options for a [`PinInput`].
pub struct PinInputConfig {
    pin_length: usize,
    auto_focus: bool,
    completion: CompletionMode,
    callbacks: PinCallbacks,
    theme: PinStyles,
    style_overrides: PinStyles,
    geometry: CellGeometry,
    surface: SurfaceOptions,
}

impl Default for PinInputConfig {
    fn default() -> Self {
        Self {
            pin_length: DEFAULT_PIN_LENGTH,
            auto_focus: true,
            completion: CompletionMode::default(),
            callbacks: PinCallbacks::default(),
            theme: PinStyles::default(),
            style_overrides: PinStyles::empty(),
            geometry: CellGeometry::default(),
            surface: SurfaceOptions::default(),
        }
    }
}

impl PinInputConfig {
    pub fn new(pin_length: usize) -> Self {
        Self {
            pin_length,
            ..Self::default()
        }
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn completion(mut self, completion: CompletionMode) -> Self {
        self.completion = completion;
        self
    }

    pub fn on_pin_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_pin_change = Some(Box::new(callback));
        self
    }

    pub fn on_pin_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.on_pin_complete = Some(Box::new(callback));
        self
    }

    /// Base theme the caller's overrides are layered onto.
    pub fn theme(mut self, theme: PinStyles) -> Self {
        self.theme = theme;
        self
    }

    /// Container, cell, focused-cell, and cell-text overrides.
    pub fn styles(mut self, overrides: PinStyles) -> Self {
        self.style_overrides = overrides;
        self
    }

    pub fn geometry(mut self, geometry: CellGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Text-input options passed through to the hidden surface untouched.
    pub fn surface(mut self, options: SurfaceOptions) -> Self {
        self.surface = options;
        self
    }

    /// Validate the configuration and mount the control.
    pub fn build(self) -> Result<PinInput> {
        PinInput::new(self)
    }
}

/// A mounted PIN control.
#[derive(Debug)]
pub struct PinInput {
    controller: PinController,
    surface: HiddenInput,
    styles: PinStyles,
    geometry: CellGeometry,
    press_region: Option<Rect>,
}

impl PinInput {
    pub fn new(config: PinInputConfig) -> Result<Self> {
        let length = PinLength::new(config.pin_length)?;
        let controller = PinController::new(length, config.auto_focus)
            .with_completion(config.completion)
            .with_callbacks(config.callbacks);
        let surface = HiddenInput::new(length.get(), config.surface);

        let mut input = Self {
            controller,
            surface,
            styles: config.theme.patch(config.style_overrides),
            geometry: config.geometry,
            press_region: None,
        };
        if config.auto_focus {
            input.focus();
        }
        Ok(input)
    }

    /// Focus the hidden surface.
    pub fn focus(&mut self) {
        self.surface.request_focus();
        self.dispatch_surface_events();
    }

    /// Blur the hidden surface.
    pub fn blur(&mut self) {
        self.surface.request_blur();
        self.dispatch_surface_events();
    }

    /// A press anywhere on the cell row.
    pub fn press(&mut self) {
        self.controller.handle_press(&mut self.surface);
        self.dispatch_surface_events();
    }

    /// A press at a terminal position; returns whether it landed on the cell row.
    pub fn press_at(&mut self, column: u16, row: u16) -> bool {
        let hit = self
            .press_region
            .is_some_and(|region| {
                column >= region.x
                    && column < region.right()
                    && row >= region.y
                    && row < region.bottom()
            });
        if hit {
            self.press();
        }
        hit
    }

    /// Apply a keyboard edit to the surface.
    pub fn edit(&mut self, edit: SurfaceEdit) {
        self.surface.apply(edit);
        self.dispatch_surface_events();
    }

    /// Deliver an externally received one-time code through the surface.
    pub fn autofill(&mut self, code: &str) -> bool {
        let accepted = self.surface.autofill(code);
        self.dispatch_surface_events();
        accepted
    }

    /// Empty the pin as a regular change cycle. Hosts call this after completion from a
    /// later update, never from inside a callback.
    pub fn clear(&mut self) {
        self.apply_change("");
    }

    pub fn pin(&self) -> &str {
        self.controller.pin()
    }

    pub fn pin_length(&self) -> PinLength {
        self.controller.length()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    pub fn is_focused(&self) -> bool {
        self.surface.is_focused()
    }

    pub fn is_complete(&self) -> bool {
        self.controller.is_complete()
    }

    pub fn styles(&self) -> &PinStyles {
        &self.styles
    }

    pub fn surface_options(&self) -> &SurfaceOptions {
        self.surface.options()
    }

    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// The cell row widget for the current state.
    pub fn cells(&self) -> PinCells<'_> {
        let options = self.surface.options();
        let mask = options.secure_text_entry.then_some(options.mask_char);
        PinCells::new(
            self.controller.pin(),
            self.controller.active_index(),
            self.controller.length(),
            &self.styles,
        )
        .geometry(self.geometry)
        .mask(mask)
    }

    /// Draw the cell row into `area` and remember it as the press region.
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.press_region = Some(area);
        frame.render_widget(self.cells(), area);
    }

    /// Region used for press hit-testing, set by the last render.
    pub fn press_region(&self) -> Option<Rect> {
        self.press_region
    }

    /// Run a change through the controller and bind the result back to the surface.
    /// Changes that arrive while the surface is blurred (autofill, clear) leave the
    /// controller blurred too.
    fn apply_change(&mut self, raw: &str) {
        self.controller.handle_change_text(raw);
        self.surface.set_value(self.controller.pin());
        if !self.surface.is_focused() {
            self.controller.handle_blur();
        }
    }

    fn dispatch_surface_events(&mut self) {
        let events: Vec<SurfaceEvent> = self.surface.drain_events().collect();
        for event in events {
            match event {
                SurfaceEvent::ChangeText(raw) => self.apply_change(&raw),
                SurfaceEvent::Focus => self.controller.handle_focus(),
                SurfaceEvent::Blur => self.controller.handle_blur(),
            }
        }
    }
}
