//! UI renderer trait
//!
//! This module defines the `UIRenderer` trait for drawing the PIN screen and managing
//! lifecycle hooks such as initialization and cleanup.

use crate::error::Result;
use crate::pin::PinInput;
use crate::render::state::ScreenState;

/// Core trait for UI rendering
pub trait UIRenderer {
    /// Render the screen and the control.
    ///
    /// Takes the control mutably so it can record where its cell row was drawn for press
    /// hit-testing.
    fn render(&mut self, screen: &ScreenState, pin_input: &mut PinInput) -> Result<()>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Enter the alternate screen
    /// - Enable mouse capture and bracketed paste
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::pin::PinInputConfig;

    /// Mock UI renderer for testing
    ///
    /// Records render invocations and the pin seen on the last frame.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub is_initialized: bool,
        pub last_pin: Option<String>,
        pub last_active_index: Option<usize>,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                is_initialized: false,
                last_pin: None,
                last_active_index: None,
            }
        }

        /// Set terminal size for testing
        pub fn set_terminal_size(&mut self, width: u16, height: u16) {
            self.terminal_size = (width, height);
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, _screen: &ScreenState, pin_input: &mut PinInput) -> Result<()> {
            self.render_count += 1;
            self.last_pin = Some(pin_input.pin().to_string());
            self.last_active_index = pin_input.active_index();
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let mut renderer = MockUIRenderer::new();
        let screen = ScreenState::new(80, 24);
        let mut pin_input = PinInputConfig::new(4).build().unwrap();

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        renderer.render(&screen, &mut pin_input).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert_eq!(renderer.last_pin.as_deref(), Some(""));
        assert_eq!(renderer.last_active_index, Some(0));

        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));
        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_resize_handling() {
        let mut renderer = MockUIRenderer::new();
        renderer.set_terminal_size(120, 30);
        assert_eq!(renderer.get_terminal_size().unwrap(), (120, 30));
    }
}
