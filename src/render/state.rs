//! Screen state shown around the PIN control
//!
//! The control owns the pin; this is the host's view of it, fed by the change and
//! completion callbacks the same way a host application would track it.

/// Everything the terminal draws except the cell row itself
#[derive(Debug, Clone)]
pub struct ScreenState {
    /// Heading at the top of the screen
    pub title: String,

    /// Instruction shown above the cells
    pub prompt: String,

    /// Last pin reported through `on_pin_change`
    pub echoed_pin: String,

    /// Mask applied to the echo line (secure entry)
    pub echo_mask: Option<char>,

    /// Status line content
    pub status_line: StatusLine,

    /// Terminal dimensions
    pub width: u16,
    pub height: u16,
}

impl ScreenState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            title: "PIN Input".to_string(),
            prompt: "Enter your PIN".to_string(),
            echoed_pin: String::new(),
            echo_mask: None,
            status_line: StatusLine::new(),
            width,
            height,
        }
    }

    pub fn with_echo_mask(mut self, mask: Option<char>) -> Self {
        self.echo_mask = mask;
        self
    }

    /// Line under the cells, e.g. `PIN: 1234`
    pub fn echo_line(&self) -> String {
        let shown: String = match self.echo_mask {
            Some(mask) => self.echoed_pin.chars().map(|_| mask).collect(),
            None => self.echoed_pin.clone(),
        };
        format!("PIN: {}", shown)
    }

    /// Update terminal dimensions. Returns true if they actually changed
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.width != width || self.height != height;
        if changed {
            self.width = width;
            self.height = height;
        }
        changed
    }
}

/// Status line information
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a temporary message
    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    /// Clear any temporary message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Format the status line for display
    pub fn format_status_line(&self, filled: usize, length: usize, focused: bool) -> String {
        let focus = if focused { "editing" } else { "idle" };
        let hints = "Tab focus | Esc blur | Ctrl+U clear | Ctrl+C quit";
        match &self.message {
            Some(message) => format!("{}/{} {} | {} | {}", filled, length, focus, message, hints),
            None => format!("{}/{} {} | {}", filled, length, focus, hints),
        }
    }
}
