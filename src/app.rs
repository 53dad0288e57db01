//! Application orchestration layer
//!
//! Hosts one PIN control on a terminal screen: a blocking thread collects input and
//! forwards actions over a channel, the control's callbacks post notifications over a
//! second channel, and a single async loop applies both and redraws.

use crate::error::Result;
use crate::input::{spawn_input_thread, InputAction};
use crate::pin::{CompletionMode, PinInput, PinInputConfig, SurfaceOptions, DEFAULT_PIN_LENGTH};
use crate::render::{AppEvent, PinStyles, RenderLoopState, ScreenState, UIRenderer};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How often the input thread re-checks the shutdown flag.
const INPUT_POLL_INTERVAL_MS: u64 = 50;

/// Resolved settings for the demo application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub pin_length: usize,
    pub auto_focus: bool,
    pub secure: bool,
    pub completion: CompletionMode,
    pub clear_on_complete: bool,
    pub theme: String,
    /// One-time code delivered through autofill right after startup.
    pub autofill: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            pin_length: DEFAULT_PIN_LENGTH,
            auto_focus: true,
            secure: false,
            completion: CompletionMode::default(),
            clear_on_complete: false,
            theme: "default".to_string(),
            autofill: None,
        }
    }
}

impl AppSettings {
    /// Build the control described by these settings, wiring its callbacks to `events`.
    pub fn build_pin_input(&self, events: mpsc::UnboundedSender<AppEvent>) -> Result<PinInput> {
        let changes = events.clone();
        let completions = events;
        let surface = SurfaceOptions {
            secure_text_entry: self.secure,
            ..SurfaceOptions::default()
        };

        PinInputConfig::new(self.pin_length)
            .auto_focus(self.auto_focus)
            .completion(self.completion)
            .theme(PinStyles::named(&self.theme)?)
            .surface(surface)
            .on_pin_change(move |pin| {
                let _ = changes.send(AppEvent::PinChanged(pin.to_string()));
            })
            .on_pin_complete(move |pin| {
                let _ = completions.send(AppEvent::PinCompleted(pin.to_string()));
            })
            .build()
    }
}

/// Application orchestrator
pub struct Application {
    settings: AppSettings,
    pin_input: PinInput,
    ui_renderer: Box<dyn UIRenderer>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl Application {
    pub fn new(settings: AppSettings, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let pin_input = settings.build_pin_input(event_tx)?;

        Ok(Self {
            settings,
            pin_input,
            ui_renderer,
            event_rx,
        })
    }

    pub fn pin_input(&self) -> &PinInput {
        &self.pin_input
    }

    /// Run against the real terminal: spawns the input thread and loops until quit.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(
            action_tx,
            Arc::clone(&shutdown),
            Duration::from_millis(INPUT_POLL_INTERVAL_MS),
        );

        let result = self.run_with_actions(action_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        let _ = input_thread.join();
        self.ui_renderer.cleanup()?;
        result
    }

    /// Event loop over an arbitrary action source. Returns when `Quit` arrives or the
    /// action channel closes.
    pub async fn run_with_actions(
        &mut self,
        mut action_rx: mpsc::UnboundedReceiver<InputAction>,
    ) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mask = self
            .settings
            .secure
            .then_some(self.pin_input.surface_options().mask_char);
        let mut screen = ScreenState::new(width, height).with_echo_mask(mask);
        let mut loop_state = RenderLoopState::new(self.settings.clear_on_complete);

        if let Some(code) = self.settings.autofill.clone() {
            if !self.pin_input.autofill(&code) {
                screen
                    .status_line
                    .set_message("Autofill not supported by this input".to_string());
            }
        }

        loop {
            while let Ok(event) = self.event_rx.try_recv() {
                loop_state.handle_app_event(event, &mut self.pin_input, &mut screen);
            }
            self.ui_renderer.render(&screen, &mut self.pin_input)?;

            tokio::select! {
                action = action_rx.recv() => match action {
                    Some(action) => {
                        if !loop_state.process_action(action, &mut self.pin_input, &mut screen) {
                            break;
                        }
                    }
                    None => break,
                },
                Some(event) = self.event_rx.recv() => {
                    loop_state.handle_app_event(event, &mut self.pin_input, &mut screen);
                }
            }
        }

        info!(
            "Exiting after {} completed PIN entries",
            loop_state.completions()
        );
        Ok(())
    }
}
