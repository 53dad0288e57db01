//! Terminal UI implementation using ratatui
//!
//! Concrete `UIRenderer` for a real terminal: raw mode, alternate screen, mouse capture
//! for presses on the cell row, and bracketed paste so pasted codes arrive in one piece.

use crate::error::Result;
use crate::pin::PinInput;
use crate::render::renderer::UIRenderer;
use crate::render::state::ScreenState;
use ratatui::crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    status_style: Style,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            status_style: Style::default().bg(Color::Blue).fg(Color::White),
        })
    }

    /// Lay out and draw the whole screen into `frame`.
    pub fn draw_screen(
        frame: &mut Frame,
        screen: &ScreenState,
        pin_input: &mut PinInput,
        status_style: Style,
    ) {
        let cell_height = pin_input.geometry().height;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(cell_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.size());

        let title = Paragraph::new(screen.title.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[1]);

        let prompt = Paragraph::new(screen.prompt.as_str()).alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[3]);

        pin_input.render(frame, chunks[4]);

        let echo = Paragraph::new(screen.echo_line())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(echo, chunks[6]);

        let status_text = screen.status_line.format_status_line(
            pin_input.pin().chars().count(),
            pin_input.pin_length().get(),
            pin_input.is_focused(),
        );
        frame.render_widget(Paragraph::new(status_text).style(status_style), chunks[8]);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, screen: &ScreenState, pin_input: &mut PinInput) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let status_style = self.status_style;
            terminal.draw(|frame| Self::draw_screen(frame, screen, pin_input, status_style))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(
                io::stdout(),
                LeaveAlternateScreen,
                DisableMouseCapture,
                DisableBracketedPaste
            )?;
            terminal.show_cursor()?;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
