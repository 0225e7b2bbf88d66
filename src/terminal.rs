use crate::error::AppError;
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll, read},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use log::{debug, error};
use std::time::Duration;

/// A key press relevant to the interactive scanning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Newline,
    Exit,
}

/// Owns the terminal's raw-mode state for the lifetime of an interactive
/// session and restores it on drop.
pub struct TerminalManager {
    raw: bool,
}

impl TerminalManager {
    pub fn new() -> Self {
        TerminalManager { raw: false }
    }

    pub fn enter_raw(&mut self) -> Result<(), AppError> {
        debug!("Enabling raw mode");
        enable_raw_mode().map_err(|e| {
            error!("Failed to enable raw mode: {}", e);
            AppError::Terminal {
                source: e,
                context: Some("enable_raw_mode".to_string()),
            }
        })?;
        self.raw = true;
        Ok(())
    }

    /// Drops back to cooked mode so multi-line output renders normally.
    pub fn suspend_raw(&mut self) -> Result<(), AppError> {
        disable_raw_mode().map_err(|e| {
            error!("Failed to disable raw mode: {}", e);
            AppError::Terminal {
                source: e,
                context: Some("disable_raw_mode".to_string()),
            }
        })?;
        self.raw = false;
        Ok(())
    }

    /// Waits up to `timeout` for a key press. Esc and Ctrl+C both end
    /// the session.
    pub fn poll_key(timeout: Duration) -> Result<Option<KeyInput>, AppError> {
        if !poll(timeout).map_err(|e| {
            error!("Failed to poll terminal events: {}", e);
            AppError::Terminal {
                source: e,
                context: Some("poll terminal events".to_string()),
            }
        })? {
            return Ok(None);
        }

        match read().map_err(|e| {
            error!("Failed to read from terminal: {}", e);
            AppError::Terminal {
                source: e,
                context: Some("read terminal input".to_string()),
            }
        })? {
            Event::Key(KeyEvent {
                kind: KeyEventKind::Release,
                ..
            }) => Ok(None),
            Event::Key(KeyEvent {
                code: KeyCode::Esc, ..
            }) => {
                debug!("Escape key pressed, exiting");
                Ok(Some(KeyInput::Exit))
            }
            Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                debug!("Ctrl+C pressed, exiting");
                Ok(Some(KeyInput::Exit))
            }
            Event::Key(KeyEvent {
                code: KeyCode::Char(c),
                ..
            }) => Ok(Some(KeyInput::Char(c))),
            Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }) => Ok(Some(KeyInput::Newline)),
            _ => Ok(None),
        }
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.raw {
            debug!("Dropping TerminalManager, restoring terminal state");
            if let Err(e) = disable_raw_mode() {
                error!("Failed to disable raw mode: {}", e);
            }
        }
    }
}
