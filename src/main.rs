mod cli;
mod color;
mod config;
mod error;
mod logging;
mod render;
mod scanner;
mod terminal;

use crate::error::AppError;
use crate::render::RenderMode;
use crate::scanner::TokenScanner;
use crate::terminal::{KeyInput, TerminalManager};
use crossterm::execute;
use crossterm::style::Print;
use crossterm::tty::IsTty;
use log::LevelFilter;
use std::io::{self, Read, Write};
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn run_app() -> Result<(), AppError> {
    let args = cli::parse_args();

    let stderr_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::setup_logging(stderr_level, config::LOG_FILE).map_err(|e| AppError::Io {
        source: e,
        context: Some("logging setup".to_string()),
    })?;

    log::debug!("hex256 v{}", env!("CARGO_PKG_VERSION"));

    let stop_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&stop_signal);

    ctrlc::set_handler(move || {
        log::debug!("Ctrl+C detected, setting stop signal.");
        signal_clone.store(true, Ordering::Relaxed);
    })
    .map_err(|e| {
        log::error!("Failed to set Ctrl-C handler: {}", e);
        AppError::Io {
            source: io::Error::new(
                io::ErrorKind::Other,
                format!("Ctrl-C handler setup failed: {}", e),
            ),
            context: None,
        }
    })?;

    let mode = if args.swatch {
        RenderMode::Swatch
    } else {
        RenderMode::Plain
    };

    if args.colors.is_empty() || args.interactive {
        run_stream(mode, &stop_signal)
    } else {
        run_args(&args.colors, mode, &stop_signal)
    }
}

/// Argument mode: every token is classified verbatim, the classifier's
/// own case-insensitive validation applying. Invalid tokens are reported
/// and processing continues.
fn run_args(tokens: &[String], mode: RenderMode, stop: &AtomicBool) -> Result<(), AppError> {
    let mut stdout = io::stdout();

    for token in tokens {
        if stop.load(Ordering::Relaxed) {
            return Err(AppError::Interrupted);
        }

        let outcome = color::classify(token);
        if let Err(ref e) = outcome {
            log::warn!("{}", e);
        }
        render::render(&mut stdout, token, &outcome, mode)?;
    }

    stdout.flush().map_err(|e| AppError::Io {
        source: e,
        context: Some("flush stdout".to_string()),
    })
}

fn run_stream(mode: RenderMode, stop: &AtomicBool) -> Result<(), AppError> {
    if io::stdin().is_tty() {
        run_stream_tty(mode, stop)
    } else {
        run_stream_piped(mode, stop)
    }
}

/// Interactive mode: scan key presses in raw mode, echoing them, and
/// classify each completed token. Esc or Ctrl+C ends the session.
fn run_stream_tty(mode: RenderMode, stop: &AtomicBool) -> Result<(), AppError> {
    log::info!("Scanning for hex colors; Esc or Ctrl+C to exit.");

    let mut terminal_manager = TerminalManager::new();
    terminal_manager.enter_raw()?;

    let mut scanner = TokenScanner::new();
    let mut stdout = io::stdout();

    loop {
        if stop.load(Ordering::Relaxed) {
            return Err(AppError::Interrupted);
        }

        match TerminalManager::poll_key(config::EVENT_POLL_INTERVAL)? {
            Some(KeyInput::Exit) => {
                echo(&mut stdout, "\r\n")?;
                break;
            }
            Some(KeyInput::Newline) => {
                echo(&mut stdout, "\r\n")?;
                scanner.push('\n');
            }
            Some(KeyInput::Char(c)) => {
                echo(&mut stdout, c)?;
                if let Some(token) = scanner.push(c) {
                    echo(&mut stdout, "\r\n")?;
                    // Cooked mode for the result so line breaks render
                    terminal_manager.suspend_raw()?;
                    let outcome = color::classify(&token);
                    render::render(&mut stdout, &token, &outcome, mode)?;
                    terminal_manager.enter_raw()?;
                }
            }
            None => {}
        }
    }

    Ok(())
}

/// Piped mode: the same scanner fed from the raw stdin byte stream.
fn run_stream_piped(mode: RenderMode, stop: &AtomicBool) -> Result<(), AppError> {
    let mut scanner = TokenScanner::new();
    let mut stdout = io::stdout();

    for byte in io::stdin().lock().bytes() {
        if stop.load(Ordering::Relaxed) {
            return Err(AppError::Interrupted);
        }

        let byte = byte.map_err(|e| AppError::Io {
            source: e,
            context: Some("read stdin".to_string()),
        })?;

        if let Some(token) = scanner.push(byte as char) {
            let outcome = color::classify(&token);
            render::render(&mut stdout, &token, &outcome, mode)?;
        }
    }

    stdout.flush().map_err(|e| AppError::Io {
        source: e,
        context: Some("flush stdout".to_string()),
    })
}

fn echo<T: std::fmt::Display>(stdout: &mut io::Stdout, content: T) -> Result<(), AppError> {
    execute!(stdout, Print(content)).map_err(|e| AppError::Io {
        source: e,
        context: Some("echo input".to_string()),
    })
}

fn main() {
    let main_result = std::panic::catch_unwind(run_app);

    let _ = crossterm::terminal::disable_raw_mode();

    match main_result {
        Ok(Ok(_)) => {
            log::debug!("Done.");
            exit(0);
        }
        Ok(Err(AppError::Interrupted)) => {
            eprintln!("\nInterrupted.");
            log::warn!("Interrupted by user.");
            exit(130);
        }
        Ok(Err(e)) => {
            eprintln!("\n\x1b[0m\x1b[31mError:\x1b[0m {}", e);
            log::error!("Application exited with error: {}", e);
            exit(1);
        }
        Err(panic_payload) => {
            eprintln!("\n\x1b[0m\x1b[91mCritical Error: Application Panicked!\x1b[0m");
            log::error!("Application panicked: {:?}", panic_payload);
            if let Some(s) = panic_payload.downcast_ref::<String>() {
                eprintln!("Panic message: {}", s);
            } else if let Some(s) = panic_payload.downcast_ref::<&str>() {
                eprintln!("Panic message: {}", s);
            }
            exit(101);
        }
    }
}
