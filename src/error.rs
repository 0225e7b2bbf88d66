use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        source: io::Error,
        context: Option<String>,
    },

    #[error("Terminal error: {source}")]
    Terminal {
        source: io::Error,
        context: Option<String>,
    },

    #[error("'{0}' is not a 6-digit hex color")]
    InvalidHexDigit(String),

    #[error("User interruption")]
    Interrupted,
}
