//! Crate-level error types.

use std::fmt;

/// Errors produced by the freecam crate.
///
/// The per-frame update path is infallible by design; errors only arise
/// from the options I/O surface.
#[derive(Debug)]
pub enum FreecamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for FreecamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FreecamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for FreecamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
