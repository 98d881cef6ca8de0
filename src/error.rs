//! Unified error types for the monitor simulation.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! binary's exit-code mapping in one `match`.

use core::fmt;
use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the simulation funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// The input source could not be opened.
    SourceUnavailable { path: PathBuf, kind: io::ErrorKind },
    /// Configuration failed validation.
    Config(ConfigError),
    /// Writing a status report to the console failed.
    Output(io::ErrorKind),
}

impl Error {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::SourceUnavailable { .. } => 1,
            Self::Config(_) | Self::Output(_) => 2,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable { path, kind } => {
                write!(f, "source '{}' unavailable: {kind}", path.display())
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Output(kind) => write!(f, "console output failed: {kind}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Output(e.kind())
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
