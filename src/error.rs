//! Crate-level error types.

use std::fmt;

/// Errors produced by the gallery-controls crate.
#[derive(Debug)]
pub enum ControlsError {
    /// The target plane is missing or lacks plane semantics (finite unit
    /// normal and finite constant).
    InvalidTarget(String),
    /// The camera's initial position lies exactly on the target plane, so
    /// no aim direction can be derived from it.
    OrientationUnknowable,
    /// A numeric option violates its documented range.
    InvalidOptions(String),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget(msg) => {
                write!(f, "'target' must be a well-formed plane: {msg}")
            }
            Self::OrientationUnknowable => write!(
                f,
                "orientation unknowable: initial camera position cannot \
                 intersect the target plane"
            ),
            Self::InvalidOptions(msg) => write!(f, "invalid options: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ControlsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
