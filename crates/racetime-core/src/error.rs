//! Error types for the core crate

use std::fmt;
use thiserror::Error;

/// A named component of a time value, used to point at the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Hour => "hour",
            Component::Minute => "minute",
            Component::Second => "second",
            Component::Millisecond => "millisecond",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing value: {0} was not supplied")]
    MissingValue(Component),

    #[error("Value out of range: {component} = {value} (must be below {limit})")]
    OutOfRange {
        component: Component,
        value: u64,
        limit: u64,
    },

    #[error("Invalid format '{input}': {reason}")]
    Format { input: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the three construction failures of the time value types.
    pub fn is_time_error(&self) -> bool {
        matches!(
            self,
            Error::MissingValue(_) | Error::OutOfRange { .. } | Error::Format { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
