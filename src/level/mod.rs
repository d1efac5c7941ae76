//! Severity levels, two of which double as process-escalation signals.

use std::fmt;
use std::str::FromStr;

use crate::escalate::Escalation;

/// No `Ord` derive: the discriminants are storage ranks, not a severity
/// ordering the logger compares against (there is no minimum-level filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Normal operational milestones: service started, config loaded, etc.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warning = 2,
    /// Failures the caller can survive; the line is recorded and control returns.
    Error = 3,
    /// Records the line, then the process terminates with a non-zero status.
    Fatal = 4,
    /// Records the line, then raises an unrecoverable fault (a Rust panic).
    Panic = 5,
}

impl Level {
    /// Uppercase because log lines carry the tag as `[LEVEL]`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Convenience for iteration, in ascending rank order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Fatal,
            Self::Panic,
        ]
    }

    /// The storage rank of this level.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The control-flow effect a write at this level requests after the line
    /// has been appended. `None` means control returns to the caller.
    #[must_use]
    pub const fn escalation(self) -> Option<Escalation> {
        match self {
            Self::Info | Self::Warning | Self::Error => None,
            Self::Fatal => Some(Escalation::Fatal),
            Self::Panic => Some(Escalation::Panic),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" | "ERR" => Ok(Self::Error),
            "FATAL" => Ok(Self::Fatal),
            "PANIC" => Ok(Self::Panic),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
