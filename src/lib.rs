#![forbid(unsafe_code)]

//! `linelog` - Minimal leveled append-only file logger.
//!
//! One logical log name maps to one `<name>.log` file opened in append mode
//! and held open for the logger's lifetime. Every write appends a single
//! timestamped line tagged with its severity:
//!
//! ```text
//! Mon Jan  2 15:04:05 +00:00 2006 [ERROR] disk unavailable
//! ```
//!
//! Two severities escalate after the line lands: `FATAL` terminates the
//! process with a non-zero status and `PANIC` unwinds the calling stack.
//! Both effects go through a pluggable [`EscalationHandler`] so they stay
//! testable; [`ProcessExit`] is the default policy.
//!
//! # Example
//!
//! ```no_run
//! use linelog::{Level, Logger};
//!
//! let logger = Logger::open("audit");
//!
//! logger.info("service started");
//! logger.warning("connection slow");
//! logger.write(Level::Error, "connection refused");
//! logger.fatal("disk unavailable"); // line is written, then exit(1)
//! ```

pub mod error;
pub mod escalate;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod sink;

// Re-exports for convenience
pub use error::Error;
pub use escalate::{Escalation, EscalationHandler, ProcessExit};
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder};
pub use sink::FileSink;
