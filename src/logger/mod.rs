//! The logger pairs one file destination with an escalation policy and
//! exposes the single format-and-append operation plus per-level shorthands.

mod builder;

pub use builder::LoggerBuilder;

use std::fmt;
use std::path::Path;

use crate::escalate::{Escalation, EscalationHandler};
use crate::fmt::format_line;
use crate::level::Level;
use crate::sink::FileSink;

/// A leveled logger bound to one append-only file.
///
/// Each call is stateless apart from the shared handle; there is no
/// minimum-level filter and no recoverable write error. A failed append is
/// routed to the handler, which diverges.
pub struct Logger {
    sink: FileSink,
    handler: Box<dyn EscalationHandler>,
}

impl Logger {
    /// Entry point for configuring the handler before opening the file.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Opens `<name>.log` with the default process-exit escalation policy.
    ///
    /// Fail-fast construction for loggers bootstrapped at startup: an
    /// environment where the log file cannot be opened is considered
    /// misconfigured, so there is no error return, no retry, and no
    /// fallback path.
    ///
    /// # Panics
    /// If the file cannot be opened or created, or the name is empty.
    #[must_use]
    pub fn open(name: &str) -> Self {
        match Self::builder(name).build() {
            Ok(logger) => logger,
            Err(e) => panic!("cannot open log file '{name}.log': {e}"),
        }
    }

    /// Formats `<timestamp> [<LEVEL>] <content>` and appends it, then applies
    /// the level's escalation effect: `Fatal` and `Panic` divert into the
    /// handler and do not return, the rest return normally.
    pub fn write(&self, level: Level, content: impl fmt::Display) {
        let rendered = content.to_string();
        self.append(level, &rendered);
        match level.escalation() {
            Some(Escalation::Fatal) => self.handler.fatal(&rendered),
            Some(Escalation::Panic) => self.handler.panic(&rendered),
            None => {}
        }
    }

    /// Normal operational milestones.
    pub fn info(&self, content: impl fmt::Display) {
        self.write(Level::Info, content);
    }

    /// Non-fatal anomalies that may need attention.
    pub fn warning(&self, content: impl fmt::Display) {
        self.write(Level::Warning, content);
    }

    /// Failures the caller survives; the line is recorded and control returns.
    pub fn error(&self, content: impl fmt::Display) {
        self.write(Level::Error, content);
    }

    /// Records the line, then terminates the process through the handler.
    /// Typed `-> !` so callers see that nothing after this call runs.
    pub fn fatal(&self, content: impl fmt::Display) -> ! {
        let rendered = content.to_string();
        self.append(Level::Fatal, &rendered);
        self.handler.fatal(&rendered)
    }

    /// Records the line, then raises an unrecoverable fault through the
    /// handler. Typed `-> !` so callers see that nothing after this call runs.
    pub fn panic(&self, content: impl fmt::Display) -> ! {
        let rendered = content.to_string();
        self.append(Level::Panic, &rendered);
        self.handler.panic(&rendered)
    }

    /// The resolved path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.sink.path()
    }

    /// Explicit release of the destination: sync to disk, drop the handle.
    ///
    /// # Errors
    /// I/O errors from the final sync.
    pub fn close(self) -> Result<(), crate::Error> {
        self.sink.close()
    }

    fn append(&self, level: Level, rendered: &str) {
        let line = format_line(level, rendered);
        if let Err(e) = self.sink.append_line(&line) {
            self.handler.write_failed(&e)
        }
    }
}
