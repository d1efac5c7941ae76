//! Builder so the escalation handler can be swapped before the file opens;
//! tests replace the process-exit default with one the harness can observe.

use super::Logger;
use crate::escalate::{EscalationHandler, ProcessExit};
use crate::error::Error;
use crate::sink::FileSink;

/// Configures a [`Logger`] before the destination file is opened.
pub struct LoggerBuilder {
    name: String,
    handler: Box<dyn EscalationHandler>,
}

impl LoggerBuilder {
    /// Process exit is the right default for a last-resort diagnostic sink;
    /// anything else is opt-in.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handler: Box::new(ProcessExit),
        }
    }

    /// Replaces the escalation policy. Tests use a handler that panics with
    /// a marker instead of exiting, so the harness can catch the unwind.
    #[must_use]
    pub fn handler(mut self, handler: impl EscalationHandler + 'static) -> Self {
        self.handler = Box::new(handler);
        self
    }

    /// Opens (creating if needed) `<name>.log` in append mode and binds the
    /// logger to the open handle.
    ///
    /// # Errors
    /// `Error::InvalidName` for an empty name, `Error::Io` if the file
    /// cannot be opened or created.
    pub fn build(self) -> Result<Logger, Error> {
        let sink = FileSink::create(&self.name)?;
        Ok(Logger {
            sink,
            handler: self.handler,
        })
    }
}
