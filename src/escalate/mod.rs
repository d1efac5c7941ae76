//! Escalation effects: what happens after a `FATAL` or `PANIC` line lands.
//!
//! Hard-coding `process::exit` inside the logger would make those levels
//! untestable, so the effect is routed through a caller-supplied handler.
//! [`ProcessExit`] is the default and preserves the classic behavior:
//! `FATAL` terminates the process, `PANIC` unwinds.

use crate::error::Error;

/// The control-flow effect a write requests beyond "data was recorded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escalation {
    /// Terminate the entire process with a non-zero status.
    Fatal,
    /// Raise an unrecoverable fault that unwinds the current call stack.
    Panic,
}

/// Policy invoked after the line has been appended (or after the append
/// failed). Every hook diverges: the logger has no recoverable-error path,
/// so a handler that wants the test process to survive must panic and let
/// the harness catch the unwind.
///
/// `Send + Sync` so a logger holding a boxed handler can be shared across
/// threads, matching the sink's locking guarantee.
pub trait EscalationHandler: Send + Sync {
    /// A `FATAL` line was appended; the process must not continue.
    fn fatal(&self, message: &str) -> !;

    /// A `PANIC` line was appended; unwind the calling stack.
    fn panic(&self, message: &str) -> !;

    /// The append itself failed. If the logger cannot log, continued
    /// operation is considered unsafe.
    fn write_failed(&self, err: &Error) -> !;
}

/// Default handler: `FATAL` prints the message to stderr and exits with
/// status 1, `PANIC` and write failures raise a panic carrying the cause.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl EscalationHandler for ProcessExit {
    fn fatal(&self, message: &str) -> ! {
        eprintln!("{message}");
        std::process::exit(1);
    }

    fn panic(&self, message: &str) -> ! {
        panic!("{message}");
    }

    fn write_failed(&self, err: &Error) -> ! {
        panic!("log write failed: {err}");
    }
}
