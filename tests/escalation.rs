//! Tests for the FATAL and PANIC escalation effects.
//!
//! PANIC and custom handlers are observable in-process via `catch_unwind`;
//! the default FATAL behavior terminates the whole process, so it runs in a
//! re-executed copy of this test binary gated on an environment variable.

use linelog::{Error, EscalationHandler, Level, Logger};
use std::fs;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::process::Command;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn log_name(dir: &TempDir, stem: &str) -> String {
    dir.path().join(stem).to_string_lossy().into_owned()
}

#[test]
fn panic_level_appends_then_unwinds() {
    let tmp = TempDir::new().unwrap();
    let logger = Logger::open(&log_name(&tmp, "panics"));

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        logger.write(Level::Panic, "state corrupted");
    }));

    let payload = outcome.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .expect("panic payload should carry the content");
    assert_eq!(message, "state corrupted");

    // The line landed before the unwind started.
    let content = fs::read_to_string(tmp.path().join("panics.log")).unwrap();
    assert!(content.contains("[PANIC] state corrupted"));
}

/// Records what the logger asked for, then panics so the harness survives.
struct Recording {
    fatal_seen: Arc<Mutex<Option<String>>>,
}

impl EscalationHandler for Recording {
    fn fatal(&self, message: &str) -> ! {
        *self.fatal_seen.lock().unwrap() = Some(message.to_string());
        panic!("fatal requested");
    }

    fn panic(&self, message: &str) -> ! {
        panic!("{message}");
    }

    fn write_failed(&self, err: &Error) -> ! {
        panic!("log write failed: {err}");
    }
}

#[test]
fn fatal_level_appends_then_invokes_the_handler() {
    let tmp = TempDir::new().unwrap();
    let fatal_seen = Arc::new(Mutex::new(None));
    let logger = Logger::builder(log_name(&tmp, "handled"))
        .handler(Recording {
            fatal_seen: Arc::clone(&fatal_seen),
        })
        .build()
        .unwrap();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        logger.write(Level::Fatal, "shutting down");
    }));
    assert!(outcome.is_err());

    assert_eq!(fatal_seen.lock().unwrap().as_deref(), Some("shutting down"));
    let content = fs::read_to_string(tmp.path().join("handled.log")).unwrap();
    assert!(content.contains("[FATAL] shutting down"));
}

const FATAL_CHILD_ENV: &str = "LINELOG_FATAL_CHILD_LOG";

#[test]
fn fatal_level_exits_the_process_with_nonzero_status() {
    // Child branch: run the fatal write with the default handler and die.
    if let Ok(name) = std::env::var(FATAL_CHILD_ENV) {
        let logger = Logger::open(&name);
        logger.fatal("disk unavailable");
    }

    let tmp = TempDir::new().unwrap();
    let name = log_name(&tmp, "fatal");

    let exe = std::env::current_exe().unwrap();
    let output = Command::new(exe)
        .args([
            "fatal_level_exits_the_process_with_nonzero_status",
            "--exact",
            "--test-threads=1",
            // Without this, libtest captures the handler's stderr output and
            // `process::exit` discards it before it reaches the real stream.
            "--nocapture",
        ])
        .env(FATAL_CHILD_ENV, &name)
        .output()
        .unwrap();

    assert!(
        !output.status.success(),
        "child should exit non-zero, got {:?}",
        output.status
    );

    let content = fs::read_to_string(tmp.path().join("fatal.log")).unwrap();
    assert!(content.contains("[FATAL] disk unavailable"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("disk unavailable"));
}
