//! File destination: one open append-mode handle per logical log name.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::Error;

/// An append-only log file, created if absent and held open for the sink's
/// lifetime.
///
/// The handle sits behind a `Mutex` so each line lands as one uninterrupted
/// append even when the sink is shared across threads; the platform's own
/// append atomicity is not relied upon for whole-line ordering.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens (creating if needed) `<name>.log`, resolved relative to the
    /// process working directory by normal path-join semantics. Created
    /// files get mode 0644 on Unix; elsewhere the host default applies.
    ///
    /// # Errors
    /// `Error::InvalidName` for an empty name, `Error::Io` if the file
    /// cannot be opened or created.
    pub fn create(name: &str) -> Result<Self, Error> {
        if name.is_empty() {
            return Err(Error::InvalidName(name.to_string()));
        }

        let path = PathBuf::from(format!("{name}.log"));

        let mut options = OpenOptions::new();
        options.create(true).append(true).read(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let file = options.open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Appends `line` plus a trailing newline as a single write.
    ///
    /// # Errors
    /// `Error::Io` if the append fails (disk full, handle invalidated).
    pub fn append_line(&self, line: &str) -> Result<(), Error> {
        let mut content = String::with_capacity(line.len() + 1);
        content.push_str(line);
        content.push('\n');

        let mut file = self
            .file
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    /// The resolved path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Explicit release: syncs file contents to disk, then drops the handle.
    /// Dropping without `close` loses no data (appends are unbuffered), but
    /// shutdown paths may want the fsync.
    ///
    /// # Errors
    /// `Error::Io` if the sync fails.
    pub fn close(self) -> Result<(), Error> {
        let file = self
            .file
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        file.sync_all()?;
        Ok(())
    }
}
