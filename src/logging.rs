//! Opt-in append-only event log.
//!
//! Enabled with `DUALTRACK_WRITE_LOG=<path>`; records user intents and tick
//! deltas so driver/input ordering can be reconstructed after the fact.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub struct EventLog {
    file: Option<File>,
}

impl EventLog {
    /// Open (or create) the log at `path`. A failure to open disables
    /// logging rather than failing the app.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())
            .ok();
        Self { file }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self { file: None }
    }

    /// Append one line, prefixed with epoch milliseconds. Write failures
    /// disable the log; they never surface to the UI.
    pub fn log(&mut self, message: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|dur| dur.as_millis())
            .unwrap_or(0);
        if writeln!(file, "{now_ms} {message}").is_err() {
            self.file = None;
        }
    }
}
