//! Session event log.
//!
//! An active full-screen session owns the terminal, so diagnostics go to an
//! append-only file in the data directory instead of stderr. Logging must
//! never interfere with the session: every failure here is swallowed and the
//! log silently degrades to a no-op.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app_dirs;

const LOG_FILE: &str = "session.log";

pub struct SessionLog {
    sink: Option<File>,
}

impl SessionLog {
    /// Open the log file in the data directory, creating it as needed.
    ///
    /// Returns a no-op log when the data directory cannot be resolved or
    /// written.
    pub fn open() -> Self {
        let sink = app_dirs::get_data_dir().ok().and_then(|dir| {
            fs::create_dir_all(&dir).ok()?;
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE))
                .ok()
        });
        Self { sink }
    }

    /// Append one timestamped event line. Write errors are ignored.
    pub fn event(&mut self, message: &str) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        let _ = writeln!(sink, "[{seconds}] {message}");
    }
}
