//! Terminal handoff to the selected program.
//!
//! A successful handoff replaces this process image and never returns; the
//! caller therefore only ever observes the error branch, after which it must
//! re-acquire the terminal and resume the session.

use std::convert::Infallible;
use std::io;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;

use crate::discovery::SearchDirs;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no executable named `{name}` on the search path")]
    NotFound { name: String },
    #[error("exec of {} failed: {source}", path.display())]
    Exec {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Release the terminal and replace the current process with `name`.
///
/// The terminal is restored before anything else so the launched program
/// starts with full control of it. The program receives no arguments beyond
/// its own name as `argv[0]`. Resolution happens per call: the first search
/// directory holding an executable of that name wins.
pub fn handoff(dirs: &SearchDirs, name: &str) -> Result<Infallible, LaunchError> {
    ratatui::restore();

    let Some(path) = dirs.resolve(name) else {
        return Err(LaunchError::NotFound {
            name: name.to_owned(),
        });
    };

    // Only reached when exec fails; on success the process is gone.
    let source = Command::new(&path).arg0(name).exec();
    Err(LaunchError::Exec { path, source })
}
