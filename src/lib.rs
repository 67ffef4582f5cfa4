//! Core crate exports for building and running the `binlift` launcher.
//!
//! The root module re-exports the session types so that the binary (and
//! tests) can drive the launcher without digging through the module
//! hierarchy. Discovery and the launch handoff are deliberately separate
//! from the interactive session: the session treats them as read-only
//! collaborators.

pub mod app_dirs;
pub mod discovery;
pub mod launch;
pub mod logging;
pub mod ui;

pub use discovery::SearchDirs;
pub use launch::LaunchError;
pub use ui::{App, DialogKind, Mode, UiSettings, run};
