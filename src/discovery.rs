//! Executable discovery on well-known paths.
//!
//! The session treats this module as a read-only collaborator: the candidate
//! list is scanned once at startup and a path is resolved once per launch
//! attempt. Directories that do not exist are silently skipped.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

const SYSTEM_DIRS: &[&str] = &["/bin", "/usr/local/bin", "/usr/local/sbin"];
const OPT_ROOT: &str = "/opt";

/// The ordered list of directories searched for launchable programs.
///
/// Order matters: path resolution at launch time returns the first directory
/// containing an executable of the requested name.
#[derive(Debug, Clone)]
pub struct SearchDirs {
    dirs: Vec<PathBuf>,
}

impl SearchDirs {
    /// Build the search list: fixed system paths, `bin`/`sbin` under each
    /// entry of the package-install root, the user-local pair derived from
    /// the home directory, then any caller-supplied extras.
    pub fn discover(extra: &[PathBuf]) -> Self {
        let mut dirs: Vec<PathBuf> = SYSTEM_DIRS.iter().map(PathBuf::from).collect();

        if let Ok(entries) = fs::read_dir(OPT_ROOT) {
            for entry in entries.flatten() {
                if entry.file_type().is_ok_and(|ft| ft.is_dir()) {
                    let base = entry.path();
                    dirs.push(base.join("bin"));
                    dirs.push(base.join("sbin"));
                }
            }
        }

        if let Some(home) = home_dir() {
            dirs.push(home.join(".local/bin"));
            dirs.push(home.join(".local/sbin"));
        }

        dirs.extend(extra.iter().cloned());
        Self { dirs }
    }

    /// Use an explicit directory list, bypassing discovery of system paths.
    pub fn from_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Scan every search directory for executable regular files and
    /// symlinks, returning the unique names in sorted order.
    pub fn candidates(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for dir in &self.dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let launchable = entry
                    .file_type()
                    .is_ok_and(|ft| ft.is_file() || ft.is_symlink());
                if launchable
                    && is_executable(&entry.path())
                    && let Some(name) = entry.file_name().to_str()
                {
                    names.insert(name.to_owned());
                }
            }
        }
        names.into_iter().collect()
    }

    /// Resolve a candidate name to an absolute path.
    ///
    /// The first search directory containing an executable of that name
    /// wins; directories are re-checked at call time, so a program removed
    /// since startup resolves to `None`.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        self.dirs.iter().find_map(|dir| {
            let path = dir.join(name);
            is_executable(&path).then_some(path)
        })
    }
}

/// True when the path points at a regular file with the user-execute bit
/// set. Symlinks are followed, so a link to an executable qualifies while a
/// dangling link does not.
fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o100 != 0)
        .unwrap_or(false)
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|base| base.home_dir().to_path_buf()))
}
