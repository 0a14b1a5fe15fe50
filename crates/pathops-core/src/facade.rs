//! The path-operation facade
//!
//! Seven single-shot, synchronous, stateless actions over the OS filesystem
//! and launcher. Every method returns exactly one [`Outcome`]; OS failures
//! are caught at the method boundary and embedded in the diagnostic, never
//! propagated as `Err` or panic. Concurrent callers get whatever the OS
//! guarantees for the underlying calls; the facade itself holds no state.

use std::io::ErrorKind;
use std::path::Path;
use std::{env, fs};

use tracing::{error, info};

use crate::content_root::ContentRoot;
use crate::encoding::display_path;
use crate::launcher;
use crate::outcome::Outcome;
use crate::{Error, Result};

/// Facade over the enumerated path actions.
///
/// Holds only the content-root collaborator supplied by the host.
#[derive(Debug)]
pub struct PathOps<C: ContentRoot> {
    root: C,
}

impl<C: ContentRoot> PathOps<C> {
    pub fn new(root: C) -> Self {
        Self { root }
    }

    /// Create `path` and any missing ancestor directories.
    ///
    /// success=true only when this call created the directory; an already
    /// existing directory reports success=false without an error.
    pub fn create_dir(&self, path: &str) -> Outcome {
        let outcome = match try_create_dir(Path::new(path)) {
            Ok(true) => Outcome::ok(format!("Directory \"{path}\" created successfully.")),
            Ok(false) => Outcome::failed(format!("Fail to create directory \"{path}\".")),
            Err(e) => Outcome::failed(format!("Fail to create directory \"{path}\": {e}.")),
        };
        self.emit(&outcome);
        outcome
    }

    /// Remove `path`.
    ///
    /// With `force`, removes the whole tree and reports the number of
    /// removed entries (root included). Without it, removes only an empty
    /// directory or a single file; a non-empty directory fails.
    pub fn remove(&self, path: &str, force: bool) -> Outcome {
        let outcome = if force {
            match remove_tree(Path::new(path)) {
                Ok(count) => Outcome::ok_with_count(
                    format!(
                        "Directory \"{path}\" with all its content removed successfully ({count} items)."
                    ),
                    count,
                ),
                Err(e) => Outcome::failed(format!("Fail to remove directory \"{path}\": {e}.")),
            }
        } else {
            match remove_single(Path::new(path)) {
                Ok(true) => {
                    Outcome::ok(format!("Directory \"{path}\" removed successfully."))
                }
                Ok(false) => Outcome::failed(format!("Fail to remove directory \"{path}\".")),
                Err(e) => Outcome::failed(format!("Fail to remove directory \"{path}\": {e}.")),
            }
        };
        self.emit(&outcome);
        outcome
    }

    /// Rename `old_path` to `new_path` with the OS's atomic-rename
    /// semantics. Cross-device moves fail; the diagnostic carries both
    /// paths and the cause.
    pub fn rename(&self, old_path: &str, new_path: &str) -> Outcome {
        let outcome = match fs::rename(old_path, new_path) {
            Ok(()) => Outcome::ok(format!(
                "Directory \"{old_path}\" renamed to \"{new_path}\" successfully."
            )),
            Err(e) => Outcome::failed(format!(
                "Fail to rename directory \"{old_path}\" to \"{new_path}\": {e}."
            )),
        };
        self.emit(&outcome);
        outcome
    }

    /// The process's current working directory.
    pub fn current_path(&self) -> Outcome {
        let outcome = match env::current_dir() {
            Ok(dir) => {
                let text = display_path(&dir);
                Outcome::ok_with_path(format!("Current path is \"{text}\"."), text)
            }
            Err(e) => Outcome::failed(format!("Fail to get current path: {e}.")),
        };
        self.emit(&outcome);
        outcome
    }

    /// The path of the running executable.
    ///
    /// On platform-query failure this is a hard failure with an empty
    /// result, never a partially filled value.
    pub fn executable_path(&self) -> Outcome {
        let outcome = match env::current_exe() {
            Ok(exe) => {
                let text = display_path(&exe);
                Outcome::ok_with_path(format!("Executable path is \"{text}\"."), text)
            }
            Err(e) => Outcome::failed(format!("Fail to get executable path: {e}.")),
        };
        self.emit(&outcome);
        outcome
    }

    /// The host's content root, optionally resolved to an absolute form.
    ///
    /// `force_absolute=false` hands the collaborator's value back
    /// byte-for-byte. `force_absolute=true` canonicalizes it; if resolution
    /// fails the unmodified (possibly relative) value is returned instead,
    /// so this action never fails outright.
    pub fn absolute_dir(&self, force_absolute: bool) -> Outcome {
        let root = self.root.content_root();
        let outcome = if !force_absolute {
            Outcome::ok_with_path(format!("Content root is \"{root}\"."), root)
        } else {
            match dunce::canonicalize(root) {
                Ok(abs) => {
                    let text = display_path(&abs);
                    Outcome::ok_with_path(format!("Absolute content root is \"{text}\"."), text)
                }
                Err(e) => Outcome {
                    result_path: Some(root.to_string()),
                    ..Outcome::ok(format!(
                        "Fail to get absolute content root: {e}. Keeping unmodified (possibly relative)."
                    ))
                },
            }
        };
        self.emit(&outcome);
        outcome
    }

    /// Send `path` to the platform's default print handler.
    ///
    /// The launcher status code is translated through the fixed table in
    /// [`crate::launcher`].
    pub fn print(&self, path: &str) -> Outcome {
        let outcome = match launcher::dispatch_print(Path::new(path)) {
            Ok(dispatch) => launcher::outcome_for_dispatch(path, &dispatch),
            Err(e) => Outcome::failed(format!("Fail to print \"{path}\": {e}.")),
        };
        self.emit(&outcome);
        outcome
    }

    fn emit(&self, outcome: &Outcome) {
        if outcome.success {
            info!("{outcome}");
        } else {
            error!("{outcome}");
        }
    }
}

/// Returns whether the directory was created by this call.
fn try_create_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))?;
    Ok(true)
}

/// Remove the tree rooted at `path`, counting every removed file and
/// directory, the root included. A missing path removes nothing and counts
/// zero.
fn remove_tree(path: &Path) -> Result<u64> {
    let meta = match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
        other => other.map_err(|e| Error::io(path, e))?,
    };

    let mut count = 0;
    if meta.is_dir() {
        for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
            let entry = entry.map_err(|e| Error::io(path, e))?;
            count += remove_tree(&entry.path())?;
        }
        fs::remove_dir(path).map_err(|e| Error::io(path, e))?;
    } else {
        // Symlinks are removed as entries, never followed.
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(count + 1)
}

/// Returns whether anything was removed. Missing targets are reported as
/// not-removed rather than an error; a non-empty directory is an error.
fn remove_single(path: &Path) -> Result<bool> {
    let meta = match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        other => other.map_err(|e| Error::io(path, e))?,
    };

    if meta.is_dir() {
        fs::remove_dir(path).map_err(|e| Error::io(path, e))?;
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    }
    Ok(true)
}
