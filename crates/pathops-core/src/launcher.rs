//! OS print-handler dispatch and status translation
//!
//! The host OS signals launcher failure through a small numeric code space
//! rather than an error channel: values above [`STATUS_OK_THRESHOLD`] mean
//! the handler was started, values at or below it identify a specific
//! failure. Translation is a fixed lookup, no retry.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::encoding;
use crate::outcome::Outcome;
use crate::{Error, Result};

/// Status codes above this value indicate a successfully started handler.
pub const STATUS_OK_THRESHOLD: i32 = 32;

/// Status code for a handler failure the table has no row for.
const STATUS_UNMAPPED: i32 = 1;

/// Translate a launcher status code into its diagnostic string.
///
/// Codes follow the Windows shell-launcher convention; at or below the
/// threshold each known value names one failure cause.
pub fn describe_status(code: i32) -> &'static str {
    match code {
        0 => "the operating system is out of memory or resources",
        2 => "the specified file was not found",
        3 => "the specified path was not found",
        5 => "access to the specified file was denied",
        8 => "there was not enough memory to complete the operation",
        11 => "the file has an invalid format",
        26 => "a sharing violation occurred",
        27 => "the file name association is incomplete or invalid",
        28 => "the print transaction timed out",
        29 => "the print transaction failed",
        30 => "another print transaction is already in progress",
        31 => "there is no application associated with the file for printing",
        32 => "a required dynamic-link library was not found",
        _ => "unknown launcher error",
    }
}

/// Build the outcome for a print dispatch that reported `code`.
pub fn outcome_for_status(path: &str, code: i32) -> Outcome {
    if code > STATUS_OK_THRESHOLD {
        Outcome::ok(format!("File \"{path}\" sent to the print handler."))
    } else {
        Outcome::failed(format!(
            "Fail to print \"{}\": {}.",
            path,
            describe_status(code)
        ))
    }
}

/// Result of one handler dispatch: the launcher status code, plus whatever
/// diagnostic text the handler itself produced on failure.
#[derive(Debug)]
pub struct Dispatch {
    pub code: i32,
    pub detail: Option<String>,
}

impl Dispatch {
    fn code(code: i32) -> Self {
        Self { code, detail: None }
    }
}

/// Build the outcome for a completed dispatch.
///
/// A handler that reported its own failure cause wins over the table; the
/// table covers everything else.
pub fn outcome_for_dispatch(path: &str, dispatch: &Dispatch) -> Outcome {
    match &dispatch.detail {
        Some(detail) => Outcome::failed(format!("Fail to print \"{path}\": {detail}.")),
        None => outcome_for_status(path, dispatch.code),
    }
}

/// Hand `path` to the platform's default print handler.
///
/// Dispatch failures are folded into the status code space (missing file
/// reads as file-not-found, a missing handler binary as
/// no-association, refused access as access-denied); anything else surfaces
/// as [`Error::Launcher`]. A handler that exits nonzero keeps its own
/// stderr text as the failure detail instead of guessing a table row.
pub fn dispatch_print(path: &Path) -> Result<Dispatch> {
    if !path.exists() {
        return Ok(Dispatch::code(2));
    }

    let output = print_command(path).output().map_err(|e| Error::Launcher {
        path: path.to_path_buf(),
        source: e,
    });

    match output {
        Ok(out) if out.status.success() => Ok(Dispatch::code(STATUS_OK_THRESHOLD + 1)),
        Ok(out) => {
            let stderr = encoding::to_text(&out.stderr);
            let detail = stderr.trim();
            Ok(Dispatch {
                code: STATUS_UNMAPPED,
                detail: (!detail.is_empty()).then(|| detail.to_string()),
            })
        }
        Err(Error::Launcher { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(Dispatch::code(31))
        }
        Err(Error::Launcher { source, .. }) if source.kind() == ErrorKind::PermissionDenied => {
            Ok(Dispatch::code(5))
        }
        Err(e) => Err(e),
    }
}

#[cfg(windows)]
fn print_command(path: &Path) -> Command {
    let mut cmd = Command::new("powershell");
    cmd.args(["-NoProfile", "-Command", "Start-Process", "-Verb", "Print", "-FilePath"])
        .arg(path);
    cmd
}

#[cfg(not(windows))]
fn print_command(path: &Path) -> Command {
    // lp(1) queues the file on the default printer.
    let mut cmd = Command::new("lp");
    cmd.arg("--").arg(path);
    cmd
}
