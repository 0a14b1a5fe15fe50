//! Native-width to UTF-8 text normalization
//!
//! Every piece of external text that ends up in an [`crate::Outcome`]
//! message (paths, print-handler output) passes through here, so the
//! conversion between the platform's native representation and the UTF-8
//! diagnostics is in one place instead of scattered per call site.

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

/// Render a path for embedding in a diagnostic message.
///
/// Lossy: byte sequences with no UTF-8 representation become U+FFFD
/// replacement characters; valid UTF-8 passes through unchanged.
pub fn display_path(path: &Path) -> String {
    match path.as_os_str().to_str() {
        Some(text) => text.to_owned(),
        None => {
            let text = path.as_os_str().to_string_lossy().into_owned();
            debug!("path {text:?} contains non-UTF-8 bytes, rendered lossily");
            text
        }
    }
}

/// Normalize raw external output bytes (e.g. a print handler's stderr) into
/// UTF-8 diagnostic text.
pub fn to_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_path_is_identity() {
        assert_eq!(display_path(Path::new("plain/ascii/path")), "plain/ascii/path");
    }

    #[cfg(unix)]
    #[test]
    fn invalid_native_path_bytes_are_replaced() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let os = OsString::from_vec(vec![b'a', 0xff, b'b']);
        let text = display_path(Path::new(&os));
        assert!(text.contains('\u{fffd}'));
        assert!(text.starts_with('a') && text.ends_with('b'));
    }

    #[test]
    fn handler_output_is_normalized() {
        assert_eq!(to_text(b"no default destination"), "no default destination");
        assert!(to_text(&[b'x', 0xfe, b'y']).contains('\u{fffd}'));
    }
}
