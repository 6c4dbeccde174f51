//! Output file naming.
//!
//! Encode appends the marker suffix to the full path. Decode requires the
//! final path component to *end* with the suffix and strips exactly that
//! trailing occurrence; anything else is rejected with
//! [`ShiftcryptError::MissingSuffix`] rather than guessing a name.

use crate::consts::ENCRYPTED_SUFFIX;
use crate::error::ShiftcryptError;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// `a/b.txt` → `a/b.txt.encrypted`
#[must_use]
pub fn encrypted_path(path: &Path) -> PathBuf {
    encrypted_path_with(path, ENCRYPTED_SUFFIX)
}

/// `a/b.txt.encrypted` → `a/b.txt`
pub fn decrypted_path(path: &Path) -> Result<PathBuf, ShiftcryptError> {
    decrypted_path_with(path, ENCRYPTED_SUFFIX)
}

#[must_use]
pub fn encrypted_path_with(path: &Path, suffix: &str) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(suffix);
    PathBuf::from(raw)
}

pub fn decrypted_path_with(path: &Path, suffix: &str) -> Result<PathBuf, ShiftcryptError> {
    let missing = || ShiftcryptError::MissingSuffix {
        path: path.to_path_buf(),
        suffix: suffix.to_string(),
    };

    let name = path.file_name().ok_or_else(missing)?;
    let stem = strip_name_suffix(name, suffix).ok_or_else(missing)?;
    if stem.is_empty() {
        return Err(missing());
    }

    Ok(path.with_file_name(stem))
}

/// Matches on the raw name bytes so non-UTF-8 names decode like they encode.
#[cfg(unix)]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    use std::os::unix::ffi::OsStrExt;

    name.as_bytes()
        .strip_suffix(suffix.as_bytes())
        .map(|stem| OsStr::from_bytes(stem).to_owned())
}

// Elsewhere only names that are valid UTF-8 can be matched.
#[cfg(not(unix))]
fn strip_name_suffix(name: &OsStr, suffix: &str) -> Option<OsString> {
    name.to_str()?.strip_suffix(suffix).map(OsString::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_the_trailing_marker() {
        let out = decrypted_path(Path::new("x.encrypted.tar.encrypted")).unwrap();
        assert_eq!(out, PathBuf::from("x.encrypted.tar"));
    }

    #[test]
    fn marker_in_directory_name_is_ignored() {
        let err = decrypted_path(Path::new("backup.encrypted/notes.txt")).unwrap_err();
        assert!(matches!(err, ShiftcryptError::MissingSuffix { .. }));
    }
}
