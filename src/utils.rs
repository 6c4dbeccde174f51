// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

use crate::consts::DIAGNOSTIC_TAIL_LEN;
use std::fmt::Display;

/// Renders the last `count` bytes of `data` as two-digit lowercase hex,
/// separated by single spaces.
///
/// Shorter inputs are rendered whole; an empty input yields an empty string.
///
/// ```
/// use shiftcrypt_rs::utils::tail_hex;
/// assert_eq!(tail_hex(&[0x00, 0xff, 0x7f], 2), "ff 7f");
/// ```
#[must_use]
pub fn tail_hex(data: &[u8], count: usize) -> String {
    let start = data.len().saturating_sub(count);
    data[start..]
        .iter()
        .map(|byte| hex::encode([*byte]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Logs the last [`DIAGNOSTIC_TAIL_LEN`] bytes of `data` at debug level.
///
/// A debugging aid only; nothing in the transform depends on it. `label` is
/// only formatted when debug logging is enabled.
pub fn log_tail(label: impl Display, data: &[u8]) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "{label}: last {} of {} bytes: [{}]",
            data.len().min(DIAGNOSTIC_TAIL_LEN),
            data.len(),
            tail_hex(data, DIAGNOSTIC_TAIL_LEN)
        );
    }
}
