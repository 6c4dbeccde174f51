//! # Constants
//!
//! This module defines the defaults used throughout the library for output
//! naming, progress granularity and the diagnostic byte dump.

/// Marker appended to a file name on encode and stripped again on decode.
///
/// `notes.txt` becomes `notes.txt.encrypted`. Despite the name, the output is
/// only obfuscated: the byte shift offers no confidentiality at all.
pub const ENCRYPTED_SUFFIX: &str = ".encrypted";

/// Number of trailing input bytes rendered by the diagnostic dump.
pub const DIAGNOSTIC_TAIL_LEN: usize = 16;

/// Default chunk size (64 KiB).
///
/// The file runner reports progress once per chunk, and the streaming API
/// reads and writes in chunks of this size.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Amount added to every byte on encode (and subtracted on decode), modulo 256.
pub const SHIFT: u8 = 1;
