//! src/decryptor/decrypt.rs
//! Decode: every byte - 1 (mod 256)

use crate::codec::TransformDirection;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ShiftcryptError;
use crate::progress::NoProgress;
use crate::runner::RoundTripRunner;
use crate::stream::shift_stream;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Decode everything `input` yields into `output`; returns bytes processed.
///
/// Any byte sequence decodes; there is nothing to validate.
#[inline]
pub fn decrypt<R, W>(input: R, output: W) -> Result<u64, ShiftcryptError>
where
    R: Read,
    W: Write,
{
    shift_stream(input, output, TransformDirection::Decode, DEFAULT_CHUNK_SIZE)
}

/// Decode `<name>.encrypted` into `<name>` and return that path.
///
/// Fails with [`ShiftcryptError::MissingSuffix`] if the file name does not end
/// with `.encrypted`.
pub fn decrypt_file(path: impl AsRef<Path>) -> Result<PathBuf, ShiftcryptError> {
    RoundTripRunner::default().decrypt(path, NoProgress)
}
