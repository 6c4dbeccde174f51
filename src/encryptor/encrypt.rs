//! src/encryptor/encrypt.rs
//! Encode: every byte + 1 (mod 256)

use crate::codec::TransformDirection;
use crate::consts::DEFAULT_CHUNK_SIZE;
use crate::error::ShiftcryptError;
use crate::progress::NoProgress;
use crate::runner::RoundTripRunner;
use crate::stream::shift_stream;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Encode everything `input` yields into `output`; returns bytes processed.
///
/// Output length always equals input length. No header is written.
#[inline]
pub fn encrypt<R, W>(input: R, output: W) -> Result<u64, ShiftcryptError>
where
    R: Read,
    W: Write,
{
    shift_stream(input, output, TransformDirection::Encode, DEFAULT_CHUNK_SIZE)
}

/// Encode the file at `path` into `<path>.encrypted` and return that path.
pub fn encrypt_file(path: impl AsRef<Path>) -> Result<PathBuf, ShiftcryptError> {
    RoundTripRunner::default().encrypt(path, NoProgress)
}
