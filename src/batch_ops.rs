//! Parallel operations over independent inputs (feature `batch-ops`).
//!
//! The codec is pure and every run owns its own buffers, so inputs are simply
//! fanned out over the rayon pool with no locking.

use rayon::prelude::*;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::codec::TransformDirection;
use crate::progress::LogProgress;
use crate::runner::RoundTripRunner;
use crate::{decrypt, encrypt, ShiftcryptError};

/// Encode every `(source, destination)` pair in parallel.
///
/// Returns the total number of bytes processed, or the first error seen.
pub fn encrypt_batch<R, W>(batch: &mut [(R, W)]) -> Result<u64, ShiftcryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .map(|(src, dst)| encrypt(src, dst))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

pub fn decrypt_batch<R, W>(batch: &mut [(R, W)]) -> Result<u64, ShiftcryptError>
where
    R: Read + Send,
    W: Write + Send,
{
    batch
        .par_iter_mut()
        .map(|(src, dst)| decrypt(src, dst))
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Run every file through `runner` in parallel.
///
/// One result per input, in input order. A failing file does not stop the
/// others; each run reports through its own [`LogProgress`].
pub fn run_files<P>(
    runner: &RoundTripRunner,
    paths: &[P],
    direction: TransformDirection,
) -> Vec<Result<PathBuf, ShiftcryptError>>
where
    P: AsRef<Path> + Sync,
{
    paths
        .par_iter()
        .map(|path| runner.run(path.as_ref(), direction, LogProgress::new(direction)))
        .collect()
}
