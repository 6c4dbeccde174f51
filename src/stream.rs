//! src/stream.rs
//! Chunked byte shift over any `Read` → `Write` pair.

use crate::codec::{transform_in_place, TransformDirection};
use crate::error::ShiftcryptError;
use std::io::{ErrorKind, Read, Write};

/// Shift everything `source` yields into `destination`, `chunk_size` bytes at
/// a time. Returns the number of bytes processed.
///
/// Only one chunk is held in memory. `Interrupted` reads are retried.
pub fn shift_stream<R, W>(
    mut source: R,
    mut destination: W,
    direction: TransformDirection,
    chunk_size: usize,
) -> Result<u64, ShiftcryptError>
where
    R: Read,
    W: Write,
{
    let mut chunk = vec![0u8; chunk_size.max(1)];
    let mut processed = 0u64;

    loop {
        let n = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        transform_in_place(&mut chunk[..n], direction);
        destination.write_all(&chunk[..n])?;
        processed += n as u64;
    }

    destination.flush()?;
    Ok(processed)
}
