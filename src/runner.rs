//! src/runner.rs
//! Whole-file round trip: read, shift, write the sibling file.
//!
//! The input is buffered in memory in full, so file size is bounded by
//! available memory. Use [`crate::encrypt`] / [`crate::decrypt`] on
//! `Read`/`Write` handles when that is a problem.

use crate::builders::RunnerBuilder;
use crate::codec::{transform_in_place, TransformDirection};
use crate::consts::{DEFAULT_CHUNK_SIZE, ENCRYPTED_SUFFIX};
use crate::error::ShiftcryptError;
use crate::paths::{decrypted_path_with, encrypted_path_with};
use crate::progress::{ProgressObserver, RunState};
use crate::utils::log_tail;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs one encode or decode of a file into its sibling.
///
/// Each call to [`run`](Self::run) is independent: the runner holds only
/// configuration, and every run owns its buffer and output handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripRunner {
    suffix: String,
    chunk_size: usize,
    diagnostics: bool,
}

impl RoundTripRunner {
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    pub(crate) fn from_parts(suffix: String, chunk_size: usize, diagnostics: bool) -> Self {
        Self {
            suffix,
            chunk_size,
            diagnostics,
        }
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Where `run(input, direction, ..)` would write, without touching the disk.
    pub fn output_path(
        &self,
        input: &Path,
        direction: TransformDirection,
    ) -> Result<PathBuf, ShiftcryptError> {
        match direction {
            TransformDirection::Encode => Ok(encrypted_path_with(input, &self.suffix)),
            TransformDirection::Decode => decrypted_path_with(input, &self.suffix),
        }
    }

    /// Encode `input` into `<input><suffix>`.
    pub fn encrypt<P, O>(&self, input: P, observer: O) -> Result<PathBuf, ShiftcryptError>
    where
        P: AsRef<Path>,
        O: ProgressObserver,
    {
        self.run(input.as_ref(), TransformDirection::Encode, observer)
    }

    /// Decode `<name><suffix>` into `<name>`.
    pub fn decrypt<P, O>(&self, input: P, observer: O) -> Result<PathBuf, ShiftcryptError>
    where
        P: AsRef<Path>,
        O: ProgressObserver,
    {
        self.run(input.as_ref(), TransformDirection::Decode, observer)
    }

    /// Run one file through the codec and return the path written.
    ///
    /// The observer sees every state transition and exactly one
    /// [`on_finish`](ProgressObserver::on_finish) carrying the same outcome
    /// this function returns. Nothing is written unless the whole buffer was
    /// transformed; a failed write removes the partial output. The input file
    /// is never modified.
    pub fn run<O>(
        &self,
        input: &Path,
        direction: TransformDirection,
        mut observer: O,
    ) -> Result<PathBuf, ShiftcryptError>
    where
        O: ProgressObserver,
    {
        observer.on_state(RunState::Idle);
        let result = self.run_inner(input, direction, &mut observer);
        match &result {
            Ok(output) => observer.on_finish(Ok(output)),
            Err(e) => observer.on_finish(Err(e)),
        }
        result
    }

    fn run_inner<O>(
        &self,
        input: &Path,
        direction: TransformDirection,
        observer: &mut O,
    ) -> Result<PathBuf, ShiftcryptError>
    where
        O: ProgressObserver,
    {
        observer.on_state(RunState::Reading);

        // Name check before any I/O: a decode of a file without the marker
        // never opens it.
        let output = match self.output_path(input, direction) {
            Ok(output) => output,
            Err(e) => {
                observer.on_state(RunState::ReadFailed);
                return Err(e);
            }
        };

        let mut buffer = match fs::read(input) {
            Ok(buffer) => buffer,
            Err(source) => {
                observer.on_state(RunState::ReadFailed);
                return Err(ShiftcryptError::OpenForRead {
                    path: input.to_path_buf(),
                    source,
                });
            }
        };
        log::debug!("{direction}: read {} bytes from {}", buffer.len(), input.display());

        if self.diagnostics {
            log_tail(input.display(), &buffer);
        }

        observer.on_state(RunState::Transforming);
        let total = buffer.len() as u64;
        let mut processed = 0u64;
        for chunk in buffer.chunks_mut(self.chunk_size) {
            transform_in_place(chunk, direction);
            processed += chunk.len() as u64;
            if observer.on_progress(processed, total).is_break() {
                log::info!("{direction} of {} cancelled at {processed}/{total}", input.display());
                observer.on_state(RunState::Cancelled);
                return Err(ShiftcryptError::Cancelled {
                    path: input.to_path_buf(),
                });
            }
        }

        observer.on_state(RunState::Writing);
        if let Err(e) = write_output(&output, &buffer) {
            observer.on_state(RunState::WriteFailed);
            return Err(e);
        }

        observer.on_state(RunState::Succeeded);
        Ok(output)
    }
}

impl Default for RoundTripRunner {
    fn default() -> Self {
        Self::from_parts(ENCRYPTED_SUFFIX.to_string(), DEFAULT_CHUNK_SIZE, true)
    }
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), ShiftcryptError> {
    let mut file = File::create(path).map_err(|source| ShiftcryptError::OpenForWrite {
        path: path.to_path_buf(),
        source,
    })?;

    if let Err(source) = file.write_all(data).and_then(|()| file.sync_all()) {
        drop(file);
        if let Err(e) = fs::remove_file(path) {
            log::warn!("could not remove partial output {}: {e}", path.display());
        }
        return Err(ShiftcryptError::WriteFailure {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}
