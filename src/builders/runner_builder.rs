//! src/builders/runner_builder.rs
//! Fluent configuration for [`RoundTripRunner`].

use crate::consts::{DEFAULT_CHUNK_SIZE, ENCRYPTED_SUFFIX};
use crate::error::ShiftcryptError;
use crate::runner::RoundTripRunner;

/// Builder for [`RoundTripRunner`]
///
/// Defaults: [`ENCRYPTED_SUFFIX`], [`DEFAULT_CHUNK_SIZE`], diagnostics on.
///
/// # Thread Safety
///
/// Builders and the runners they produce are `Send + Sync` and hold no
/// mutable state, so one runner can serve many threads.
#[derive(Debug, Clone)]
pub struct RunnerBuilder {
    suffix: String,
    chunk_size: usize,
    diagnostics: bool,
}

impl RunnerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            suffix: ENCRYPTED_SUFFIX.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            diagnostics: true,
        }
    }

    /// Marker appended on encode and required on decode. Validated by [`build`](Self::build).
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Bytes transformed between progress notifications (minimum 1)
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Log the trailing bytes of each input before transforming it
    #[must_use]
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Rejects an empty suffix (output would overwrite the input) and one
    /// containing a path separator (output would land in another directory).
    pub fn build(self) -> Result<RoundTripRunner, ShiftcryptError> {
        if self.suffix.is_empty() {
            return Err(ShiftcryptError::InvalidConfig("suffix must not be empty".into()));
        }
        if self.suffix.contains(['/', '\\']) {
            return Err(ShiftcryptError::InvalidConfig(format!(
                "suffix `{}` must not contain a path separator",
                self.suffix
            )));
        }
        Ok(RoundTripRunner::from_parts(
            self.suffix,
            self.chunk_size,
            self.diagnostics,
        ))
    }
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
