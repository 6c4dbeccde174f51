//! # Progress reporting
//!
//! A [`ProgressObserver`] is handed to every file run. It sees the state
//! machine transitions, incremental progress and the terminal outcome, and
//! may request cancellation between progress notifications.
//!
//! ```text
//! Idle → Reading → ReadFailed
//!                → Transforming → Cancelled
//!                               → Writing → WriteFailed
//!                                         → Succeeded
//! ```
//!
//! All callbacks are synchronous and are invoked on the thread running the
//! operation, in order.

use crate::codec::TransformDirection;
use crate::error::ShiftcryptError;
use std::ops::ControlFlow;
use std::path::Path;

/// Where a single file run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Idle,
    Reading,
    /// The input could not be read, or (decode) its name lacks the marker.
    ReadFailed,
    Transforming,
    Writing,
    WriteFailed,
    Succeeded,
    Cancelled,
}

impl RunState {
    /// `true` once the run can no longer change state.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::ReadFailed | Self::WriteFailed | Self::Succeeded | Self::Cancelled
        )
    }
}

/// Receives progress for one run.
///
/// Every method has a no-op default, so implementors override only what they
/// display.
pub trait ProgressObserver {
    /// Called on every state transition, ending with a terminal state.
    fn on_state(&mut self, _state: RunState) {}

    /// `processed` bytes out of `total` are done. Values never decrease within
    /// a run, and the last call of a successful non-empty run has
    /// `processed == total`. Empty inputs produce no calls.
    ///
    /// Return [`ControlFlow::Break`] to cancel the run.
    fn on_progress(&mut self, _processed: u64, _total: u64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called exactly once with the output path or the error being returned.
    fn on_finish(&mut self, _outcome: Result<&Path, &ShiftcryptError>) {}
}

impl<T: ProgressObserver + ?Sized> ProgressObserver for &mut T {
    fn on_state(&mut self, state: RunState) {
        (**self).on_state(state);
    }

    fn on_progress(&mut self, processed: u64, total: u64) -> ControlFlow<()> {
        (**self).on_progress(processed, total)
    }

    fn on_finish(&mut self, outcome: Result<&Path, &ShiftcryptError>) {
        (**self).on_finish(outcome);
    }
}

/// Ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {}

/// Adapts a `FnMut(processed, total)` closure. Never cancels.
pub struct FnProgress<F>(pub F);

impl<F: FnMut(u64, u64)> ProgressObserver for FnProgress<F> {
    fn on_progress(&mut self, processed: u64, total: u64) -> ControlFlow<()> {
        (self.0)(processed, total);
        ControlFlow::Continue(())
    }
}

/// Reports through the `log` facade.
///
/// Progress is logged at debug level at most once per 10% step; the outcome
/// is logged at info (success) or warn (failure).
#[derive(Debug, Clone)]
pub struct LogProgress {
    direction: TransformDirection,
    last_decile: Option<u64>,
}

impl LogProgress {
    #[must_use]
    pub const fn new(direction: TransformDirection) -> Self {
        Self {
            direction,
            last_decile: None,
        }
    }
}

impl ProgressObserver for LogProgress {
    fn on_state(&mut self, state: RunState) {
        log::trace!("{}: {state:?}", self.direction);
    }

    fn on_progress(&mut self, processed: u64, total: u64) -> ControlFlow<()> {
        let decile = processed.saturating_mul(10) / total.max(1);
        if self.last_decile != Some(decile) {
            self.last_decile = Some(decile);
            log::debug!("{}: {processed}/{total} bytes", self.direction);
        }
        ControlFlow::Continue(())
    }

    fn on_finish(&mut self, outcome: Result<&Path, &ShiftcryptError>) {
        match outcome {
            Ok(path) => log::info!("{}ed file written to {}", self.direction, path.display()),
            Err(e) => log::warn!("{} failed: {e}", self.direction),
        }
    }
}
