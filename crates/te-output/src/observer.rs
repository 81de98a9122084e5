//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use te_core::Timestep;
use te_economy::Snapshot;
use te_sim::SimObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every snapshot it is shown to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Write the initial state, which the engine never reports through
    /// `on_snapshot`.
    pub fn record_initial(&mut self, genesis: &Snapshot) {
        let result = self.writer.write_snapshot(genesis);
        self.store_err(result);
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of committed snapshots written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let result = self.writer.write_snapshot(snapshot);
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_timestep: Timestep) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
