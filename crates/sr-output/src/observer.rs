//! `SweepOutputObserver<W>` — bridges `SweepObserver` to an `OutputWriter`.

use sr_optimize::{SolveResult, SweepObserver, SweepSample};

use crate::row::{SweepRow, route_rows};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SweepObserver`] that writes every sample to an [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SweepObserver`
/// methods have no return value.  After the sweep returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SweepOutputObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SweepOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Write the stops of a single solve (nothing if it failed).
    pub fn record_route(&mut self, result: &SolveResult) {
        let rows = route_rows(result);
        if !rows.is_empty() {
            let r = self.writer.write_route(&rows);
            self.store_err(r);
        }
    }

    /// Samples handed to the writer so far.
    pub fn samples_written(&self) -> usize {
        self.written
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SweepObserver for SweepOutputObserver<W> {
    fn on_sample(&mut self, _index: usize, sample: &SweepSample) {
        let r = self.writer.write_samples(&[SweepRow::from(sample)]);
        self.written += 1;
        self.store_err(r);
    }

    fn on_sweep_end(&mut self, _samples: &[SweepSample]) {
        let r = self.writer.finish();
        self.store_err(r);
    }
}
