//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, RouteRow, SweepRow};

/// Trait implemented by result writers.
///
/// From the observer's side every call is infallible: errors are stored and
/// retrieved with [`SweepOutputObserver::take_error`][crate::SweepOutputObserver::take_error].
pub trait OutputWriter {
    /// Append sweep samples.
    fn write_samples(&mut self, rows: &[SweepRow]) -> OutputResult<()>;

    /// Append the stops of one tour.
    fn write_route(&mut self, rows: &[RouteRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
