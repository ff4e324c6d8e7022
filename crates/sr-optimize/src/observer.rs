//! Sweep observer trait for progress reporting and data collection.

use crate::SweepSample;

/// Callbacks invoked by [`Sweep::run`][crate::Sweep::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Samples always arrive in input weight
/// order, including under the `parallel` feature.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SweepObserver for Printer {
///     fn on_sample(&mut self, index: usize, sample: &SweepSample) {
///         println!("#{index} λ={:.2}: {:?} m, risk {:?}",
///             sample.risk_weight, sample.distance_m, sample.risk);
///     }
/// }
/// ```
pub trait SweepObserver {
    /// Called once before the first solve with the number of weights.
    fn on_sweep_start(&mut self, _total: usize) {}

    /// Called once per weight, in input order.
    fn on_sample(&mut self, _index: usize, _sample: &SweepSample) {}

    /// Called once after the last sample.
    fn on_sweep_end(&mut self, _samples: &[SweepSample]) {}
}

/// A [`SweepObserver`] that does nothing.
pub struct NoopObserver;

impl SweepObserver for NoopObserver {}
