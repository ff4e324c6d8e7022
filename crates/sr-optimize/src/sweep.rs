//! Risk-weight sweep and Pareto filtering.
//!
//! # Sweep
//!
//! [`Sweep::run`] solves the same network once per risk weight and reports
//! the true distance and risk of each winning tour.  Every solve goes through
//! [`RiskAwareSolver::solve`], which builds its own blocked set and cost
//! matrix, so weights never influence each other and the result does not
//! depend on evaluation order.
//!
//! With the `parallel` feature the weights are solved on Rayon's pool.  The
//! samples are collected in input order first and only then replayed to the
//! observer, so observers see the same sequence either way.
//!
//! # Frontier
//!
//! A sample `a` dominates `b` if `a` is no worse in both distance and risk
//! and strictly better in at least one.  [`pareto_frontier`] keeps the
//! samples nothing dominates.

use sr_core::GeoPoint;

use crate::{OptimizeResult, RiskAwareSolver, SolveResult, SweepObserver};

// ── SweepSample ───────────────────────────────────────────────────────────────

/// One point of a sweep.  `None` totals mean no tour was found at that
/// weight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSample {
    pub risk_weight: f64,
    pub distance_m:  Option<u64>,
    pub risk:        Option<u64>,
}

impl SweepSample {
    pub fn is_solved(&self) -> bool {
        self.distance_m.is_some()
    }
}

impl From<&SolveResult> for SweepSample {
    fn from(r: &SolveResult) -> Self {
        Self {
            risk_weight: r.risk_weight,
            distance_m:  r.success.then_some(r.total_distance_m),
            risk:        r.success.then_some(r.total_risk),
        }
    }
}

// ── linspace ──────────────────────────────────────────────────────────────────

/// `count` evenly spaced values from `start` to `end`, both inclusive.
///
/// `count == 0` yields nothing and `count == 1` yields `[start]`.  The last
/// value is exactly `end`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut v: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            v[count - 1] = end;
            v
        }
    }
}

// ── Sweep ─────────────────────────────────────────────────────────────────────

/// A sequence of solves over risk weights.
///
/// ```rust,ignore
/// let samples = Sweep::new(&solver, linspace(0.0, 10.0, 20))
///     .hazards(&[GeoPoint::new(23.8050, 86.4300)])
///     .run(&mut NoopObserver)?;
/// ```
pub struct Sweep<'a> {
    solver:  &'a RiskAwareSolver,
    weights: Vec<f64>,
    hazards: &'a [GeoPoint],
}

impl<'a> Sweep<'a> {
    pub fn new(solver: &'a RiskAwareSolver, weights: Vec<f64>) -> Self {
        Self { solver, weights, hazards: &[] }
    }

    /// Hazard coordinates applied to every solve of the sweep.
    pub fn hazards(mut self, hazards: &'a [GeoPoint]) -> Self {
        self.hazards = hazards;
        self
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Solve every weight and return one sample per weight, in input order.
    ///
    /// Fails on the first weight (in input order) the solver rejects.  The
    /// observer has then seen every sample before it.
    pub fn run<O: SweepObserver>(self, observer: &mut O) -> OptimizeResult<Vec<SweepSample>> {
        observer.on_sweep_start(self.weights.len());

        let samples = self.solve_all(observer)?;

        observer.on_sweep_end(&samples);
        Ok(samples)
    }

    #[cfg(not(feature = "parallel"))]
    fn solve_all<O: SweepObserver>(&self, observer: &mut O) -> OptimizeResult<Vec<SweepSample>> {
        let mut samples = Vec::with_capacity(self.weights.len());
        for (i, &w) in self.weights.iter().enumerate() {
            let sample = SweepSample::from(&self.solver.solve(w, self.hazards)?);
            observer.on_sample(i, &sample);
            samples.push(sample);
        }
        Ok(samples)
    }

    #[cfg(feature = "parallel")]
    fn solve_all<O: SweepObserver>(&self, observer: &mut O) -> OptimizeResult<Vec<SweepSample>> {
        use rayon::prelude::*;

        let results: Vec<OptimizeResult<SweepSample>> = self
            .weights
            .par_iter()
            .map(|&w| self.solver.solve(w, self.hazards).map(|r| SweepSample::from(&r)))
            .collect();

        let mut samples = Vec::with_capacity(results.len());
        for (i, result) in results.into_iter().enumerate() {
            let sample = result?;
            observer.on_sample(i, &sample);
            samples.push(sample);
        }
        Ok(samples)
    }
}

// ── Pareto frontier ───────────────────────────────────────────────────────────

/// Non-dominated solved samples, sorted by ascending distance.
///
/// Unsolved samples are ignored.  Samples with identical `(distance, risk)`
/// collapse to the one that appears first in `samples`.
pub fn pareto_frontier(samples: &[SweepSample]) -> Vec<SweepSample> {
    let mut solved: Vec<(u64, u64, usize)> = samples
        .iter()
        .enumerate()
        .filter_map(|(i, s)| Some((s.distance_m?, s.risk?, i)))
        .collect();
    solved.sort_unstable();

    // Sorted by distance then risk: a sample survives iff its risk is below
    // every risk seen at a smaller or equal distance.
    let mut frontier = Vec::new();
    let mut best_risk = u64::MAX;
    for (_, risk, i) in solved {
        if risk < best_risk {
            best_risk = risk;
            frontier.push(samples[i]);
        }
    }
    frontier
}
