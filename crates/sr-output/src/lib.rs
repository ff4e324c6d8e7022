//! `sr-output` — result writers for the SafeRoute engine.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `sweep_samples.csv`, `route.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SweepOutputObserver`], which implements `sr_optimize::SweepObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sr_output::{CsvWriter, SweepOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SweepOutputObserver::new(writer);
//! obs.record_route(&solver.solve(5.0, &[])?);
//! Sweep::new(&solver, linspace(0.0, 10.0, 20)).run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SweepOutputObserver;
pub use row::{RouteRow, SweepRow, route_rows};
pub use writer::OutputWriter;
