//! Plain data row types written by output backends.

use sr_optimize::{SolveResult, SweepSample};

/// One sweep sample.  `None` totals mean no tour was found at that weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub risk_weight: f64,
    pub distance_m:  Option<u64>,
    pub risk:        Option<u64>,
}

impl From<&SweepSample> for SweepRow {
    fn from(s: &SweepSample) -> Self {
        Self { risk_weight: s.risk_weight, distance_m: s.distance_m, risk: s.risk }
    }
}

/// One stop of a tour.  The depot appears at the first and last position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRow {
    pub position: u32,
    pub node_id:  u32,
    pub lat:      f64,
    pub lon:      f64,
}

/// Rows for every stop of `result`'s tour; empty when the solve failed.
pub fn route_rows(result: &SolveResult) -> Vec<RouteRow> {
    result
        .route_indices()
        .iter()
        .zip(&result.route_coords)
        .enumerate()
        .map(|(i, (node, pos))| RouteRow {
            position: i as u32,
            node_id:  node.0,
            lat:      pos.lat,
            lon:      pos.lon,
        })
        .collect()
}
