//! True (unweighted) tour totals.
//!
//! The search minimizes a blended cost; these functions report what a person
//! cares about: metres driven and risk accumulated.  Both walk
//! [`Tour::arcs`], the same arc enumeration the objective is summed over.

use sr_network::{CostMatrix, RiskNetwork};

use crate::Tour;

/// Unpenalized distance and risk totals of a tour.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourMetrics {
    pub distance_m: u64,
    pub risk:       u64,
}

/// Sum true distance and arc risk over every arc of `tour`, including the
/// return to the depot.
pub fn tour_metrics(network: &RiskNetwork, tour: &Tour) -> TourMetrics {
    tour.arcs().fold(TourMetrics::default(), |acc, (from, to)| TourMetrics {
        distance_m: acc.distance_m + u64::from(network.distance(from, to)),
        risk:       acc.risk + u64::from(network.arc_risk(from, to)),
    })
}

/// Blended objective of `tour` under `costs`, or `None` if it uses a
/// forbidden arc.
pub fn tour_objective(costs: &CostMatrix, tour: &Tour) -> Option<u64> {
    tour.arcs()
        .try_fold(0u64, |acc, (from, to)| Some(acc + costs.arc(from, to)?))
}
