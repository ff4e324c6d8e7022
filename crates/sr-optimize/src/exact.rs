//! Exact tour search: Held-Karp bitmask dynamic programming.
//!
//! # Formulation
//!
//! Let `m = n - 1` non-depot nodes be numbered `0..m` in ascending `NodeId`
//! order.  `g[S][i]` is the cheapest way to finish a tour from non-depot node
//! `i` when exactly the nodes in bitmask `S` (which contains `i`) have been
//! visited:
//!
//! ```text
//! g[FULL][i] = c(i, depot)
//! g[S][i]    = min over j ∉ S of  c(i, j) + g[S ∪ {j}][j]
//! best       = min over j     of  c(depot, j) + g[{j}][j]
//! ```
//!
//! Forbidden arcs never enter a minimum, so `best` is finite only if a tour
//! of permitted arcs exists.
//!
//! # Tie-breaking
//!
//! The tour is rebuilt forward from the depot, at each step taking the
//! smallest next node whose continuation still attains the optimum.  Because
//! node numbering follows `NodeId` order, that yields the lexicographically
//! smallest optimal tour.
//!
//! # Cost
//!
//! `O(2^m · m²)` time, `2^m · m` `u64` cells: ≈ 1.8 MB and ≈ 3.2 M inner
//! steps at `n = 15`.

use tracing::error;

use sr_core::NodeId;
use sr_core::config::EXACT_NODE_LIMIT_CAP;
use sr_network::CostMatrix;

use crate::{SolveMode, Tour, TourSolver};

const INF: u64 = u64::MAX;

/// Held-Karp solver.  Stateless; all tables are local to each call.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExactSolver;

impl TourSolver for ExactSolver {
    fn mode(&self) -> SolveMode {
        SolveMode::Exact
    }

    fn solve(&self, costs: &CostMatrix, depot: NodeId) -> Option<Tour> {
        let n = costs.node_count();
        if n < 2 || depot.index() >= n {
            return None;
        }
        if n > EXACT_NODE_LIMIT_CAP {
            error!(nodes = n, cap = EXACT_NODE_LIMIT_CAP, "exact search refused: too many nodes");
            return None;
        }
        held_karp(costs, depot.index()).map(|order| Tour::from_indices(&order, depot))
    }
}

fn held_karp(costs: &CostMatrix, depot: usize) -> Option<Vec<usize>> {
    let n = costs.node_count();
    let others: Vec<usize> = (0..n).filter(|&v| v != depot).collect();
    let m = others.len();
    let full: usize = (1 << m) - 1;

    // g[mask * m + i]
    let mut g = vec![INF; (full + 1) * m];

    for (i, &vi) in others.iter().enumerate() {
        if let Some(c) = costs.arc_idx(vi, depot) {
            g[full * m + i] = c;
        }
    }

    for mask in (1..full).rev() {
        for (i, &vi) in others.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let mut best = INF;
            for (j, &vj) in others.iter().enumerate() {
                if mask & (1 << j) != 0 {
                    continue;
                }
                let rest = g[(mask | 1 << j) * m + j];
                if rest == INF {
                    continue;
                }
                if let Some(c) = costs.arc_idx(vi, vj) {
                    best = best.min(c.saturating_add(rest));
                }
            }
            g[mask * m + i] = best;
        }
    }

    // Cost of the best tour.
    let mut best = INF;
    for (j, &vj) in others.iter().enumerate() {
        let rest = g[(1 << j) * m + j];
        if rest == INF {
            continue;
        }
        if let Some(c) = costs.arc_idx(depot, vj) {
            best = best.min(c.saturating_add(rest));
        }
    }
    if best == INF {
        return None;
    }

    // Forward reconstruction, smallest feasible next node first.
    let mut order = Vec::with_capacity(n + 1);
    order.push(depot);
    let mut cur = depot;
    let mut mask = 0usize;
    let mut remaining = best;
    while mask != full {
        let (j, c) = others
            .iter()
            .enumerate()
            .filter(|&(j, _)| mask & (1 << j) == 0)
            .find_map(|(j, &vj)| {
                let c = costs.arc_idx(cur, vj)?;
                let rest = g[(mask | 1 << j) * m + j];
                (rest != INF && c.saturating_add(rest) == remaining).then_some((j, c))
            })?;
        remaining -= c;
        mask |= 1 << j;
        cur = others[j];
        order.push(cur);
    }
    order.push(depot);
    Some(order)
}
