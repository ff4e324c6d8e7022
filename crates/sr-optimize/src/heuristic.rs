//! Heuristic tour search for networks above the exact-search limit.
//!
//! # Construction
//!
//! Cheapest-arc-first from the depot: at every step extend the path along the
//! cheapest permitted arc to an unvisited node (ties → smallest `NodeId`).
//! A candidate is rejected up front when, after taking it, no unvisited node
//! could close the circuit back to the depot, or some unvisited node has no
//! permitted arc in from the path end or another unvisited node.  When the
//! path still dead-ends, the search backtracks and tries the next-cheapest
//! candidate.  Backtracking is capped at `max_backtrack_steps` node
//! expansions.
//!
//! # Improvement
//!
//! 2-opt: reverse the segment `tour[i..=k]` for every `1 <= i < k <= n - 1`
//! and keep the first move that makes the tour strictly cheaper while using
//! only permitted arcs.  Repeat until no move improves.  Arc costs are
//! direction-dependent (risk follows the arc), so each candidate is
//! re-costed in full rather than by the symmetric four-arc delta.

use std::cmp::Reverse;

use tracing::{debug, warn};

use sr_core::NodeId;
use sr_network::CostMatrix;

use crate::{SolveMode, Tour, TourSolver};

/// Greedy construction with bounded backtracking, optionally followed by
/// 2-opt.  Deterministic for a given cost matrix.
#[derive(Copy, Clone, Debug)]
pub struct HeuristicSolver {
    pub two_opt:             bool,
    pub max_backtrack_steps: usize,
}

impl Default for HeuristicSolver {
    fn default() -> Self {
        Self { two_opt: true, max_backtrack_steps: 100_000 }
    }
}

impl TourSolver for HeuristicSolver {
    fn mode(&self) -> SolveMode {
        SolveMode::Heuristic
    }

    fn solve(&self, costs: &CostMatrix, depot: NodeId) -> Option<Tour> {
        let n = costs.node_count();
        if n < 2 || depot.index() >= n {
            return None;
        }
        let mut order = self.construct(costs, depot.index())?;
        if self.two_opt {
            let moves = two_opt(costs, &mut order);
            debug!(moves, "2-opt finished");
        }
        Some(Tour::from_indices(&order, depot))
    }
}

impl HeuristicSolver {
    fn construct(&self, costs: &CostMatrix, depot: usize) -> Option<Vec<usize>> {
        let n = costs.node_count();
        let mut path = Vec::with_capacity(n + 1);
        let mut visited = vec![false; n];
        path.push(depot);
        visited[depot] = true;

        // frames[k] holds the untried successors of path[k], cheapest last.
        let mut frames: Vec<Vec<usize>> = vec![candidates(costs, depot, &visited)];
        let mut steps = 0usize;

        loop {
            if path.len() == n {
                let last = path[n - 1];
                if costs.arc_idx(last, depot).is_some() {
                    path.push(depot);
                    return Some(path);
                }
                // Cannot close the circuit from here.
                visited[last] = false;
                path.pop();
                continue;
            }

            let frame = frames.last_mut()?;
            match frame.pop() {
                Some(next) => {
                    steps += 1;
                    if steps > self.max_backtrack_steps {
                        warn!(steps, "heuristic construction gave up: backtrack budget exhausted");
                        return None;
                    }
                    visited[next] = true;
                    if !viable(costs, depot, next, &visited) {
                        visited[next] = false;
                        continue;
                    }
                    path.push(next);
                    if path.len() < n {
                        let cands = candidates(costs, next, &visited);
                        frames.push(cands);
                    }
                }
                None => {
                    frames.pop();
                    let dead = path.pop()?;
                    if dead == depot {
                        return None;
                    }
                    visited[dead] = false;
                }
            }
        }
    }
}

/// Unvisited nodes reachable from `from` by a permitted arc, sorted so the
/// cheapest (then smallest index) is popped first.
fn candidates(costs: &CostMatrix, from: usize, visited: &[bool]) -> Vec<usize> {
    let mut c: Vec<(u64, usize)> = (0..costs.node_count())
        .filter(|&to| !visited[to])
        .filter_map(|to| costs.arc_idx(from, to).map(|cost| (cost, to)))
        .collect();
    c.sort_unstable_by_key(|&(cost, to)| Reverse((cost, to)));
    c.into_iter().map(|(_, to)| to).collect()
}

/// Whether the path ending at `last` may still complete: some unvisited node
/// has a permitted arc to the depot, and every unvisited node can be entered
/// from `last` or from another unvisited node.
fn viable(costs: &CostMatrix, depot: usize, last: usize, visited: &[bool]) -> bool {
    let open: Vec<usize> = (0..costs.node_count()).filter(|&v| !visited[v]).collect();
    if open.is_empty() {
        return true;
    }
    if !open.iter().any(|&v| costs.arc_idx(v, depot).is_some()) {
        return false;
    }
    open.iter().all(|&v| {
        costs.arc_idx(last, v).is_some()
            || open.iter().any(|&u| u != v && costs.arc_idx(u, v).is_some())
    })
}

fn order_cost(costs: &CostMatrix, order: &[usize]) -> Option<u64> {
    order
        .windows(2)
        .try_fold(0u64, |acc, w| Some(acc + costs.arc_idx(w[0], w[1])?))
}

/// Improve `order` in place; returns the number of accepted moves.
fn two_opt(costs: &CostMatrix, order: &mut [usize]) -> usize {
    let last = order.len() - 1; // index of the closing depot
    let Some(mut best) = order_cost(costs, order) else {
        return 0;
    };
    let mut moves = 0;
    let mut improved = true;

    while improved {
        improved = false;
        'scan: for i in 1..last {
            for k in (i + 1)..last {
                order[i..=k].reverse();
                match order_cost(costs, order) {
                    Some(c) if c < best => {
                        best = c;
                        moves += 1;
                        improved = true;
                        break 'scan;
                    }
                    _ => order[i..=k].reverse(),
                }
            }
        }
    }
    moves
}
