//! Closed tours over every node of a network.

use sr_core::NodeId;

use crate::{OptimizeError, OptimizeResult};

/// A closed tour: starts at the depot, visits every other node exactly once,
/// and returns to the depot.
///
/// Invariants (checked by [`Tour::new`]):
/// - `len() == node_count + 1`
/// - first and last node are the depot
/// - every non-depot node appears exactly once
///
/// With the `serde` feature a tour serializes as its node list and
/// deserializes through `TryFrom<Vec<NodeId>>`, so the same checks apply.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<NodeId>", into = "Vec<NodeId>"))]
pub struct Tour {
    nodes: Vec<NodeId>,
}

impl Tour {
    /// Validate `nodes` as a closed tour over `node_count` nodes from `depot`.
    pub fn new(nodes: Vec<NodeId>, node_count: usize, depot: NodeId) -> OptimizeResult<Self> {
        if depot.index() >= node_count {
            return Err(OptimizeError::DepotOutOfRange { depot, node_count });
        }
        if nodes.len() != node_count + 1 {
            return Err(OptimizeError::InvalidTour(format!(
                "length {} for {node_count} nodes, expected {}",
                nodes.len(),
                node_count + 1
            )));
        }
        if nodes.first() != Some(&depot) || nodes.last() != Some(&depot) {
            return Err(OptimizeError::InvalidTour(format!(
                "tour must start and end at depot {depot}"
            )));
        }
        let mut seen = vec![false; node_count];
        seen[depot.index()] = true;
        for &node in &nodes[1..node_count] {
            let slot = seen.get_mut(node.index()).ok_or_else(|| {
                OptimizeError::InvalidTour(format!("{node} outside network"))
            })?;
            if *slot {
                return Err(OptimizeError::InvalidTour(format!("{node} visited twice")));
            }
            *slot = true;
        }
        Ok(Self { nodes })
    }

    /// Wrap an index sequence produced by a solver.  Validity is asserted in
    /// debug builds only.
    pub(crate) fn from_indices(order: &[usize], depot: NodeId) -> Self {
        let nodes: Vec<NodeId> = order.iter().map(|&i| NodeId(i as u32)).collect();
        debug_assert!(
            Tour::new(nodes.clone(), order.len() - 1, depot).is_ok(),
            "solver produced an invalid tour: {order:?}"
        );
        Self { nodes }
    }

    /// Node sequence, depot at both ends.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn depot(&self) -> NodeId {
        self.nodes[0]
    }

    /// Number of entries, i.e. `node_count + 1`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a valid tour holds at least `[depot, x, depot]`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Directed arcs in travel order, including the closing arc back to the
    /// depot.  Every cost and metric over a tour is summed over exactly this
    /// sequence.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// `true` if the tour traverses `from → to`.
    pub fn uses_arc(&self, from: NodeId, to: NodeId) -> bool {
        self.arcs().any(|arc| arc == (from, to))
    }
}

impl TryFrom<Vec<NodeId>> for Tour {
    type Error = OptimizeError;

    /// Validate a bare node list; the depot is its first entry and the node
    /// count is one less than its length.
    fn try_from(nodes: Vec<NodeId>) -> OptimizeResult<Self> {
        let Some(&depot) = nodes.first() else {
            return Err(OptimizeError::InvalidTour("empty tour".to_owned()));
        };
        let node_count = nodes.len() - 1;
        Tour::new(nodes, node_count, depot)
    }
}

impl From<Tour> for Vec<NodeId> {
    fn from(tour: Tour) -> Vec<NodeId> {
        tour.nodes
    }
}
