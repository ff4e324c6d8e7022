//! Blocked-arc sets and hazard-to-node resolution.
//!
//! A [`BlockedEdges`] value is built fresh for every solve and handed to the
//! cost model by reference; nothing here is cached between calls.
//!
//! # Hazard matching
//!
//! Each hazard coordinate snaps to its nearest node (squared degree
//! distance, smallest `NodeId` on ties).  If that distance is strictly below
//! the snap threshold, every arc *into* the node is blocked.  Hazards with no
//! close node block nothing.
//!
//! This is a proximity approximation: a hazard sitting on the middle of a
//! long road segment blocks neither endpoint, and a hazard near a node blocks
//! all of its inbound arcs regardless of the direction they approach from.

use rustc_hash::FxHashSet;
use tracing::debug;

use sr_core::{GeoPoint, NodeId};

use crate::RiskNetwork;

// ── BlockedEdges ──────────────────────────────────────────────────────────────

/// Set of directed arcs the search must not use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockedEdges {
    arcs: FxHashSet<(NodeId, NodeId)>,
}

impl BlockedEdges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block the single directed arc `from → to`.
    pub fn block(&mut self, from: NodeId, to: NodeId) {
        self.arcs.insert((from, to));
    }

    /// Block every arc `i → node` for `i != node` among the first
    /// `node_count` nodes.
    pub fn block_inbound(&mut self, node: NodeId, node_count: usize) {
        for i in 0..node_count as u32 {
            if i != node.0 {
                self.arcs.insert((NodeId(i), node));
            }
        }
    }

    #[inline]
    pub fn contains(&self, from: NodeId, to: NodeId) -> bool {
        self.arcs.contains(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// All blocked arcs in ascending `(from, to)` order.
    pub fn to_sorted_vec(&self) -> Vec<(NodeId, NodeId)> {
        let mut v: Vec<_> = self.arcs.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

impl FromIterator<(NodeId, NodeId)> for BlockedEdges {
    fn from_iter<I: IntoIterator<Item = (NodeId, NodeId)>>(iter: I) -> Self {
        Self { arcs: iter.into_iter().collect() }
    }
}

// ── Hazard resolution ─────────────────────────────────────────────────────────

/// How one hazard coordinate was resolved.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardMatch {
    pub hazard: GeoPoint,
    /// Node whose inbound arcs were blocked, or `None` if no node was close
    /// enough (or the coordinate was not finite).
    pub node: Option<NodeId>,
    /// Squared degree distance to the nearest node; `NaN` when the hazard
    /// coordinate was not finite.
    pub distance_deg2: f64,
}

/// Result of [`resolve_hazards`].
#[derive(Clone, Debug, Default)]
pub struct HazardResolution {
    pub blocked: BlockedEdges,
    /// One entry per input hazard, in input order.
    pub matches: Vec<HazardMatch>,
}

/// Map hazard coordinates onto nodes and build a new blocked-arc set.
pub fn resolve_hazards(
    network:             &RiskNetwork,
    hazards:             &[GeoPoint],
    snap_threshold_deg2: f64,
) -> HazardResolution {
    let mut blocked = BlockedEdges::new();
    let mut matches = Vec::with_capacity(hazards.len());

    for &hazard in hazards {
        let Some((nearest, d2)) = network.nearest_node(hazard) else {
            debug!(%hazard, "ignoring non-finite hazard coordinate");
            matches.push(HazardMatch { hazard, node: None, distance_deg2: f64::NAN });
            continue;
        };

        let node = if d2 < snap_threshold_deg2 {
            blocked.block_inbound(nearest, network.node_count());
            debug!(%hazard, node = %nearest, distance_deg2 = d2, "hazard blocks inbound arcs");
            Some(nearest)
        } else {
            debug!(%hazard, nearest = %nearest, distance_deg2 = d2, "hazard too far from any node");
            None
        };
        matches.push(HazardMatch { hazard, node, distance_deg2: d2 });
    }

    HazardResolution { blocked, matches }
}
