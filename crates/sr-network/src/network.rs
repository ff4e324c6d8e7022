//! Risk-annotated road network and builder.
//!
//! # Data layout
//!
//! Every node pair is a potential arc, so distances are precomputed into a
//! dense row-major `n × n` table at build time:
//!
//! ```text
//! distance(a, b) = dist[a * n + b]
//! ```
//!
//! At the target scale (a few dozen nodes) the table is a few KiB and every
//! lookup the search performs is a single indexed load.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used to
//! snap hazard coordinates onto nodes.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use sr_core::{DistanceMetric, GeoPoint, NodeId};

use crate::{NetworkError, NetworkResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon degree space.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RiskNetwork ───────────────────────────────────────────────────────────────

/// Immutable node set with per-node risk, a precomputed distance table and a
/// spatial index for hazard snapping.
///
/// Do not construct directly; use [`RiskNetworkBuilder`].
pub struct RiskNetwork {
    /// Geographic position of each node.  Indexed by `NodeId`.
    node_pos: Vec<GeoPoint>,

    /// Risk score of each node.  Nodes never assigned a risk hold 0.
    node_risk: Vec<u32>,

    /// Row-major `n × n` arc risk.  Defaults to the destination node's risk
    /// unless an arc override was set.
    arc_risk: Vec<u32>,

    /// Row-major `n × n` distance table in metres.
    dist: Vec<u32>,

    /// `None` when distances came from an explicit matrix.
    metric: Option<DistanceMetric>,

    spatial_idx: RTree<NodeEntry>,
}

impl RiskNetwork {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    /// Iterator over every `NodeId` in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count() as u32).map(NodeId)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// The metric distances were derived from, or `None` for an explicit
    /// matrix.
    pub fn metric(&self) -> Option<DistanceMetric> {
        self.metric
    }

    // ── Arc attributes ────────────────────────────────────────────────────

    /// Distance in metres from `a` to `b`.  Symmetric, and 0 for `a == b`.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    #[inline]
    pub fn distance(&self, a: NodeId, b: NodeId) -> u32 {
        self.dist[a.index() * self.node_count() + b.index()]
    }

    /// Risk score of `node`.
    ///
    /// # Panics
    /// Panics if `node` is out of range.
    #[inline]
    pub fn risk(&self, node: NodeId) -> u32 {
        self.node_risk[node.index()]
    }

    /// Risk contribution of traversing `from → to`.
    ///
    /// This is `risk(to)` unless the arc was given its own risk with
    /// [`RiskNetworkBuilder::set_arc_risk`].
    #[inline]
    pub fn arc_risk(&self, from: NodeId, to: NodeId) -> u32 {
        self.arc_risk[from.index() * self.node_count() + to.index()]
    }

    /// Largest entry of the distance table.
    pub fn max_distance(&self) -> u32 {
        self.dist.iter().copied().max().unwrap_or(0)
    }

    /// Coordinate of `node`.
    #[inline]
    pub fn position(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the nearest node to `pos` together with its squared degree
    /// distance.
    ///
    /// Equidistant nodes resolve to the smallest `NodeId`, so the answer does
    /// not depend on R-tree layout.  Returns `None` only for a non-finite
    /// query point.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<(NodeId, f64)> {
        if !pos.is_finite() {
            return None;
        }
        let query = [pos.lat, pos.lon];
        let mut iter = self.spatial_idx.nearest_neighbor_iter_with_distance_2(&query);
        let (first, best_d2) = iter.next()?;
        let id = iter
            .take_while(|(_, d2)| *d2 == best_d2)
            .map(|(e, _)| e.id)
            .fold(first.id, |acc, id| acc.min(id));
        Some((id, best_d2))
    }
}

// ── RiskNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RiskNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sr_core::GeoPoint;
/// use sr_network::RiskNetworkBuilder;
///
/// let mut b = RiskNetworkBuilder::new();
/// let depot = b.add_node(GeoPoint::new(23.8142, 86.4412));
/// let city  = b.add_node_with_risk(GeoPoint::new(23.8050, 86.4300), 50);
/// let net = b.build().unwrap();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.risk(city), 50);
/// assert_eq!(net.distance(depot, city), net.distance(city, depot));
/// ```
pub struct RiskNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    risks:     Vec<u32>,
    arc_risks: Vec<(NodeId, NodeId, u32)>,
    metric:    DistanceMetric,
    matrix:    Option<Vec<Vec<u32>>>,
}

impl RiskNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes:     Vec::new(),
            risks:     Vec::new(),
            arc_risks: Vec::new(),
            metric:    DistanceMetric::default(),
            matrix:    None,
        }
    }

    /// Pre-allocate for the expected number of nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            risks:     Vec::with_capacity(nodes),
            arc_risks: Vec::new(),
            metric:    DistanceMetric::default(),
            matrix:    None,
        }
    }

    /// Add a node with risk 0 and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        self.add_node_with_risk(pos, 0)
    }

    /// Add a node with the given risk score.
    pub fn add_node_with_risk(&mut self, pos: GeoPoint, risk: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.risks.push(risk);
        id
    }

    /// Overwrite the risk of a node added earlier.
    pub fn set_risk(&mut self, node: NodeId, risk: u32) -> NetworkResult<()> {
        let slot = self
            .risks
            .get_mut(node.index())
            .ok_or(NetworkError::NodeNotFound(node))?;
        *slot = risk;
        Ok(())
    }

    /// Give the directed arc `from → to` its own risk instead of the
    /// destination node's.  Later calls for the same arc win.
    ///
    /// An arc risk at or above the hazard threshold forbids that arc.
    /// Node ids are checked by [`build`](Self::build).
    pub fn set_arc_risk(&mut self, from: NodeId, to: NodeId, risk: u32) {
        self.arc_risks.push((from, to, risk));
    }

    /// [`set_arc_risk`](Self::set_arc_risk) in both directions.
    pub fn set_road_risk(&mut self, a: NodeId, b: NodeId, risk: u32) {
        self.set_arc_risk(a, b, risk);
        self.set_arc_risk(b, a, risk);
    }

    /// Choose how distances are derived from coordinates.  Ignored when a
    /// distance matrix is supplied.
    pub fn set_metric(&mut self, metric: DistanceMetric) {
        self.metric = metric;
    }

    /// Use explicit distances instead of a coordinate metric.
    ///
    /// `rows[a][b]` is the distance from node `a` to node `b`.  Validated by
    /// [`build`](Self::build): square, zero diagonal, symmetric.
    pub fn set_distance_matrix(&mut self, rows: Vec<Vec<u32>>) {
        self.matrix = Some(rows);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Validate inputs, fill the distance table, bulk-load the R-tree and
    /// return the finished [`RiskNetwork`].
    pub fn build(self) -> NetworkResult<RiskNetwork> {
        let n = self.nodes.len();
        if n < 2 {
            return Err(NetworkError::TooFewNodes { got: n });
        }
        if let Some(i) = self.nodes.iter().position(|p| !p.is_finite()) {
            return Err(NetworkError::InvalidCoordinate(NodeId(i as u32)));
        }

        let (dist, metric) = match self.matrix {
            Some(rows) => (flatten_matrix(rows, n)?, None),
            None => {
                let mut dist = vec![0u32; n * n];
                for a in 0..n {
                    for b in (a + 1)..n {
                        let d = self.metric.distance_m(self.nodes[a], self.nodes[b]);
                        dist[a * n + b] = d;
                        dist[b * n + a] = d;
                    }
                }
                (dist, Some(self.metric))
            }
        };

        let mut arc_risk = vec![0u32; n * n];
        for a in 0..n {
            for b in 0..n {
                if a != b {
                    arc_risk[a * n + b] = self.risks[b];
                }
            }
        }
        for &(from, to, risk) in &self.arc_risks {
            for id in [from, to] {
                if id.index() >= n {
                    return Err(NetworkError::NodeNotFound(id));
                }
            }
            arc_risk[from.index() * n + to.index()] = risk;
        }

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(RiskNetwork {
            node_pos: self.nodes,
            node_risk: self.risks,
            arc_risk,
            dist,
            metric,
            spatial_idx,
        })
    }
}

impl Default for RiskNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn flatten_matrix(rows: Vec<Vec<u32>>, n: usize) -> NetworkResult<Vec<u32>> {
    if rows.len() != n {
        return Err(NetworkError::MatrixRows { expected: n, got: rows.len() });
    }
    let mut dist = Vec::with_capacity(n * n);
    for (row, cells) in rows.into_iter().enumerate() {
        if cells.len() != n {
            return Err(NetworkError::MatrixShape { row, expected: n, got: cells.len() });
        }
        dist.extend(cells);
    }
    for a in 0..n {
        if dist[a * n + a] != 0 {
            return Err(NetworkError::MatrixDiagonal {
                node:  NodeId(a as u32),
                value: dist[a * n + a],
            });
        }
        for b in (a + 1)..n {
            if dist[a * n + b] != dist[b * n + a] {
                return Err(NetworkError::MatrixAsymmetric {
                    a: NodeId(a as u32),
                    b: NodeId(b as u32),
                });
            }
        }
    }
    Ok(dist)
}
