//! Shared Dhanbad network definition.
//!
//! Ten locations around Dhanbad, Jharkhand, with the ISM campus as depot.
//! The `dhanbad` binary prints its tours and hazards against these names.

use sr_core::{GeoPoint, NodeId};
use sr_network::{NetworkResult, RiskNetwork, RiskNetworkBuilder};

/// `(name, lat, lon, risk)` in `NodeId` order.
pub const LOCATIONS: [(&str, f64, f64, u32); 10] = [
    ("ISM",         23.8142, 86.4412, 0),
    ("Station",     23.7957, 86.4266, 10),
    ("City Centre", 23.8050, 86.4300, 50),
    ("Hirapur",     23.8100, 86.4350, 5),
    ("Bank More",   23.7900, 86.4200, 20),
    ("Bartand",     23.8200, 86.4500, 10),
    ("Steel Gate",  23.8300, 86.4600, 15),
    ("Govindpur",   23.8500, 86.5000, 80),
    ("Jharia",      23.7500, 86.4000, 90),
    ("BIT Sindri",  23.6500, 86.4800, 30),
];

/// Roads whose risk differs from that of the place they lead to.
const ROAD_RISKS: [(u32, u32, u32); 6] = [
    (2, 4, 95), // City Centre ↔ Bank More market stretch
    (1, 4, 5),  // Station ↔ Bank More flyover
    (3, 2, 2),  // Hirapur ↔ City Centre back lanes
    (8, 9, 60), // Jharia ↔ Sindri mining belt
    (6, 7, 70), // Steel Gate ↔ Govindpur highway
    (5, 7, 8),  // Bartand ↔ Govindpur ring road
];

pub fn name(node: NodeId) -> &'static str {
    LOCATIONS.get(node.index()).map_or("?", |l| l.0)
}

/// Build the 10-node Dhanbad network with planar distances.
pub fn build_network() -> NetworkResult<RiskNetwork> {
    let mut b = RiskNetworkBuilder::with_capacity(LOCATIONS.len());
    for &(_, lat, lon, risk) in &LOCATIONS {
        b.add_node_with_risk(GeoPoint::new(lat, lon), risk);
    }
    for &(a, c, risk) in &ROAD_RISKS {
        b.set_road_risk(NodeId(a), NodeId(c), risk);
    }
    b.build()
}
