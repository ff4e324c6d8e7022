//! CSV node loader.
//!
//! # CSV format
//!
//! One row per node.  `node_id` must run `0, 1, 2, …` in file order so that
//! ids in the file are the `NodeId`s of the built network.  The `risk` column
//! may be omitted entirely, in which case every node gets risk 0.
//!
//! ```csv
//! node_id,lat,lon,risk
//! 0,23.8142,86.4412,0
//! 1,23.7957,86.4266,10
//! 2,23.8050,86.4300,50
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sr_core::GeoPoint;

use crate::{NetworkError, NetworkResult, RiskNetworkBuilder};

#[derive(Deserialize)]
struct NodeRecord {
    node_id: u32,
    lat:     f64,
    lon:     f64,
    #[serde(default)]
    risk:    u32,
}

/// Load nodes from a CSV file into a fresh [`RiskNetworkBuilder`].
///
/// The caller may still adjust the metric or risks before calling `build`.
pub fn load_nodes_csv(path: &Path) -> NetworkResult<RiskNetworkBuilder> {
    let file = std::fs::File::open(path)?;
    load_nodes_reader(file)
}

/// Like [`load_nodes_csv`] but accepts any `Read` source.
pub fn load_nodes_reader<R: Read>(reader: R) -> NetworkResult<RiskNetworkBuilder> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = RiskNetworkBuilder::new();

    for result in csv_reader.deserialize::<NodeRecord>() {
        let row = result?;
        let expected = builder.node_count() as u32;
        if row.node_id != expected {
            return Err(NetworkError::Parse(format!(
                "node_id {} out of order: expected {expected}",
                row.node_id
            )));
        }
        builder.add_node_with_risk(GeoPoint::new(row.lat, row.lon), row.risk);
    }

    Ok(builder)
}
