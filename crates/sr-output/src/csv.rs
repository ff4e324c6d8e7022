//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `sweep_samples.csv`: `risk_weight,distance_m,risk`; both totals are
//!   empty cells when no tour was found
//! - `route.csv`: `position,node_id,lat,lon`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RouteRow, SweepRow};

fn opt_cell(v: Option<u64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

/// Writes sweep samples and tours to two CSV files.
pub struct CsvWriter {
    samples:  Writer<File>,
    route:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open both CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut samples = Writer::from_path(dir.join("sweep_samples.csv"))?;
        samples.write_record(["risk_weight", "distance_m", "risk"])?;

        let mut route = Writer::from_path(dir.join("route.csv"))?;
        route.write_record(["position", "node_id", "lat", "lon"])?;

        Ok(Self { samples, route, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_samples(&mut self, rows: &[SweepRow]) -> OutputResult<()> {
        for row in rows {
            self.samples.write_record(&[
                row.risk_weight.to_string(),
                opt_cell(row.distance_m),
                opt_cell(row.risk),
            ])?;
        }
        Ok(())
    }

    fn write_route(&mut self, rows: &[RouteRow]) -> OutputResult<()> {
        for row in rows {
            self.route.write_record(&[
                row.position.to_string(),
                row.node_id.to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.route.flush()?;
        Ok(())
    }
}
