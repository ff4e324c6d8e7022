//! Tests for sr-output.

#[cfg(test)]
mod helpers {
    use sr_core::{GeoPoint, NodeId};
    use sr_network::RiskNetworkBuilder;
    use sr_optimize::{RiskAwareSolver, SolverBuilder};

    /// Four corners of a 0.01° square; node 2 risky.
    pub fn square_solver() -> RiskAwareSolver {
        let mut b = RiskNetworkBuilder::new();
        b.add_node(GeoPoint::new(0.00, 0.00));
        b.add_node(GeoPoint::new(0.00, 0.01));
        b.add_node_with_risk(GeoPoint::new(0.01, 0.01), 40);
        b.add_node(GeoPoint::new(0.01, 0.00));
        b.set_road_risk(NodeId(0), NodeId(1), 3);
        SolverBuilder::new(b.build().unwrap()).build().unwrap()
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{RouteRow, SweepRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn read_records(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("sweep_samples.csv").exists());
        assert!(dir.path().join("route.csv").exists());
    }

    #[test]
    fn missing_directory_created() {
        let dir = tmp();
        let nested = dir.path().join("out").join("dhanbad");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("sweep_samples.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("sweep_samples.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["risk_weight", "distance_m", "risk"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("route.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["position", "node_id", "lat", "lon"]);
    }

    #[test]
    fn unsolved_sample_leaves_empty_cells() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_samples(&[
            SweepRow { risk_weight: 0.5, distance_m: Some(1200), risk: Some(30) },
            SweepRow { risk_weight: 1.0, distance_m: None, risk: None },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_records(&dir.path().join("sweep_samples.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0.5");
        assert_eq!(&rows[0][1], "1200");
        assert_eq!(&rows[0][2], "30");
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][1], "");
        assert_eq!(&rows[1][2], "");
    }

    #[test]
    fn route_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_route(&[
            RouteRow { position: 0, node_id: 0, lat: 23.8142, lon: 86.4412 },
            RouteRow { position: 1, node_id: 2, lat: 23.805, lon: 86.43 },
        ])
        .unwrap();
        w.finish().unwrap();

        let rows = read_records(&dir.path().join("route.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "2");
        assert_eq!(&rows[1][2], "23.805");
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod row_tests {
    use sr_core::GeoPoint;

    use super::helpers::square_solver;
    use crate::row::route_rows;

    #[test]
    fn route_rows_follow_tour() {
        let solver = square_solver();
        let result = solver.solve(0.0, &[]).unwrap();
        let rows = route_rows(&result);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].node_id, 0);
        assert_eq!(rows[4].node_id, 0);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.position as usize, i);
            let pos = solver.network().position(result.route_indices()[i]);
            assert_eq!((row.lat, row.lon), (pos.lat, pos.lon));
        }
    }

    #[test]
    fn failed_solve_has_no_rows() {
        let solver = square_solver();
        let result = solver.solve(0.0, &[GeoPoint::new(0.01, 0.01)]).unwrap();
        assert!(!result.success);
        assert!(route_rows(&result).is_empty());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use sr_optimize::{Sweep, linspace};
    use tempfile::TempDir;

    use super::helpers::square_solver;
    use crate::{
        CsvWriter, OutputError, OutputResult, OutputWriter, RouteRow, SweepOutputObserver,
        SweepRow,
    };

    #[derive(Default)]
    struct CountingWriter {
        samples:  Vec<SweepRow>,
        routes:   usize,
        finished: usize,
    }

    impl OutputWriter for CountingWriter {
        fn write_samples(&mut self, rows: &[SweepRow]) -> OutputResult<()> {
            self.samples.extend_from_slice(rows);
            Ok(())
        }
        fn write_route(&mut self, rows: &[RouteRow]) -> OutputResult<()> {
            self.routes += rows.len();
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_samples(&mut self, _rows: &[SweepRow]) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("disk full")))
        }
        fn write_route(&mut self, _rows: &[RouteRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Err(OutputError::Io(io::Error::other("close failed")))
        }
    }

    #[test]
    fn sweep_samples_reach_writer_in_order() {
        let solver = square_solver();
        let mut obs = SweepOutputObserver::new(CountingWriter::default());
        let weights = linspace(0.0, 2.0, 5);
        let samples = Sweep::new(&solver, weights.clone()).run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.samples_written(), 5);

        let w = obs.into_writer();
        assert_eq!(w.finished, 1);
        let got: Vec<f64> = w.samples.iter().map(|r| r.risk_weight).collect();
        assert_eq!(got, weights);
        assert_eq!(w.samples[2].distance_m, samples[2].distance_m);
    }

    #[test]
    fn route_recorded_once_per_result() {
        let solver = square_solver();
        let mut obs = SweepOutputObserver::new(CountingWriter::default());
        obs.record_route(&solver.solve(1.0, &[]).unwrap());
        assert_eq!(obs.into_writer().routes, 5);
    }

    #[test]
    fn first_error_kept() {
        let solver = square_solver();
        let mut obs = SweepOutputObserver::new(FailingWriter);
        Sweep::new(&solver, vec![0.0, 1.0]).run(&mut obs).unwrap();
        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn end_to_end_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let solver = square_solver();
        let mut obs = SweepOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        obs.record_route(&solver.solve(0.0, &[]).unwrap());
        Sweep::new(&solver, linspace(0.0, 1.0, 3)).run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("sweep_samples.csv")).unwrap();
        assert_eq!(rdr.records().count(), 3);
        let mut rdr = csv::Reader::from_path(dir.path().join("route.csv")).unwrap();
        assert_eq!(rdr.records().count(), 5);
    }
}
