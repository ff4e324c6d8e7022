//! Unit tests for sr-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(NodeId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn ordering_and_depot() {
        assert!(NodeId(0) < NodeId(1));
        assert_eq!(NodeId::DEPOT, NodeId(0));
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{DistanceMetric, GeoPoint};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(23.8142, 86.4412);
        assert_eq!(DistanceMetric::Planar.distance_m(p, p), 0);
        assert_eq!(DistanceMetric::Haversine.distance_m(p, p), 0);
    }

    #[test]
    fn planar_one_degree_is_111_km() {
        let a = GeoPoint::new(23.0, 86.0);
        let b = GeoPoint::new(24.0, 86.0);
        assert_eq!(DistanceMetric::Planar.distance_m(a, b), 111_000);
    }

    #[test]
    fn planar_truncates() {
        // 0.0185 deg lat, 0.0146 deg lon → sqrt(2053.5² + 1620.6²) ≈ 2616.0…
        let a = GeoPoint::new(23.8142, 86.4412);
        let b = GeoPoint::new(23.7957, 86.4266);
        let exact = a.planar_distance_m(b);
        assert_eq!(DistanceMetric::Planar.distance_m(a, b), exact.trunc() as u32);
    }

    #[test]
    fn metrics_are_symmetric() {
        let a = GeoPoint::new(23.8142, 86.4412);
        let b = GeoPoint::new(23.6500, 86.4800);
        for m in [DistanceMetric::Planar, DistanceMetric::Haversine] {
            assert_eq!(m.distance_m(a, b), m.distance_m(b, a));
        }
    }

    #[test]
    fn haversine_shorter_than_planar_off_meridian() {
        // Planar ignores cos(lat) on the longitude delta.
        let a = GeoPoint::new(60.0, 10.0);
        let b = GeoPoint::new(60.0, 11.0);
        assert!(
            DistanceMetric::Haversine.distance_m(a, b) < DistanceMetric::Planar.distance_m(a, b)
        );
    }

    #[test]
    fn squared_degree_distance() {
        let a = GeoPoint::new(1.0, 1.0);
        let b = GeoPoint::new(1.003, 1.004);
        assert!((a.distance_deg2(b) - 0.000_025).abs() < 1e-12);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SolverConfig};

    #[test]
    fn default_is_valid() {
        let cfg = SolverConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.hazard_threshold, 1_000);
        assert_eq!(cfg.risk_scale, 10);
        assert_eq!(cfg.exact_node_limit, 15);
    }

    #[test]
    fn rejects_bad_values() {
        let bad = [
            SolverConfig { hazard_threshold: 0, ..Default::default() },
            SolverConfig { snap_threshold_deg2: 0.0, ..Default::default() },
            SolverConfig { snap_threshold_deg2: f64::NAN, ..Default::default() },
            SolverConfig { exact_node_limit: 1, ..Default::default() },
            SolverConfig { exact_node_limit: 40, ..Default::default() },
            SolverConfig { max_risk_weight: f64::INFINITY, ..Default::default() },
            SolverConfig { max_risk_weight: -1.0, ..Default::default() },
            SolverConfig { max_backtrack_steps: 0, ..Default::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(CoreError::Config(_))), "{cfg:?}");
        }
    }
}
