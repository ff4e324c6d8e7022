//! Geographic coordinate type and distance metrics.
//!
//! `GeoPoint` stores `f64` latitude/longitude.  Hazard snapping compares
//! squared degree deltas against thresholds around `1e-4`, which is too close
//! to `f32` rounding noise at city coordinates.

/// Metres per degree used by the planar approximation.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Mean Earth radius in metres, used by [`DistanceMetric::Haversine`].
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Squared Euclidean distance in raw degree space.
    ///
    /// This is the quantity hazard snapping thresholds are expressed in.
    #[inline]
    pub fn distance_deg2(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Planar approximation in metres: both degree deltas are scaled by
    /// [`METERS_PER_DEGREE`] and combined with the Euclidean norm.
    ///
    /// Longitude is **not** shortened by `cos(lat)`, so east-west distances
    /// are overstated away from the equator.  Adequate for ranking tours over
    /// a few dozen nodes inside one city; not a geodesic distance.
    pub fn planar_distance_m(self, other: GeoPoint) -> f64 {
        let dx = (self.lat - other.lat) * METERS_PER_DEGREE;
        let dy = (self.lon - other.lon) * METERS_PER_DEGREE;
        (dx * dx + dy * dy).sqrt()
    }

    /// Haversine great-circle distance in metres.
    pub fn haversine_distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── DistanceMetric ────────────────────────────────────────────────────────────

/// How node-to-node distances are derived from coordinates.
///
/// Both variants are symmetric, return 0 for identical points and truncate
/// to whole metres, so swapping one for the other changes no other contract.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// [`GeoPoint::planar_distance_m`].  The default.
    #[default]
    Planar,
    /// [`GeoPoint::haversine_distance_m`].
    Haversine,
}

impl DistanceMetric {
    /// Distance in whole metres (truncated toward zero, saturating at
    /// `u32::MAX`).
    pub fn distance_m(self, a: GeoPoint, b: GeoPoint) -> u32 {
        let d = match self {
            DistanceMetric::Planar => a.planar_distance_m(b),
            DistanceMetric::Haversine => a.haversine_distance_m(b),
        };
        // `as` saturates for out-of-range floats.
        d as u32
    }
}
