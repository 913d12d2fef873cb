//! Geographic coordinates and the planar-to-geographic projection.

mod projection;

pub use projection::{
    METERS_PER_DEGREE_LATITUDE, Projection, meters_per_degree_longitude, project_points,
};

use std::fmt;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// `true` when latitude is in [-90, 90] and longitude in [-180, 180].
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Clamps latitude into [-90, 90] and wraps longitude into [-180, 180].
    ///
    /// Points already in range come back unchanged.
    #[must_use]
    pub fn wrapped(self) -> Self {
        let latitude = self.latitude.clamp(-90.0, 90.0);
        let longitude = if (-180.0..=180.0).contains(&self.longitude) {
            self.longitude
        } else {
            (self.longitude + 180.0).rem_euclid(360.0) - 180.0
        };
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
