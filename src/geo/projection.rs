//! Equirectangular placement of a planar shape around a geographic center.
//!
//! The shape's bounding box is normalized into `[-1, 1]` along its larger
//! side, scaled so that side spans `scale_meters`, and converted to degrees
//! with a flat-earth approximation. Good for shapes of tens to a few hundred
//! meters; not geodesically exact. Near the poles a degree of longitude
//! shrinks towards zero, so projected points are wrapped back into valid
//! coordinates and the shape is no longer drawn to scale there.

use crate::geom::{BBox2, PlanarPoint};

use super::GeoPoint;

/// Fixed length of one degree of latitude.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_000.0;

/// Length of one degree of longitude at the given latitude.
#[must_use]
pub fn meters_per_degree_longitude(latitude: f64) -> f64 {
    METERS_PER_DEGREE_LATITUDE * latitude.to_radians().cos()
}

/// Transform fitted to one planar point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center: GeoPoint,
    scale_meters: f64,
    bbox: BBox2,
    max_dim: f64,
    meters_per_degree_lon: f64,
}

impl Projection {
    /// Fits the transform to `points`. Returns `None` for an empty cloud or a
    /// bounding box with zero width or height.
    #[must_use]
    pub fn fit(points: &[PlanarPoint], center: GeoPoint, scale_meters: f64) -> Option<Self> {
        let bbox = BBox2::from_points(points)?;
        if bbox.is_degenerate() {
            return None;
        }
        Some(Self {
            center,
            scale_meters,
            bbox,
            max_dim: bbox.width().max(bbox.height()),
            meters_per_degree_lon: meters_per_degree_longitude(center.latitude),
        })
    }

    #[must_use]
    pub const fn center(&self) -> GeoPoint {
        self.center
    }

    #[must_use]
    pub const fn bbox(&self) -> BBox2 {
        self.bbox
    }

    /// Maps a planar point into `[-1, 1]`, Y pointing north.
    #[must_use]
    pub fn normalize(&self, point: PlanarPoint) -> PlanarPoint {
        let origin = self.bbox.center();
        PlanarPoint::new(
            (point.x - origin.x) / self.max_dim * 2.0,
            -((point.y - origin.y) / self.max_dim * 2.0),
        )
    }

    /// Places one point. The result is always a valid coordinate, see
    /// [`GeoPoint::wrapped`].
    #[must_use]
    pub fn project(&self, point: PlanarPoint) -> GeoPoint {
        let normalized = self.normalize(point);
        let east_meters = normalized.x * self.scale_meters / 2.0;
        let north_meters = normalized.y * self.scale_meters / 2.0;

        GeoPoint::new(
            self.center.latitude + north_meters / METERS_PER_DEGREE_LATITUDE,
            self.center.longitude + east_meters / self.meters_per_degree_lon,
        )
        .wrapped()
    }

    /// Inverse of [`Projection::project`], back into the source space.
    #[must_use]
    pub fn unproject(&self, point: GeoPoint) -> PlanarPoint {
        let north_meters = (point.latitude - self.center.latitude) * METERS_PER_DEGREE_LATITUDE;
        let east_meters = (point.longitude - self.center.longitude) * self.meters_per_degree_lon;
        let norm_x = east_meters * 2.0 / self.scale_meters;
        let norm_y = north_meters * 2.0 / self.scale_meters;

        let origin = self.bbox.center();
        PlanarPoint::new(
            norm_x * self.max_dim / 2.0 + origin.x,
            -norm_y * self.max_dim / 2.0 + origin.y,
        )
    }
}

/// Places `points` around `center` so the larger side spans `scale_meters`.
///
/// An empty input gives an empty output. A shape without area (all points on
/// one horizontal or vertical line) collapses to the single point `center`.
#[must_use]
pub fn project_points(
    points: &[PlanarPoint],
    center: GeoPoint,
    scale_meters: f64,
) -> Vec<GeoPoint> {
    if points.is_empty() {
        return Vec::new();
    }
    match Projection::fit(points, center, scale_meters) {
        Some(projection) => points.iter().map(|&p| projection.project(p)).collect(),
        None => {
            log::debug!("degenerate shape bounding box, collapsing to center {center}");
            vec![center]
        }
    }
}
