//! The full path-to-track pipeline.

use thiserror::Error;
use time::OffsetDateTime;

use crate::config::TrackOptions;
use crate::geo::{GeoPoint, project_points};
use crate::geom::PlanarPoint;
use crate::path::{ParseWarning, PathSamples, ResampleDiagnostics, path_to_points};
use crate::svg::{SvgError, extract_svg_paths};
use crate::track::{TrackDocument, TrackError, TrackMetadata, build_track};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A request parameter is outside its valid range. Never clamped.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error(transparent)]
    Svg(#[from] SvgError),
    #[error(transparent)]
    Track(#[from] TrackError),
}

impl ConvertError {
    fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Everything a conversion needs besides the shape itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackRequest {
    pub target_point_count: usize,
    pub center: GeoPoint,
    pub scale_meters: f64,
    pub start_time: OffsetDateTime,
    pub duration_seconds: u32,
    pub metadata: TrackMetadata,
}

impl TrackRequest {
    /// Request with the default options around `center`.
    #[must_use]
    pub fn new(center: GeoPoint, start_time: OffsetDateTime) -> Self {
        Self::from_options(&TrackOptions::default(), center, start_time)
    }

    #[must_use]
    pub fn from_options(
        options: &TrackOptions,
        center: GeoPoint,
        start_time: OffsetDateTime,
    ) -> Self {
        Self {
            target_point_count: options.target_point_count,
            center,
            scale_meters: options.scale_meters,
            start_time,
            duration_seconds: options.duration_seconds,
            metadata: options.metadata(),
        }
    }

    pub fn validate(&self) -> ConvertResult<()> {
        if self.target_point_count == 0 {
            return Err(ConvertError::invalid("target_point_count", "must be greater than 0"));
        }
        let GeoPoint {
            latitude,
            longitude,
        } = self.center;
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ConvertError::invalid(
                "center_latitude",
                format!("{latitude} is outside [-90, 90]"),
            ));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ConvertError::invalid(
                "center_longitude",
                format!("{longitude} is outside [-180, 180]"),
            ));
        }
        if !self.scale_meters.is_finite() || self.scale_meters <= 0.0 {
            return Err(ConvertError::invalid(
                "scale_meters",
                format!("{} is not a positive distance", self.scale_meters),
            ));
        }
        Ok(())
    }
}

/// A finished document together with what was dropped or adjusted on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub document: TrackDocument,
    pub warnings: Vec<ParseWarning>,
    /// One entry per converted path description.
    pub diagnostics: Vec<ResampleDiagnostics>,
}

impl Conversion {
    pub fn to_gpx(&self) -> ConvertResult<String> {
        Ok(self.document.to_gpx()?)
    }
}

/// Converts one path description into a timestamped track around
/// `request.center`.
pub fn convert_path_to_track(
    path_description: &str,
    request: &TrackRequest,
) -> ConvertResult<Conversion> {
    request.validate()?;
    let samples = path_to_points(path_description, request.target_point_count);
    Ok(finish(vec![samples], request))
}

/// Converts every outline of an SVG document into one track. Outlines are
/// resampled individually, then placed together so their relative layout is
/// kept.
pub fn convert_svg_to_track(
    svg: &str,
    request: &TrackRequest,
    min_path_length: usize,
) -> ConvertResult<Conversion> {
    request.validate()?;
    let paths = extract_svg_paths(svg, min_path_length)?;
    let samples = sample_paths(&paths, request.target_point_count);
    Ok(finish(samples, request))
}

#[cfg(feature = "parallel")]
fn sample_paths(paths: &[String], target_count: usize) -> Vec<PathSamples> {
    paths
        .par_iter()
        .map(|path| path_to_points(path, target_count))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sample_paths(paths: &[String], target_count: usize) -> Vec<PathSamples> {
    paths
        .iter()
        .map(|path| path_to_points(path, target_count))
        .collect()
}

fn finish(samples: Vec<PathSamples>, request: &TrackRequest) -> Conversion {
    let mut points: Vec<PlanarPoint> = Vec::new();
    let mut warnings = Vec::new();
    let mut diagnostics = Vec::with_capacity(samples.len());
    for sample in samples {
        points.extend(sample.points);
        warnings.extend(sample.warnings);
        diagnostics.push(sample.diagnostics);
    }

    let geo_points = project_points(&points, request.center, request.scale_meters);
    log::debug!(
        "placed {} point(s) around {} at {} m",
        geo_points.len(),
        request.center,
        request.scale_meters
    );

    let document = build_track(
        &geo_points,
        request.start_time,
        request.duration_seconds,
        request.metadata.clone(),
    );

    Conversion {
        document,
        warnings,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn request() -> TrackRequest {
        TrackRequest::new(GeoPoint::new(40.416_775, -3.703_790), datetime!(2024-03-02 09:00 UTC))
    }

    #[test]
    fn rejects_invalid_parameters() {
        let cases: [(&str, fn(&mut TrackRequest)); 6] = [
            ("target_point_count", |r| r.target_point_count = 0),
            ("center_latitude", |r| r.center.latitude = 91.0),
            ("center_latitude", |r| r.center.latitude = f64::NAN),
            ("center_longitude", |r| r.center.longitude = -180.5),
            ("scale_meters", |r| r.scale_meters = 0.0),
            ("scale_meters", |r| r.scale_meters = f64::INFINITY),
        ];

        for (expected, mutate) in cases {
            let mut req = request();
            mutate(&mut req);
            match convert_path_to_track("M 0 0 L 1 1", &req) {
                Err(ConvertError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn boundary_parameters_are_accepted() {
        let mut req = request();
        req.center = GeoPoint::new(-90.0, 180.0);
        req.target_point_count = 1;
        assert!(convert_path_to_track("M 0 0 L 1 1", &req).is_ok());

        req.target_point_count = 20;
        let conversion = convert_path_to_track("M 0 0 L 10 10 L 0 10 Z", &req).expect("convert");
        let points = &conversion.document.points;
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.position.is_valid()));
    }

    #[test]
    fn warnings_and_diagnostics_are_reported() {
        let conversion =
            convert_path_to_track("M 0 0 L 10 10 # Q 1 2", &request()).expect("convert");

        assert_eq!(conversion.warnings.len(), 2);
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].input_point_count, 2);
        assert_eq!(conversion.document.points.len(), 300);
    }

    #[test]
    fn svg_outlines_share_one_bounding_box() {
        let svg = r#"<svg>
            <rect x="0" y="0" width="10" height="10"/>
            <rect x="90" y="90" width="10" height="10"/>
        </svg>"#;
        let mut req = request();
        req.target_point_count = 5;
        let conversion = convert_svg_to_track(svg, &req, 10).expect("convert");

        assert_eq!(conversion.diagnostics.len(), 2);
        assert_eq!(conversion.document.points.len(), 10);
        let first = conversion.document.points[0].position;
        let last = conversion.document.points[9].position;
        // Top-left rectangle ends up north-west of the bottom-right one.
        assert!(first.latitude > last.latitude);
        assert!(first.longitude < last.longitude);
    }

    #[test]
    fn svg_without_outlines_yields_placeholder() {
        let conversion = convert_svg_to_track("<svg/>", &request(), 10).expect("convert");
        assert_eq!(conversion.document.points.len(), 1);
        assert_eq!(conversion.document.points[0].position, GeoPoint::new(0.0, 0.0));
    }
}
