//! Timestamped track documents.

mod gpx;

pub use gpx::{GPX_NAMESPACE, GPX_VERSION, to_gpx_string};

use thiserror::Error;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

use crate::geo::GeoPoint;

pub type TrackResult<T> = Result<T, TrackError>;

#[derive(Debug, Error)]
pub enum TrackError {
    /// A timestamp could not be rendered (year out of the four-digit range).
    #[error("cannot format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("cannot serialize track: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// Descriptive fields written into the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    pub name: String,
    pub description: String,
    /// Value of the `creator` attribute.
    pub creator: String,
    /// Activity type reported to the consuming platform.
    pub activity_type: String,
}

impl Default for TrackMetadata {
    fn default() -> Self {
        Self {
            name: "Climbing session".to_owned(),
            description: String::new(),
            creator: "path-track".to_owned(),
            activity_type: "RockClimbing".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub position: GeoPoint,
    pub time: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackDocument {
    pub metadata: TrackMetadata,
    pub start_time: OffsetDateTime,
    pub points: Vec<TrackPoint>,
}

impl TrackDocument {
    pub fn to_gpx(&self) -> TrackResult<String> {
        to_gpx_string(self)
    }

    /// Time of the last point, or the start time for a document without points.
    #[must_use]
    pub fn end_time(&self) -> OffsetDateTime {
        self.points.last().map_or(self.start_time, |point| point.time)
    }
}

/// Offset of point `index` when `count` points are spread evenly over
/// `duration_seconds`. The first point sits at zero and the last exactly at
/// the full duration.
#[must_use]
pub fn point_offset(index: usize, count: usize, duration_seconds: u32) -> Duration {
    const NANOS_PER_SECOND: i128 = 1_000_000_000;

    let span = count.saturating_sub(1).max(1) as i128;
    let nanos = i128::from(duration_seconds) * NANOS_PER_SECOND * index as i128 / span;

    #[allow(clippy::cast_possible_truncation)]
    Duration::new(
        (nanos / NANOS_PER_SECOND) as i64,
        (nanos % NANOS_PER_SECOND) as i32,
    )
}

/// Stamps `points` evenly across `duration_seconds` starting at `start_time`.
///
/// An empty point list yields a single point at (0, 0) stamped at
/// `start_time`, since consumers reject tracks without points.
#[must_use]
pub fn build_track(
    points: &[GeoPoint],
    start_time: OffsetDateTime,
    duration_seconds: u32,
    metadata: TrackMetadata,
) -> TrackDocument {
    let points = if points.is_empty() {
        log::debug!("no track points, emitting placeholder at (0, 0)");
        vec![TrackPoint {
            position: GeoPoint::new(0.0, 0.0),
            time: start_time,
        }]
    } else {
        points
            .iter()
            .enumerate()
            .map(|(index, &position)| TrackPoint {
                position,
                time: start_time + point_offset(index, points.len(), duration_seconds),
            })
            .collect()
    };

    TrackDocument {
        metadata,
        start_time,
        points,
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SSZ` in UTC.
pub fn format_timestamp(timestamp: OffsetDateTime) -> TrackResult<String> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    Ok(timestamp.to_offset(UtcOffset::UTC).format(&format)?)
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn four_points_over_an_hour() {
        let start = datetime!(2024-01-15 10:00:00 UTC);
        let points = vec![GeoPoint::new(1.0, 1.0); 4];
        let document = build_track(&points, start, 3600, TrackMetadata::default());

        let offsets: Vec<i64> = document
            .points
            .iter()
            .map(|point| (point.time - start).whole_seconds())
            .collect();
        assert_eq!(offsets, vec![0, 1200, 2400, 3600]);
    }

    #[test]
    fn last_point_lands_on_full_duration() {
        let start = datetime!(2024-01-15 10:00:00 UTC);
        let points = vec![GeoPoint::new(1.0, 1.0); 7];
        let document = build_track(&points, start, 100, TrackMetadata::default());

        assert_eq!(document.end_time(), start + Duration::seconds(100));
        for pair in document.points.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn single_point_is_stamped_at_start() {
        let start = datetime!(2024-01-15 10:00:00 UTC);
        let document =
            build_track(&[GeoPoint::new(5.0, 5.0)], start, 3600, TrackMetadata::default());

        assert_eq!(document.points.len(), 1);
        assert_eq!(document.points[0].time, start);
    }

    #[test]
    fn empty_points_yield_placeholder() {
        let start = datetime!(2024-01-15 10:00:00 UTC);
        let document = build_track(&[], start, 3600, TrackMetadata::default());

        assert_eq!(document.points.len(), 1);
        assert_eq!(document.points[0].position, GeoPoint::new(0.0, 0.0));
        assert_eq!(document.points[0].time, start);
    }

    #[test]
    fn timestamps_are_rendered_in_utc() {
        let local = datetime!(2024-01-15 12:30:45 +02:00);
        assert_eq!(format_timestamp(local).expect("format"), "2024-01-15T10:30:45Z");
    }

    #[test]
    fn uneven_offsets_keep_sub_second_precision() {
        assert_eq!(point_offset(1, 4, 10), Duration::new(3, 333_333_333));
        assert_eq!(point_offset(3, 4, 10), Duration::seconds(10));
        assert_eq!(point_offset(0, 1, 10), Duration::ZERO);
    }
}
