#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Turns vector path descriptions into timestamped GPS tracks, so an uploaded
//! activity draws the shape on the map.
//!
//! ```no_run
//! use path_track::{GeoPoint, TrackRequest, convert_path_to_track};
//! use time::OffsetDateTime;
//!
//! let request = TrackRequest::new(GeoPoint::new(40.416775, -3.703790), OffsetDateTime::now_utc());
//! let conversion = convert_path_to_track("M 50 10 L 90 90 L 10 90 Z", &request)?;
//! println!("{}", conversion.to_gpx()?);
//! # Ok::<(), path_track::ConvertError>(())
//! ```

pub mod config;
pub mod convert;
pub mod geo;
pub mod geom;
pub mod path;
pub mod svg;
pub mod track;

pub use config::{ConfigError, TrackOptions};
pub use convert::{
    Conversion, ConvertError, ConvertResult, TrackRequest, convert_path_to_track,
    convert_svg_to_track,
};
pub use geo::GeoPoint;
pub use geom::PlanarPoint;
pub use track::{TrackDocument, TrackMetadata, TrackPoint};
