//! GPX 1.1 rendering of a [`TrackDocument`].

use serde::Serialize;

use super::{TrackDocument, TrackResult, format_timestamp};

pub const GPX_VERSION: &str = "1.1";
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Serialize)]
#[serde(rename = "gpx")]
struct Gpx<'a> {
    #[serde(rename = "@version")]
    version: &'static str,
    #[serde(rename = "@creator")]
    creator: &'a str,
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    metadata: GpxMetadata<'a>,
    trk: GpxTrack<'a>,
}

#[derive(Debug, Serialize)]
struct GpxMetadata<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    desc: &'a str,
    time: String,
}

#[derive(Debug, Serialize)]
struct GpxTrack<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    desc: &'a str,
    #[serde(rename = "type", skip_serializing_if = "str::is_empty")]
    activity_type: &'a str,
    trkseg: GpxSegment,
}

#[derive(Debug, Serialize)]
struct GpxSegment {
    trkpt: Vec<GpxPoint>,
}

#[derive(Debug, Serialize)]
struct GpxPoint {
    #[serde(rename = "@lat")]
    lat: String,
    #[serde(rename = "@lon")]
    lon: String,
    time: String,
}

/// Renders the document as an indented GPX 1.1 string.
///
/// Coordinates keep full shortest-round-trip precision; timestamps use
/// `YYYY-MM-DDTHH:MM:SSZ`.
pub fn to_gpx_string(document: &TrackDocument) -> TrackResult<String> {
    let metadata = &document.metadata;
    let trkpt = document
        .points
        .iter()
        .map(|point| {
            Ok(GpxPoint {
                lat: point.position.latitude.to_string(),
                lon: point.position.longitude.to_string(),
                time: format_timestamp(point.time)?,
            })
        })
        .collect::<TrackResult<Vec<_>>>()?;

    let gpx = Gpx {
        version: GPX_VERSION,
        creator: &metadata.creator,
        xmlns: GPX_NAMESPACE,
        metadata: GpxMetadata {
            name: &metadata.name,
            desc: &metadata.description,
            time: format_timestamp(document.start_time)?,
        },
        trk: GpxTrack {
            name: &metadata.name,
            desc: &metadata.description,
            activity_type: &metadata.activity_type,
            trkseg: GpxSegment { trkpt },
        },
    };

    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::new(&mut body);
    serializer.indent(' ', 2);
    gpx.serialize(serializer)?;

    Ok(format!("{XML_DECLARATION}\n{body}\n"))
}
