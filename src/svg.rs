//! Collects drawable outlines from an SVG document as path descriptions.
//!
//! `<path>` elements are taken as-is; `<polygon>`, `<polyline>`, `<circle>`
//! and `<rect>` are rewritten into equivalent move/line/cubic commands.
//! Everything else (including embedded raster images) is ignored.

use std::collections::HashSet;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use thiserror::Error;

/// Control point distance for approximating a quarter circle with one cubic.
pub const CIRCLE_KAPPA: f64 = 0.552_284_749_831;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("malformed SVG document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed SVG attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),
}

/// Returns the path descriptions of every drawable outline in document order,
/// without duplicates. `<path>` data not longer than `min_path_length`
/// characters is skipped.
pub fn extract_svg_paths(input: &str, min_path_length: usize) -> Result<Vec<String>, SvgError> {
    let mut reader = Reader::from_str(input);
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                if let Some(path) = element_to_path(&element, min_path_length)? {
                    if seen.insert(path.clone()) {
                        paths.push(path);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("extracted {} outline(s) from SVG document", paths.len());
    Ok(paths)
}

fn element_to_path(
    element: &BytesStart<'_>,
    min_path_length: usize,
) -> Result<Option<String>, SvgError> {
    let path = match element.local_name().as_ref() {
        b"path" => attribute(element, "d")?.filter(|d| d.len() > min_path_length),
        b"polygon" => {
            attribute(element, "points")?.and_then(|points| points_to_path(&points, true))
        }
        b"polyline" => {
            attribute(element, "points")?.and_then(|points| points_to_path(&points, false))
        }
        b"circle" => {
            let cx = number(element, "cx")?;
            let cy = number(element, "cy")?;
            let r = number(element, "r")?;
            match (cx, cy, r) {
                (Some(cx), Some(cy), Some(r)) if r > 0.0 => Some(circle_path(cx, cy, r)),
                _ => None,
            }
        }
        b"rect" => {
            let x = number(element, "x")?;
            let y = number(element, "y")?;
            let w = number(element, "width")?;
            let h = number(element, "height")?;
            match (x, y, w, h) {
                (Some(x), Some(y), Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
                    Some(rect_path(x, y, w, h))
                }
                _ => None,
            }
        }
        _ => None,
    };
    Ok(path)
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, SvgError> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

/// Reads a numeric attribute. A missing attribute counts as `0`; an
/// unreadable one yields `None` and the element is skipped.
fn number(element: &BytesStart<'_>, name: &str) -> Result<Option<f64>, SvgError> {
    let Some(raw) = attribute(element, name)? else {
        return Ok(Some(0.0));
    };
    let trimmed = raw.trim();
    let value = trimmed
        .strip_suffix("px")
        .unwrap_or(trimmed)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite());
    if value.is_none() {
        log::warn!("skipping SVG element: unreadable {name}=\"{raw}\"");
    }
    Ok(value)
}

/// `points="x1,y1 x2,y2 ..."` to `M x1 y1 L x2 y2 ...`, closed for polygons.
fn points_to_path(points: &str, closed: bool) -> Option<String> {
    let values: Vec<f64> = points
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<f64>().ok())
        .collect();
    let pairs: Vec<&[f64]> = values.chunks_exact(2).collect();
    if pairs.len() < 2 {
        return None;
    }

    let mut segments: Vec<String> = pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let command = if index == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", pair[0], pair[1])
        })
        .collect();
    if closed {
        segments.push("Z".to_owned());
    }
    Some(segments.join(" "))
}

/// Four cubic quarter arcs, clockwise from the top of the circle.
#[must_use]
pub fn circle_path(cx: f64, cy: f64, r: f64) -> String {
    let k = r * CIRCLE_KAPPA;
    format!(
        "M {cx} {top} \
         C {a} {top} {right} {b} {right} {cy} \
         C {right} {c} {a} {bottom} {cx} {bottom} \
         C {d} {bottom} {left} {c} {left} {cy} \
         C {left} {b} {d} {top} {cx} {top} Z",
        top = cy - r,
        bottom = cy + r,
        left = cx - r,
        right = cx + r,
        a = cx + k,
        b = cy - k,
        c = cy + k,
        d = cx - k,
    )
}

#[must_use]
pub fn rect_path(x: f64, y: f64, width: f64, height: f64) -> String {
    format!(
        "M {x} {y} L {x2} {y} L {x2} {y2} L {x} {y2} Z",
        x2 = x + width,
        y2 = y + height,
    )
}
