//! Path descriptions: parsing, sampling into planar points and resampling.

pub mod command;
pub mod presets;
pub mod resample;
pub mod sampler;

pub use command::{CommandKind, ParseWarning, ParsedPath, PathCommand, parse_path};
pub use resample::{ResampleDiagnostics, ResampleOptions, ResampleStrategy, resample_points};
pub use sampler::{CUBIC_SAMPLE_PARAMS, Cursor, sample_commands};

use crate::geom::PlanarPoint;

/// Result of turning one path description into a resampled point list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSamples {
    pub points: Vec<PlanarPoint>,
    pub warnings: Vec<ParseWarning>,
    pub diagnostics: ResampleDiagnostics,
}

/// Parses, samples and resamples a path description to `target_count` points.
#[must_use]
pub fn path_to_points(path_description: &str, target_count: usize) -> PathSamples {
    let ParsedPath { commands, warnings } = parse_path(path_description);
    for warning in &warnings {
        log::warn!("path description: {warning}");
    }

    let raw = sample_commands(&commands);
    if raw.len() < 2 {
        log::debug!("path yields {} raw point(s), skipping resampling", raw.len());
    }
    let (points, diagnostics) = resample_points(&raw, ResampleOptions::new(target_count));

    PathSamples {
        points,
        warnings,
        diagnostics,
    }
}
