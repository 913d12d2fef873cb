//! Conversion defaults, optionally loaded from a JSON file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::track::TrackMetadata;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunables of a conversion that are not tied to a specific location or time.
///
/// Every field is optional in the JSON form; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackOptions {
    /// Number of points the path is resampled to.
    pub target_point_count: usize,
    /// Length of the larger side of the shape on the ground.
    pub scale_meters: f64,
    pub duration_seconds: u32,
    pub name: String,
    pub description: String,
    pub creator: String,
    pub activity_type: String,
    /// `<path>` elements with a shorter `d` attribute are skipped when
    /// reading SVG documents.
    pub min_svg_path_length: usize,
}

impl Default for TrackOptions {
    fn default() -> Self {
        let metadata = TrackMetadata::default();
        Self {
            target_point_count: 300,
            scale_meters: 100.0,
            duration_seconds: 3600,
            name: metadata.name,
            description: metadata.description,
            creator: metadata.creator,
            activity_type: metadata.activity_type,
            min_svg_path_length: 10,
        }
    }
}

impl TrackOptions {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loaded track options from {}", path.display());
        Self::from_json_str(&input)
    }

    #[must_use]
    pub fn metadata(&self) -> TrackMetadata {
        TrackMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            creator: self.creator.clone(),
            activity_type: self.activity_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let options = TrackOptions::from_json_str(r#"{ "scale_meters": 250.0, "name": "Logo" }"#)
            .expect("valid config");

        assert!((options.scale_meters - 250.0).abs() < f64::EPSILON);
        assert_eq!(options.name, "Logo");
        assert_eq!(options.target_point_count, 300);
        assert_eq!(options.duration_seconds, 3600);
        assert_eq!(options.activity_type, "RockClimbing");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = TrackOptions::from_json_str(r#"{ "scale": 250.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = TrackOptions::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
