use crate::geom::{Curve2, Line2, PlanarPoint};

/// Options for [`resample_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleOptions {
    /// Target number of output points.
    pub count: usize,
}

impl ResampleOptions {
    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Default for ResampleOptions {
    fn default() -> Self {
        Self::new(300)
    }
}

/// How the point list was brought to the target count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleStrategy {
    /// Fewer than two points, or already at the target count.
    #[default]
    Unchanged,
    /// Every `stride`-th point was kept, then thinned evenly to the target.
    Decimated { stride: usize },
    /// Every original segment received `per_segment` samples, and the first
    /// `remainder` segments one more.
    Interpolated { per_segment: usize, remainder: usize },
}

/// Diagnostics for resampling operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResampleDiagnostics {
    /// Number of input points.
    pub input_point_count: usize,
    /// Number of output points.
    pub output_point_count: usize,
    pub strategy: ResampleStrategy,
}

/// Brings a point list to exactly `options.count` points.
///
/// Longer lists are decimated by a fixed stride; if that still leaves too
/// many, evenly spaced survivors are picked so the whole path stays covered
/// and the last input point closes the result. Shorter lists are filled by
/// linear interpolation between consecutive points, keeping every original
/// vertex. Fewer than two points are returned unchanged. Order is always
/// preserved.
#[must_use]
pub fn resample_points(
    points: &[PlanarPoint],
    options: ResampleOptions,
) -> (Vec<PlanarPoint>, ResampleDiagnostics) {
    let mut diagnostics = ResampleDiagnostics {
        input_point_count: points.len(),
        ..Default::default()
    };

    let count = options.count;
    let result = match points {
        [] | [_] => points.to_vec(),
        [.., last] if points.len() > count && count > 0 => {
            let stride = (points.len() / count).max(1);
            let kept: Vec<PlanarPoint> = points.iter().copied().step_by(stride).collect();
            diagnostics.strategy = ResampleStrategy::Decimated { stride };
            if kept.len() > count {
                spread_evenly(&kept, count, *last)
            } else {
                kept
            }
        }
        [.., last] if points.len() < count => {
            let segments = points.len() - 1;
            let per_segment = (count - 1) / segments;
            let remainder = (count - 1) % segments;

            let mut filled = Vec::with_capacity(count);
            for (index, pair) in points.windows(2).enumerate() {
                let line = Line2::new(pair[0], pair[1]);
                let samples = per_segment + usize::from(index < remainder);
                for step in 0..samples {
                    #[allow(clippy::cast_precision_loss)]
                    let t = step as f64 / samples as f64;
                    filled.push(line.point_at(t));
                }
            }
            filled.push(*last);
            diagnostics.strategy = ResampleStrategy::Interpolated {
                per_segment,
                remainder,
            };
            filled
        }
        _ => points.to_vec(),
    };

    diagnostics.output_point_count = result.len();
    log::debug!(
        "resampled {} -> {} point(s) ({:?})",
        diagnostics.input_point_count,
        diagnostics.output_point_count,
        diagnostics.strategy
    );
    (result, diagnostics)
}

/// Picks `count` evenly spaced entries of `kept`, first and last included,
/// and ends the result on `last`.
fn spread_evenly(kept: &[PlanarPoint], count: usize, last: PlanarPoint) -> Vec<PlanarPoint> {
    if count < 2 {
        return kept.iter().copied().take(count).collect();
    }
    let span = kept.len() - 1;
    let mut picked: Vec<PlanarPoint> = (0..count).map(|i| kept[i * span / (count - 1)]).collect();
    if let Some(tail) = picked.last_mut() {
        *tail = last;
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(clippy::cast_precision_loss)]
    fn line_points(n: usize) -> Vec<PlanarPoint> {
        (0..n).map(|i| PlanarPoint::new(i as f64, 0.0)).collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn zigzag(n: usize) -> Vec<PlanarPoint> {
        (0..n)
            .map(|i| PlanarPoint::new(i as f64, if i % 2 == 0 { 0.0 } else { 5.0 }))
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn source_index(x: f64) -> usize {
        x as usize
    }

    #[test]
    fn decimation_hits_target_count() {
        let points = line_points(1000);
        let (result, diag) = resample_points(&points, ResampleOptions::new(100));

        assert_eq!(result.len(), 100);
        assert_eq!(diag.strategy, ResampleStrategy::Decimated { stride: 10 });
        assert_eq!(result[0], points[0]);
        assert_eq!(result[1], points[10]);
        assert_eq!(result[98], points[980]);
    }

    #[test]
    fn decimation_with_uneven_stride_spans_whole_path() {
        let points = line_points(150);
        let (result, diag) = resample_points(&points, ResampleOptions::new(100));

        assert_eq!(result.len(), 100);
        assert_eq!(diag.strategy, ResampleStrategy::Decimated { stride: 1 });
        assert_eq!(result[0], points[0]);
        // 149 / 99 per step, so index 98 lands on 147.
        assert_eq!(result[98], points[147]);
        assert_eq!(*result.last().expect("non-empty"), points[149]);
    }

    #[test]
    fn interpolation_hits_target_count() {
        let points = vec![
            PlanarPoint::new(50.0, 10.0),
            PlanarPoint::new(90.0, 90.0),
            PlanarPoint::new(10.0, 90.0),
            PlanarPoint::new(50.0, 10.0),
        ];
        let (result, diag) = resample_points(&points, ResampleOptions::new(100));

        assert_eq!(result.len(), 100);
        assert_eq!(
            diag.strategy,
            ResampleStrategy::Interpolated {
                per_segment: 33,
                remainder: 0
            }
        );
        assert_eq!(result[0], points[0]);
        assert_eq!(result[33], points[1]);
        assert_eq!(result[66], points[2]);
        assert_eq!(result[99], points[3]);
    }

    #[test]
    fn interpolation_spreads_remainder_over_leading_segments() {
        let points = line_points(3);
        let (result, diag) = resample_points(&points, ResampleOptions::new(6));

        assert_eq!(
            diag.strategy,
            ResampleStrategy::Interpolated {
                per_segment: 2,
                remainder: 1
            }
        );
        let xs: Vec<f64> = result.iter().map(|p| p.x).collect();
        assert_eq!(xs.len(), 6);
        assert!((xs[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((xs[2] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!([xs[0], xs[3], xs[4], xs[5]], [0.0, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn one_extra_point_keeps_every_vertex() {
        let points = line_points(10);
        let (result, _) = resample_points(&points, ResampleOptions::new(11));

        let xs: Vec<f64> = result.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn upsampling_keeps_every_vertex_in_order() {
        for (len, count) in [(2, 5), (3, 6), (4, 100), (7, 8), (10, 11), (13, 50), (80, 300)] {
            let points = zigzag(len);
            let (result, _) = resample_points(&points, ResampleOptions::new(count));

            assert_eq!(result.len(), count, "{len} -> {count}");
            let mut remaining = points.iter().peekable();
            for p in &result {
                if remaining.peek() == Some(&p) {
                    remaining.next();
                }
            }
            assert!(remaining.next().is_none(), "{len} -> {count}: a vertex is missing");
        }
    }

    #[test]
    fn decimation_covers_the_whole_path() {
        for (len, count) in [(26, 10), (37, 2), (80, 50), (101, 7), (150, 100), (1000, 300)] {
            let points = zigzag(len);
            let (result, _) = resample_points(&points, ResampleOptions::new(count));

            assert_eq!(result.len(), count, "{len} -> {count}");
            let indices: Vec<usize> = result.iter().map(|p| source_index(p.x)).collect();
            assert_eq!(indices[0], 0);
            assert_eq!(indices[count - 1], len - 1);
            let max_gap = 3 * len.div_ceil(count - 1);
            for pair in indices.windows(2) {
                assert!(pair[0] < pair[1], "{len} -> {count}: order");
                assert!(pair[1] - pair[0] <= max_gap, "{len} -> {count}: gap {pair:?}");
            }
        }
    }

    #[test]
    fn degenerate_inputs_are_unchanged() {
        let (empty, diag) = resample_points(&[], ResampleOptions::new(50));
        assert!(empty.is_empty());
        assert_eq!(diag.strategy, ResampleStrategy::Unchanged);

        let single = [PlanarPoint::new(10.0, 10.0)];
        let (result, _) = resample_points(&single, ResampleOptions::new(50));
        assert_eq!(result, single.to_vec());
    }

    #[test]
    fn exact_count_is_unchanged() {
        let points = line_points(7);
        let (result, diag) = resample_points(&points, ResampleOptions::new(7));

        assert_eq!(result, points);
        assert_eq!(diag.strategy, ResampleStrategy::Unchanged);
    }

    #[test]
    fn single_target_keeps_first_point() {
        let points = line_points(5);
        let (result, _) = resample_points(&points, ResampleOptions::new(1));
        assert_eq!(result, vec![points[0]]);
    }
}
