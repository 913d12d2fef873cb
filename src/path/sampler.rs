use crate::geom::{CubicBezier2, Curve2, PlanarPoint};

use super::command::{CommandKind, PathCommand};

/// Curve parameters evaluated for every cubic segment. `t = 0` is skipped
/// because the start point has already been emitted.
pub const CUBIC_SAMPLE_PARAMS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Pen state threaded through the command list.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cursor {
    pub current: PlanarPoint,
    pub subpath_start: PlanarPoint,
}

impl Cursor {
    fn resolve(self, relative: bool, x: f64, y: f64) -> PlanarPoint {
        if relative {
            self.current.offset(x, y)
        } else {
            PlanarPoint::new(x, y)
        }
    }

    /// Applies one command, appending the points it draws to `points`.
    #[must_use]
    pub fn apply(mut self, command: &PathCommand, points: &mut Vec<PlanarPoint>) -> Self {
        let relative = command.relative;
        match command.kind {
            CommandKind::MoveTo => {
                if let &[x, y] = command.operands.as_slice() {
                    self.current = self.resolve(relative, x, y);
                    self.subpath_start = self.current;
                    points.push(self.current);
                }
            }
            CommandKind::LineTo => {
                for pair in command.groups() {
                    self.current = self.resolve(relative, pair[0], pair[1]);
                    points.push(self.current);
                }
            }
            CommandKind::HorizontalLineTo => {
                for value in command.groups() {
                    self.current.x = if relative {
                        self.current.x + value[0]
                    } else {
                        value[0]
                    };
                    points.push(self.current);
                }
            }
            CommandKind::VerticalLineTo => {
                for value in command.groups() {
                    self.current.y = if relative {
                        self.current.y + value[0]
                    } else {
                        value[0]
                    };
                    points.push(self.current);
                }
            }
            CommandKind::CubicCurveTo => {
                for run in command.groups() {
                    // Relative control points are all offsets from the segment start.
                    let curve = CubicBezier2::new(
                        self.current,
                        self.resolve(relative, run[0], run[1]),
                        self.resolve(relative, run[2], run[3]),
                        self.resolve(relative, run[4], run[5]),
                    );
                    points.extend(curve.sample_at(&CUBIC_SAMPLE_PARAMS));
                    self.current = curve.p3;
                }
            }
            CommandKind::ClosePath => {
                if !points.is_empty() {
                    points.push(self.subpath_start);
                    self.current = self.subpath_start;
                }
            }
        }
        self
    }
}

/// Walks the commands and returns every drawn point in order.
#[must_use]
pub fn sample_commands(commands: &[PathCommand]) -> Vec<PlanarPoint> {
    let mut points = Vec::new();
    let mut cursor = Cursor::default();
    for command in commands {
        cursor = cursor.apply(command, &mut points);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::command::parse_path;

    fn sample(input: &str) -> Vec<PlanarPoint> {
        sample_commands(&parse_path(input).commands)
    }

    fn assert_close(a: PlanarPoint, b: PlanarPoint) {
        assert!(a.distance_to(b) < 1e-9, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn closed_triangle_returns_to_start() {
        let points = sample("M 50 10 L 90 90 L 10 90 Z");

        assert_eq!(
            points,
            vec![
                PlanarPoint::new(50.0, 10.0),
                PlanarPoint::new(90.0, 90.0),
                PlanarPoint::new(10.0, 90.0),
                PlanarPoint::new(50.0, 10.0),
            ]
        );
    }

    #[test]
    fn line_emits_one_point_per_pair() {
        let points = sample("M 0 0 L 1 0 2 0 3 0");
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], PlanarPoint::new(3.0, 0.0));
    }

    #[test]
    fn relative_commands_offset_cursor() {
        let points = sample("m 10 10 l 5 0 v 5 h -5 z");

        assert_eq!(
            points,
            vec![
                PlanarPoint::new(10.0, 10.0),
                PlanarPoint::new(15.0, 10.0),
                PlanarPoint::new(15.0, 15.0),
                PlanarPoint::new(10.0, 15.0),
                PlanarPoint::new(10.0, 10.0),
            ]
        );
    }

    #[test]
    fn absolute_horizontal_and_vertical_keep_other_axis() {
        let points = sample("M 1 2 H 7 V 9");
        assert_eq!(points[1], PlanarPoint::new(7.0, 2.0));
        assert_eq!(points[2], PlanarPoint::new(7.0, 9.0));
    }

    #[test]
    fn cubic_emits_four_samples_per_segment() {
        let points = sample("M 0 0 C 0 10 10 10 10 0 C 10 -10 20 -10 20 0");

        assert_eq!(points.len(), 1 + 4 + 4);
        assert_close(points[2], PlanarPoint::new(5.0, 7.5));
        assert_close(points[4], PlanarPoint::new(10.0, 0.0));
        assert_close(points[8], PlanarPoint::new(20.0, 0.0));
    }

    #[test]
    fn relative_cubic_matches_absolute_equivalent() {
        let relative = sample("M 10 10 c 0 10 10 10 10 0");
        let absolute = sample("M 10 10 C 10 20 20 20 20 10");

        assert_eq!(relative.len(), absolute.len());
        for (a, b) in relative.iter().zip(&absolute) {
            assert_close(*a, *b);
        }
    }

    #[test]
    fn close_resets_subpath_start_per_move() {
        let points = sample("M 0 0 L 4 0 Z M 10 10 L 14 10 Z l 1 1");

        assert_eq!(points[2], PlanarPoint::new(0.0, 0.0));
        assert_eq!(points[5], PlanarPoint::new(10.0, 10.0));
        // The cursor sits on the sub-path start after the close.
        assert_eq!(points[6], PlanarPoint::new(11.0, 11.0));
    }

    #[test]
    fn close_without_points_is_ignored() {
        assert!(sample("Z").is_empty());
        assert_eq!(sample("M 10 10").len(), 1);
    }
}
