//! Path descriptions shipped with the crate.

/// Hand gripping a climbing hold: outline, two knuckles and a small chevron.
pub const CLIMBING_HOLD: &str = "
M 50 10
C 40 10 30 15 25 25
L 20 40
C 18 50 20 60 25 65
L 30 70
L 25 80
C 23 85 25 90 30 92
L 40 95
C 50 98 60 98 70 95
L 80 92
C 85 90 87 85 85 80
L 80 70
L 85 65
C 90 60 92 50 90 40
L 85 25
C 80 15 70 10 60 10
L 50 10
Z
M 45 35
C 40 35 35 40 35 45
C 35 50 40 55 45 55
C 50 55 55 50 55 45
C 55 40 50 35 45 35
Z
M 65 35
C 60 35 55 40 55 45
C 55 50 60 55 65 55
C 70 55 75 50 75 45
C 75 40 70 35 65 35
Z
M 50 60
L 45 65
L 55 65
L 50 60
Z
";

/// Circle of radius 40 built from four cubic segments.
pub const CIRCLE: &str = "
M 50 10
C 30 10 10 30 10 50
C 10 70 30 90 50 90
C 70 90 90 70 90 50
C 90 30 70 10 50 10
Z
";

/// Name and path description of every built-in shape.
pub const PRESETS: &[(&str, &str)] = &[("hold", CLIMBING_HOLD), ("circle", CIRCLE)];

/// Looks up a built-in shape by name (case-insensitive).
#[must_use]
pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| preset_name.eq_ignore_ascii_case(name))
        .map(|(_, path)| *path)
}
