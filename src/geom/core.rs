// ─────────────────────────────────────────────────────────────────────────────
// PlanarPoint
// ─────────────────────────────────────────────────────────────────────────────

/// A point in the unit-less drawing space of a path description.
///
/// The Y axis grows downward, as in the source documents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation between two points.
    /// Returns `self * (1 - t) + rhs * t`.
    #[must_use]
    pub fn lerp(self, rhs: Self, t: f64) -> Self {
        Self::new(
            self.x + (rhs.x - self.x) * t,
            self.y + (rhs.y - self.y) * t,
        )
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// BBox2
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox2 {
    pub min: PlanarPoint,
    pub max: PlanarPoint,
}

impl BBox2 {
    #[must_use]
    pub const fn new(min: PlanarPoint, max: PlanarPoint) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn from_points(points: &[PlanarPoint]) -> Option<Self> {
        let mut iter = points.iter().copied();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Self::new(min, max))
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center point of the bounding box.
    #[must_use]
    pub fn center(self) -> PlanarPoint {
        PlanarPoint::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// A box with zero width or zero height has no area to normalize into.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}
