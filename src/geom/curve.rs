use super::core::PlanarPoint;

pub trait Curve2 {
    fn point_at(&self, t: f64) -> PlanarPoint;

    /// Evaluates the curve at each of the given parameters, in order.
    #[must_use]
    fn sample_at(&self, params: &[f64]) -> Vec<PlanarPoint> {
        params.iter().map(|&t| self.point_at(t)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub start: PlanarPoint,
    pub end: PlanarPoint,
}

impl Line2 {
    #[must_use]
    pub const fn new(start: PlanarPoint, end: PlanarPoint) -> Self {
        Self { start, end }
    }
}

impl Curve2 for Line2 {
    fn point_at(&self, t: f64) -> PlanarPoint {
        self.start.lerp(self.end, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier2 {
    pub p0: PlanarPoint,
    pub p1: PlanarPoint,
    pub p2: PlanarPoint,
    pub p3: PlanarPoint,
}

impl CubicBezier2 {
    #[must_use]
    pub const fn new(p0: PlanarPoint, p1: PlanarPoint, p2: PlanarPoint, p3: PlanarPoint) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve2 for CubicBezier2 {
    fn point_at(&self, t: f64) -> PlanarPoint {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let u2 = u * u;
        let t2 = t * t;
        point_weighted_sum4(
            self.p0,
            u2 * u,
            self.p1,
            3.0 * u2 * t,
            self.p2,
            3.0 * u * t2,
            self.p3,
            t2 * t,
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn point_weighted_sum4(
    a: PlanarPoint,
    wa: f64,
    b: PlanarPoint,
    wb: f64,
    c: PlanarPoint,
    wc: f64,
    d: PlanarPoint,
    wd: f64,
) -> PlanarPoint {
    PlanarPoint::new(
        a.x * wa + b.x * wb + c.x * wc + d.x * wd,
        a.y * wa + b.y * wb + c.y * wc + d.y * wd,
    )
}
