mod core;
mod curve;

pub use core::{BBox2, PlanarPoint};
pub use curve::{CubicBezier2, Curve2, Line2};
