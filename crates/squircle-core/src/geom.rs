//! Shared geometry aliases and the corner radius pair.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Control-point / corner radius pair for a squircle corner.
///
/// `inner` places the two Bezier control points of each corner curve,
/// `outer` places the corner apex relative to the true rectangle corner.
/// `inner == outer` degenerates to a plain circular-arc rounded corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusPair {
    pub inner: f64,
    pub outer: f64,
}

impl RadiusPair {
    /// Orders two radii so the smaller one always drives the control points
    /// and the larger one the corner apex, regardless of argument order.
    pub fn normalized(r1: f64, r2: f64) -> Self {
        Self {
            inner: r1.min(r2),
            outer: r1.max(r2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_orders_radii() {
        assert_eq!(RadiusPair::normalized(10.0, 20.0), RadiusPair {
            inner: 10.0,
            outer: 20.0
        });
        assert_eq!(RadiusPair::normalized(20.0, 10.0), RadiusPair {
            inner: 10.0,
            outer: 20.0
        });
    }

    #[test]
    fn normalized_is_total_for_nan() {
        let pair = RadiusPair::normalized(f64::NAN, 4.0);
        assert_eq!(pair.inner, 4.0);
        assert_eq!(pair.outer, 4.0);
    }
}
