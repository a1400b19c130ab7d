use crate::math::{point, Angle, Point, Vector};

/// A directional line segment in screen space.
///
/// The tangent of the segment points from `from` toward `to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        LineSegment { from, to }
    }

    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.to_vector().length()
    }

    /// The angle of the segment's direction relative to the x axis, in `(-PI, PI]`.
    ///
    /// Computed with `atan2`, so vertical segments and segments going toward
    /// negative x need no special casing. A degenerate segment has an angle of zero.
    #[inline]
    pub fn tangent_angle(&self) -> Angle {
        let v = self.to_vector();
        Angle::radians(v.y.atan2(v.x))
    }

    /// The point at a given distance from `from`, following the tangent.
    ///
    /// The distance is not clamped to the segment.
    #[inline]
    pub fn point_at_distance(&self, distance: f32) -> Point {
        let (sin, cos) = self.tangent_angle().sin_cos();
        point(
            self.from.x + distance * cos,
            self.from.y + distance * sin,
        )
    }

    /// Computes the closest point on this segment to `p`.
    #[inline]
    pub fn closest_point(&self, p: Point) -> Point {
        let v1 = self.to - self.from;
        let v2 = p - self.from;
        let len2 = v1.dot(v1);
        if len2 == 0.0 {
            return self.from;
        }
        let t = f32::min(f32::max(v2.dot(v1) / len2, 0.0), 1.0);

        self.from + v1 * t
    }

    /// Computes the squared distance between this segment and a point.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point) -> f32 {
        (self.closest_point(p) - p).square_length()
    }
}

#[test]
fn tangent_angle_quadrants() {
    use core::f32::consts::{FRAC_PI_2, PI};

    let o = point(0.0, 0.0);
    let angle = |to: Point| LineSegment { from: o, to }.tangent_angle().radians;

    assert_eq!(angle(point(1.0, 0.0)), 0.0);
    assert!((angle(point(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
    assert!((angle(point(0.0, -1.0)) + FRAC_PI_2).abs() < 1e-6);
    assert!((angle(point(-1.0, 0.0)) - PI).abs() < 1e-6);
    // Degenerate.
    assert_eq!(angle(o), 0.0);
}

#[test]
fn point_at_distance() {
    let s = LineSegment {
        from: point(1.0, 1.0),
        to: point(1.0, 11.0),
    };
    let p = s.point_at_distance(4.0);
    assert!((p.x - 1.0).abs() < 1e-5);
    assert!((p.y - 5.0).abs() < 1e-5);
    assert!((s.length() - 10.0).abs() < 1e-6);
}

#[test]
fn distance_to_point() {
    let s = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    assert_eq!(s.square_distance_to_point(point(5.0, 3.0)), 9.0);
    assert_eq!(s.square_distance_to_point(point(13.0, 4.0)), 25.0);
    assert_eq!(s.closest_point(point(-2.0, 1.0)), point(0.0, 0.0));

    let degenerate = LineSegment {
        from: point(2.0, 2.0),
        to: point(2.0, 2.0),
    };
    assert_eq!(degenerate.closest_point(point(2.0, 5.0)), point(2.0, 2.0));
    assert_eq!(degenerate.square_distance_to_point(point(2.0, 5.0)), 9.0);
}
