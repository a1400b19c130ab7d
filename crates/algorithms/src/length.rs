//! Path length.

use crate::math::Point;

/// Sum of the lengths of the segments joining consecutive points.
pub fn polyline_length(points: &[Point]) -> f32 {
    points
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).length())
        .sum()
}

#[test]
fn lengths() {
    use crate::math::point;

    assert_eq!(polyline_length(&[]), 0.0);
    assert_eq!(polyline_length(&[point(1.0, 1.0)]), 0.0);
    assert_eq!(
        polyline_length(&[point(0.0, 0.0), point(6.0, 0.0), point(6.0, 8.0)]),
        14.0
    );
    assert_eq!(polyline_length(&[point(0.0, 0.0), point(3.0, 4.0), point(3.0, 4.0)]), 5.0);
}
