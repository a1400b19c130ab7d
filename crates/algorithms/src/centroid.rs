//! Arc-length midpoint of a polyline.
//!
//! The label of a whole path is placed at the point reached after walking half
//! of the path's length. Projected and simplified paths have unevenly spaced
//! points, so the midpoint is found by accumulating segment lengths rather than
//! by picking the middle point of the sequence.
//!
//! ## Example
//!
//! ```
//! use arrowpath_algorithms::centroid::locate;
//! use arrowpath_algorithms::math::point;
//!
//! let mid = locate(&[point(0.0, 0.0), point(10.0, 0.0)]);
//! assert_eq!(mid, Some(point(5.0, 0.0)));
//! ```

use crate::geom::ScreenPath;
use crate::length::polyline_length;
use crate::math::Point;

/// Returns the point halfway along the polyline.
///
/// Returns `None` if there is no point and the first point if the polyline has
/// no length (all of its points coincide).
pub fn locate(points: &[Point]) -> Option<Point> {
    let first = *points.first()?;

    let total = polyline_length(points);
    if !(total > 0.0) {
        return Some(first);
    }

    let half = total * 0.5;
    let mut distance = 0.0;
    for pair in points.windows(2) {
        let (p0, p1) = (pair[0], pair[1]);
        let segment_length = (p1 - p0).length();
        if segment_length == 0.0 {
            continue;
        }

        distance += segment_length;
        if distance > half {
            // Interpolate from the far end of the segment.
            let ratio = (distance - half) / segment_length;
            return Some(p1 - (p1 - p0) * ratio);
        }
    }

    // Only reachable through float rounding of the accumulated distance.
    points.last().cloned()
}

/// Returns the midpoint of the path's first ring.
///
/// Single label placement is defined for simple polylines: the other rings of a
/// multi-ring path are ignored.
pub fn locate_in_path(path: &ScreenPath) -> Option<Point> {
    path.first_ring().and_then(locate)
}

#[cfg(test)]
use crate::math::point;

#[test]
fn single_segment() {
    assert_eq!(
        locate(&[point(0.0, 0.0), point(10.0, 0.0)]),
        Some(point(5.0, 0.0))
    );
    assert_eq!(
        locate(&[point(10.0, 4.0), point(10.0, -6.0)]),
        Some(point(10.0, -1.0))
    );
}

#[test]
fn degenerate_inputs() {
    assert_eq!(locate(&[]), None);
    assert_eq!(locate(&[point(3.0, 7.0)]), Some(point(3.0, 7.0)));
    assert_eq!(
        locate(&[point(0.0, 0.0), point(0.0, 0.0), point(0.0, 0.0)]),
        Some(point(0.0, 0.0))
    );
}

#[test]
fn midpoint_on_second_segment() {
    // Lengths 6 and 8, the midpoint is 1 unit into the second segment, that is
    // 7/8 of it away from its far end.
    let mid = locate(&[point(0.0, 0.0), point(6.0, 0.0), point(6.0, 8.0)]).unwrap();
    assert!((mid.x - 6.0).abs() < 1e-5);
    assert!((mid.y - 1.0).abs() < 1e-5);
}

#[test]
fn uneven_point_spacing() {
    // Most points are packed at the start, the midpoint is still halfway.
    let points = [
        point(0.0, 0.0),
        point(0.5, 0.0),
        point(1.0, 0.0),
        point(1.5, 0.0),
        point(2.0, 0.0),
        point(100.0, 0.0),
    ];
    let mid = locate(&points).unwrap();
    assert!((mid.x - 50.0).abs() < 1e-4);
    assert_eq!(mid.y, 0.0);
}

#[test]
fn coincident_points_are_skipped() {
    let mid = locate(&[
        point(0.0, 0.0),
        point(0.0, 0.0),
        point(4.0, 0.0),
        point(4.0, 0.0),
    ])
    .unwrap();
    assert_eq!(mid, point(2.0, 0.0));
}

#[test]
fn first_ring_only() {
    let path = ScreenPath::new(
        vec![
            vec![point(0.0, 0.0), point(2.0, 0.0)],
            vec![point(100.0, 100.0), point(300.0, 100.0)],
        ],
        false,
    );
    assert_eq!(locate_in_path(&path), Some(point(1.0, 0.0)));
    assert_eq!(locate_in_path(&ScreenPath::default()), None);
}
