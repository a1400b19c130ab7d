use crate::math::Point;
use crate::LineSegment;

use std::slice;

/// A ring of points: one sub-path of a [`ScreenPath`].
pub type Ring = Vec<Point>;

/// A polyline or polygon boundary in the current screen projection.
///
/// A `ScreenPath` is made of one or more disjoint rings (sub-paths). It is produced
/// by the host's projection step on every redraw and treated as immutable by the
/// decoration code: a new projection means a new `ScreenPath`.
///
/// Rings with fewer than two points are kept as-is; they don't contain any
/// segment.
///
/// ## Example
///
/// ```
/// use arrowpath_geom::{point, ScreenPath};
///
/// let path = ScreenPath::polyline(vec![
///     point(0.0, 0.0),
///     point(10.0, 0.0),
///     point(10.0, 5.0),
/// ]);
///
/// assert_eq!(path.segments().count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ScreenPath {
    rings: Vec<Ring>,
    closed: bool,
}

impl ScreenPath {
    /// Creates a path from its rings.
    pub fn new(rings: Vec<Ring>, closed: bool) -> Self {
        ScreenPath { rings, closed }
    }

    /// Creates an open path with a single ring.
    pub fn polyline(points: Ring) -> Self {
        ScreenPath {
            rings: vec![points],
            closed: false,
        }
    }

    /// Creates a closed path (polygon) from its rings.
    pub fn polygon(rings: Vec<Ring>) -> Self {
        ScreenPath {
            rings,
            closed: true,
        }
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// The first ring, if any.
    #[inline]
    pub fn first_ring(&self) -> Option<&[Point]> {
        self.rings.first().map(|ring| &ring[..])
    }

    /// Whether the path describes a polygon boundary rather than a polyline.
    ///
    /// This is informative only: segments are always the consecutive point
    /// pairs of each ring, the closing edge of a polygon is not implied.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns true if the path has no segment at all.
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|ring| ring.len() < 2)
    }

    /// Iterates over the segments of every ring, in order.
    pub fn segments(&self) -> Segments {
        Segments {
            rings: self.rings.iter(),
            points: <&[Point]>::default().iter(),
            prev: None,
        }
    }

    /// Iterates over the segments of a single ring.
    pub fn ring_segments(ring: &[Point]) -> impl Iterator<Item = LineSegment> + Clone + '_ {
        ring.windows(2).map(|pair| LineSegment {
            from: pair[0],
            to: pair[1],
        })
    }
}

impl From<Vec<Ring>> for ScreenPath {
    fn from(rings: Vec<Ring>) -> Self {
        ScreenPath::new(rings, false)
    }
}

/// An iterator over the segments of a [`ScreenPath`].
#[derive(Clone)]
pub struct Segments<'l> {
    rings: slice::Iter<'l, Ring>,
    points: slice::Iter<'l, Point>,
    prev: Option<Point>,
}

impl<'l> Iterator for Segments<'l> {
    type Item = LineSegment;

    fn next(&mut self) -> Option<LineSegment> {
        loop {
            if let Some(to) = self.points.next() {
                match self.prev.replace(*to) {
                    Some(from) => return Some(LineSegment { from, to: *to }),
                    None => continue,
                }
            }

            let ring = self.rings.next()?;
            self.points = ring.iter();
            self.prev = None;
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn segments_skip_ring_boundaries() {
    let path = ScreenPath::new(
        vec![
            vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)],
            vec![point(5.0, 5.0)],
            vec![],
            vec![point(10.0, 0.0), point(20.0, 0.0)],
        ],
        false,
    );

    let segments: Vec<LineSegment> = path.segments().collect();
    assert_eq!(
        segments,
        vec![
            LineSegment::new(point(0.0, 0.0), point(1.0, 0.0)),
            LineSegment::new(point(1.0, 0.0), point(1.0, 1.0)),
            LineSegment::new(point(10.0, 0.0), point(20.0, 0.0)),
        ]
    );

    // Iterating twice yields the same thing.
    assert_eq!(path.segments().count(), 3);
    assert!(!path.is_empty());
}

#[test]
fn empty_paths() {
    assert!(ScreenPath::default().is_empty());
    assert!(ScreenPath::default().first_ring().is_none());
    assert_eq!(ScreenPath::default().segments().count(), 0);

    let single = ScreenPath::polyline(vec![point(3.0, 3.0)]);
    assert!(single.is_empty());
    assert_eq!(single.first_ring(), Some(&[point(3.0, 3.0)][..]));
}

#[test]
fn polygon_has_no_implicit_closing_segment() {
    let square = ScreenPath::polygon(vec![vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ]]);
    assert!(square.is_closed());
    assert_eq!(square.segments().count(), 3);
    assert_eq!(ScreenPath::ring_segments(&square.rings()[0]).count(), 3);
}
