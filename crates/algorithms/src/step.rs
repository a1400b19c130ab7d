//! Evenly spaced anchors along a segment.
//!
//! # Stepping
//!
//! The stepper splits a segment into steps of a fixed length and produces an
//! [`Anchor`] (a position and the segment's tangent angle) at each step. The
//! phase offset shifts the first anchor by a fraction of a step, which keeps the
//! spacing visually continuous from one segment of a path to the next and can be
//! animated to make the symbols crawl along the path.
//!
//! Anchor positions are rounded to the nearest pixel.
//!
//! ## Example
//!
//! ```
//! use arrowpath_algorithms::step::Stepper;
//! use arrowpath_algorithms::geom::{point, LineSegment};
//!
//! let segment = LineSegment::new(point(0.0, 0.0), point(30.0, 0.0));
//! let stepper = Stepper::new(10.0, 0.0).unwrap();
//!
//! let xs: Vec<f32> = stepper.anchors(&segment).map(|anchor| anchor.position.x).collect();
//! assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0]);
//! ```

use crate::geom::LineSegment;
use crate::math::{Angle, Point};
#[cfg(test)]
use crate::math::point;
use crate::InvalidConfiguration;

/// A position along a path and the direction of the path at that position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchor {
    pub position: Point,
    pub angle: Angle,
}

impl Anchor {
    #[inline]
    pub fn new(position: Point, angle: Angle) -> Self {
        Anchor { position, angle }
    }

    /// Returns a copy of this anchor with its angle rotated by `bias`.
    #[inline]
    pub fn rotated(&self, bias: Angle) -> Self {
        Anchor {
            position: self.position,
            angle: self.angle + bias,
        }
    }
}

/// Returns an error unless the step size is a finite, strictly positive number.
pub fn check_step_size(step_size: f32) -> Result<(), InvalidConfiguration> {
    if step_size.is_finite() && step_size > 0.0 {
        Ok(())
    } else {
        Err(InvalidConfiguration::StepSize(step_size))
    }
}

/// Returns an error unless the phase offset is in `[0, 1)`.
pub fn check_phase_offset(phase_offset: f32) -> Result<(), InvalidConfiguration> {
    if (0.0..1.0).contains(&phase_offset) {
        Ok(())
    } else {
        Err(InvalidConfiguration::PhaseOffset(phase_offset))
    }
}

/// Generates the anchors of a single segment.
///
/// Shorthand for `Stepper::new(step_size, phase_offset)?.anchors(segment)`.
pub fn generate_anchors(
    segment: &LineSegment,
    step_size: f32,
    phase_offset: f32,
) -> Result<Anchors, InvalidConfiguration> {
    Ok(Stepper::new(step_size, phase_offset)?.anchors(segment))
}

/// Validated stepping parameters.
///
/// A `Stepper` holds no state besides its parameters: it can produce the anchors
/// of any number of segments, in any order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stepper {
    step_size: f32,
    phase_offset: f32,
}

impl Stepper {
    /// Creates a stepper placing anchors every `step_size` pixels, starting
    /// `phase_offset` steps after the beginning of each segment.
    pub fn new(step_size: f32, phase_offset: f32) -> Result<Self, InvalidConfiguration> {
        check_step_size(step_size)?;
        check_phase_offset(phase_offset)?;

        Ok(Stepper {
            step_size,
            phase_offset,
        })
    }

    #[inline]
    pub fn step_size(&self) -> f32 {
        self.step_size
    }

    #[inline]
    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    /// Returns the anchors of a segment.
    ///
    /// An anchor is emitted at each distance `(phase_offset + k) * step_size`
    /// that does not exceed the segment's length, within `DISTANCE_TOLERANCE`.
    pub fn anchors(&self, segment: &LineSegment) -> Anchors {
        Anchors {
            segment: *segment,
            angle: segment.tangent_angle(),
            step_size: self.step_size,
            phase_offset: self.phase_offset,
            index: 0,
            count: self.anchor_count(segment.length()),
        }
    }

    fn anchor_count(&self, length: f32) -> u32 {
        // Computed in f64 so that `phase + k` lands exactly on the end of the
        // segment when it should, e.g. 0.3 + 1 steps of 10 on a length of 13.
        let steps = (length as f64 + DISTANCE_TOLERANCE as f64) / self.step_size as f64
            - self.phase_offset as f64;
        if steps.is_finite() && steps >= 0.0 {
            (steps.floor() as u32).saturating_add(1)
        } else {
            0
        }
    }
}

/// Anchors up to this distance in pixels past the end of a segment are still
/// emitted, to absorb float rounding.
pub const DISTANCE_TOLERANCE: f32 = 1e-3;

/// An iterator over the anchors of a segment.
///
/// Created by [`Stepper::anchors`] and [`generate_anchors`]. The iterator only
/// depends on its inputs, cloning it restarts from the current step.
#[derive(Clone, Debug)]
pub struct Anchors {
    segment: LineSegment,
    angle: Angle,
    step_size: f32,
    phase_offset: f32,
    index: u32,
    count: u32,
}

impl Anchors {
    fn anchor_at(&self, index: u32) -> Anchor {
        let distance = (self.phase_offset + index as f32) * self.step_size;

        Anchor {
            position: self.segment.point_at_distance(distance).round(),
            angle: self.angle,
        }
    }
}

impl Iterator for Anchors {
    type Item = Anchor;

    fn next(&mut self) -> Option<Anchor> {
        if self.index >= self.count {
            return None;
        }

        let anchor = self.anchor_at(self.index);
        self.index += 1;

        Some(anchor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count - self.index) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Anchors {}

impl core::iter::FusedIterator for Anchors {}

#[cfg(test)]
fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> LineSegment {
    LineSegment::new(point(x0, y0), point(x1, y1))
}

#[test]
fn whole_number_of_steps() {
    for k in 0..8 {
        let len = k as f32 * 12.0;
        let s = segment(5.0, 7.0, 5.0 + len, 7.0);
        let anchors: Vec<Anchor> = generate_anchors(&s, 12.0, 0.0).unwrap().collect();

        assert_eq!(anchors.len(), k + 1);
        assert_eq!(anchors[0].position, s.from);
        assert_eq!(anchors[k].position, s.to);
    }

    // Same along a diagonal (3-4-5 triangle).
    let s = segment(0.0, 0.0, 30.0, 40.0);
    let anchors: Vec<Anchor> = generate_anchors(&s, 10.0, 0.0).unwrap().collect();
    assert_eq!(anchors.len(), 6);
    assert_eq!(anchors[0].position, point(0.0, 0.0));
    assert_eq!(anchors[1].position, point(6.0, 8.0));
    assert_eq!(anchors[5].position, point(30.0, 40.0));
}

#[test]
fn anchors_are_evenly_spaced() {
    let segments = [
        segment(0.0, 0.0, 97.0, 13.0),
        segment(250.0, -40.0, -12.0, 33.0),
        segment(3.0, 3.0, 3.0, 200.0),
        segment(-10.0, 50.0, -10.0, -77.5),
    ];

    for s in &segments {
        for &(step, phase) in &[(10.0, 0.0), (7.5, 0.3), (33.0, 0.99)] {
            let len = s.length();
            let mut count = 0;
            for (i, anchor) in generate_anchors(s, step, phase).unwrap().enumerate() {
                let expected = (phase + i as f32) * step;
                let actual = (anchor.position - s.from).length();
                assert!(
                    (actual - expected).abs() <= 1.0,
                    "{:?}: anchor {} at {}, expected {}",
                    s,
                    i,
                    actual,
                    expected
                );
                assert!(expected <= len + 1e-2);
                assert_eq!(anchor.angle, s.tangent_angle());
                count += 1;
            }
            let fitting = (0..)
                .take_while(|&k| (phase as f64 + k as f64) * step as f64 <= len as f64 + 1e-3)
                .count();
            assert_eq!(count, fitting);
        }
    }
}

#[test]
fn never_past_the_end() {
    let s = segment(0.0, 0.0, 25.0, 0.0);
    let xs: Vec<f32> = generate_anchors(&s, 10.0, 0.5)
        .unwrap()
        .map(|a| a.position.x)
        .collect();
    assert_eq!(xs, vec![5.0, 15.0, 25.0]);

    let xs: Vec<f32> = generate_anchors(&s, 10.0, 0.6)
        .unwrap()
        .map(|a| a.position.x)
        .collect();
    assert_eq!(xs, vec![6.0, 16.0]);

    // Shorter than the phase offset.
    assert_eq!(generate_anchors(&segment(0.0, 0.0, 2.0, 0.0), 10.0, 0.3).unwrap().count(), 0);
}

#[test]
fn last_anchor_on_the_end_point() {
    let xs = |len: f32| -> Vec<f32> {
        generate_anchors(&segment(0.0, 0.0, len, 0.0), 10.0, 0.3)
            .unwrap()
            .map(|a| a.position.x)
            .collect()
    };

    assert_eq!(xs(13.0), vec![3.0, 13.0]);
    assert_eq!(xs(23.0), vec![3.0, 13.0, 23.0]);
    assert_eq!(xs(33.0), vec![3.0, 13.0, 23.0, 33.0]);
    assert_eq!(xs(12.99), vec![3.0]);

    let down: Vec<Anchor> = generate_anchors(&segment(7.0, 0.0, 7.0, 13.0), 10.0, 0.3)
        .unwrap()
        .collect();
    assert_eq!(down.len(), 2);
    assert_eq!(down[1].position, point(7.0, 13.0));
}

#[test]
fn zero_length_segment() {
    let s = segment(4.0, 4.0, 4.0, 4.0);

    let anchors: Vec<Anchor> = generate_anchors(&s, 10.0, 0.0).unwrap().collect();
    assert_eq!(anchors, vec![Anchor::new(point(4.0, 4.0), Angle::zero())]);

    assert_eq!(generate_anchors(&s, 10.0, 0.3).unwrap().count(), 0);
}

#[test]
fn vertical_and_backward_segments() {
    use core::f32::consts::{FRAC_PI_2, PI};

    let up: Vec<Anchor> = generate_anchors(&segment(0.0, 20.0, 0.0, 0.0), 10.0, 0.0)
        .unwrap()
        .collect();
    assert_eq!(up.len(), 3);
    assert_eq!(up[1].position, point(0.0, 10.0));
    assert!((up[1].angle.radians + FRAC_PI_2).abs() < 1e-6);

    let back: Vec<Anchor> = generate_anchors(&segment(20.0, 0.0, 0.0, 0.0), 10.0, 0.0)
        .unwrap()
        .collect();
    assert_eq!(back[2].position, point(0.0, 0.0));
    assert!((back[0].angle.radians - PI).abs() < 1e-6);
}

#[test]
fn positions_are_rounded() {
    let s = segment(0.2, 0.7, 10.2, 0.7);
    for anchor in generate_anchors(&s, 3.0, 0.1).unwrap() {
        assert_eq!(anchor.position.x, anchor.position.x.round());
        assert_eq!(anchor.position.y, 1.0);
    }
}

#[test]
fn invalid_parameters() {
    let s = segment(0.0, 0.0, 10.0, 0.0);

    assert_eq!(
        generate_anchors(&s, 0.0, 0.0).unwrap_err(),
        InvalidConfiguration::StepSize(0.0)
    );
    assert_eq!(
        generate_anchors(&s, -5.0, 0.0).unwrap_err(),
        InvalidConfiguration::StepSize(-5.0)
    );
    assert!(generate_anchors(&s, f32::NAN, 0.0).is_err());
    assert!(generate_anchors(&s, f32::INFINITY, 0.0).is_err());
    assert_eq!(
        generate_anchors(&s, 10.0, 1.0).unwrap_err(),
        InvalidConfiguration::PhaseOffset(1.0)
    );
    assert!(generate_anchors(&s, 10.0, -0.1).is_err());
    assert!(generate_anchors(&s, 10.0, f32::NAN).is_err());

    for &step in &[1e-3, 0.5, 1.0, 10.0, 1e6] {
        assert!(generate_anchors(&s, step, 0.0).is_ok());
    }
}

#[test]
fn restartable() {
    let stepper = Stepper::new(4.0, 0.25).unwrap();
    let s = segment(1.0, 2.0, 40.0, 30.0);

    let mut anchors = stepper.anchors(&s);
    let first_pass: Vec<Anchor> = anchors.clone().collect();
    assert_eq!(anchors.len(), first_pass.len());

    anchors.next();
    assert_eq!(anchors.len(), first_pass.len() - 1);

    let second_pass: Vec<Anchor> = stepper.anchors(&s).collect();
    assert_eq!(first_pass, second_pass);
}
