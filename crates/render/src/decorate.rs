//! Decorating whole paths.
//!
//! # Overview
//!
//! The [`PathDecorator`] walks every segment of every ring of a [`ScreenPath`],
//! asks the stepper for the segment's anchors and draws a stamp at each of them.
//! If the configuration has a label style and the path comes with a label, the
//! label is drawn once at the arc-length midpoint of the path's first ring.
//!
//! Decorating is a pure function of the path, the configuration and the per-path
//! style: the decorator keeps no state between calls, so decorating the same path
//! twice issues the same drawing commands twice.
//!
//! ## Example
//!
//! ```
//! use arrowpath_render::{DecorationConfig, GlyphStyle, PathDecorator, PathStyle, PlacementOptions, StampDescriptor};
//! use arrowpath_render::geom::{point, ScreenPath};
//! use arrowpath_render::recording::RecordingSurface;
//!
//! let config = DecorationConfig::symbol(StampDescriptor::glyph("➤", GlyphStyle::default()))
//!     .with_placement(PlacementOptions::step_size(20.0).with_phase_offset(0.0));
//! let decorator = PathDecorator::new(config).unwrap();
//!
//! let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(100.0, 0.0)]);
//! let mut surface = RecordingSurface::new();
//! let stats = decorator.decorate(&path, &PathStyle::default(), &mut surface);
//!
//! assert_eq!(stats.stamps, 6);
//! assert_eq!(surface.text_count(), 6);
//! ```

use crate::algorithms::centroid::locate_in_path;
use crate::algorithms::hit_test::{hit_test_path, FillRule};
use crate::algorithms::Stepper;
use crate::geom::ScreenPath;
use crate::math::Point;
use crate::stamp::{render_glyph, render_stamp};
use crate::surface::Surface;
use crate::{DecorationConfig, DecorationError, InvalidConfiguration, PathStyle};

/// Counts of what a decoration pass drew.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecorationStats {
    /// Number of stamps drawn along the path.
    pub stamps: u32,
    /// Number of stamps that could not be drawn.
    pub skipped: u32,
    /// Whether a label was drawn.
    pub label: bool,
}

/// Draws the configured stamps and label along paths.
#[derive(Clone, Debug)]
pub struct PathDecorator {
    config: DecorationConfig,
    stepper: Stepper,
}

impl PathDecorator {
    /// Creates a decorator, validating the configuration.
    pub fn new(config: DecorationConfig) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        let stepper = Stepper::new(config.placement.step_size, config.placement.phase_offset)?;

        Ok(PathDecorator { config, stepper })
    }

    #[inline]
    pub fn config(&self) -> &DecorationConfig {
        &self.config
    }

    /// Draws the decoration of one path onto the surface.
    ///
    /// Stamps that fail to draw are skipped and counted in the returned stats;
    /// they never interrupt the pass.
    pub fn decorate<S: Surface + ?Sized>(
        &self,
        path: &ScreenPath,
        style: &PathStyle,
        surface: &mut S,
    ) -> DecorationStats {
        let mut stats = DecorationStats::default();
        let placement = &self.config.placement;

        if let Some(symbol) = &self.config.symbol {
            let mut last_error: Option<DecorationError> = None;
            for segment in path.segments() {
                for anchor in self.stepper.anchors(&segment) {
                    let anchor = anchor.rotated(placement.rotation_bias);
                    match render_stamp(surface, &anchor, symbol, placement, style.line_width) {
                        Ok(()) => stats.stamps += 1,
                        Err(e) => {
                            stats.skipped += 1;
                            last_error = Some(e);
                        }
                    }
                }
            }

            if let Some(e) = last_error {
                log::warn!(
                    "Skipped {} of {} stamps: {}",
                    stats.skipped,
                    stats.stamps + stats.skipped,
                    e
                );
            }
        }

        if let (Some(label_style), Some(text)) = (&self.config.label, style.label) {
            if let Some(position) = locate_in_path(path) {
                render_glyph(surface, position, None, text, label_style, style.line_width);
                stats.label = true;
            }
        }

        log::trace!("Decorated path: {:?}", stats);

        stats
    }

    /// Returns whether `position` touches the path.
    ///
    /// Always false unless hit testing is enabled in the placement options.
    pub fn hit_test(&self, path: &ScreenPath, position: Point) -> bool {
        let placement = &self.config.placement;
        if !placement.enable_hit_testing {
            return false;
        }

        hit_test_path(position, path, FillRule::EvenOdd, placement.hit_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{point, size, vector, Angle};
    use crate::recording::{DrawCommand, RecordingSurface};
    use crate::stamp::{Bitmap, GlyphStyle, ImageId, StampDescriptor};
    use crate::PlacementOptions;

    fn glyph_config(placement: PlacementOptions) -> DecorationConfig {
        DecorationConfig::symbol(StampDescriptor::glyph(">", GlyphStyle::default()))
            .with_placement(placement)
    }

    #[test]
    fn stamps_along_every_ring() {
        let decorator =
            PathDecorator::new(glyph_config(PlacementOptions::step_size(10.0).with_phase_offset(0.0)))
                .unwrap();
        let path = ScreenPath::new(
            vec![
                vec![point(0.0, 0.0), point(20.0, 0.0), point(20.0, 10.0)],
                vec![point(100.0, 100.0)],
                vec![point(50.0, 50.0), point(50.0, 80.0)],
            ],
            false,
        );

        let mut surface = RecordingSurface::new();
        let stats = decorator.decorate(&path, &PathStyle::default(), &mut surface);

        // 3 + 2 on the first ring, nothing on the second, 4 on the third.
        assert_eq!(stats.stamps, 9);
        assert_eq!(stats.skipped, 0);
        assert!(!stats.label);

        let origins: Vec<Point> = surface.placed().iter().map(|stamp| stamp.position).collect();
        assert_eq!(
            origins,
            vec![
                point(0.0, 0.0),
                point(10.0, 0.0),
                point(20.0, 0.0),
                point(20.0, 0.0),
                point(20.0, 10.0),
                point(50.0, 50.0),
                point(50.0, 60.0),
                point(50.0, 70.0),
                point(50.0, 80.0),
            ]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn rotation_bias_is_added() {
        let bias = Angle::radians(0.5);
        let decorator = PathDecorator::new(glyph_config(
            PlacementOptions::step_size(10.0)
                .with_phase_offset(0.0)
                .with_rotation_bias(bias),
        ))
        .unwrap();
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(0.0, 10.0)]);

        let mut surface = RecordingSurface::new();
        decorator.decorate(&path, &PathStyle::default(), &mut surface);

        let rotations: Vec<Angle> = surface
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rotate(angle) => Some(*angle),
                _ => None,
            })
            .collect();
        assert_eq!(rotations.len(), 2);
        for angle in rotations {
            assert!((angle.radians - (core::f32::consts::FRAC_PI_2 + 0.5)).abs() < 1e-6);
        }
    }

    #[test]
    fn idempotent() {
        let decorator = PathDecorator::new(glyph_config(
            PlacementOptions::step_size(7.0).with_anchor_offset(vector(2.0, 3.0)),
        ))
        .unwrap();
        let path = ScreenPath::polyline(vec![
            point(3.0, 4.0),
            point(57.0, 31.0),
            point(12.0, 90.0),
        ]);
        let style = PathStyle::default().with_line_width(3.0);

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        let stats1 = decorator.decorate(&path, &style, &mut first);
        let stats2 = decorator.decorate(&path, &style, &mut second);

        assert_eq!(stats1, stats2);
        assert_eq!(first.commands(), second.commands());

        // And on the same surface, the second pass repeats the first one.
        let mut surface = RecordingSurface::new();
        decorator.decorate(&path, &style, &mut surface);
        decorator.decorate(&path, &style, &mut surface);
        let n = surface.commands().len() / 2;
        assert_eq!(surface.commands()[..n], surface.commands()[n..]);
    }

    #[test]
    fn line_width_does_not_leak_between_paths() {
        let decorator =
            PathDecorator::new(glyph_config(PlacementOptions::step_size(10.0).with_phase_offset(0.0)))
                .unwrap();
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(5.0, 0.0)]);

        let mut surface = RecordingSurface::new();
        decorator.decorate(&path, &PathStyle::default().with_line_width(2.0), &mut surface);
        decorator.decorate(&path, &PathStyle::default(), &mut surface);

        let widths: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::SetLineWidth(w) => Some(*w),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![2.0, GlyphStyle::DEFAULT_LINE_WIDTH]);
        assert_eq!(decorator.config().label, None);
    }

    #[test]
    fn images_not_ready_are_skipped() {
        let config = DecorationConfig::symbol(StampDescriptor::image(Bitmap::pending(ImageId(1))))
            .with_placement(PlacementOptions::step_size(10.0).with_phase_offset(0.0));
        let decorator = PathDecorator::new(config).unwrap();
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(30.0, 0.0)]);

        let mut surface = RecordingSurface::new();
        let stats = decorator.decorate(&path, &PathStyle::default(), &mut surface);

        assert_eq!(stats.stamps, 0);
        assert_eq!(stats.skipped, 4);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn images() {
        let config = DecorationConfig::symbol(StampDescriptor::image(Bitmap::ready(
            ImageId(4),
            size(12.0, 12.0),
        )))
        .with_placement(
            PlacementOptions::step_size(10.0)
                .with_phase_offset(0.5)
                .with_image_clip_inset(1.0),
        );
        let decorator = PathDecorator::new(config).unwrap();
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(30.0, 0.0)]);

        let mut surface = RecordingSurface::new();
        let stats = decorator.decorate(&path, &PathStyle::default(), &mut surface);

        assert_eq!(stats.stamps, 3);
        assert_eq!(surface.image_count(), 3);
        let xs: Vec<f32> = surface.placed().iter().map(|s| s.position.x).collect();
        assert_eq!(xs, vec![5.0, 15.0, 25.0]);
    }

    #[test]
    fn label_at_midpoint() {
        let config = DecorationConfig::label(GlyphStyle::default().with_font_size(12.0));
        let decorator = PathDecorator::new(config).unwrap();
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(6.0, 0.0), point(6.0, 8.0)]);

        // No label text, nothing to draw.
        let mut surface = RecordingSurface::new();
        let stats = decorator.decorate(&path, &PathStyle::default(), &mut surface);
        assert_eq!(stats, DecorationStats::default());
        assert!(surface.commands().is_empty());

        let stats = decorator.decorate(&path, &PathStyle::default().with_label("A1"), &mut surface);
        assert!(stats.label);
        assert_eq!(stats.stamps, 0);
        assert_eq!(surface.text_count(), 1);
        assert!(surface.commands().contains(&DrawCommand::Translate(vector(6.0, 1.0))));
        assert!(!surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Rotate(_))));
    }

    #[test]
    fn label_on_empty_path() {
        let config = DecorationConfig::label(GlyphStyle::default());
        let decorator = PathDecorator::new(config).unwrap();

        let mut surface = RecordingSurface::new();
        let stats = decorator.decorate(
            &ScreenPath::default(),
            &PathStyle::default().with_label("x"),
            &mut surface,
        );
        assert!(!stats.label);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn invalid_configuration() {
        for &step in &[0.0, -1.0, -100.0] {
            assert_eq!(
                PathDecorator::new(glyph_config(PlacementOptions::step_size(step))).unwrap_err(),
                InvalidConfiguration::StepSize(step)
            );
        }
        for &step in &[0.1, 1.0, 1000.0] {
            assert!(PathDecorator::new(glyph_config(PlacementOptions::step_size(step))).is_ok());
        }

        let empty = DecorationConfig {
            placement: PlacementOptions::DEFAULT,
            symbol: None,
            label: None,
        };
        assert_eq!(
            PathDecorator::new(empty).unwrap_err(),
            InvalidConfiguration::MissingStamp
        );
    }

    #[test]
    fn hit_testing_flag() {
        let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(100.0, 0.0)]);

        let disabled = PathDecorator::new(glyph_config(PlacementOptions::DEFAULT)).unwrap();
        assert!(!disabled.hit_test(&path, point(50.0, 1.0)));

        let enabled =
            PathDecorator::new(glyph_config(PlacementOptions::DEFAULT.with_hit_testing(true)))
                .unwrap();
        assert!(enabled.hit_test(&path, point(50.0, 1.0)));
        assert!(!enabled.hit_test(&path, point(50.0, 10.0)));
    }
}
