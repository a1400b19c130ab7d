//! Keeping the decoration surface aligned with the map.
//!
//! # Overview
//!
//! The decoration surface covers the visible area of the map plus some padding.
//! Two things can happen to the map:
//!
//! - A full redraw. The surface is moved to the new visible bounds and its buffer
//!   is resized, which clears it. The drawing context is translated so that path
//!   coordinates stay valid, and decorations are drawn again from scratch.
//! - A transform change during a zoom or pan animation, before the next redraw.
//!   The already drawn content is moved and scaled as a whole so that it follows
//!   the map until the redraw catches up. This is called for each animation
//!   frame; coalescing the calls is the caller's responsibility.
//!
//! On high density displays the buffer is larger than the displayed surface by the
//! device pixel ratio, and the context is scaled accordingly, so the logical
//! coordinates used for drawing don't depend on the display.

use crate::math::{point, vector, Box2D, Point, Size};
use crate::surface::{BufferSize, Surface, SurfaceLayer};
use crate::InvalidConfiguration;

/// A geographic position.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// What the decoration needs to know about the host map.
pub trait MapView {
    /// The current zoom level.
    fn zoom(&self) -> f32;

    /// The current center of the map.
    fn center(&self) -> LatLng;

    /// The size of the map's viewport in pixels.
    fn size(&self) -> Size;

    /// The scale factor between two zoom levels.
    fn zoom_scale(&self, to_zoom: f32, from_zoom: f32) -> f32;

    /// Projects a geographic position to pixel coordinates at a given zoom level.
    fn project(&self, position: LatLng, zoom: f32) -> Point;

    /// Converts a position relative to the map's viewport to a position in the
    /// coordinate system of the map's layers.
    fn container_point_to_layer_point(&self, position: Point) -> Point;

    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    /// Whether the host can move and scale the surface layer in one operation.
    ///
    /// If not, the layer is only moved during transform changes.
    fn supports_3d_transforms(&self) -> bool {
        true
    }
}

/// Where the decoration surface is displayed relative to the map's layer
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ViewportTransform {
    pub scale: f32,
    pub translate: Point,
}

impl ViewportTransform {
    /// No scale, top-left corner at `position`.
    #[inline]
    pub fn at(position: Point) -> Self {
        ViewportTransform {
            scale: 1.0,
            translate: position,
        }
    }

    /// Where a point of the surface ends up on the map.
    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        self.translate + p.to_vector() * self.scale
    }
}

// The map state at the time of the last full redraw.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Frame {
    center: LatLng,
    zoom: f32,
    bounds: Box2D,
    padding: f32,
}

/// Keeps one decoration surface aligned with the host map.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportSynchronizer {
    padding: f32,
    frame: Option<Frame>,
    transform: ViewportTransform,
}

impl ViewportSynchronizer {
    /// How much the surface extends past the visible area on each side, as a
    /// fraction of the viewport size.
    pub const DEFAULT_PADDING: f32 = 0.1;

    pub fn new(padding: f32) -> Result<Self, InvalidConfiguration> {
        check_padding(padding)?;

        Ok(ViewportSynchronizer {
            padding,
            frame: None,
            transform: ViewportTransform::at(Point::origin()),
        })
    }

    /// Changes the padding used by the next redraws.
    ///
    /// Transform changes keep following the map with the padding of the last
    /// redraw until the next one.
    pub fn set_padding(&mut self, padding: f32) -> Result<(), InvalidConfiguration> {
        check_padding(padding)?;
        self.padding = padding;

        Ok(())
    }

    #[inline]
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// The current transform of the surface layer.
    #[inline]
    pub fn transform(&self) -> ViewportTransform {
        self.transform
    }

    /// The bounds covered by the surface since the last redraw, in layer
    /// coordinates.
    #[inline]
    pub fn bounds(&self) -> Option<Box2D> {
        self.frame.map(|frame| frame.bounds)
    }

    /// Moves and scales the surface layer to follow an animated zoom or pan.
    ///
    /// `center` and `zoom` are the map's target center and zoom level. Does
    /// nothing and returns `None` before the first redraw.
    pub fn on_transform_changed<L: SurfaceLayer + ?Sized>(
        &mut self,
        map: &dyn MapView,
        layer: &mut L,
        center: LatLng,
        zoom: f32,
    ) -> Option<ViewportTransform> {
        let frame = match self.frame {
            Some(frame) => frame,
            None => {
                log::debug!("Transform change before the first redraw, ignored");
                return None;
            }
        };

        let scale = map.zoom_scale(zoom, frame.zoom);
        let position = frame.bounds.min.to_vector();
        let view_half = map.size().to_vector() * (0.5 + frame.padding);
        let current_center = map.project(frame.center, zoom);
        let target_center = map.project(center, zoom);
        let center_offset = target_center - current_center;

        let top_left = view_half * -scale + position + view_half - center_offset;
        let transform = ViewportTransform {
            scale,
            translate: top_left.to_point(),
        };

        if map.supports_3d_transforms() {
            layer.set_transform(transform.translate, transform.scale);
        } else {
            layer.set_position(transform.translate);
        }

        log::debug!("Viewport transform {:?} for zoom {}", transform, zoom);
        self.transform = transform;

        Some(transform)
    }

    /// Resets the surface for a full redraw and returns the new bounds.
    ///
    /// The surface is moved to the visible bounds, its buffer is resized (and
    /// cleared) and its context is set up so that drawing uses layer coordinates.
    pub fn on_redraw<S: Surface + SurfaceLayer + ?Sized>(
        &mut self,
        map: &dyn MapView,
        surface: &mut S,
    ) -> Box2D {
        let viewport = map.size();
        let p = self.padding;
        let min = map
            .container_point_to_layer_point(point(
                -viewport.width * p,
                -viewport.height * p,
            ))
            .round();
        let max = (min + viewport.to_vector() * (1.0 + 2.0 * p)).round();
        let bounds = Box2D { min, max };
        let size = bounds.size();

        let ratio = device_pixel_ratio(map);

        surface.set_position(bounds.min);
        surface.set_buffer_size(BufferSize::new(
            (size.width * ratio).round() as u32,
            (size.height * ratio).round() as u32,
        ));
        surface.set_display_size(size);
        if ratio != 1.0 {
            surface.scale(ratio, ratio);
        }
        surface.translate(vector(-bounds.min.x, -bounds.min.y));

        self.frame = Some(Frame {
            center: map.center(),
            zoom: map.zoom(),
            bounds,
            padding: p,
        });
        self.transform = ViewportTransform::at(bounds.min);

        log::debug!(
            "Redraw: bounds {:?}, zoom {}, device pixel ratio {}",
            bounds,
            map.zoom(),
            ratio
        );

        bounds
    }
}

impl Default for ViewportSynchronizer {
    fn default() -> Self {
        ViewportSynchronizer {
            padding: Self::DEFAULT_PADDING,
            frame: None,
            transform: ViewportTransform::at(Point::origin()),
        }
    }
}

fn check_padding(padding: f32) -> Result<(), InvalidConfiguration> {
    if padding >= 0.0 && padding.is_finite() {
        Ok(())
    } else {
        Err(InvalidConfiguration::Padding(padding))
    }
}

fn device_pixel_ratio(map: &dyn MapView) -> f32 {
    let ratio = map.device_pixel_ratio();
    if ratio.is_finite() && ratio > 0.0 {
        return ratio;
    }

    log::warn!("Invalid device pixel ratio {}, using 1", ratio);
    1.0
}
