//! The host-facing renderer.
//!
//! [`ArrowPathRenderer`] wraps the host's own path renderer (anything that
//! implements [`BaseRenderer`]) and forwards every call to it before doing its
//! own work: decorating the path it just drew, or keeping the decoration surface
//! aligned with the map.
//!
//! ```
//! use arrowpath_render::{ArrowPathRenderer, BaseRenderer, DecorationConfig, GlyphStyle};
//! use arrowpath_render::{LatLng, MapView, PathStyle, StampDescriptor};
//! use arrowpath_render::geom::{point, ScreenPath};
//! use arrowpath_render::math::{size, Box2D, Point, Size};
//! use arrowpath_render::recording::RecordingSurface;
//!
//! struct Map;
//! impl MapView for Map {
//!     fn zoom(&self) -> f32 { 0.0 }
//!     fn center(&self) -> LatLng { LatLng::new(0.0, 0.0) }
//!     fn size(&self) -> Size { size(400.0, 300.0) }
//!     fn zoom_scale(&self, to: f32, from: f32) -> f32 { (2.0f32).powf(to - from) }
//!     fn project(&self, p: LatLng, zoom: f32) -> Point {
//!         let s = 256.0 * (2.0f64).powf(zoom as f64);
//!         point((p.lng * s) as f32, (-p.lat * s) as f32)
//!     }
//!     fn container_point_to_layer_point(&self, p: Point) -> Point { p }
//! }
//!
//! // The host's own path renderer.
//! #[derive(Default)]
//! struct Lines { drawn: usize }
//! impl BaseRenderer for Lines {
//!     fn draw_path(&mut self, _path: &ScreenPath) { self.drawn += 1; }
//!     fn update_transform(&mut self, _map: &dyn MapView, _center: LatLng, _zoom: f32) {}
//!     fn resize(&mut self, _map: &dyn MapView, _bounds: &Box2D) {}
//! }
//!
//! let config = DecorationConfig::symbol(StampDescriptor::glyph("➤", GlyphStyle::default()));
//! let mut renderer = ArrowPathRenderer::new(Lines::default(), RecordingSurface::new(), config).unwrap();
//!
//! renderer.on_redraw(&Map);
//! let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(100.0, 0.0)]);
//! let stats = renderer.draw_path(&path, &PathStyle::default());
//!
//! assert_eq!(renderer.base().drawn, 1);
//! assert_eq!(stats.stamps, 10);
//! ```

use crate::decorate::{DecorationStats, PathDecorator};
use crate::geom::ScreenPath;
use crate::math::{Box2D, Point};
use crate::surface::{Surface, SurfaceLayer};
use crate::viewport::{LatLng, MapView, ViewportSynchronizer};
use crate::{DecorationConfig, InvalidConfiguration, PathStyle};

/// The host's path renderer.
///
/// The decoration never replaces it, it only runs after it.
pub trait BaseRenderer {
    /// Draws a projected path.
    fn draw_path(&mut self, path: &ScreenPath);

    /// Follows an animated zoom or pan towards `center` and `zoom`.
    fn update_transform(&mut self, map: &dyn MapView, center: LatLng, zoom: f32);

    /// Prepares a full redraw covering `bounds`, in layer coordinates.
    fn resize(&mut self, map: &dyn MapView, bounds: &Box2D);
}

/// Decorates the paths drawn by a [`BaseRenderer`] on a surface kept aligned with
/// the map.
pub struct ArrowPathRenderer<B, S> {
    base: B,
    surface: S,
    viewport: ViewportSynchronizer,
    decorator: PathDecorator,
}

impl<B: BaseRenderer, S: Surface + SurfaceLayer> ArrowPathRenderer<B, S> {
    /// Creates the renderer with the default viewport padding.
    pub fn new(base: B, surface: S, config: DecorationConfig) -> Result<Self, InvalidConfiguration> {
        Ok(ArrowPathRenderer {
            base,
            surface,
            viewport: ViewportSynchronizer::default(),
            decorator: PathDecorator::new(config)?,
        })
    }

    /// Replaces the configuration.
    ///
    /// On error the previous configuration stays in place. The new
    /// configuration applies to the paths drawn after the call.
    pub fn set_config(&mut self, config: DecorationConfig) -> Result<(), InvalidConfiguration> {
        self.decorator = PathDecorator::new(config)?;
        Ok(())
    }

    /// Sets how far the surface extends past the visible area, as a fraction of
    /// the viewport size.
    ///
    /// Takes effect at the next redraw.
    pub fn set_padding(&mut self, padding: f32) -> Result<(), InvalidConfiguration> {
        self.viewport.set_padding(padding)
    }

    #[inline]
    pub fn config(&self) -> &DecorationConfig {
        self.decorator.config()
    }

    #[inline]
    pub fn base(&self) -> &B {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn viewport(&self) -> &ViewportSynchronizer {
        &self.viewport
    }

    /// Returns the base renderer and the surface.
    pub fn into_inner(self) -> (B, S) {
        (self.base, self.surface)
    }

    /// Called on every frame of a zoom or pan animation.
    pub fn on_transform_changed(&mut self, map: &dyn MapView, center: LatLng, zoom: f32) {
        self.base.update_transform(map, center, zoom);
        self.viewport
            .on_transform_changed(map, &mut self.surface, center, zoom);
    }

    /// Called when the map needs a full redraw, before the paths are drawn again.
    ///
    /// Returns the bounds of the new frame in layer coordinates.
    pub fn on_redraw(&mut self, map: &dyn MapView) -> Box2D {
        let bounds = self.viewport.on_redraw(map, &mut self.surface);
        self.base.resize(map, &bounds);

        bounds
    }

    /// Draws a path with the base renderer, then decorates it.
    pub fn draw_path(&mut self, path: &ScreenPath, style: &PathStyle) -> DecorationStats {
        self.base.draw_path(path);
        self.decorator.decorate(path, style, &mut self.surface)
    }

    /// Returns whether `position` touches the path, if hit testing is enabled.
    pub fn hit_test(&self, path: &ScreenPath, position: Point) -> bool {
        self.decorator.hit_test(path, position)
    }
}
