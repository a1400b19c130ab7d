//! The drawing surface abstraction.
//!
//! [`Surface`] mirrors the subset of a 2D canvas context that the decoration
//! code needs. It is stateful in the same way a canvas context is: transforms and
//! styles accumulate until they are rolled back with [`Surface::restore`].
//! [`SurfaceState`] makes sure every `save` gets its `restore`.

use crate::math::{Angle, Box2D, Point, Size, Vector};
use crate::stamp::ImageId;
use crate::Color;

use core::ops::{Deref, DerefMut};

/// Size of a surface's backing buffer in device pixels.
pub type BufferSize = crate::geom::euclid::default::Size2D<u32>;

/// Horizontal alignment of text relative to the position passed to
/// [`Surface::fill_text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// Vertical alignment of text relative to the position passed to
/// [`Surface::fill_text`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

/// A 2D raster drawing context.
///
/// Transformations compose like they do on an HTML canvas: each call applies to
/// the coordinates of the drawing operations that follow it.
pub trait Surface {
    /// Pushes the current transform and style state on a stack.
    fn save(&mut self);

    /// Pops the state pushed by the last [`save`](Surface::save).
    fn restore(&mut self);

    fn translate(&mut self, by: Vector);

    fn rotate(&mut self, angle: Angle);

    fn scale(&mut self, sx: f32, sy: f32);

    fn set_global_alpha(&mut self, alpha: f32);

    fn set_font(&mut self, size: f32, family: &str);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn fill_text(&mut self, text: &str, at: Point);

    /// Draws the `src` rectangle of an image into the `dst` rectangle.
    fn draw_image(&mut self, image: ImageId, src: &Box2D, dst: &Box2D);

    /// Resizes the backing buffer.
    ///
    /// This clears the surface and resets its state, transform included.
    fn set_buffer_size(&mut self, size: BufferSize);

    fn buffer_size(&self) -> BufferSize;
}

/// The element holding a surface, positioned over the host map.
pub trait SurfaceLayer {
    /// Moves the element's top-left corner to `position`, removing any scale.
    fn set_position(&mut self, position: Point);

    /// Moves the element's top-left corner to `offset` and scales it by `scale`.
    fn set_transform(&mut self, offset: Point, scale: f32);

    /// Sets the size at which the element is displayed, in logical pixels.
    fn set_display_size(&mut self, size: Size);
}

/// Saves the state of a surface and restores it when dropped.
///
/// Dereferences to the surface, so drawing happens through the guard:
///
/// ```
/// use arrowpath_render::surface::SurfaceState;
/// use arrowpath_render::recording::RecordingSurface;
/// use arrowpath_render::math::vector;
/// use arrowpath_render::Surface;
///
/// let mut surface = RecordingSurface::new();
/// {
///     let mut state = SurfaceState::new(&mut surface);
///     state.translate(vector(10.0, 10.0));
/// }
/// assert_eq!(surface.depth(), 0);
/// ```
pub struct SurfaceState<'l, S: Surface + ?Sized> {
    surface: &'l mut S,
}

impl<'l, S: Surface + ?Sized> SurfaceState<'l, S> {
    pub fn new(surface: &'l mut S) -> Self {
        surface.save();
        SurfaceState { surface }
    }
}

impl<'l, S: Surface + ?Sized> Deref for SurfaceState<'l, S> {
    type Target = S;
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<'l, S: Surface + ?Sized> DerefMut for SurfaceState<'l, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<'l, S: Surface + ?Sized> Drop for SurfaceState<'l, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

#[test]
fn restores_on_early_exit() {
    use crate::math::vector;
    use crate::recording::{DrawCommand, RecordingSurface};

    fn draw(surface: &mut dyn Surface, bail: bool) -> Option<()> {
        let mut state = SurfaceState::new(surface);
        state.translate(vector(1.0, 2.0));
        if bail {
            return None;
        }
        state.scale(2.0, 2.0);
        Some(())
    }

    let mut surface = RecordingSurface::new();
    assert!(draw(&mut surface, true).is_none());
    assert!(draw(&mut surface, false).is_some());

    assert_eq!(surface.depth(), 0);
    assert_eq!(
        surface.commands(),
        &[
            DrawCommand::Save,
            DrawCommand::Translate(vector(1.0, 2.0)),
            DrawCommand::Restore,
            DrawCommand::Save,
            DrawCommand::Translate(vector(1.0, 2.0)),
            DrawCommand::Scale(2.0, 2.0),
            DrawCommand::Restore,
        ][..]
    );
}
