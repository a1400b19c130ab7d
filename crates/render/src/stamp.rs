//! Drawing one oriented stamp.
//!
//! A stamp is drawn in a local frame: the surface origin is moved to the anchor
//! (plus the configured offset) and rotated by the anchor's angle, then the glyph
//! or image is drawn at the local origin. The surface state is restored
//! afterwards so that stamps never affect each other.

use crate::algorithms::Anchor;
use crate::math::{point, Angle, Box2D, Point, Size};
use crate::surface::{Surface, SurfaceState, TextAlign, TextBaseline};
use crate::{Color, DecorationError, PlacementOptions};

/// Identifies an image known to the host's surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ImageId(pub u32);

/// An image and, once it has been decoded, its natural size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bitmap {
    pub id: ImageId,
    /// `None` until the image is decoded.
    pub size: Option<Size>,
}

impl Bitmap {
    /// An image that is not decoded yet.
    pub fn pending(id: ImageId) -> Self {
        Bitmap { id, size: None }
    }

    /// A decoded image.
    pub fn ready(id: ImageId, size: Size) -> Self {
        Bitmap {
            id,
            size: Some(size),
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.size.is_some()
    }
}

/// Font and paint parameters of a glyph stamp.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphStyle {
    /// Font size in pixels.
    ///
    /// Default value: `GlyphStyle::DEFAULT_FONT_SIZE`.
    pub font_size: f32,

    /// Default value: `GlyphStyle::DEFAULT_FONT_FAMILY`.
    pub font_family: String,

    /// Default value: white.
    pub fill: Color,

    /// Can be overridden per path, see [`PathStyle`](crate::PathStyle).
    ///
    /// Default value: `GlyphStyle::DEFAULT_LINE_WIDTH`.
    pub line_width: f32,
}

impl GlyphStyle {
    pub const DEFAULT_FONT_SIZE: f32 = 14.0;
    pub const DEFAULT_FONT_FAMILY: &'static str = "'Helvetica Neue',Helvetica,Arial,sans-serif";
    pub const DEFAULT_LINE_WIDTH: f32 = 8.0;

    #[inline]
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    #[inline]
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = family.to_string();
        self
    }

    #[inline]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    #[inline]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        GlyphStyle {
            font_size: Self::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            fill: Color::WHITE,
            line_width: Self::DEFAULT_LINE_WIDTH,
        }
    }
}

/// What to draw at each anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum StampDescriptor {
    /// A piece of text, typically a single arrow-like character.
    Glyph { text: String, style: GlyphStyle },
    /// An image, trimmed by `PlacementOptions::image_clip_inset` on each side.
    Image { bitmap: Bitmap },
}

impl StampDescriptor {
    pub fn glyph(text: &str, style: GlyphStyle) -> Self {
        StampDescriptor::Glyph {
            text: text.to_string(),
            style,
        }
    }

    pub fn image(bitmap: Bitmap) -> Self {
        StampDescriptor::Image { bitmap }
    }
}

/// Draws one stamp at an anchor.
///
/// The anchor's angle is used as-is (the caller adds the rotation bias). Glyphs
/// and images are only rotated if `rotate_glyphs` and `rotate_images` are set,
/// respectively. `line_width` overrides the glyph style's line width.
///
/// Returns `DecorationError::AssetNotReady` without touching the surface if the
/// image of an image stamp is not decoded yet.
pub fn render_stamp<S: Surface + ?Sized>(
    surface: &mut S,
    anchor: &Anchor,
    descriptor: &StampDescriptor,
    options: &PlacementOptions,
    line_width: Option<f32>,
) -> Result<(), DecorationError> {
    let position = anchor.position + options.anchor_offset;

    match descriptor {
        StampDescriptor::Glyph { text, style } => {
            let angle = if options.rotate_glyphs {
                Some(anchor.angle)
            } else {
                None
            };
            render_glyph(surface, position, angle, text, style, line_width);
            Ok(())
        }
        StampDescriptor::Image { bitmap } => {
            let angle = if options.rotate_images {
                Some(anchor.angle)
            } else {
                None
            };
            render_image(surface, position, angle, bitmap, options.image_clip_inset)
        }
    }
}

/// Draws text centered on `position`, optionally rotated.
pub fn render_glyph<S: Surface + ?Sized>(
    surface: &mut S,
    position: Point,
    angle: Option<Angle>,
    text: &str,
    style: &GlyphStyle,
    line_width: Option<f32>,
) {
    let mut surface = SurfaceState::new(surface);

    surface.set_global_alpha(1.0);
    surface.set_font(style.font_size, &style.font_family);
    surface.set_fill_color(style.fill);
    surface.set_line_width(line_width.unwrap_or(style.line_width));
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);

    surface.translate(position.to_vector());
    if let Some(angle) = angle {
        surface.rotate(angle);
    }

    surface.fill_text(text, Point::origin());
}

/// Draws an image with its top-left corner at `position`, optionally rotated.
///
/// `clip_inset` pixels are trimmed from each side of the image.
pub fn render_image<S: Surface + ?Sized>(
    surface: &mut S,
    position: Point,
    angle: Option<Angle>,
    bitmap: &Bitmap,
    clip_inset: f32,
) -> Result<(), DecorationError> {
    let size = bitmap
        .size
        .ok_or(DecorationError::AssetNotReady(bitmap.id))?;

    let src = Box2D {
        min: point(clip_inset, clip_inset),
        max: point(size.width - clip_inset, size.height - clip_inset),
    };
    if src.is_empty() {
        log::debug!(
            "Image {:?} of size {:?} is entirely clipped by an inset of {}",
            bitmap.id,
            size,
            clip_inset
        );
        return Ok(());
    }
    let dst = Box2D::from_size(src.size());

    let mut surface = SurfaceState::new(surface);
    surface.translate(position.to_vector());
    if let Some(angle) = angle {
        surface.rotate(angle);
    }
    surface.draw_image(bitmap.id, &src, &dst);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{size, vector};
    use crate::recording::{DrawCommand, RecordingSurface};

    fn anchor(x: f32, y: f32, radians: f32) -> Anchor {
        Anchor::new(point(x, y), Angle::radians(radians))
    }

    #[test]
    fn glyph_frame() {
        let mut surface = RecordingSurface::new();
        let descriptor = StampDescriptor::glyph("➤", GlyphStyle::default());
        let options = PlacementOptions::DEFAULT.with_anchor_offset(vector(1.0, -2.0));

        render_stamp(&mut surface, &anchor(10.0, 20.0, 0.5), &descriptor, &options, None).unwrap();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::SetGlobalAlpha(1.0),
                DrawCommand::SetFont {
                    size: 14.0,
                    family: GlyphStyle::DEFAULT_FONT_FAMILY.to_string(),
                },
                DrawCommand::SetFillColor(Color::WHITE),
                DrawCommand::SetLineWidth(8.0),
                DrawCommand::SetTextAlign(TextAlign::Center),
                DrawCommand::SetTextBaseline(TextBaseline::Middle),
                DrawCommand::Translate(vector(11.0, 18.0)),
                DrawCommand::Rotate(Angle::radians(0.5)),
                DrawCommand::FillText {
                    text: "➤".to_string(),
                    at: point(0.0, 0.0),
                },
                DrawCommand::Restore,
            ][..]
        );
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn glyph_rotation_flag_and_line_width_override() {
        let mut surface = RecordingSurface::new();
        let descriptor = StampDescriptor::glyph("A", GlyphStyle::default().with_line_width(2.0));
        let options = PlacementOptions::DEFAULT.with_rotate_glyphs(false);

        render_stamp(&mut surface, &anchor(0.0, 0.0, 1.0), &descriptor, &options, Some(5.0)).unwrap();

        assert!(!surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Rotate(_))));
        assert!(surface.commands().contains(&DrawCommand::SetLineWidth(5.0)));
        assert!(!surface.commands().contains(&DrawCommand::SetLineWidth(2.0)));
    }

    #[test]
    fn image_clip() {
        let mut surface = RecordingSurface::new();
        let bitmap = Bitmap::ready(ImageId(7), size(32.0, 16.0));
        let descriptor = StampDescriptor::image(bitmap);
        let options = PlacementOptions::DEFAULT.with_image_clip_inset(2.0);

        render_stamp(&mut surface, &anchor(5.0, 5.0, 0.25), &descriptor, &options, None).unwrap();

        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate(vector(5.0, 5.0)),
                DrawCommand::Rotate(Angle::radians(0.25)),
                DrawCommand::DrawImage {
                    image: ImageId(7),
                    src: Box2D {
                        min: point(2.0, 2.0),
                        max: point(30.0, 14.0),
                    },
                    dst: Box2D {
                        min: point(0.0, 0.0),
                        max: point(28.0, 12.0),
                    },
                },
                DrawCommand::Restore,
            ][..]
        );
    }

    #[test]
    fn image_rotation_flag() {
        let mut surface = RecordingSurface::new();
        let descriptor = StampDescriptor::image(Bitmap::ready(ImageId(1), size(8.0, 8.0)));
        let options = PlacementOptions::DEFAULT.with_rotate_images(false);

        render_stamp(&mut surface, &anchor(5.0, 5.0, 0.25), &descriptor, &options, None).unwrap();

        assert_eq!(surface.image_count(), 1);
        assert!(!surface
            .commands()
            .iter()
            .any(|cmd| matches!(cmd, DrawCommand::Rotate(_))));
    }

    #[test]
    fn image_not_ready() {
        let mut surface = RecordingSurface::new();
        let descriptor = StampDescriptor::image(Bitmap::pending(ImageId(2)));

        let result = render_stamp(
            &mut surface,
            &anchor(5.0, 5.0, 0.0),
            &descriptor,
            &PlacementOptions::DEFAULT,
            None,
        );

        assert_eq!(result, Err(DecorationError::AssetNotReady(ImageId(2))));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn image_fully_clipped() {
        let mut surface = RecordingSurface::new();
        let descriptor = StampDescriptor::image(Bitmap::ready(ImageId(1), size(8.0, 8.0)));
        let options = PlacementOptions::DEFAULT.with_image_clip_inset(4.0);

        render_stamp(&mut surface, &anchor(0.0, 0.0, 0.0), &descriptor, &options, None).unwrap();

        assert!(surface.commands().is_empty());
    }
}
