//! A surface that records drawing commands instead of rasterizing them.
//!
//! [`RecordingSurface`] is useful to inspect what a decoration pass would draw,
//! to replay it on another backend, and in tests. Besides the raw command list it
//! tracks the current transform so that the device-space position of every
//! placed stamp is known.

use crate::math::{Angle, Box2D, Point, Size, Transform, Vector};
use crate::stamp::ImageId;
use crate::surface::{BufferSize, Surface, SurfaceLayer, TextAlign, TextBaseline};
use crate::Color;

/// A call made on a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate(Vector),
    Rotate(Angle),
    Scale(f32, f32),
    SetGlobalAlpha(f32),
    SetFont { size: f32, family: String },
    SetFillColor(Color),
    SetLineWidth(f32),
    SetTextAlign(TextAlign),
    SetTextBaseline(TextBaseline),
    FillText { text: String, at: Point },
    DrawImage { image: ImageId, src: Box2D, dst: Box2D },
    SetBufferSize(BufferSize),
    SetPosition(Point),
    SetTransform { offset: Point, scale: f32 },
    SetDisplaySize(Size),
}

/// Where a glyph or an image ended up, in device space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacedStamp {
    pub position: Point,
    /// The rotation of the stamp's local frame.
    pub angle: Angle,
}

/// A [`Surface`] and [`SurfaceLayer`] that records everything it is asked to do.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    transform: Transform,
    stack: Vec<Transform>,
    placed: Vec<PlacedStamp>,
    text_count: usize,
    image_count: usize,
    buffer_size: BufferSize,
    position: Option<Point>,
    layer_transform: Option<(Point, f32)>,
    display_size: Option<Size>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface {
            commands: Vec::new(),
            transform: Transform::identity(),
            stack: Vec::new(),
            placed: Vec::new(),
            text_count: 0,
            image_count: 0,
            buffer_size: BufferSize::zero(),
            position: None,
            layer_transform: None,
            display_size: None,
        }
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of `save` calls not matched by a `restore` yet.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The transform that currently applies to drawing operations.
    pub fn current_transform(&self) -> &Transform {
        &self.transform
    }

    /// Number of `fill_text` calls since the last buffer resize.
    pub fn text_count(&self) -> usize {
        self.text_count
    }

    /// Number of `draw_image` calls since the last buffer resize.
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// The device-space placement of every glyph and image drawn since the last
    /// buffer resize.
    pub fn placed(&self) -> &[PlacedStamp] {
        &self.placed
    }

    /// The last position given to [`SurfaceLayer::set_position`], if it was not
    /// overridden by a transform since.
    pub fn layer_position(&self) -> Option<Point> {
        self.position
    }

    /// The last offset and scale given to [`SurfaceLayer::set_transform`], if
    /// it was not overridden by a position since.
    pub fn layer_transform(&self) -> Option<(Point, f32)> {
        self.layer_transform
    }

    pub fn display_size(&self) -> Option<Size> {
        self.display_size
    }

    fn place(&mut self, at: Point) {
        let position = self.transform.transform_point(at);
        let x_axis = self.transform.transform_vector(Vector::new(1.0, 0.0));
        self.placed.push(PlacedStamp {
            position,
            angle: x_axis.angle_from_x_axis(),
        });
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        RecordingSurface::new()
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.stack.push(self.transform);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Like on a canvas, an unbalanced restore is a no-op.
        if let Some(transform) = self.stack.pop() {
            self.transform = transform;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, by: Vector) {
        self.transform = self.transform.pre_translate(by);
        self.commands.push(DrawCommand::Translate(by));
    }

    fn rotate(&mut self, angle: Angle) {
        self.transform = self.transform.pre_rotate(angle);
        self.commands.push(DrawCommand::Rotate(angle));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.pre_scale(sx, sy);
        self.commands.push(DrawCommand::Scale(sx, sy));
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.commands.push(DrawCommand::SetGlobalAlpha(alpha));
    }

    fn set_font(&mut self, size: f32, family: &str) {
        self.commands.push(DrawCommand::SetFont {
            size,
            family: family.to_string(),
        });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::SetTextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.commands.push(DrawCommand::SetTextBaseline(baseline));
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        self.place(at);
        self.text_count += 1;
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
        });
    }

    fn draw_image(&mut self, image: ImageId, src: &Box2D, dst: &Box2D) {
        self.place(dst.min);
        self.image_count += 1;
        self.commands.push(DrawCommand::DrawImage {
            image,
            src: *src,
            dst: *dst,
        });
    }

    fn set_buffer_size(&mut self, size: BufferSize) {
        self.buffer_size = size;
        self.transform = Transform::identity();
        self.stack.clear();
        self.placed.clear();
        self.text_count = 0;
        self.image_count = 0;
        self.commands.push(DrawCommand::SetBufferSize(size));
    }

    fn buffer_size(&self) -> BufferSize {
        self.buffer_size
    }
}

impl SurfaceLayer for RecordingSurface {
    fn set_position(&mut self, position: Point) {
        self.position = Some(position);
        self.layer_transform = None;
        self.commands.push(DrawCommand::SetPosition(position));
    }

    fn set_transform(&mut self, offset: Point, scale: f32) {
        self.position = None;
        self.layer_transform = Some((offset, scale));
        self.commands.push(DrawCommand::SetTransform { offset, scale });
    }

    fn set_display_size(&mut self, size: Size) {
        self.display_size = Some(size);
        self.commands.push(DrawCommand::SetDisplaySize(size));
    }
}
