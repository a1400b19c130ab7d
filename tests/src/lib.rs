//! End to end tests driving the renderer the way a host map does.

use arrowpath::geom::ScreenPath;
use arrowpath::math::{point, size, vector, Angle, Box2D, Point, Size};
use arrowpath::render::recording::{DrawCommand, RecordingSurface};
use arrowpath::render::surface::BufferSize;
use arrowpath::render::{
    ArrowPathRenderer, BaseRenderer, Bitmap, DecorationConfig, GlyphStyle, ImageId, LatLng,
    MapView, PathStyle, PlacementOptions, StampDescriptor, Surface,
};

/// A spherical-mercator-like map without the latitude distortion.
pub struct FakeMap {
    pub zoom: f32,
    pub center: LatLng,
    pub size: Size,
    pub pixel_origin: Point,
    pub ratio: f32,
}

impl FakeMap {
    pub fn new(zoom: f32) -> Self {
        FakeMap {
            zoom,
            center: LatLng::new(0.0, 0.0),
            size: size(1000.0, 500.0),
            pixel_origin: point(0.0, 0.0),
            ratio: 1.0,
        }
    }

    /// Projects a geographic polyline into the current layer coordinates, the way
    /// the host does before drawing.
    pub fn project_path(&self, positions: &[LatLng]) -> ScreenPath {
        let points = positions
            .iter()
            .map(|p| self.project(*p, self.zoom) - self.pixel_origin.to_vector())
            .map(|p| p.round())
            .collect();

        ScreenPath::polyline(points)
    }
}

impl MapView for FakeMap {
    fn zoom(&self) -> f32 {
        self.zoom
    }

    fn center(&self) -> LatLng {
        self.center
    }

    fn size(&self) -> Size {
        self.size
    }

    fn zoom_scale(&self, to_zoom: f32, from_zoom: f32) -> f32 {
        (2.0f32).powf(to_zoom - from_zoom)
    }

    fn project(&self, position: LatLng, zoom: f32) -> Point {
        let scale = 256.0 / 360.0 * (2.0f64).powf(zoom as f64);
        point(
            (position.lng * scale) as f32,
            (-position.lat * scale) as f32,
        )
    }

    fn container_point_to_layer_point(&self, position: Point) -> Point {
        position + self.pixel_origin.to_vector()
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio
    }
}

/// Counts the calls it receives.
#[derive(Default)]
pub struct CountingRenderer {
    pub paths: usize,
    pub transforms: usize,
    pub resizes: Vec<Box2D>,
}

impl BaseRenderer for CountingRenderer {
    fn draw_path(&mut self, _path: &ScreenPath) {
        self.paths += 1;
    }

    fn update_transform(&mut self, _map: &dyn MapView, _center: LatLng, _zoom: f32) {
        self.transforms += 1;
    }

    fn resize(&mut self, _map: &dyn MapView, bounds: &Box2D) {
        self.resizes.push(*bounds);
    }
}

type Renderer = ArrowPathRenderer<CountingRenderer, RecordingSurface>;

fn arrows(placement: PlacementOptions) -> DecorationConfig {
    DecorationConfig::symbol(StampDescriptor::glyph("➤", GlyphStyle::default()))
        .with_placement(placement)
}

fn renderer(config: DecorationConfig) -> Renderer {
    ArrowPathRenderer::new(
        CountingRenderer::default(),
        RecordingSurface::new(),
        config,
    )
    .unwrap()
}

fn fill_text_count(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|cmd| matches!(cmd, DrawCommand::FillText { .. }))
        .count()
}

#[test]
fn redraw_cycle() {
    let mut map = FakeMap::new(2.0);
    let mut renderer = renderer(arrows(PlacementOptions::step_size(10.0)));

    let route = [LatLng::new(0.0, 0.0), LatLng::new(0.0, 90.0)];

    // First frame: 256 pixels long at zoom 2.
    renderer.on_redraw(&map);
    let stats = renderer.draw_path(&map.project_path(&route), &PathStyle::default());
    assert_eq!(stats.stamps, 26);
    assert_eq!(renderer.surface().text_count(), 26);

    // Zoom animation, the surface follows without redrawing.
    for step in 1..=4 {
        let zoom = 2.0 + step as f32 * 0.25;
        renderer.on_transform_changed(&map, map.center, zoom);
    }
    let (_, scale) = renderer.surface().layer_transform().unwrap();
    assert_eq!(scale, map.zoom_scale(3.0, 2.0));
    assert_eq!(renderer.surface().text_count(), 26);

    // Second frame: the buffer is cleared and the path is twice as long.
    map.zoom = 3.0;
    renderer.on_redraw(&map);
    assert_eq!(renderer.surface().text_count(), 0);
    let stats = renderer.draw_path(&map.project_path(&route), &PathStyle::default());
    assert_eq!(stats.stamps, 51);

    let base = renderer.base();
    assert_eq!(base.paths, 2);
    assert_eq!(base.transforms, 4);
    assert_eq!(base.resizes.len(), 2);
}

#[test]
fn high_density_buffer() {
    let mut map = FakeMap::new(1.0);
    map.ratio = 2.0;
    let mut renderer = renderer(arrows(PlacementOptions::DEFAULT));

    let bounds = renderer.on_redraw(&map);

    assert_eq!(bounds.size(), size(1200.0, 600.0));
    assert_eq!(
        renderer.surface().buffer_size(),
        BufferSize::new(2400, 1200)
    );

    // Drawing happens in layer coordinates: a stamp at the top left corner of
    // the padded bounds lands on the first device pixel.
    let path = ScreenPath::polyline(vec![bounds.min, bounds.min + vector(5.0, 0.0)]);
    let stats = renderer.draw_path(
        &path,
        &PathStyle::default(),
    );
    assert_eq!(stats.stamps, 1);
    let stamp = renderer.surface().placed()[0];
    assert_eq!(stamp.position, point(6.0, 0.0));
}

#[test]
fn pan_keeps_the_decoration_on_the_path() {
    let mut map = FakeMap::new(4.0);
    map.pixel_origin = point(300.0, 100.0);
    let mut renderer = renderer(arrows(PlacementOptions::DEFAULT));
    let bounds = renderer.on_redraw(&map);

    // Pan so that the map content moves by (-45, 0) pixels.
    let east = LatLng::new(0.0, 45.0 * 360.0 / (256.0 * 16.0));
    renderer.on_transform_changed(&map, east, 4.0);

    let transform = renderer.viewport().transform();
    assert_eq!(transform.scale, 1.0);
    assert!((transform.translate - (bounds.min - vector(45.0, 0.0))).length() < 1e-3);
}

#[test]
fn mixed_symbols_and_labels() {
    let map = FakeMap::new(0.0);
    let config = DecorationConfig::symbol(StampDescriptor::image(Bitmap::ready(
        ImageId(7),
        size(12.0, 12.0),
    )))
    .with_placement(
        PlacementOptions::step_size(25.0)
            .with_phase_offset(0.0)
            .with_image_clip_inset(1.0)
            .with_rotation_bias(Angle::frac_pi_2()),
    )
    .with_label(GlyphStyle::default().with_font_size(10.0));
    let mut renderer = renderer(config);
    renderer.on_redraw(&map);

    let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(100.0, 0.0), point(100.0, 50.0)]);
    let stats = renderer.draw_path(&path, &PathStyle::default().with_label("N7"));

    assert_eq!(stats.stamps, 5 + 3);
    assert!(stats.label);
    assert_eq!(renderer.surface().image_count(), 8);
    assert_eq!(fill_text_count(renderer.surface().commands()), 1);
    assert_eq!(renderer.surface().depth(), 0);

    let label_at = renderer
        .surface()
        .commands()
        .iter()
        .rev()
        .find_map(|cmd| match cmd {
            DrawCommand::Translate(v) => Some(*v),
            _ => None,
        })
        .unwrap();
    assert_eq!(label_at, vector(75.0, 0.0));
}

#[test]
fn images_loading_later() {
    let map = FakeMap::new(0.0);
    let mut renderer = renderer(DecorationConfig::symbol(StampDescriptor::image(
        Bitmap::pending(ImageId(1)),
    )));
    renderer.on_redraw(&map);

    let path = ScreenPath::polyline(vec![point(0.0, 0.0), point(50.0, 0.0)]);
    let stats = renderer.draw_path(&path, &PathStyle::default());
    assert_eq!(stats.stamps, 0);
    assert_eq!(stats.skipped, 5);

    // Once decoded, the next redraw picks it up.
    renderer
        .set_config(DecorationConfig::symbol(StampDescriptor::image(
            Bitmap::ready(ImageId(1), size(8.0, 8.0)),
        )))
        .unwrap();
    renderer.on_redraw(&map);
    let stats = renderer.draw_path(&path, &PathStyle::default());
    assert_eq!(stats.stamps, 5);
    assert_eq!(stats.skipped, 0);
}
