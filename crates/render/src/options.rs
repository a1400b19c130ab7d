use crate::algorithms::step::{check_phase_offset, check_step_size};
use crate::math::{Angle, Vector};
use crate::stamp::{GlyphStyle, StampDescriptor};
use crate::InvalidConfiguration;

use core::marker::PhantomData;

/// Parameters for the placement of the stamps along a path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PlacementOptions {
    /// Distance in pixels between two consecutive stamps.
    ///
    /// Must be greater than zero.
    /// Default value: `PlacementOptions::DEFAULT_STEP_SIZE`.
    pub step_size: f32,

    /// Position of the first stamp of each segment, as a fraction of `step_size`.
    ///
    /// Must be in `[0, 1)`.
    /// Default value: `PlacementOptions::DEFAULT_PHASE_OFFSET`.
    pub phase_offset: f32,

    /// Added to the tangent angle of every stamp.
    ///
    /// Default value: zero.
    pub rotation_bias: Angle,

    /// Moves every stamp by this amount, in pixels.
    ///
    /// Default value: zero.
    pub anchor_offset: Vector,

    /// Pixels trimmed from each side of image stamps.
    ///
    /// Must be greater than or equal to zero.
    /// Default value: zero.
    pub image_clip_inset: f32,

    /// Default value: `true`.
    pub rotate_glyphs: bool,

    /// Default value: `true`.
    pub rotate_images: bool,

    /// Whether `PathDecorator::hit_test` reports hits.
    ///
    /// Default value: `false`.
    pub enable_hit_testing: bool,

    /// Maximum distance in pixels between a position and a path for it to be hit.
    ///
    /// Default value: `PlacementOptions::DEFAULT_HIT_TOLERANCE`.
    pub hit_tolerance: f32,
}

impl PlacementOptions {
    pub const DEFAULT_STEP_SIZE: f32 = 10.0;
    pub const DEFAULT_PHASE_OFFSET: f32 = 0.3;
    pub const DEFAULT_HIT_TOLERANCE: f32 = 3.0;

    pub const DEFAULT: Self = PlacementOptions {
        step_size: Self::DEFAULT_STEP_SIZE,
        phase_offset: Self::DEFAULT_PHASE_OFFSET,
        rotation_bias: Angle { radians: 0.0 },
        anchor_offset: Vector {
            x: 0.0,
            y: 0.0,
            _unit: PhantomData,
        },
        image_clip_inset: 0.0,
        rotate_glyphs: true,
        rotate_images: true,
        enable_hit_testing: false,
        hit_tolerance: Self::DEFAULT_HIT_TOLERANCE,
    };

    #[inline]
    pub fn step_size(step_size: f32) -> Self {
        Self::DEFAULT.with_step_size(step_size)
    }

    #[inline]
    pub const fn with_step_size(mut self, step_size: f32) -> Self {
        self.step_size = step_size;
        self
    }

    #[inline]
    pub const fn with_phase_offset(mut self, phase_offset: f32) -> Self {
        self.phase_offset = phase_offset;
        self
    }

    #[inline]
    pub const fn with_rotation_bias(mut self, bias: Angle) -> Self {
        self.rotation_bias = bias;
        self
    }

    #[inline]
    pub const fn with_anchor_offset(mut self, offset: Vector) -> Self {
        self.anchor_offset = offset;
        self
    }

    #[inline]
    pub const fn with_image_clip_inset(mut self, inset: f32) -> Self {
        self.image_clip_inset = inset;
        self
    }

    #[inline]
    pub const fn with_rotate_glyphs(mut self, rotate: bool) -> Self {
        self.rotate_glyphs = rotate;
        self
    }

    #[inline]
    pub const fn with_rotate_images(mut self, rotate: bool) -> Self {
        self.rotate_images = rotate;
        self
    }

    #[inline]
    pub const fn with_hit_testing(mut self, enabled: bool) -> Self {
        self.enable_hit_testing = enabled;
        self
    }

    #[inline]
    pub const fn with_hit_tolerance(mut self, tolerance: f32) -> Self {
        self.hit_tolerance = tolerance;
        self
    }

    /// Checks that every parameter is in its valid range.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        check_step_size(self.step_size)?;
        check_phase_offset(self.phase_offset)?;
        if !(self.image_clip_inset >= 0.0) {
            return Err(InvalidConfiguration::ClipInset(self.image_clip_inset));
        }

        Ok(())
    }
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything a [`PathDecorator`](crate::PathDecorator) draws, and how.
///
/// The configuration is read-only while decorating. It can be replaced as a
/// whole between two redraws.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationConfig {
    pub placement: PlacementOptions,
    /// The stamp repeated along paths.
    pub symbol: Option<StampDescriptor>,
    /// The style of the label drawn at the middle of paths that have one.
    pub label: Option<GlyphStyle>,
}

impl DecorationConfig {
    /// Repeats `symbol` along paths with the default placement options.
    pub fn symbol(symbol: StampDescriptor) -> Self {
        DecorationConfig {
            placement: PlacementOptions::DEFAULT,
            symbol: Some(symbol),
            label: None,
        }
    }

    /// Only draws labels, in the given style.
    pub fn label(style: GlyphStyle) -> Self {
        DecorationConfig {
            placement: PlacementOptions::DEFAULT,
            symbol: None,
            label: Some(style),
        }
    }

    #[inline]
    pub fn with_placement(mut self, placement: PlacementOptions) -> Self {
        self.placement = placement;
        self
    }

    #[inline]
    pub fn with_label(mut self, style: GlyphStyle) -> Self {
        self.label = Some(style);
        self
    }

    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.symbol.is_none() && self.label.is_none() {
            return Err(InvalidConfiguration::MissingStamp);
        }

        self.placement.validate()
    }
}

/// Per-path values, passed along with each path rather than stored in the
/// shared configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PathStyle<'l> {
    /// Overrides the line width of glyph stamps and labels for this path.
    pub line_width: Option<f32>,
    /// Text of the label drawn at the middle of the path.
    pub label: Option<&'l str>,
}

impl<'l> PathStyle<'l> {
    #[inline]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    #[inline]
    pub fn with_label(mut self, label: &'l str) -> Self {
        self.label = Some(label);
        self
    }
}

#[test]
fn validate_placement() {
    assert_eq!(PlacementOptions::DEFAULT.validate(), Ok(()));
    assert_eq!(PlacementOptions::default(), PlacementOptions::DEFAULT);

    assert_eq!(
        PlacementOptions::step_size(0.0).validate(),
        Err(InvalidConfiguration::StepSize(0.0))
    );
    assert_eq!(
        PlacementOptions::step_size(-3.0).validate(),
        Err(InvalidConfiguration::StepSize(-3.0))
    );
    assert_eq!(
        PlacementOptions::DEFAULT.with_phase_offset(1.2).validate(),
        Err(InvalidConfiguration::PhaseOffset(1.2))
    );
    assert_eq!(
        PlacementOptions::DEFAULT.with_image_clip_inset(-1.0).validate(),
        Err(InvalidConfiguration::ClipInset(-1.0))
    );
    assert_eq!(PlacementOptions::step_size(0.01).validate(), Ok(()));
}

#[test]
fn validate_config() {
    let config = DecorationConfig {
        placement: PlacementOptions::DEFAULT,
        symbol: None,
        label: None,
    };
    assert_eq!(config.validate(), Err(InvalidConfiguration::MissingStamp));

    let config = config.with_label(GlyphStyle::default());
    assert_eq!(config.validate(), Ok(()));

    let config = DecorationConfig::symbol(StampDescriptor::glyph(">", GlyphStyle::default()))
        .with_placement(PlacementOptions::step_size(-1.0));
    assert_eq!(config.validate(), Err(InvalidConfiguration::StepSize(-1.0)));
}
