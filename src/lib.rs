#![deny(bare_trait_objects)]

//! Oriented symbols and labels along map paths.
//!
//! # Crates
//!
//! This meta-crate (`arrowpath`) reexports the following sub-crates for convenience:
//!
//! * **arrowpath_geom** - Screen-space points, segments and multi-ring paths.
//! * **arrowpath_algorithms** - Anchor stepping, arc-length midpoints, path length
//!   and hit testing.
//! * **arrowpath_render** - Drawing stamps and labels on a canvas-like surface and
//!   keeping that surface aligned with the map.
//!
//! Each `arrowpath_<name>` crate is reexported as a `<name>` module in `arrowpath`. For example:
//!
//! ```ignore
//! extern crate arrowpath_algorithms;
//! use arrowpath_algorithms::Stepper;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate arrowpath;
//! use arrowpath::algorithms::Stepper;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Anchors along a segment
//!
//! ```
//! use arrowpath::algorithms::Stepper;
//! use arrowpath::geom::LineSegment;
//! use arrowpath::math::point;
//!
//! // One anchor every 10 pixels, starting 3 pixels into the segment.
//! let stepper = Stepper::new(10.0, 0.3).unwrap();
//! let segment = LineSegment::new(point(0.0, 0.0), point(0.0, 25.0));
//!
//! let positions: Vec<_> = stepper.anchors(&segment).map(|anchor| anchor.position).collect();
//! assert_eq!(positions, vec![point(0.0, 3.0), point(0.0, 13.0), point(0.0, 23.0)]);
//! ```
//!
//! ## Decorating a path
//!
//! ```
//! use arrowpath::render::{DecorationConfig, GlyphStyle, PathDecorator, PathStyle, StampDescriptor};
//! use arrowpath::render::recording::RecordingSurface;
//! use arrowpath::geom::ScreenPath;
//! use arrowpath::math::point;
//!
//! let arrow = StampDescriptor::glyph("➤", GlyphStyle::default().with_font_size(12.0));
//! let config = DecorationConfig::symbol(arrow).with_label(GlyphStyle::default());
//! let decorator = PathDecorator::new(config).unwrap();
//!
//! let path = ScreenPath::polyline(vec![
//!     point(0.0, 0.0),
//!     point(40.0, 0.0),
//!     point(40.0, 40.0),
//! ]);
//!
//! let mut surface = RecordingSurface::new();
//! let stats = decorator.decorate(&path, &PathStyle::default().with_label("A1"), &mut surface);
//!
//! assert_eq!(stats.stamps, 8);
//! assert!(stats.label);
//! ```

pub extern crate arrowpath_algorithms;
pub extern crate arrowpath_geom;
pub extern crate arrowpath_render;

pub use arrowpath_algorithms as algorithms;
pub use arrowpath_geom as geom;
pub use arrowpath_render as render;

pub use crate::geom::math;
