#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Symbol decoration of map paths.
//!
//! This crate is reexported in [arrowpath](https://docs.rs/arrowpath/).
//!
//! # Overview
//!
//! A host map renders its paths (polylines and polygons) on a canvas-like
//! surface. This crate draws on an auxiliary surface laid over it:
//!
//! - repeated, oriented stamps (a glyph or an image) every `step_size` pixels
//!   along each path, see [`decorate`],
//! - optionally, a single label at the arc-length midpoint of each path.
//!
//! It also keeps the auxiliary surface aligned with the map while the user pans
//! and zooms, see [`viewport`].
//!
//! The host plugs in through a handful of traits: [`Surface`] (the 2D drawing
//! context), [`SurfaceLayer`] (the element that holds it), [`MapView`] (the
//! projection and viewport state) and [`BaseRenderer`] (the renderer drawing the
//! paths themselves). [`ArrowPathRenderer`] ties everything together.
//!
//! # Error handling
//!
//! Configuration errors are reported when the configuration is set up. Errors
//! affecting a single stamp (for example an image that is not decoded yet) only
//! skip that stamp: the rest of the decoration pass goes on, and the next redraw
//! naturally tries again.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. No logger is
//! installed by this crate.

pub extern crate arrowpath_algorithms as algorithms;
pub extern crate peniko;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod decorate;
mod error;
mod options;
pub mod recording;
pub mod renderer;
pub mod stamp;
pub mod surface;
pub mod viewport;

pub use crate::algorithms::geom;
pub use crate::algorithms::math;
pub use crate::algorithms::InvalidConfiguration;

#[doc(inline)]
pub use crate::decorate::{DecorationStats, PathDecorator};
pub use crate::error::DecorationError;
pub use crate::options::{DecorationConfig, PathStyle, PlacementOptions};
#[doc(inline)]
pub use crate::renderer::{ArrowPathRenderer, BaseRenderer};
#[doc(inline)]
pub use crate::stamp::{Bitmap, GlyphStyle, ImageId, StampDescriptor};
#[doc(inline)]
pub use crate::surface::{Surface, SurfaceLayer, SurfaceState, TextAlign, TextBaseline};
#[doc(inline)]
pub use crate::viewport::{LatLng, MapView, ViewportSynchronizer, ViewportTransform};

pub use peniko::Color;
