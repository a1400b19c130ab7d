#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Placement algorithms for symbols along screen-space paths.
//!
//! This crate is reexported in [arrowpath](https://docs.rs/arrowpath/).
//!
//! - [`step`] enumerates evenly spaced, oriented anchors along a segment.
//! - [`centroid`] finds the arc-length midpoint of a polyline.
//! - [`length`] measures polylines.
//! - [`hit_test`] tells whether a position touches a path.

pub extern crate arrowpath_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

pub mod centroid;
mod error;
pub mod length;
pub mod step;

pub use crate::error::InvalidConfiguration;
pub use crate::geom::math;
pub use crate::step::{generate_anchors, Anchor, Anchors, Stepper};
