#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Screen-space geometric primitives on top of euclid.
//!
//! This crate is reexported in [arrowpath](https://docs.rs/arrowpath/).
//!
//! # Overview
//!
//! Everything here lives in device pixel space: the host map projects its
//! geographic paths into screen coordinates on every redraw and hands them over
//! as a [`ScreenPath`], an ordered set of point rings.
//!
//! - [`LineSegment`] is a directional pair of points with the usual length,
//!   tangent and distance queries.
//! - [`ScreenPath`] stores one or more rings and iterates over their segments.
//! - The [`math`] module contains the `f32` aliases of the euclid types used by
//!   all arrowpath crates.

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod line;
mod path;

#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::path::{Ring, ScreenPath, Segments};

pub mod math {
    //! f32 version of the euclid types used everywhere. The other arrowpath
    //! crates reexport them.

    use crate::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Size2D<f32>```.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Alias for ```euclid::default::Transform2D<f32>```
    pub type Transform = euclid::default::Transform2D<f32>;

    /// An angle in radians (f32).
    pub type Angle = euclid::Angle<f32>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(w, h)`.
    #[inline]
    pub fn size(w: f32, h: f32) -> Size {
        Size::new(w, h)
    }
}

pub use crate::math::{point, size, vector};
