//! Turtle-drawn radial circle motifs, and a tiny console calculator.
//!
//! This crate contains two unrelated toys that happen to share a repo:
//! a turtle-graphics generator that draws looping circle motifs with the
//! stroke color cycling around the hue wheel (optionally roughed up with a
//! little random jitter), and a menu-driven arithmetic calculator for the
//! console. The motif side produces plotter-ready SVG files; the calculator
//! side produces nothing but nostalgia.

/// Extensions/Traits for geo_types geometry, plus SVG arrangement helpers.
pub mod geo_types;

/// Turtle graphics implementation, with arc drawing for circle motifs.
pub mod turtle;

/// Hue cycling, HSV conversion and per-channel color jitter.
pub mod color;

/// The radial motif generator itself.
pub mod motif;

/// Menu-driven arithmetic dispatcher for the console.
pub mod calc;

/// A canvas-style drawing context that renders to SVG.
pub mod context;

pub mod errors;

/// Make your life easy! Just import prelude::* and ignore all the warnings!
pub mod prelude {
    pub use crate::calc::{Dispatcher, Selection, Variant};
    pub use crate::color::JitterRange;
    pub use crate::context::Context;
    pub use crate::geo_types::svg::{Arrangement, ToSvg};
    pub use crate::geo_types::PointDistance;
    pub use crate::motif::{Band, MotifConfig};
    pub use crate::turtle::{degrees, Turtle, TurtleTrait};
}
