//! Pure math/data for drawing & units in Thunder-RS
//!
//! This crate contains the geometry primitives, color values, unit types,
//! and recorded draw primitives shared by the Thunder-RS crates. It has no
//! dependencies and no hidden state.

mod color;
mod draw;
mod geometry;
mod unit;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::DrawPrimitive;
    pub use crate::geometry::{CornerRadii, EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Density, Dp};
}
