//! Recorded draw primitives.

use crate::color::Color;
use crate::geometry::{CornerRadii, Point, Rect};

/// A paint operation emitted by a headless canvas back end.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    RoundRect {
        rect: Rect,
        radii: CornerRadii,
        color: Color,
    },
    Path {
        points: Vec<Point>,
        color: Color,
    },
    /// Restricts subsequent primitives to `rect`.
    ClipRect {
        rect: Rect,
    },
}
