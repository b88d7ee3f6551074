//! Bolt and backdrop geometry.

use std::fmt;

use thunder_graphics::{Density, Dp, EdgeInsets, Point, Rect, Size};

use crate::size::{Dimensions, SizeClass};

/// The six bolt control points, in dp, relative to the unscaled
/// 40x60 base bolt box. The closing edge runs from the last point back to
/// the first.
pub(crate) const BOLT_POINTS: [Point; 6] = [
    Point::new(35.0, 0.0),
    Point::new(0.0, 35.0),
    Point::new(17.5, 35.0),
    Point::new(5.0, 60.0),
    Point::new(40.0, 25.0),
    Point::new(22.5, 25.0),
];

const CORNER_RADIUS: Dp = Dp(5.0);

/// Positioned geometry for one frame of the indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct BoltLayout {
    /// Backdrop square, centered in the padding-adjusted box.
    pub backdrop: Rect,
    /// Bolt bounding box, centered inside the backdrop.
    pub bolt_bounds: Rect,
    /// Bolt polygon, already scaled and translated into `bolt_bounds`.
    pub bolt_path: [Point; 6],
    /// Backdrop corner radius in surface pixels.
    pub corner_radius: f32,
}

/// The one domain error: the host box cannot fit the backdrop.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutError {
    TooSmall { required: Size, available: Size },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooSmall {
                required,
                available,
            } => write!(
                f,
                "available box {}x{} is smaller than the minimum backdrop {}x{}",
                available.width, available.height, required.width, required.height
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Builds the backdrop bounds and the bolt polygon for the given box.
///
/// Pure function of its inputs; recompute whenever the size class, density,
/// box, or padding changes. Fails fast with [`LayoutError::TooSmall`] when
/// the padding-adjusted box cannot fit the backdrop on either axis.
pub fn compute_layout(
    size: SizeClass,
    density: Density,
    box_size: Size,
    padding: EdgeInsets,
) -> Result<BoltLayout, LayoutError> {
    let dims = Dimensions::derive(size, density);
    let avail_width = box_size.width - padding.horizontal();
    let avail_height = box_size.height - padding.vertical();
    if avail_width < dims.backdrop_side || avail_height < dims.backdrop_side {
        return Err(LayoutError::TooSmall {
            required: Size::new(dims.backdrop_side, dims.backdrop_side),
            available: Size::new(avail_width, avail_height),
        });
    }

    let backdrop = Rect::new(
        padding.left + (avail_width - dims.backdrop_side) / 2.0,
        padding.top + (avail_height - dims.backdrop_side) / 2.0,
        dims.backdrop_side,
        dims.backdrop_side,
    );
    let bolt_bounds = Rect::new(
        backdrop.x + (dims.backdrop_side - dims.bolt_width) / 2.0,
        backdrop.y + (dims.backdrop_side - dims.bolt_height) / 2.0,
        dims.bolt_width,
        dims.bolt_height,
    );

    let scale = size.factor() * density.factor();
    let mut bolt_path = BOLT_POINTS;
    for point in &mut bolt_path {
        point.x = bolt_bounds.x + point.x * scale;
        point.y = bolt_bounds.y + point.y * scale;
    }

    Ok(BoltLayout {
        backdrop,
        bolt_bounds,
        bolt_path,
        corner_radius: CORNER_RADIUS.to_px(density),
    })
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
