//! Frame composition for the indicator.

use thunder_graphics::{Color, CornerRadii, DrawPrimitive, Point, Rect};

use crate::animator::RevealWindow;
use crate::geometry::BoltLayout;

/// Colors for the three painted layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingStyle {
    pub backdrop_color: Color,
    pub bolt_color: Color,
    pub cover_color: Color,
}

impl Default for LoadingStyle {
    fn default() -> Self {
        Self {
            backdrop_color: Color::WHITE,
            bolt_color: Color(0xFFF9_6C0E),
            cover_color: Color(0xFF2D_6DE1),
        }
    }
}

/// Drawing capabilities the indicator needs from a surface.
pub trait Canvas {
    fn fill_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color);
    fn fill_path(&mut self, points: &[Point], color: Color);
    /// Restricts subsequent drawing to `rect`.
    fn clip_rect(&mut self, rect: Rect);
}

/// Paints one frame: backdrop, base bolt, then the bolt again in the cover
/// color with drawing restricted to the reveal band. The order is
/// load-bearing.
pub fn render(
    layout: &BoltLayout,
    window: RevealWindow,
    style: &LoadingStyle,
    canvas: &mut dyn Canvas,
) {
    canvas.fill_round_rect(
        layout.backdrop,
        CornerRadii::uniform(layout.corner_radius),
        style.backdrop_color,
    );
    canvas.fill_path(&layout.bolt_path, style.bolt_color);
    let band = Rect::new(
        layout.bolt_bounds.x,
        layout.bolt_bounds.y + window.top,
        layout.bolt_bounds.width,
        (window.bottom - window.top).max(0.0),
    );
    canvas.clip_rect(band);
    canvas.fill_path(&layout.bolt_path, style.cover_color);
}

/// Canvas that records primitives in submission order, for headless tests
/// and debugging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingCanvas {
    operations: Vec<DrawPrimitive>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded operations in submission order.
    pub fn operations(&self) -> &[DrawPrimitive] {
        &self.operations
    }

    /// Consumes the canvas and yields the owned operations.
    pub fn into_operations(self) -> Vec<DrawPrimitive> {
        self.operations
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn fill_round_rect(&mut self, rect: Rect, radii: CornerRadii, color: Color) {
        self.operations
            .push(DrawPrimitive::RoundRect { rect, radii, color });
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.operations.push(DrawPrimitive::Path {
            points: points.to_vec(),
            color,
        });
    }

    fn clip_rect(&mut self, rect: Rect) {
        self.operations.push(DrawPrimitive::ClipRect { rect });
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
