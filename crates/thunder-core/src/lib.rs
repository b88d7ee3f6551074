//! Core widget logic for Thunder-RS
//!
//! A looping "scanning lightning bolt" loading indicator: a rounded-rect
//! backdrop, a bolt silhouette, and a second-colored copy of the silhouette
//! revealed top-to-bottom then retracted, with a pause between cycles.
//!
//! The pieces are deliberately separable: [`compute_layout`] derives all
//! geometry from a [`SizeClass`], [`advance`] is the pure tick transition
//! over a [`RevealWindow`], and [`LoadingView`] wires them to a host through
//! the [`TickScheduler`] and [`Canvas`] seams.

mod animator;
mod geometry;
mod render;
mod scheduler;
mod size;
mod view;

pub use animator::*;
pub use geometry::*;
pub use render::*;
pub use scheduler::*;
pub use size::*;
pub use view::*;

pub mod prelude {
    pub use crate::animator::{advance, NextTick, RevealWindow, ScanAnimator, CYCLE_PAUSE};
    pub use crate::geometry::{compute_layout, BoltLayout, LayoutError};
    pub use crate::render::{Canvas, LoadingStyle, RecordingCanvas};
    pub use crate::scheduler::TickScheduler;
    pub use crate::size::{Dimensions, SizeClass};
    pub use crate::view::{LoadingConfig, LoadingView, MeasureSpec};
}
