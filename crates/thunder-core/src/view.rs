//! The loading-view component: configuration, lifecycle, and measurement.

use std::time::Duration;

use thunder_graphics::{Density, EdgeInsets, Size};

use crate::animator::{RevealWindow, ScanAnimator};
use crate::geometry::{compute_layout, BoltLayout, LayoutError};
use crate::render::{render, Canvas, LoadingStyle};
use crate::scheduler::TickScheduler;
use crate::size::{Dimensions, SizeClass};

/// Per-instance configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingConfig {
    pub size: SizeClass,
    pub style: LoadingStyle,
    pub density: Density,
}

/// Host-imposed bound on one measured axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The host dictates this exact extent.
    Exactly(f32),
    /// The desired extent, capped at this bound.
    AtMost(f32),
    /// The desired extent, unmodified.
    Unspecified,
}

impl MeasureSpec {
    /// Resolves the desired extent against this spec.
    pub fn resolve(self, desired: f32) -> f32 {
        match self {
            MeasureSpec::Exactly(extent) => extent,
            MeasureSpec::AtMost(bound) => desired.min(bound),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// The scanning-bolt loading indicator.
///
/// Generic over the host's tick scheduler: the view only ever asks its
/// scheduler for the next tick (or withdraws it); the host loop polls the
/// concrete scheduler and calls [`LoadingView::tick`] for each due
/// callback.
#[derive(Debug)]
pub struct LoadingView<S: TickScheduler> {
    config: LoadingConfig,
    dimensions: Dimensions,
    animator: ScanAnimator,
    scheduler: S,
    layout: Option<BoltLayout>,
    box_size: Option<Size>,
    padding: EdgeInsets,
    attached: bool,
    redraw_requested: bool,
}

impl<S: TickScheduler> LoadingView<S> {
    pub fn new(config: LoadingConfig, scheduler: S) -> Self {
        let dimensions = Dimensions::derive(config.size, config.density);
        let animator = ScanAnimator::new(config.size.step_size(), dimensions.bolt_height);
        Self {
            config,
            dimensions,
            animator,
            scheduler,
            layout: None,
            box_size: None,
            padding: EdgeInsets::ZERO,
            attached: false,
            redraw_requested: false,
        }
    }

    pub fn size_class(&self) -> SizeClass {
        self.config.size
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn window(&self) -> RevealWindow {
        self.animator.window()
    }

    /// Positioned geometry, once the host box is known.
    pub fn layout(&self) -> Option<&BoltLayout> {
        self.layout.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Starts (or resumes) the scan. The schedule picks up from the current
    /// reveal window; only recreating the view resets the phase.
    pub fn on_attached(&mut self) {
        if self.attached {
            return;
        }
        self.attached = true;
        log::debug!("loading view attached, scheduling first tick");
        self.scheduler.schedule(Duration::ZERO);
    }

    /// Withdraws the pending tick. Nothing fires and no redraw is requested
    /// after this returns.
    pub fn on_detached(&mut self) {
        self.attached = false;
        self.scheduler.cancel();
        log::debug!("loading view detached, pending tick cancelled");
    }

    /// Recomputes geometry for the box the host settled on.
    pub fn on_size_available(
        &mut self,
        box_size: Size,
        padding: EdgeInsets,
    ) -> Result<(), LayoutError> {
        self.box_size = Some(box_size);
        self.padding = padding;
        self.rebuild_layout()
    }

    /// Reports the extent this component wants on each axis: the backdrop
    /// plus padding, negotiated against the host's specs.
    pub fn measure(&self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> Size {
        let desired_width = self.dimensions.backdrop_side + self.padding.horizontal();
        let desired_height = self.dimensions.backdrop_side + self.padding.vertical();
        Size::new(
            width_spec.resolve(desired_width),
            height_spec.resolve(desired_height),
        )
    }

    /// Switches the size class. Re-derives every measurement and recomputes
    /// geometry, but never resets the animation phase.
    pub fn set_size(&mut self, size: SizeClass) -> Result<(), LayoutError> {
        if size != self.config.size {
            log::debug!("size class changed: {:?} -> {:?}", self.config.size, size);
        }
        self.config.size = size;
        self.dimensions = Dimensions::derive(size, self.config.density);
        self.animator
            .retarget(size.step_size(), self.dimensions.bolt_height);
        self.rebuild_layout()
    }

    /// Advances the animation by one scheduled callback. Ignored while
    /// detached; otherwise raises the redraw flag and schedules the next
    /// tick.
    pub fn tick(&mut self) {
        if !self.attached {
            return;
        }
        let next = self.animator.tick();
        self.redraw_requested = true;
        self.scheduler.schedule(next.delay());
    }

    /// Consumes the redraw flag raised by the last tick.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::replace(&mut self.redraw_requested, false)
    }

    /// Paints the current frame, or nothing while the host box is unknown.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        if let Some(layout) = &self.layout {
            render(layout, self.animator.window(), &self.config.style, canvas);
        }
    }

    fn rebuild_layout(&mut self) -> Result<(), LayoutError> {
        let Some(box_size) = self.box_size else {
            self.layout = None;
            return Ok(());
        };
        match compute_layout(self.config.size, self.config.density, box_size, self.padding) {
            Ok(layout) => {
                self.layout = Some(layout);
                Ok(())
            }
            Err(err) => {
                self.layout = None;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
