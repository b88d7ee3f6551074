//! The scan state machine.

use std::time::Duration;

/// Pause inserted between full scan cycles.
pub const CYCLE_PAUSE: Duration = Duration::from_millis(700);

/// The vertical band currently painted in the cover color.
///
/// Invariant after every tick: `0 <= top <= bottom <= bolt_height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealWindow {
    pub top: f32,
    pub bottom: f32,
    /// True while the band grows downward from the top of the bolt.
    pub growing: bool,
}

impl RevealWindow {
    /// Window at the start of a cycle: empty band, growing.
    pub const fn initial() -> Self {
        Self {
            top: 0.0,
            bottom: 0.0,
            growing: true,
        }
    }
}

impl Default for RevealWindow {
    fn default() -> Self {
        Self::initial()
    }
}

/// When the next tick should fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextTick {
    Immediate,
    AfterPause,
}

impl NextTick {
    pub fn delay(self) -> Duration {
        match self {
            NextTick::Immediate => Duration::ZERO,
            NextTick::AfterPause => CYCLE_PAUSE,
        }
    }
}

/// Advances the reveal window by one tick.
///
/// Growing: the band bottom moves down by `step`; reaching the bolt bottom
/// clamps it there and flips to shrinking. Shrinking: the band top chases
/// the bottom; catching up resets the window and requests the inter-cycle
/// pause. Clamping happens here, before the caller requests a redraw, so
/// the rendered window never overshoots - including right after a size
/// change shrank `bolt_height` under the current window.
pub fn advance(window: RevealWindow, step: f32, bolt_height: f32) -> (RevealWindow, NextTick) {
    let mut next = window;
    let mut schedule = NextTick::Immediate;
    if next.growing {
        next.bottom += step;
        if next.bottom >= bolt_height {
            next.bottom = bolt_height;
            next.growing = false;
        }
    } else {
        next.top += step;
        if next.top >= bolt_height {
            next = RevealWindow::initial();
            schedule = NextTick::AfterPause;
        }
    }
    next.bottom = next.bottom.min(bolt_height);
    next.top = next.top.min(next.bottom);
    (next, schedule)
}

/// Owns the reveal window and the per-tick parameters.
#[derive(Clone, Debug)]
pub struct ScanAnimator {
    window: RevealWindow,
    step: f32,
    bolt_height: f32,
}

impl ScanAnimator {
    pub fn new(step: f32, bolt_height: f32) -> Self {
        Self {
            window: RevealWindow::initial(),
            step,
            bolt_height,
        }
    }

    pub fn window(&self) -> RevealWindow {
        self.window
    }

    pub fn bolt_height(&self) -> f32 {
        self.bolt_height
    }

    /// Applies one tick, returning when the next one should fire.
    pub fn tick(&mut self) -> NextTick {
        let (window, next) = advance(self.window, self.step, self.bolt_height);
        self.window = window;
        next
    }

    /// Rescales the tick parameters for a new size class. Never touches the
    /// window; an overshooting band is tolerated and clamped on the next
    /// tick.
    pub fn retarget(&mut self, step: f32, bolt_height: f32) {
        self.step = step;
        self.bolt_height = bolt_height;
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
