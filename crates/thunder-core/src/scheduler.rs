//! Scheduling seam between the animator and the host loop.

use std::time::Duration;

/// Schedules the component's next tick on the host's frame/message loop.
///
/// At most one tick is pending per component; scheduling replaces any
/// earlier request and `cancel` withdraws it synchronously, so no tick can
/// fire after a component detaches.
pub trait TickScheduler {
    fn schedule(&mut self, delay: Duration);
    fn cancel(&mut self);
}
