use std::time::Duration;

/// One-shot deferred tasks.
///
/// Dropping the returned handle must cancel the task if it has not fired yet,
/// so whoever owns the handle decides how long the task may stay pending.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}
