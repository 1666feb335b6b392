use std::time::Duration;

/// Deferred execution of work.
///
/// Dropping a returned task cancels the work if it did not run yet, mirroring
/// [`gloo_timers::callback::Timeout`](https://docs.rs/gloo-timers). Work which
/// already ran is not affected by the drop.
pub trait Scheduler {
    type Task;

    /// Runs `f` once `delay` has elapsed.
    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Self::Task;

    /// Runs `f` once the host has no more pressing work, without a deadline.
    fn when_idle(&self, f: Box<dyn FnOnce()>) -> Self::Task;
}

impl<S: Scheduler + ?Sized> Scheduler for std::rc::Rc<S> {
    type Task = S::Task;

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Self::Task {
        (**self).after(delay, f)
    }

    fn when_idle(&self, f: Box<dyn FnOnce()>) -> Self::Task {
        (**self).when_idle(f)
    }
}
