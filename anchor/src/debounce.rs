use std::{cell::Cell, rc::Rc, time::Duration};

use crate::Scheduler;

/// Trailing edge debounce.
///
/// Every [`call`](Debounce::call) replaces the pending invocation, only the
/// last call of a burst runs, `delay` after it was made.
pub struct Debounce<S: Scheduler> {
    delay: Duration,
    f: Rc<dyn Fn()>,
    pending: Cell<Option<S::Task>>,
}

impl<S: Scheduler> Debounce<S> {
    pub fn new(delay: Duration, f: impl Fn() + 'static) -> Self {
        Self {
            delay,
            f: Rc::new(f),
            pending: Cell::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn call(&self, scheduler: &S) {
        let f = Rc::clone(&self.f);
        let task = scheduler.after(self.delay, Box::new(move || f()));
        // dropping the previous task cancels it
        self.pending.set(Some(task));
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        drop(self.pending.take());
    }
}
