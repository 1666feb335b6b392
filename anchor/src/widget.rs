use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{
    AnchorConfig, Debounce, Lifecycle, Offsets, Popover, PopoverState, Refs, Scheduler, Trigger,
    ViewportEvents,
};

/// Platform capabilities a [`PopoverAnchor`] runs on.
pub trait Environment: 'static {
    type Scheduler: Scheduler;
    type Viewport: ViewportEvents;
    type Popover: Popover;
    type Trigger: Trigger;
}

type Task<E> = <<E as Environment>::Scheduler as Scheduler>::Task;
type Listener<E> = <<E as Environment>::Viewport as ViewportEvents>::Listener;

/// Positions a popover relative to its trigger.
///
/// The distances of the trigger to each viewport edge are written onto the
/// popover, once the host is idle after attaching and every time the popover
/// opens. While the popover is open a resize listener is subscribed on the
/// viewport, which (debounced) closes the popover if configured to do so.
///
/// Open state is owned by the platform, the host forwards toggle
/// notifications through [`PopoverAnchor::toggled`].
pub struct PopoverAnchor<E: Environment> {
    inner: Rc<Inner<E>>,
}

impl<E: Environment> Clone for PopoverAnchor<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<E: Environment> {
    config: AnchorConfig,
    scheduler: E::Scheduler,
    viewport: E::Viewport,
    attached: Cell<bool>,
    popover: RefCell<Option<E::Popover>>,
    trigger: RefCell<Option<E::Trigger>>,
    initial: Cell<Option<Task<E>>>,
    resize: Listener<E>,
    resized: Debounce<E::Scheduler>,
}

impl<E: Environment> PopoverAnchor<E> {
    pub fn new(scheduler: E::Scheduler, viewport: E::Viewport, config: AnchorConfig) -> Self {
        let inner = Rc::new_cyclic(|this: &Weak<Inner<E>>| {
            let resize = {
                let this = Weak::clone(this);
                viewport.listener(Box::new(move || {
                    if let Some(inner) = this.upgrade() {
                        inner.resized.call(&inner.scheduler);
                    }
                }))
            };

            let resized = {
                let this = Weak::clone(this);
                Debounce::new(config.resize_debounce, move || {
                    if let Some(inner) = this.upgrade() {
                        inner.on_resize();
                    }
                })
            };

            Inner {
                config,
                scheduler,
                viewport,
                attached: Cell::new(false),
                popover: RefCell::new(None),
                trigger: RefCell::new(None),
                initial: Cell::new(None),
                resize,
                resized,
            }
        });

        Self { inner }
    }

    pub fn config(&self) -> &AnchorConfig {
        &self.inner.config
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attached.get()
    }

    /// Writes the current trigger position onto the popover.
    ///
    /// Does nothing if either reference is missing.
    pub fn recompute(&self) {
        self.inner.recompute();
    }

    /// Handles a popover toggle notification.
    pub fn toggled(&self, state: PopoverState) {
        let inner = &self.inner;
        if !inner.attached.get() {
            return;
        }

        match state {
            PopoverState::Open => {
                tracing::debug!("popover opened");
                inner.recompute();
                inner.viewport.subscribe(&inner.resize);
            }
            PopoverState::Closed => {
                tracing::debug!("popover closed");
                inner.viewport.unsubscribe(&inner.resize);
            }
        }
    }
}

impl<E: Environment> Lifecycle for PopoverAnchor<E> {
    type Refs = Refs<E::Popover, E::Trigger>;

    fn on_attach(&self, refs: Self::Refs) {
        let inner = &self.inner;

        if !refs.is_complete() {
            tracing::debug!(
                popover = refs.popover.is_some(),
                trigger = refs.trigger.is_some(),
                "popover anchor attached with missing references"
            );
        }

        *inner.popover.borrow_mut() = refs.popover;
        *inner.trigger.borrow_mut() = refs.trigger;
        inner.attached.set(true);

        let this = Rc::downgrade(inner);
        let task = inner.scheduler.when_idle(Box::new(move || {
            if let Some(inner) = this.upgrade() {
                inner.recompute();
            }
        }));
        inner.initial.set(Some(task));
    }

    fn on_detach(&self) {
        let inner = &self.inner;
        tracing::debug!("popover anchor detached");

        inner.attached.set(false);
        inner.viewport.unsubscribe(&inner.resize);
        inner.resized.cancel();
        drop(inner.initial.take());

        *inner.popover.borrow_mut() = None;
        *inner.trigger.borrow_mut() = None;
    }
}

impl<E: Environment> Inner<E> {
    fn recompute(&self) {
        let popover = self.popover.borrow();
        let trigger = self.trigger.borrow();
        let (Some(popover), Some(trigger)) = (popover.as_ref(), trigger.as_ref()) else {
            return;
        };

        let offsets = Offsets::between(trigger.bounding_rect(), self.viewport.size());
        tracing::trace!(?offsets, "positioning popover");
        popover.set_offsets(&offsets);
    }

    fn on_resize(&self) {
        let is_open = match self.popover.borrow().as_ref() {
            Some(popover) => popover.is_open(),
            None => return,
        };
        if !is_open {
            return;
        }

        if self.config.close_on_resize {
            tracing::debug!("closing popover after resize");
            if let Some(popover) = self.popover.borrow().as_ref() {
                popover.close();
            }
        } else if self.config.reposition_on_resize {
            self.recompute();
        }
    }
}

impl<E: Environment> Drop for Inner<E> {
    fn drop(&mut self) {
        self.viewport.unsubscribe(&self.resize);
    }
}
