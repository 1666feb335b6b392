//! Deterministic stand-ins for the browser, driven by a fake clock.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
    time::Duration,
};

use crate::{Environment, Offsets, Popover, Rect, Scheduler, Trigger, ViewportEvents, ViewportSize};

pub struct Fake;

impl Environment for Fake {
    type Scheduler = FakeScheduler;
    type Viewport = FakeViewport;
    type Popover = FakePopover;
    type Trigger = FakeTrigger;
}

enum Due {
    At(Duration),
    Idle,
}

struct Entry {
    id: u64,
    due: Due,
    f: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl Queue {
    fn push(&mut self, due: Due, f: Box<dyn FnOnce()>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Entry { id, due, f });
        id
    }

    fn remove(&mut self, id: u64) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    fn next_timer(&self, until: Duration) -> Option<u64> {
        self.entries
            .iter()
            .filter_map(|entry| match entry.due {
                Due::At(at) if at <= until => Some((at, entry.id)),
                _ => None,
            })
            .min()
            .map(|(_, id)| id)
    }

    fn next_idle(&self) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| matches!(entry.due, Due::Idle))
            .map(|entry| entry.id)
    }
}

/// Scheduler with a manually advanced clock.
#[derive(Clone, Default)]
pub struct FakeScheduler(Rc<RefCell<Queue>>);

pub struct FakeTask {
    id: u64,
    queue: Weak<RefCell<Queue>>,
}

impl Drop for FakeTask {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            let removed = queue.borrow_mut().remove(self.id);
            drop(removed);
        }
    }
}

impl FakeScheduler {
    fn task(&self, due: Due, f: Box<dyn FnOnce()>) -> FakeTask {
        let id = self.0.borrow_mut().push(due, f);
        FakeTask {
            id,
            queue: Rc::downgrade(&self.0),
        }
    }

    fn run(&self, id: u64) {
        let entry = self.0.borrow_mut().remove(id);
        if let Some(entry) = entry {
            if let Due::At(at) = entry.due {
                self.0.borrow_mut().now = at;
            }
            (entry.f)();
        }
    }

    /// Moves the clock forward, running every timer which becomes due in order.
    pub fn advance(&self, by: Duration) {
        let until = self.0.borrow().now + by;
        loop {
            let next = self.0.borrow().next_timer(until);
            match next {
                Some(id) => self.run(id),
                None => break,
            }
        }
        self.0.borrow_mut().now = until;
    }

    /// Runs idle work until none is left.
    pub fn run_idle(&self) {
        loop {
            let next = self.0.borrow().next_idle();
            match next {
                Some(id) => self.run(id),
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().entries.len()
    }
}

impl Scheduler for FakeScheduler {
    type Task = FakeTask;

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Self::Task {
        let at = self.0.borrow().now + delay;
        self.task(Due::At(at), f)
    }

    fn when_idle(&self, f: Box<dyn FnOnce()>) -> Self::Task {
        self.task(Due::Idle, f)
    }
}

#[derive(Default)]
struct ViewportInner {
    size: Cell<ViewportSize>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
}

#[derive(Clone, Default)]
pub struct FakeViewport(Rc<ViewportInner>);

impl FakeViewport {
    pub fn new(width: f64, height: f64) -> Self {
        let viewport = Self::default();
        viewport.0.size.set(ViewportSize { width, height });
        viewport
    }

    /// Changes the size and notifies every subscribed listener.
    pub fn resize(&self, width: f64, height: f64) {
        self.0.size.set(ViewportSize { width, height });
        let listeners = self.0.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    pub fn subscribed(&self) -> usize {
        self.0.listeners.borrow().len()
    }
}

impl ViewportEvents for FakeViewport {
    type Listener = Rc<dyn Fn()>;

    fn listener(&self, handler: Box<dyn Fn()>) -> Self::Listener {
        Rc::from(handler)
    }

    fn size(&self) -> ViewportSize {
        self.0.size.get()
    }

    fn subscribe(&self, listener: &Self::Listener) {
        let mut listeners = self.0.listeners.borrow_mut();
        if !listeners.iter().any(|l| Rc::ptr_eq(l, listener)) {
            listeners.push(Rc::clone(listener));
        }
    }

    fn unsubscribe(&self, listener: &Self::Listener) {
        self.0
            .listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }
}

#[derive(Default)]
struct PopoverInner {
    open: Cell<bool>,
    offsets: Cell<Option<Offsets>>,
    writes: Cell<usize>,
    closes: Cell<usize>,
}

#[derive(Clone, Default)]
pub struct FakePopover(Rc<PopoverInner>);

impl FakePopover {
    pub fn show(&self) {
        self.0.open.set(true);
    }

    pub fn offsets(&self) -> Option<Offsets> {
        self.0.offsets.get()
    }

    pub fn writes(&self) -> usize {
        self.0.writes.get()
    }

    pub fn closes(&self) -> usize {
        self.0.closes.get()
    }
}

impl Popover for FakePopover {
    fn set_offsets(&self, offsets: &Offsets) {
        self.0.offsets.set(Some(*offsets));
        self.0.writes.set(self.0.writes.get() + 1);
    }

    fn is_open(&self) -> bool {
        self.0.open.get()
    }

    fn close(&self) {
        self.0.open.set(false);
        self.0.closes.set(self.0.closes.get() + 1);
    }
}

#[derive(Clone, Default)]
pub struct FakeTrigger(Rc<Cell<Rect>>);

impl FakeTrigger {
    pub fn new(rect: Rect) -> Self {
        Self(Rc::new(Cell::new(rect)))
    }

    pub fn move_to(&self, rect: Rect) {
        self.0.set(rect);
    }
}

impl Trigger for FakeTrigger {
    fn bounding_rect(&self) -> Rect {
        self.0.get()
    }
}
