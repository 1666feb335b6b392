//! Browser implementations of the anchor capabilities.

use std::{cell::Cell, rc::Rc, time::Duration};

use anchor::{Environment, Offsets, Popover, Rect, Scheduler, Trigger, ViewportEvents, ViewportSize};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};

use crate::{consts::EVENT_RESIZE, utils};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = web_sys::HtmlElement)]
    type PopoverElement;

    #[wasm_bindgen(method, catch, js_name = hidePopover)]
    fn hide_popover(this: &PopoverElement) -> Result<(), JsValue>;
}

/// The browser environment.
pub struct Dom;

impl Environment for Dom {
    type Scheduler = BrowserScheduler;
    type Viewport = WindowViewport;
    type Popover = DomPopover;
    type Trigger = DomTrigger;
}

#[derive(Clone)]
pub struct BrowserScheduler {
    window: web_sys::Window,
}

impl BrowserScheduler {
    pub fn new() -> Self {
        Self {
            window: utils::window(),
        }
    }
}

impl Default for BrowserScheduler {
    fn default() -> Self {
        Self::new()
    }
}

pub enum BrowserTask {
    Timeout(Timeout),
    Idle(IdleCallback),
}

/// A pending `requestIdleCallback`, cancelled on drop.
pub struct IdleCallback {
    window: web_sys::Window,
    handle: u32,
    _closure: Closure<dyn FnMut()>,
}

impl Drop for IdleCallback {
    fn drop(&mut self) {
        self.window.cancel_idle_callback(self.handle);
    }
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn after(&self, delay: Duration, f: Box<dyn FnOnce()>) -> Self::Task {
        // `Timeout` casts to `i32`, anything larger wraps to a negative delay
        let millis = u32::try_from(delay.as_millis())
            .unwrap_or(u32::MAX)
            .min(i32::MAX as u32);
        BrowserTask::Timeout(Timeout::new(millis, f))
    }

    fn when_idle(&self, f: Box<dyn FnOnce()>) -> Self::Task {
        let f = Rc::new(Cell::new(Some(f)));
        let run = move || {
            if let Some(f) = f.take() {
                f();
            }
        };

        let closure = Closure::<dyn FnMut()>::new(run.clone());
        match self
            .window
            .request_idle_callback(closure.as_ref().unchecked_ref())
        {
            Ok(handle) => BrowserTask::Idle(IdleCallback {
                window: self.window.clone(),
                handle,
                _closure: closure,
            }),
            // Safari does not implement `requestIdleCallback`
            Err(_) => BrowserTask::Timeout(Timeout::new(0, run)),
        }
    }
}

#[derive(Clone)]
pub struct WindowViewport {
    window: web_sys::Window,
}

impl WindowViewport {
    pub fn new() -> Self {
        Self {
            window: utils::window(),
        }
    }
}

impl Default for WindowViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportEvents for WindowViewport {
    type Listener = Closure<dyn Fn()>;

    fn listener(&self, handler: Box<dyn Fn()>) -> Self::Listener {
        Closure::wrap(handler)
    }

    fn size(&self) -> ViewportSize {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0)
        };

        ViewportSize {
            width: dimension(self.window.inner_width()),
            height: dimension(self.window.inner_height()),
        }
    }

    fn subscribe(&self, listener: &Self::Listener) {
        if let Err(err) = self
            .window
            .add_event_listener_with_callback(EVENT_RESIZE, listener.as_ref().unchecked_ref())
        {
            tracing::debug!("adding resize listener failed: {:?}", err);
        }
    }

    fn unsubscribe(&self, listener: &Self::Listener) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(EVENT_RESIZE, listener.as_ref().unchecked_ref())
        {
            tracing::debug!("removing resize listener failed: {:?}", err);
        }
    }
}

#[derive(Clone)]
pub struct DomTrigger(web_sys::Element);

impl DomTrigger {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }
}

impl Trigger for DomTrigger {
    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.left(),
        }
    }
}

#[derive(Clone)]
pub struct DomPopover(web_sys::HtmlElement);

impl DomPopover {
    pub fn new(element: web_sys::HtmlElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &web_sys::HtmlElement {
        &self.0
    }
}

impl Popover for DomPopover {
    fn set_offsets(&self, offsets: &Offsets) {
        let style = self.0.style();
        for (name, value) in offsets.properties() {
            if let Err(err) = style.set_property(name, &value.to_string()) {
                tracing::debug!("setting {name} failed: {:?}", err);
            }
        }
    }

    fn is_open(&self) -> bool {
        // throws in browsers without popover support
        self.0.matches(":popover-open").unwrap_or(false)
    }

    fn close(&self) {
        if let Err(err) = self.0.unchecked_ref::<PopoverElement>().hide_popover() {
            tracing::debug!("hidePopover failed: {:?}", err);
        }
    }
}
