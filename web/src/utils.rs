use anchor::PopoverState;
use sycamore::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue, UnwrapThrowExt};

pub fn window() -> web_sys::Window {
    web_sys::window().expect_throw("expected window")
}

/// Extracts the new state from a `toggle` event.
pub fn toggle_state(event: &web_sys::Event) -> PopoverState {
    let new_state = js_sys::Reflect::get(event, &JsValue::from_str("newState"))
        .ok()
        .and_then(|state| state.as_string())
        .unwrap_or_default();
    PopoverState::from_toggle(&new_state)
}

/// Finds the descendant tagged with `data-ref="<name>"`.
pub fn find_ref(root: &web_sys::Element, name: &str) -> Option<web_sys::Element> {
    let selector = format!("[{}=\"{name}\"]", crate::consts::REF_ATTRIBUTE);
    root.query_selector(&selector).ok().flatten()
}

pub fn try_from_ref<T: JsCast, G: Html>(node_ref: &NodeRef<G>) -> Option<T> {
    if !G::IS_BROWSER {
        return None;
    }
    node_ref
        .try_get_raw()
        .and_then(|node| node.to_web_sys().dyn_into::<T>().ok())
}

/// An event listener which is removed from its target when dropped.
pub struct EventListener {
    target: web_sys::EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    pub fn new<F>(target: &web_sys::EventTarget, name: &'static str, handler: F) -> Self
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);

        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);

        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::debug!("adding {name} listener failed: {:?}", err);
        }

        Self {
            target: target.clone(),
            name,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref())
        {
            tracing::debug!("removing {} listener failed: {:?}", self.name, err);
        }
    }
}
