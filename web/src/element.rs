//! The `<popover-anchor>` custom element.
//!
//! ```html
//! <popover-anchor close-on-resize>
//!   <button data-ref="trigger" popovertarget="menu">Menu</button>
//!   <div data-ref="popover" id="menu" popover>...</div>
//! </popover-anchor>
//! ```

use std::cell::RefCell;

use anchor::{AnchorConfig, Lifecycle, PopoverAnchor, Refs};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};

use crate::{
    consts::{EVENT_TOGGLE, REF_POPOVER, REF_TRIGGER, TAG_NAME},
    dom::{BrowserScheduler, Dom, DomPopover, DomTrigger, WindowViewport},
    error::describe,
    utils::{self, EventListener},
    Error, Result,
};

#[wasm_bindgen(inline_js = r#"
export function define_anchor(tag, connect) {
    customElements.define(tag, class extends HTMLElement {
        connectedCallback() {
            this.__anchor = connect(this);
        }

        disconnectedCallback() {
            const anchor = this.__anchor;
            this.__anchor = undefined;
            if (anchor) {
                anchor.detach();
                anchor.free();
            }
        }
    });
}
"#)]
extern "C" {
    #[wasm_bindgen(catch)]
    fn define_anchor(
        tag: &str,
        connect: &Closure<dyn FnMut(web_sys::HtmlElement) -> JsValue>,
    ) -> std::result::Result<(), JsValue>;
}

/// Instance state of a connected `<popover-anchor>`, owned by the element.
#[wasm_bindgen]
pub struct AnchorElement {
    anchor: PopoverAnchor<Dom>,
    toggle: RefCell<Option<EventListener>>,
}

#[wasm_bindgen]
impl AnchorElement {
    /// Called from `disconnectedCallback`.
    pub fn detach(&self) {
        self.toggle.borrow_mut().take();
        self.anchor.on_detach();
    }
}

impl AnchorElement {
    fn connect(element: web_sys::HtmlElement) -> Self {
        let config = AnchorConfig::from_attributes(|name| element.get_attribute(name))
            .unwrap_or_else(|err| {
                tracing::warn!("<{TAG_NAME}>: {err}, using defaults");
                AnchorConfig::default()
            });

        let anchor =
            PopoverAnchor::<Dom>::new(BrowserScheduler::new(), WindowViewport::new(), config);

        let popover = utils::find_ref(&element, REF_POPOVER)
            .and_then(|popover| popover.dyn_into::<web_sys::HtmlElement>().ok())
            .map(DomPopover::new);
        let trigger = utils::find_ref(&element, REF_TRIGGER).map(DomTrigger::new);

        let toggle = popover.as_ref().map(|popover| {
            let anchor = anchor.clone();
            EventListener::new(popover.element(), EVENT_TOGGLE, move |event| {
                anchor.toggled(utils::toggle_state(&event));
            })
        });

        anchor.on_attach(Refs::new(popover, trigger));

        Self {
            anchor,
            toggle: RefCell::new(toggle),
        }
    }
}

/// Defines the `<popover-anchor>` custom element.
///
/// Returns `Ok(false)` without doing anything if the tag is already defined.
pub fn register() -> Result<bool> {
    let registry = utils::window().custom_elements();
    if !registry.get(TAG_NAME).is_undefined() {
        tracing::debug!("<{TAG_NAME}> is already defined");
        return Ok(false);
    }

    let connect = Closure::<dyn FnMut(web_sys::HtmlElement) -> JsValue>::new(
        |element: web_sys::HtmlElement| JsValue::from(AnchorElement::connect(element)),
    );
    define_anchor(TAG_NAME, &connect).map_err(|err| Error::Define(TAG_NAME, describe(&err)))?;
    // the definition lives as long as the document
    connect.forget();

    tracing::debug!("defined <{TAG_NAME}>");
    Ok(true)
}
