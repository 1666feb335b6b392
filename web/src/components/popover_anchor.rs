use anchor::{AnchorConfig, Lifecycle, Refs};
use sycamore::prelude::*;

use crate::{
    dom::{BrowserScheduler, Dom, DomPopover, DomTrigger, WindowViewport},
    utils::{toggle_state, try_from_ref},
};

#[derive(Prop)]
pub struct PopoverAnchorProps<'a, G: Html> {
    /// Id of the popover, the trigger button targets it.
    id: &'static str,
    trigger: View<G>,
    children: Children<'a, G>,
    #[builder(default)]
    close_on_resize: bool,
    #[builder(default)]
    reposition_on_resize: bool,
}

/// Trigger button and `popover="auto"` panel, the panel receives the
/// `--popover-anchor-*` properties of the trigger.
#[component]
pub fn PopoverAnchor<'a, G: Html>(cx: Scope<'a>, props: PopoverAnchorProps<'a, G>) -> View<G> {
    let config = AnchorConfig {
        close_on_resize: props.close_on_resize,
        reposition_on_resize: props.reposition_on_resize,
        ..Default::default()
    };
    let anchor = create_ref(
        cx,
        G::IS_BROWSER.then(|| {
            anchor::PopoverAnchor::<Dom>::new(BrowserScheduler::new(), WindowViewport::new(), config)
        }),
    );

    let trigger_ref = create_node_ref(cx);
    let popover_ref = create_node_ref(cx);

    let toggle = move |event: web_sys::Event| {
        if let Some(anchor) = anchor {
            anchor.toggled(toggle_state(&event));
        }
    };

    let children = props.children.call(cx);
    let view = view! { cx,
        button(ref=trigger_ref, type="button", popovertarget=props.id) {
            (props.trigger)
        }
        div(ref=popover_ref, id=props.id, popover="auto", on:toggle=toggle) {
            (children)
        }
    };

    if let Some(anchor) = anchor {
        let popover = try_from_ref::<web_sys::HtmlElement, G>(popover_ref).map(DomPopover::new);
        let trigger = try_from_ref::<web_sys::Element, G>(trigger_ref).map(DomTrigger::new);
        anchor.on_attach(Refs::new(popover, trigger));
        on_cleanup(cx, move || anchor.on_detach());
    }

    view
}
