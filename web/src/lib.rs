use wasm_bindgen::prelude::*;

mod components;
mod consts;
mod dom;
mod element;
mod error;
mod utils;

pub use self::components::PopoverAnchor;
pub use self::consts::TAG_NAME;
pub use self::dom::{
    BrowserScheduler, BrowserTask, Dom, DomPopover, DomTrigger, IdleCallback, WindowViewport,
};
pub use self::element::{register, AnchorElement};
pub use self::error::{Error, Result};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    if let Err(err) = register() {
        tracing::error!("{}", err);
    }
}
