/// Tag name of the custom element.
pub const TAG_NAME: &str = "popover-anchor";

/// Attribute naming a reference inside the widget, e.g. `data-ref="popover"`.
pub const REF_ATTRIBUTE: &str = "data-ref";
pub const REF_POPOVER: &str = "popover";
pub const REF_TRIGGER: &str = "trigger";

pub const EVENT_TOGGLE: &str = "toggle";
pub const EVENT_RESIZE: &str = "resize";
