mod config;
mod debounce;
mod element;
mod geometry;
mod lifecycle;
mod scheduler;
mod viewport;
mod widget;

#[cfg(test)]
mod testing;

pub use self::config::{
    AnchorConfig, ConfigError, DEFAULT_RESIZE_DEBOUNCE, MAX_RESIZE_DEBOUNCE_MS,
};
pub use self::debounce::Debounce;
pub use self::element::{Popover, PopoverState, Refs, Trigger};
pub use self::geometry::{
    Offsets, Rect, ViewportSize, PROPERTY_BOTTOM, PROPERTY_LEFT, PROPERTY_RIGHT, PROPERTY_TOP,
};
pub use self::lifecycle::Lifecycle;
pub use self::scheduler::Scheduler;
pub use self::viewport::ViewportEvents;
pub use self::widget::{Environment, PopoverAnchor};
