use crate::{Offsets, Rect};

/// Visibility state reported by a popover toggle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverState {
    Open,
    Closed,
}

impl PopoverState {
    /// Maps the new state of a toggle notification, anything but `"open"` is closed.
    pub fn from_toggle(new_state: &str) -> Self {
        match new_state {
            "open" => Self::Open,
            _ => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Element the popover is anchored to.
pub trait Trigger {
    fn bounding_rect(&self) -> Rect;
}

/// Element which is positioned relative to the [`Trigger`].
///
/// Open state is owned by the platform, the anchor only reads it and
/// requests a close.
pub trait Popover {
    fn set_offsets(&self, offsets: &Offsets);

    fn is_open(&self) -> bool;

    fn close(&self);
}

/// Named references resolved by the host when the widget is attached.
#[derive(Debug)]
pub struct Refs<P, T> {
    pub popover: Option<P>,
    pub trigger: Option<T>,
}

impl<P, T> Refs<P, T> {
    pub fn new(popover: Option<P>, trigger: Option<T>) -> Self {
        Self { popover, trigger }
    }

    pub fn is_complete(&self) -> bool {
        self.popover.is_some() && self.trigger.is_some()
    }
}

impl<P, T> Default for Refs<P, T> {
    fn default() -> Self {
        Self {
            popover: None,
            trigger: None,
        }
    }
}
