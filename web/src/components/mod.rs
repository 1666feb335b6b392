mod popover_anchor;

pub use self::popover_anchor::PopoverAnchor;
