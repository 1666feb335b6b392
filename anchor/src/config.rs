use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

/// Longest delay a browser timer accepts, larger values fire immediately.
pub const MAX_RESIZE_DEBOUNCE_MS: u64 = i32::MAX as u64;

pub const ATTR_CLOSE_ON_RESIZE: &str = "close-on-resize";
pub const ATTR_REPOSITION_ON_RESIZE: &str = "reposition-on-resize";
pub const ATTR_RESIZE_DEBOUNCE: &str = "resize-debounce";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for `resize-debounce`, expected milliseconds: {0:?}")]
    InvalidDebounce(String),
}

/// Behaviour switches of a [`PopoverAnchor`](crate::PopoverAnchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorConfig {
    /// Close an open popover when the viewport is resized.
    pub close_on_resize: bool,
    /// Recompute the position on resize instead of leaving it stale,
    /// only relevant when `close_on_resize` is not set.
    pub reposition_on_resize: bool,
    pub resize_debounce: Duration,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            close_on_resize: false,
            reposition_on_resize: false,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
        }
    }
}

impl AnchorConfig {
    /// Reads the configuration from the attributes of the widget root.
    ///
    /// Boolean attributes follow HTML semantics, presence enables them
    /// regardless of their value.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resize_debounce = match lookup(ATTR_RESIZE_DEBOUNCE) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms <= MAX_RESIZE_DEBOUNCE_MS)
                .map(Duration::from_millis)
                .ok_or(ConfigError::InvalidDebounce(value))?,
            None => DEFAULT_RESIZE_DEBOUNCE,
        };

        Ok(Self {
            close_on_resize: lookup(ATTR_CLOSE_ON_RESIZE).is_some(),
            reposition_on_resize: lookup(ATTR_REPOSITION_ON_RESIZE).is_some(),
            resize_debounce,
        })
    }
}
