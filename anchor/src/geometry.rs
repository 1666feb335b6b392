/// Custom properties written onto the popover, in top/right/bottom/left order.
pub const PROPERTY_TOP: &str = "--popover-anchor-top";
pub const PROPERTY_RIGHT: &str = "--popover-anchor-right";
pub const PROPERTY_BOTTOM: &str = "--popover-anchor-bottom";
pub const PROPERTY_LEFT: &str = "--popover-anchor-left";

/// Bounding rectangle of an element in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Distance of the trigger from each viewport edge.
///
/// Values are unit-less and not clamped, a trigger which overflows the
/// viewport produces negative offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Offsets {
    pub fn between(rect: Rect, viewport: ViewportSize) -> Self {
        Self {
            top: rect.top,
            right: viewport.width - rect.right,
            bottom: viewport.height - rect.bottom,
            left: rect.left,
        }
    }

    /// Custom property name and value pairs for the styling layer.
    pub fn properties(&self) -> [(&'static str, f64); 4] {
        [
            (PROPERTY_TOP, self.top),
            (PROPERTY_RIGHT, self.right),
            (PROPERTY_BOTTOM, self.bottom),
            (PROPERTY_LEFT, self.left),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_scenario() {
        let rect = Rect {
            top: 50.0,
            left: 20.0,
            right: 120.0,
            bottom: 80.0,
        };
        let viewport = ViewportSize {
            width: 1000.0,
            height: 800.0,
        };

        let offsets = Offsets::between(rect, viewport);
        assert_eq!(offsets.top, 50.0);
        assert_eq!(offsets.left, 20.0);
        assert_eq!(offsets.right, 880.0);
        assert_eq!(offsets.bottom, 720.0);
    }

    #[test]
    fn test_offsets_copy_top_left() {
        for (top, left) in [(0.0, 0.0), (-12.5, 3.25), (1e6, -1e6), (0.1, 0.2)] {
            let rect = Rect {
                top,
                left,
                right: left + 10.0,
                bottom: top + 10.0,
            };
            let offsets = Offsets::between(rect, ViewportSize::default());
            assert_eq!(offsets.top, top);
            assert_eq!(offsets.left, left);
        }
    }

    #[test]
    fn test_offsets_overflowing_trigger() {
        let rect = Rect {
            top: 790.0,
            left: 990.0,
            right: 1040.0,
            bottom: 830.0,
        };
        let viewport = ViewportSize {
            width: 1000.0,
            height: 800.0,
        };

        let offsets = Offsets::between(rect, viewport);
        assert_eq!(offsets.right, -40.0);
        assert_eq!(offsets.bottom, -30.0);
    }

    #[test]
    fn test_properties_order() {
        let offsets = Offsets {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };

        assert_eq!(
            offsets.properties(),
            [
                ("--popover-anchor-top", 1.0),
                ("--popover-anchor-right", 2.0),
                ("--popover-anchor-bottom", 3.0),
                ("--popover-anchor-left", 4.0),
            ]
        );
    }
}
