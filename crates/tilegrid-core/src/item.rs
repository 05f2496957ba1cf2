//! Grid items and rectangles.

/// An axis-aligned rectangle in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridRect {
    /// Column of the top-left cell
    pub x: u32,
    /// Row of the top-left cell
    pub y: u32,
    /// Column span
    pub w: u32,
    /// Row span
    pub h: u32,
}

impl GridRect {
    /// Create a rectangle from position and span.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// First column to the right of the rectangle (x + w).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// First row below the rectangle (y + h).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Check whether two rectangles share a cell.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &GridRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// A per-item override of a layout-wide default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Option<bool>", into = "Option<bool>")
)]
pub enum Toggle {
    /// Use the layout default
    #[default]
    Inherit,
    /// Force on for this item
    On,
    /// Force off for this item
    Off,
}

impl Toggle {
    /// Resolve the override against the layout default.
    ///
    /// The item's own setting wins when present.
    pub fn resolve(self, default: bool) -> bool {
        match self {
            Toggle::Inherit => default,
            Toggle::On => true,
            Toggle::Off => false,
        }
    }

    pub fn is_inherit(&self) -> bool {
        matches!(self, Toggle::Inherit)
    }
}

impl From<Option<bool>> for Toggle {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Toggle::Inherit,
            Some(true) => Toggle::On,
            Some(false) => Toggle::Off,
        }
    }
}

impl From<Toggle> for Option<bool> {
    fn from(value: Toggle) -> Self {
        match value {
            Toggle::Inherit => None,
            Toggle::On => Some(true),
            Toggle::Off => Some(false),
        }
    }
}

/// Span limits applied when an item is resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct SizeLimits {
    pub min_w: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_w: Option<u32>,
    pub min_h: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub max_h: Option<u32>,
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            min_w: 1,
            max_w: None,
            min_h: 1,
            max_h: None,
        }
    }
}

/// Layout-wide defaults for the per-item toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ItemDefaults {
    pub is_draggable: bool,
    pub is_resizable: bool,
    pub is_bounded: bool,
}

impl Default for ItemDefaults {
    fn default() -> Self {
        Self {
            is_draggable: true,
            is_resizable: true,
            is_bounded: false,
        }
    }
}

/// Effective interaction capabilities of an item after override resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub draggable: bool,
    pub resizable: bool,
    pub bounded: bool,
}

/// A rectangle placed on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LayoutItem {
    /// Stable identity across calls
    pub id: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    /// Immovable obstacle; the engine never repositions or resizes it
    #[cfg_attr(feature = "serde", serde(rename = "static", default))]
    pub is_static: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Toggle::is_inherit"))]
    pub is_draggable: Toggle,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Toggle::is_inherit"))]
    pub is_resizable: Toggle,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Toggle::is_inherit"))]
    pub is_bounded: Toggle,
    #[cfg_attr(feature = "serde", serde(default, flatten))]
    pub limits: SizeLimits,
    /// Set when the current operation relocated this item
    #[cfg_attr(feature = "serde", serde(default))]
    pub moved: bool,
}

impl LayoutItem {
    /// Create a movable item. Zero spans are raised to 1.
    pub fn new(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            w: w.max(1),
            h: h.max(1),
            is_static: false,
            is_draggable: Toggle::Inherit,
            is_resizable: Toggle::Inherit,
            is_bounded: Toggle::Inherit,
            limits: SizeLimits::default(),
            moved: false,
        }
    }

    /// Create an immovable item.
    pub fn fixed(id: impl Into<String>, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self::new(id, x, y, w, h).with_static(true)
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_draggable(mut self, toggle: Toggle) -> Self {
        self.is_draggable = toggle;
        self
    }

    pub fn with_resizable(mut self, toggle: Toggle) -> Self {
        self.is_resizable = toggle;
        self
    }

    pub fn with_bounded(mut self, toggle: Toggle) -> Self {
        self.is_bounded = toggle;
        self
    }

    pub fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// The item's footprint on the grid.
    pub fn rect(&self) -> GridRect {
        GridRect::new(self.x, self.y, self.w, self.h)
    }

    pub fn right(&self) -> u32 {
        self.rect().right()
    }

    pub fn bottom(&self) -> u32 {
        self.rect().bottom()
    }

    /// Copy of this item moved to another cell.
    pub fn at(&self, x: u32, y: u32) -> Self {
        Self {
            x,
            y,
            ..self.clone()
        }
    }

    /// Resolve the item's toggles against layout defaults.
    ///
    /// Static items are never draggable or resizable, and only draggable
    /// items can be bounded.
    pub fn capabilities(&self, defaults: &ItemDefaults) -> Capabilities {
        let draggable = self.is_draggable.resolve(defaults.is_draggable) && !self.is_static;
        let resizable = self.is_resizable.resolve(defaults.is_resizable) && !self.is_static;
        let bounded = draggable && self.is_bounded.resolve(defaults.is_bounded);
        Capabilities {
            draggable,
            resizable,
            bounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_overlap() {
        let a = GridRect::new(0, 0, 2, 2);
        assert!(a.overlaps(&GridRect::new(1, 1, 2, 2)));
        assert!(!a.overlaps(&GridRect::new(2, 0, 1, 1)));
        assert!(!a.overlaps(&GridRect::new(0, 2, 1, 1)));
    }

    #[test]
    fn test_zero_span_is_raised() {
        let item = LayoutItem::new("a", 0, 0, 0, 0);
        assert_eq!(item.w, 1);
        assert_eq!(item.h, 1);
    }

    #[test]
    fn test_toggle_resolution() {
        assert!(Toggle::Inherit.resolve(true));
        assert!(!Toggle::Inherit.resolve(false));
        assert!(Toggle::On.resolve(false));
        assert!(!Toggle::Off.resolve(true));
    }

    #[test]
    fn test_capabilities() {
        let defaults = ItemDefaults::default();

        let plain = LayoutItem::new("a", 0, 0, 1, 1);
        assert_eq!(
            plain.capabilities(&defaults),
            Capabilities {
                draggable: true,
                resizable: true,
                bounded: false
            }
        );

        let pinned = LayoutItem::fixed("b", 0, 0, 1, 1).with_draggable(Toggle::On);
        let caps = pinned.capabilities(&defaults);
        assert!(!caps.draggable);
        assert!(!caps.resizable);

        let bounded = LayoutItem::new("c", 0, 0, 1, 1).with_bounded(Toggle::On);
        assert!(bounded.capabilities(&defaults).bounded);

        let locked = LayoutItem::new("d", 0, 0, 1, 1)
            .with_draggable(Toggle::Off)
            .with_bounded(Toggle::On);
        assert!(!locked.capabilities(&defaults).bounded);
    }
}
