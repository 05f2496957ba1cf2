//! Layout-wide configuration.

use crate::errors::GridError;
use crate::item::ItemDefaults;

/// Edge that compaction packs items toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CompactType {
    /// Pack toward the top edge
    #[default]
    Vertical,
    /// Pack toward the left edge
    Horizontal,
}

/// Configuration consumed from the host.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GridConfig {
    /// Number of columns
    pub cols: u32,
    /// Height of one row in pixels
    pub row_height: f64,
    /// Row limit (None for unbounded growth)
    pub max_rows: Option<u32>,
    /// Gap between cells, horizontal then vertical
    pub margin: [f64; 2],
    /// Container padding; inherits `margin` when unset
    pub container_padding: Option<[f64; 2]>,
    /// Compaction direction (None disables compaction)
    pub compact_type: Option<CompactType>,
    /// Let items overlap and skip compaction entirely
    pub allow_overlap: bool,
    /// Reject moves and shrink resizes that would collide
    pub prevent_collision: bool,
    /// Switch column count from the container width
    pub responsive: bool,
    /// Defaults for the per-item toggles
    pub item_defaults: ItemDefaults,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 12,
            row_height: 150.0,
            max_rows: None,
            margin: [10.0, 10.0],
            container_padding: None,
            compact_type: Some(CompactType::Vertical),
            allow_overlap: false,
            prevent_collision: false,
            responsive: true,
            item_defaults: ItemDefaults::default(),
        }
    }
}

impl GridConfig {
    /// Create a configuration with a fixed column count.
    pub fn with_cols(mut self, cols: u32) -> Self {
        self.cols = cols;
        self
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_max_rows(mut self, max_rows: Option<u32>) -> Self {
        self.max_rows = max_rows;
        self
    }

    pub fn with_margin(mut self, horizontal: f64, vertical: f64) -> Self {
        self.margin = [horizontal, vertical];
        self
    }

    pub fn with_container_padding(mut self, padding: Option<[f64; 2]>) -> Self {
        self.container_padding = padding;
        self
    }

    pub fn with_compact_type(mut self, compact_type: Option<CompactType>) -> Self {
        self.compact_type = compact_type;
        self
    }

    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    pub fn with_prevent_collision(mut self, prevent_collision: bool) -> Self {
        self.prevent_collision = prevent_collision;
        self
    }

    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn with_item_defaults(mut self, defaults: ItemDefaults) -> Self {
        self.item_defaults = defaults;
        self
    }

    /// Effective container padding.
    pub fn padding(&self) -> [f64; 2] {
        self.container_padding.unwrap_or(self.margin)
    }

    /// Whether layouts are compacted after each change.
    pub fn compacts(&self) -> bool {
        !self.allow_overlap && self.compact_type.is_some()
    }

    /// Check the values the engine relies on.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.cols == 0 {
            return Err(GridError::InvalidColumns { cols: self.cols });
        }
        if !(self.row_height.is_finite() && self.row_height > 0.0) {
            return Err(GridError::InvalidRowHeight {
                value: self.row_height.to_string(),
            });
        }
        Ok(())
    }
}
