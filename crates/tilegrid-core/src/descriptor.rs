//! Building layout items from host-declared attributes.
//!
//! Hosts describe items as an id plus string attributes (`x`, `y`, `w`, `h`,
//! `static`, `drag`, `resizable`, `bounded`, `min-w`, ...). Missing
//! coordinates default to the origin and missing spans to a single cell.

use smallvec::SmallVec;

use crate::errors::GridError;
use crate::item::{LayoutItem, SizeLimits, Toggle};

/// An item declaration as received from the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDescriptor {
    pub id: String,
    pub attributes: SmallVec<[(String, String); 8]>,
}

impl ItemDescriptor {
    /// Create a descriptor with no attributes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: SmallVec::new(),
        }
    }

    /// Add an attribute. Later values replace earlier ones.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Add a presence-only attribute such as `static`.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Convert the declaration into a layout item.
    pub fn to_item(&self) -> Result<LayoutItem, GridError> {
        let x = self.number("x")?.unwrap_or(0);
        let y = self.number("y")?.unwrap_or(0);
        let w = self.number("w")?.unwrap_or(1);
        let h = self.number("h")?.unwrap_or(1);

        let limits = SizeLimits {
            min_w: self.number("min-w")?.unwrap_or(1).max(1),
            max_w: self.number("max-w")?,
            min_h: self.number("min-h")?.unwrap_or(1).max(1),
            max_h: self.number("max-h")?,
        };

        Ok(LayoutItem::new(self.id.clone(), x, y, w, h)
            .with_static(self.has("static"))
            .with_draggable(self.toggle("drag"))
            .with_resizable(self.toggle("resizable"))
            .with_bounded(self.toggle("bounded"))
            .with_limits(limits))
    }

    fn number(&self, name: &str) -> Result<Option<u32>, GridError> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| GridError::InvalidAttribute {
                id: self.id.clone(),
                name: name.to_string(),
                value: raw.to_string(),
            })
    }

    fn toggle(&self, name: &str) -> Toggle {
        match self.get(name) {
            None => Toggle::Inherit,
            Some("false") => Toggle::Off,
            Some(_) => Toggle::On,
        }
    }
}
