//! The ordered item collection operated on by the engine.
//!
//! A [`Layout`] is a dense, insertion-ordered list of items with an id index
//! on the side. Order is significant: compaction breaks ties by it and moves
//! preserve it.

use indexmap::IndexMap;

use crate::errors::GridError;
use crate::item::LayoutItem;

/// An ordered set of grid items with unique ids.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<LayoutItem>", into = "Vec<LayoutItem>")
)]
pub struct Layout {
    items: IndexMap<String, LayoutItem>,
}

impl Layout {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Build a layout, rejecting repeated ids.
    pub fn from_items(items: impl IntoIterator<Item = LayoutItem>) -> Result<Self, GridError> {
        let mut layout = Self::new();
        for item in items {
            layout.push(item)?;
        }
        Ok(layout)
    }

    /// Append an item at the end of the order.
    pub fn push(&mut self, item: LayoutItem) -> Result<(), GridError> {
        if self.items.contains_key(&item.id) {
            return Err(GridError::DuplicateId { id: item.id });
        }
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Get an item by id.
    pub fn get(&self, id: &str) -> Option<&LayoutItem> {
        self.items.get(id)
    }

    /// Get a mutable item by id.
    ///
    /// The item's `id` must not be changed through this reference.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut LayoutItem> {
        self.items.get_mut(id)
    }

    /// Position of an item in the layout order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.items.get_index_of(id)
    }

    /// Get an item by its position in the layout order.
    pub fn get_index(&self, index: usize) -> Option<&LayoutItem> {
        self.items.get_index(index).map(|(_, item)| item)
    }

    /// Get a mutable item by its position in the layout order.
    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut LayoutItem> {
        self.items.get_index_mut(index).map(|(_, item)| item)
    }

    /// Iterate over items in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LayoutItem> {
        self.items.values_mut()
    }

    /// Iterate over ids in layout order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    /// Ids of the items flagged as moved by the last operation.
    pub fn moved_ids(&self) -> impl Iterator<Item = &str> {
        self.items
            .values()
            .filter(|item| item.moved)
            .map(|item| item.id.as_str())
    }

    /// Reset every transient `moved` flag.
    pub fn clear_moved(&mut self) {
        for item in self.items.values_mut() {
            item.moved = false;
        }
    }

    /// Copy of the layout with one item changed.
    ///
    /// Returns `None` when no item has the given id.
    pub fn with_item(&self, id: &str, f: impl FnOnce(&mut LayoutItem)) -> Option<Layout> {
        let mut next = self.clone();
        let item = next.items.get_mut(id)?;
        f(item);
        Some(next)
    }

    /// Compare ids, order, positions and spans, ignoring transient flags.
    pub fn same_arrangement(&self, other: &Layout) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.id == b.id && a.rect() == b.rect())
    }
}

/// Equality is order-sensitive and covers every item field.
impl PartialEq for Layout {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Layout {}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutItem;
    type IntoIter = indexmap::map::Values<'a, String, LayoutItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

impl TryFrom<Vec<LayoutItem>> for Layout {
    type Error = GridError;

    fn try_from(items: Vec<LayoutItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Layout> for Vec<LayoutItem> {
    fn from(layout: Layout) -> Self {
        layout.items.into_values().collect()
    }
}
