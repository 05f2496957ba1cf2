//! Overlap queries over sets of grid items.

use smallvec::SmallVec;
use tilegrid_core::LayoutItem;

/// Check whether two items share a grid cell.
///
/// An item never collides with itself; identity is decided by id.
pub fn collides(a: &LayoutItem, b: &LayoutItem) -> bool {
    a.id != b.id && a.rect().overlaps(&b.rect())
}

/// First item, in iteration order, that overlaps `item`.
pub fn first_collision<'a>(
    items: impl IntoIterator<Item = &'a LayoutItem>,
    item: &LayoutItem,
) -> Option<&'a LayoutItem> {
    items.into_iter().find(|other| collides(item, other))
}

/// Every item that overlaps `item`, in iteration order.
pub fn all_collisions<'a>(
    items: impl IntoIterator<Item = &'a LayoutItem>,
    item: &LayoutItem,
) -> SmallVec<[&'a LayoutItem; 4]> {
    items
        .into_iter()
        .filter(|other| collides(item, other))
        .collect()
}

/// Lowest occupied row boundary (max of `y + h`), 0 when empty.
pub fn bottom<'a>(items: impl IntoIterator<Item = &'a LayoutItem>) -> u32 {
    items
        .into_iter()
        .map(LayoutItem::bottom)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::Layout;

    #[test]
    fn test_collides_ignores_self() {
        let a = LayoutItem::new("a", 0, 0, 2, 2);
        let moved_a = a.at(1, 1);
        assert!(!collides(&a, &moved_a));
        assert!(collides(&a, &LayoutItem::new("b", 1, 1, 1, 1)));
    }

    #[test]
    fn test_edge_contact_is_not_collision() {
        let a = LayoutItem::new("a", 0, 0, 2, 2);
        assert!(!collides(&a, &LayoutItem::new("b", 2, 0, 1, 2)));
        assert!(!collides(&a, &LayoutItem::new("c", 0, 2, 2, 1)));
    }

    #[test]
    fn test_first_and_all_collisions() {
        let layout = Layout::from_items([
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("b", 1, 0, 1, 1),
            LayoutItem::new("c", 2, 0, 1, 1),
            LayoutItem::new("probe", 9, 9, 1, 1),
        ])
        .unwrap();
        let probe = LayoutItem::new("probe", 1, 0, 2, 1);

        assert_eq!(first_collision(&layout, &probe).map(|i| i.id.as_str()), Some("b"));

        let ids: Vec<_> = all_collisions(&layout, &probe)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);

        let clear = LayoutItem::new("z", 5, 5, 1, 1);
        assert!(first_collision(&layout, &clear).is_none());
        assert!(all_collisions(&layout, &clear).is_empty());
    }

    #[test]
    fn test_bottom() {
        let items = vec![
            LayoutItem::new("a", 0, 2, 1, 3),
            LayoutItem::new("b", 0, 0, 1, 1),
        ];
        assert_eq!(bottom(&items), 5);
        assert_eq!(bottom(&Layout::new()), 0);
    }
}
