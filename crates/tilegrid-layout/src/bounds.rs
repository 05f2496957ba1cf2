//! Clamping items into the active column count.

use tilegrid_core::Layout;

/// Bring every movable item inside `cols` columns.
///
/// Items that overhang the right edge are shifted left first; items wider
/// than the grid are then narrowed to it. Zero spans are raised to 1. Static
/// items are left exactly as they are, and no collisions are resolved here.
pub fn correct_bounds(layout: &Layout, cols: u32) -> Layout {
    let cols = cols.max(1);
    let mut out = layout.clone();

    for item in out.iter_mut().filter(|item| !item.is_static) {
        item.w = item.w.max(1);
        item.h = item.h.max(1);

        if item.right() > cols {
            item.x = cols.saturating_sub(item.w);
        }
        if item.w > cols {
            item.w = cols;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::{GridRect, LayoutItem};

    fn rect(layout: &Layout, id: &str) -> GridRect {
        layout.get(id).unwrap().rect()
    }

    #[test]
    fn test_overhang_shifts_left() {
        let layout = Layout::from_items([LayoutItem::new("a", 10, 0, 4, 1)]).unwrap();
        let out = correct_bounds(&layout, 12);
        assert_eq!(rect(&out, "a"), GridRect::new(8, 0, 4, 1));
    }

    #[test]
    fn test_too_wide_is_narrowed() {
        let layout = Layout::from_items([LayoutItem::new("a", 3, 2, 8, 1)]).unwrap();
        let out = correct_bounds(&layout, 6);
        assert_eq!(rect(&out, "a"), GridRect::new(0, 2, 6, 1));
    }

    #[test]
    fn test_static_untouched() {
        let layout = Layout::from_items([LayoutItem::fixed("s", 10, 0, 4, 1)]).unwrap();
        let out = correct_bounds(&layout, 6);
        assert_eq!(rect(&out, "s"), GridRect::new(10, 0, 4, 1));
    }

    #[test]
    fn test_degenerate_span_raised() {
        let mut item = LayoutItem::new("a", 0, 0, 1, 1);
        item.w = 0;
        item.h = 0;
        let layout = Layout::from_items([item]).unwrap();
        let out = correct_bounds(&layout, 4);
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_in_bounds_items_unchanged() {
        let layout = Layout::from_items([
            LayoutItem::new("a", 0, 0, 2, 1),
            LayoutItem::new("b", 2, 0, 2, 1),
        ])
        .unwrap();
        assert_eq!(correct_bounds(&layout, 4), layout);
    }
}
