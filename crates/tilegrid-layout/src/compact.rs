//! Packing items toward the top or left edge of the grid.
//!
//! Items are settled one at a time in order of their current row (or column
//! for horizontal packing). Each one slides toward the edge until it would
//! hit something already settled, so an item can never overtake one that
//! precedes it. Static items are registered as obstacles before anything
//! moves.

use tilegrid_core::{CompactType, Layout, LayoutItem};

use crate::collision::{bottom, first_collision};

/// Repack a layout so no movable items overlap and no gaps remain.
///
/// The result keeps the input's item order; only positions change. Items
/// whose position changed get `moved = true`.
pub fn compact(layout: &Layout, compact_type: CompactType, cols: u32) -> Layout {
    compact_pass(layout, compact_type, cols, None)
}

/// Like [`compact`], but the item `pinned` is held in place as an obstacle.
///
/// Used after a user move so the item stays where it was dropped while its
/// neighbours settle around it.
pub fn compact_around(
    layout: &Layout,
    compact_type: CompactType,
    cols: u32,
    pinned: &str,
) -> Layout {
    compact_pass(layout, compact_type, cols, Some(pinned))
}

fn compact_pass(
    layout: &Layout,
    compact_type: CompactType,
    cols: u32,
    pinned: Option<&str>,
) -> Layout {
    let cols = cols.max(1);
    let is_fixed = |item: &LayoutItem| item.is_static || pinned == Some(item.id.as_str());

    let mut placed: Vec<LayoutItem> = layout
        .iter()
        .filter(|&item| is_fixed(item))
        .cloned()
        .collect();
    let mut out = layout.clone();
    out.clear_moved();

    let mut order: Vec<(usize, &LayoutItem)> = layout.iter().enumerate().collect();
    // Stable: equal keys keep layout order.
    order.sort_by_key(|(_, item)| match compact_type {
        CompactType::Vertical => item.y,
        CompactType::Horizontal => item.x,
    });

    for (index, original) in order {
        if is_fixed(original) {
            continue;
        }

        let mut item = original.clone();
        match compact_type {
            CompactType::Vertical => settle_vertical(&placed, &mut item),
            CompactType::Horizontal => settle_horizontal(&placed, &mut item, cols),
        }
        item.moved = item.x != original.x || item.y != original.y;

        if let Some(slot) = out.get_index_mut(index) {
            *slot = item.clone();
        }
        placed.push(item);
    }

    out
}

fn settle_vertical(placed: &[LayoutItem], item: &mut LayoutItem) {
    // Nothing can rest below the lowest settled edge.
    item.y = item.y.min(bottom(placed));

    while item.y > 0 {
        item.y -= 1;
        if first_collision(placed, item).is_some() {
            item.y += 1;
            break;
        }
    }

    while let Some(blocker) = first_collision(placed, item) {
        item.y = blocker.bottom();
    }
}

fn settle_horizontal(placed: &[LayoutItem], item: &mut LayoutItem, cols: u32) {
    while item.x > 0 {
        item.x -= 1;
        if first_collision(placed, item).is_some() {
            item.x += 1;
            break;
        }
    }

    while let Some(blocker) = first_collision(placed, item) {
        item.x = blocker.right();
        if item.right() > cols {
            // No room to the right: retry from the left edge one row down.
            item.x = 0;
            item.y += 1;
        }
    }
}
