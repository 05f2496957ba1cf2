//! Changing an item's span.

use tilegrid_core::{GridConfig, Layout};

use crate::collision::{all_collisions, first_collision};
use crate::coords::clamp;

/// Policy for a single resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeOptions {
    /// Shrink the request to the free space instead of overlapping
    pub prevent_collision: bool,
    /// Overlap is tolerated; disables collision shrinking
    pub allow_overlap: bool,
    /// Active column count
    pub cols: u32,
}

impl ResizeOptions {
    pub fn new(cols: u32) -> Self {
        Self {
            prevent_collision: false,
            allow_overlap: false,
            cols,
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            prevent_collision: config.prevent_collision,
            allow_overlap: config.allow_overlap,
            cols: config.cols,
        }
    }

    pub fn with_prevent_collision(mut self, prevent_collision: bool) -> Self {
        self.prevent_collision = prevent_collision;
        self
    }

    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }
}

/// Resize item `id` to `w × h` cells, keeping its top-left corner.
///
/// The request is clamped to the item's [`SizeLimits`] and to the columns
/// remaining right of the item. When collisions are prevented and the new
/// footprint overlaps a neighbour, each axis is cut back to the nearest
/// neighbour that starts beyond the item on that axis. That clamp is best
/// effort: if the result still overlaps, the previous size is kept.
///
/// [`SizeLimits`]: tilegrid_core::SizeLimits
pub fn resize_element(
    layout: &Layout,
    id: &str,
    w: u32,
    h: u32,
    options: &ResizeOptions,
) -> Layout {
    let mut out = layout.clone();
    out.clear_moved();

    let Some(item) = out.get(id) else {
        tracing::debug!(id, "resize ignored: no such item");
        return out;
    };
    if item.is_static {
        tracing::debug!(id, "resize ignored: item is static");
        return out;
    }

    let cols = options.cols.max(1);
    let room = cols.saturating_sub(item.x).max(1);
    let limits = item.limits;
    let max_w = limits.max_w.unwrap_or(u32::MAX).min(room);
    let max_h = limits.max_h.unwrap_or(u32::MAX);

    let mut resized = item.clone();
    resized.w = clamp(w, limits.min_w, max_w).max(1);
    resized.h = clamp(h, limits.min_h, max_h).max(1);

    if options.prevent_collision && !options.allow_overlap {
        let collisions = all_collisions(&out, &resized);
        if !collisions.is_empty() {
            let least_x = collisions.iter().filter(|c| c.x > item.x).map(|c| c.x).min();
            let least_y = collisions.iter().filter(|c| c.y > item.y).map(|c| c.y).min();

            resized.w = least_x.map_or(item.w, |x| x - item.x);
            resized.h = least_y.map_or(item.h, |y| y - item.y);

            if first_collision(&out, &resized).is_some() {
                tracing::debug!(id, "resize clamp still collides; keeping previous size");
                resized.w = item.w;
                resized.h = item.h;
            }
        }
    }

    resized.moved = resized.w != item.w || resized.h != item.h;
    if let Some(slot) = out.get_mut(id) {
        *slot = resized;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::{GridRect, LayoutItem, SizeLimits};

    fn rect(layout: &Layout, id: &str) -> GridRect {
        layout.get(id).unwrap().rect()
    }

    #[test]
    fn test_grow_into_free_space() {
        let layout = Layout::from_items([LayoutItem::new("a", 0, 0, 1, 1)]).unwrap();
        let out = resize_element(&layout, "a", 3, 2, &ResizeOptions::new(12));
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 3, 2));
        assert!(out.get("a").unwrap().moved);
    }

    #[test]
    fn test_width_limited_by_remaining_columns() {
        let layout = Layout::from_items([LayoutItem::new("a", 10, 0, 1, 1)]).unwrap();
        let out = resize_element(&layout, "a", 5, 1, &ResizeOptions::new(12));
        assert_eq!(rect(&out, "a"), GridRect::new(10, 0, 2, 1));
    }

    #[test]
    fn test_item_limits() {
        let limits = SizeLimits {
            min_w: 2,
            max_w: None,
            min_h: 1,
            max_h: Some(3),
        };
        let layout =
            Layout::from_items([LayoutItem::new("a", 0, 0, 2, 2).with_limits(limits)]).unwrap();
        let out = resize_element(&layout, "a", 1, 5, &ResizeOptions::new(12));
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 2, 3));
    }

    #[test]
    fn test_zero_request_raised() {
        let layout = Layout::from_items([LayoutItem::new("a", 0, 0, 2, 2)]).unwrap();
        let out = resize_element(&layout, "a", 0, 0, &ResizeOptions::new(12));
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_static_and_unknown_ignored() {
        let layout = Layout::from_items([LayoutItem::fixed("s", 0, 0, 1, 1)]).unwrap();
        assert_eq!(resize_element(&layout, "s", 4, 4, &ResizeOptions::new(12)), layout);
        assert_eq!(resize_element(&layout, "x", 4, 4, &ResizeOptions::new(12)), layout);
    }

    #[test]
    fn test_prevent_collision_clamps_to_neighbour() {
        let layout = Layout::from_items([
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("right", 3, 0, 1, 1),
            LayoutItem::new("below", 0, 4, 1, 1),
        ])
        .unwrap();
        let options = ResizeOptions::new(12).with_prevent_collision(true);

        let wide = resize_element(&layout, "a", 5, 1, &options);
        assert_eq!(rect(&wide, "a"), GridRect::new(0, 0, 3, 1));

        let tall = resize_element(&layout, "a", 1, 6, &options);
        assert_eq!(rect(&tall, "a"), GridRect::new(0, 0, 1, 4));
    }

    #[test]
    fn test_prevent_collision_keeps_size_when_clamp_fails() {
        let layout = Layout::from_items([
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("under", 0, 0, 1, 1),
        ])
        .unwrap();
        let options = ResizeOptions::new(12).with_prevent_collision(true);
        let out = resize_element(&layout, "a", 2, 2, &options);
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 1, 1));
        assert!(!out.get("a").unwrap().moved);
    }

    #[test]
    fn test_overlap_allowed_without_prevention() {
        let layout = Layout::from_items([
            LayoutItem::new("a", 0, 0, 1, 1),
            LayoutItem::new("b", 1, 0, 1, 1),
        ])
        .unwrap();
        let out = resize_element(&layout, "a", 2, 1, &ResizeOptions::new(12));
        assert_eq!(rect(&out, "a"), GridRect::new(0, 0, 2, 1));
        assert_eq!(rect(&out, "b"), GridRect::new(1, 0, 1, 1));
    }
}
