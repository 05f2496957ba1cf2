//! Moving one item and displacing whatever it lands on.

use std::collections::VecDeque;

use indexmap::IndexSet;
use tilegrid_core::{CompactType, GridConfig, Layout, LayoutItem};

use crate::collision::{all_collisions, collides, first_collision};

/// Policy for a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOptions {
    /// The move comes directly from the user rather than a cascade
    pub is_user_action: bool,
    /// Reject the move instead of displacing neighbours
    pub prevent_collision: bool,
    /// Direction displaced items are pushed (vertical when disabled)
    pub compact_type: Option<CompactType>,
    /// Active column count
    pub cols: u32,
    /// Place the item without any collision handling
    pub allow_overlap: bool,
}

impl MoveOptions {
    /// User-initiated move on a vertically compacted grid.
    pub fn new(cols: u32) -> Self {
        Self {
            is_user_action: true,
            prevent_collision: false,
            compact_type: Some(CompactType::Vertical),
            cols,
            allow_overlap: false,
        }
    }

    /// Options matching a grid configuration.
    pub fn from_config(config: &GridConfig) -> Self {
        Self {
            is_user_action: true,
            prevent_collision: config.prevent_collision,
            compact_type: config.compact_type,
            cols: config.cols,
            allow_overlap: config.allow_overlap,
        }
    }

    pub fn with_user_action(mut self, is_user_action: bool) -> Self {
        self.is_user_action = is_user_action;
        self
    }

    pub fn with_prevent_collision(mut self, prevent_collision: bool) -> Self {
        self.prevent_collision = prevent_collision;
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
}

/// Result of a move together with what the cascade touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub layout: Layout,
    /// Items pushed aside by the cascade, in the order they were displaced
    pub displaced: Vec<String>,
    /// The move collided while collisions were prevented
    pub rejected: bool,
}

impl MoveReport {
    fn unchanged(layout: Layout) -> Self {
        Self {
            layout,
            displaced: Vec::new(),
            rejected: false,
        }
    }
}

/// Move item `id` to `(x, y)` and push colliding neighbours out of the way.
///
/// Unknown ids and static items leave the layout unchanged.
pub fn move_element(layout: &Layout, id: &str, x: u32, y: u32, options: &MoveOptions) -> Layout {
    move_element_report(layout, id, x, y, options).layout
}

/// [`move_element`], also reporting displaced items and rejection.
pub fn move_element_report(
    layout: &Layout,
    id: &str,
    x: u32,
    y: u32,
    options: &MoveOptions,
) -> MoveReport {
    let mut out = layout.clone();
    out.clear_moved();

    let Some(item) = out.get(id) else {
        tracing::debug!(id, "move ignored: no such item");
        return MoveReport::unchanged(out);
    };
    if item.is_static {
        tracing::debug!(id, "move ignored: item is static");
        return MoveReport::unchanged(out);
    }
    if item.x == x && item.y == y {
        return MoveReport::unchanged(out);
    }

    let mut candidate = item.at(x, y);
    candidate.moved = true;

    if options.allow_overlap {
        replace(&mut out, candidate);
        return MoveReport::unchanged(out);
    }

    if options.prevent_collision {
        if let Some(blocker) = first_collision(&out, &candidate) {
            tracing::debug!(id, blocker = %blocker.id, x, y, "move rejected: collision");
            return MoveReport {
                layout: out,
                displaced: Vec::new(),
                rejected: true,
            };
        }
    }

    let direction = options.compact_type.unwrap_or_default();
    let cols = options.cols.max(1);

    skip_obstacles(&out, &mut candidate, direction, cols, |other| other.is_static);
    if options.is_user_action {
        tracing::debug!(id, x = candidate.x, y = candidate.y, "moving item");
    } else {
        tracing::trace!(id, x = candidate.x, y = candidate.y, "moving item");
    }
    replace(&mut out, candidate);

    // Items already placed by this cascade; each is displaced at most once.
    let mut visited: IndexSet<String> = IndexSet::new();
    visited.insert(id.to_string());
    let mut queue = VecDeque::from([id.to_string()]);

    while let Some(current) = queue.pop_front() {
        let Some(mover) = out.get(&current).cloned() else {
            continue;
        };

        let mut hits: Vec<LayoutItem> = all_collisions(&out, &mover)
            .into_iter()
            .filter(|other| !other.is_static && !visited.contains(other.id.as_str()))
            .cloned()
            .collect();
        hits.sort_by_key(|hit| push_order(hit, direction));

        for mut pushed in hits {
            push_past(&mover, &mut pushed, direction, cols);
            // Clear statics and everything placed so far, including hits
            // pushed earlier in this step.
            skip_obstacles(&out, &mut pushed, direction, cols, |other| {
                other.is_static || visited.contains(other.id.as_str())
            });
            pushed.moved = true;
            tracing::trace!(
                id = %pushed.id,
                by = %current,
                x = pushed.x,
                y = pushed.y,
                "displaced"
            );

            visited.insert(pushed.id.clone());
            queue.push_back(pushed.id.clone());
            replace(&mut out, pushed);
        }
    }

    MoveReport {
        layout: out,
        displaced: visited.into_iter().skip(1).collect(),
        rejected: false,
    }
}

/// Shift `item` so it no longer overlaps `obstacle`.
///
/// Horizontal pushes that would overflow the grid fall back to a vertical
/// push.
fn push_past(obstacle: &LayoutItem, item: &mut LayoutItem, direction: CompactType, cols: u32) {
    match direction {
        CompactType::Horizontal if obstacle.right().saturating_add(item.w) <= cols => {
            item.x = item.x.max(obstacle.right());
        }
        _ => item.y = item.y.max(obstacle.bottom()),
    }
}

/// Push `item` onward until it overlaps nothing `is_obstacle` accepts.
///
/// Every push moves the item strictly later in `(y, x)` order and `x` stays
/// within the columns, so the loop ends.
fn skip_obstacles(
    layout: &Layout,
    item: &mut LayoutItem,
    direction: CompactType,
    cols: u32,
    is_obstacle: impl Fn(&LayoutItem) -> bool,
) {
    while let Some(obstacle) = layout
        .iter()
        .find(|other| is_obstacle(*other) && collides(item, other))
    {
        push_past(obstacle, item, direction, cols);
    }
}

/// Sort key placing items nearer the pusher first.
fn push_order(item: &LayoutItem, direction: CompactType) -> (u32, u32) {
    match direction {
        CompactType::Vertical => (item.y, item.x),
        CompactType::Horizontal => (item.x, item.y),
    }
}

fn replace(layout: &mut Layout, item: LayoutItem) {
    if let Some(slot) = layout.get_mut(&item.id) {
        *slot = item;
    }
}
