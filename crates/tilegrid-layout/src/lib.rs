//! Layout resolution for tilegrid documents.
//!
//! This crate turns a [`Layout`] plus a requested change into a new,
//! internally consistent layout. Every function here is pure: inputs are
//! borrowed, results are fresh values.
//!
//! # Architecture
//!
//! 1. **Collision**: pairwise and bulk overlap queries
//! 2. **Bounds**: clamps items into the active column count
//! 3. **Compaction**: packs items toward the top or left edge
//! 4. **Moving / resizing**: relocates one item and displaces its neighbours
//! 5. **Coordinates**: pixel <-> grid unit conversion
//! 6. **Responsive**: column counts chosen from the container width
//! 7. **Engine**: request pipelines and drag/resize sessions over one layout
//!
//! # Example
//!
//! ```
//! use tilegrid_core::{CompactType, Layout, LayoutItem};
//! use tilegrid_layout::{compact, move_element, MoveOptions};
//!
//! let layout = Layout::from_items([
//!     LayoutItem::new("a", 0, 0, 1, 1),
//!     LayoutItem::new("b", 0, 1, 1, 1),
//! ])?;
//!
//! let options = MoveOptions::new(12).with_compact_type(Some(CompactType::Vertical));
//! let moved = move_element(&layout, "a", 0, 1, &options);
//! let packed = compact(&moved, CompactType::Vertical, 12);
//! assert_eq!(packed.get("a").map(|i| i.y), Some(0));
//! # Ok::<(), tilegrid_core::GridError>(())
//! ```
//!
//! [`Layout`]: tilegrid_core::Layout

mod bounds;
mod collision;
mod compact;
mod coords;
mod engine;
mod moving;
mod resize;
mod responsive;

pub use bounds::correct_bounds;
pub use collision::{all_collisions, bottom, collides, first_collision};
pub use compact::{compact, compact_around};
pub use coords::{
    calc_grid_item_position, calc_wh, calc_xy, clamp, column_width, container_height,
    PixelRect, PositionParams,
};
pub use engine::{GridEngine, Interaction, InteractionKind, LayoutChange, Request};
pub use moving::{move_element, move_element_report, MoveOptions, MoveReport};
pub use resize::{resize_element, ResizeOptions};
pub use responsive::{Breakpoint, Breakpoints};
