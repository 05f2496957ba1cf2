//! Request pipelines over a single authoritative layout.
//!
//! [`GridEngine`] owns the current [`Layout`] and the grid configuration.
//! Each request computes a complete replacement layout with the pure
//! functions in this crate and swaps it in, reporting a [`LayoutChange`]
//! when the arrangement actually differs.

use tilegrid_core::{
    Capabilities, CompactType, GridConfig, GridError, GridRect, ItemDescriptor, Layout,
    LayoutItem,
};

use crate::bounds::correct_bounds;
use crate::collision::{all_collisions, bottom};
use crate::compact::{compact, compact_around};
use crate::coords::{
    calc_grid_item_position, calc_wh, calc_xy, container_height, PixelRect, PositionParams,
};
use crate::moving::{move_element_report, MoveOptions};
use crate::resize::{resize_element, ResizeOptions};
use crate::responsive::Breakpoints;

/// A change requested by the host, in grid units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Move an item's top-left corner
    Move { id: String, x: u32, y: u32 },
    /// Change an item's span
    Resize { id: String, w: u32, h: u32 },
    /// Switch the column count and reflow
    SetColumns { cols: u32 },
}

/// Before and after snapshots of a committed change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChange {
    pub old: Layout,
    pub new: Layout,
}

impl LayoutChange {
    fn between(old: Layout, new: Layout) -> Option<Self> {
        (!old.same_arrangement(&new)).then_some(Self { old, new })
    }

    /// Ids whose footprint differs from the old layout, in new layout order.
    pub fn changed_ids(&self) -> Vec<&str> {
        self.new
            .iter()
            .filter(|item| self.old.get(&item.id).map(LayoutItem::rect) != Some(item.rect()))
            .map(|item| item.id.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Drag,
    Resize,
}

/// An in-progress drag or resize.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub id: String,
    /// Layout before the interaction started
    pub old_layout: Layout,
    /// Where the item would land if released now
    pub placeholder: Option<GridRect>,
}

/// Owner of the authoritative layout for one grid.
///
/// Besides the live layout the engine keeps the layout last passed to
/// [`load`](GridEngine::load). Breakpoint switches reflow that declared
/// layout, so shrinking and then widening the container restores it.
#[derive(Debug, Clone)]
pub struct GridEngine {
    config: GridConfig,
    breakpoints: Breakpoints,
    declared: Layout,
    layout: Layout,
    container_width: f64,
    active: Option<Interaction>,
}

impl GridEngine {
    /// Create an engine with an empty layout.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        config.validate()?;
        Ok(Self {
            config,
            breakpoints: Breakpoints::default(),
            declared: Layout::new(),
            layout: Layout::new(),
            container_width: 0.0,
            active: None,
        })
    }

    /// Replace the breakpoint table used by [`set_container_width`].
    ///
    /// [`set_container_width`]: GridEngine::set_container_width
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The layout as last loaded, before any correction.
    pub fn declared(&self) -> &Layout {
        &self.declared
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.active.as_ref()
    }

    pub fn placeholder(&self) -> Option<GridRect> {
        self.active.as_ref().and_then(|active| active.placeholder)
    }

    /// Install a new layout, correcting bounds and compacting it.
    pub fn load(&mut self, layout: Layout) -> Option<LayoutChange> {
        let next = self.settle(correct_bounds(&layout, self.config.cols));
        self.declared = layout;
        self.commit(next)
    }

    /// Build and install a layout from host declarations.
    ///
    /// Declarations without an id are skipped.
    pub fn load_descriptors<'a>(
        &mut self,
        descriptors: impl IntoIterator<Item = &'a ItemDescriptor>,
    ) -> Result<Option<LayoutChange>, GridError> {
        let items = descriptors
            .into_iter()
            .filter(|descriptor| !descriptor.id.is_empty())
            .map(ItemDescriptor::to_item)
            .collect::<Result<Vec<_>, _>>()?;
        let layout = Layout::from_items(items)?;
        Ok(self.load(layout))
    }

    /// Run one request through its pipeline and commit the result.
    ///
    /// `SetColumns` reflows the current arrangement, keeping user edits.
    pub fn apply(&mut self, request: Request) -> Option<LayoutChange> {
        let _span = tracing::debug_span!("grid.apply").entered();

        let next = match request {
            Request::Move { id, x, y } => self.moved(&id, x, y),
            Request::Resize { id, w, h } => self.resized(&id, w, h),
            Request::SetColumns { cols } => {
                self.config.cols = cols.max(1);
                self.settle(correct_bounds(&self.layout, self.config.cols))
            }
        };
        self.commit(next)
    }

    /// Record the container width and switch breakpoints if needed.
    ///
    /// Only a change in column count reflows, starting from the declared
    /// layout.
    pub fn set_container_width(&mut self, width: f64) -> Option<LayoutChange> {
        self.container_width = width.max(0.0);
        if !self.config.responsive {
            return None;
        }

        let (name, cols, padding) = match self.breakpoints.for_width(self.container_width) {
            Some(bp) if bp.cols != self.config.cols => {
                (bp.name.clone(), bp.cols.max(1), bp.container_padding)
            }
            _ => return None,
        };
        tracing::debug!(breakpoint = %name, cols, "switching breakpoint");

        self.config.cols = cols;
        self.config.container_padding = padding;
        let next = self.settle(correct_bounds(&self.declared, cols));
        self.commit(next)
    }

    /// Items overlapping `id`; empty for unknown ids.
    pub fn collisions(&self, id: &str) -> Vec<&LayoutItem> {
        match self.layout.get(id) {
            Some(item) => all_collisions(&self.layout, item).into_vec(),
            None => Vec::new(),
        }
    }

    pub fn bottom(&self) -> u32 {
        bottom(&self.layout)
    }

    /// Pixel height needed to show every row.
    pub fn container_height(&self) -> f64 {
        container_height(
            self.bottom(),
            self.config.row_height,
            self.config.margin[1],
            self.config.padding()[1],
        )
    }

    pub fn position_params(&self) -> PositionParams {
        PositionParams::from_config(&self.config, self.container_width)
    }

    /// Pixel box of an item.
    pub fn item_position(&self, id: &str) -> Option<PixelRect> {
        let item = self.layout.get(id)?;
        Some(calc_grid_item_position(
            &self.position_params(),
            item.x,
            item.y,
            item.w,
            item.h,
        ))
    }

    pub fn capabilities(&self, id: &str) -> Option<Capabilities> {
        self.layout
            .get(id)
            .map(|item| item.capabilities(&self.config.item_defaults))
    }

    /// Begin dragging an item. Returns false for unknown ids.
    pub fn drag_start(&mut self, id: &str) -> bool {
        self.begin(InteractionKind::Drag, id)
    }

    /// Follow the pointer; `top`/`left` are container pixels.
    ///
    /// Ignored unless a drag of `id` is active.
    pub fn drag_move(&mut self, id: &str, top: f64, left: f64) {
        if !self.in_session(InteractionKind::Drag, Some(id)) {
            return;
        }
        if let Some(next) = self.drag_to(id, top, left) {
            self.layout = next;
            self.update_placeholder(id);
        }
    }

    /// Drop the item and commit against the pre-drag layout.
    pub fn drag_stop(&mut self, id: &str, top: f64, left: f64) -> Option<LayoutChange> {
        if !self.in_session(InteractionKind::Drag, Some(id)) {
            return None;
        }
        let Some(next) = self.drag_to(id, top, left) else {
            self.active = None;
            return None;
        };
        self.finish(next)
    }

    /// Begin resizing an item. Returns false for unknown ids.
    pub fn resize_start(&mut self, id: &str) -> bool {
        self.begin(InteractionKind::Resize, id)
    }

    /// Follow the resize handle; `width`/`height` are pixels.
    ///
    /// Ignored unless a resize of `id` is active.
    pub fn resize_move(&mut self, id: &str, width: f64, height: f64) {
        if !self.in_session(InteractionKind::Resize, Some(id)) {
            return;
        }
        let Some(item) = self.layout.get(id) else {
            return;
        };
        let (w, h) = calc_wh(&self.position_params(), width, height, item.x, item.y);
        self.layout = self.resized(id, w, h);
        self.update_placeholder(id);
    }

    /// Release the resize handle and commit against the pre-resize layout.
    pub fn resize_stop(&mut self) -> Option<LayoutChange> {
        if !self.in_session(InteractionKind::Resize, None) {
            return None;
        }
        let next = self.settle(self.layout.clone());
        self.finish(next)
    }

    fn begin(&mut self, kind: InteractionKind, id: &str) -> bool {
        if !self.layout.contains(id) {
            tracing::debug!(id, ?kind, "interaction ignored: no such item");
            return false;
        }
        self.active = Some(Interaction {
            kind,
            id: id.to_string(),
            old_layout: self.layout.clone(),
            placeholder: None,
        });
        true
    }

    /// Whether the active session is a `kind` interaction on `id` (any id
    /// when `None`). A session that does not match is dropped.
    fn in_session(&mut self, kind: InteractionKind, id: Option<&str>) -> bool {
        let matches = self
            .active
            .as_ref()
            .is_some_and(|active| active.kind == kind && id.map_or(true, |id| active.id == id));
        if !matches {
            if let Some(stale) = self.active.take() {
                tracing::debug!(
                    id = %stale.id,
                    kind = ?stale.kind,
                    "interaction dropped: event mismatch"
                );
            }
        }
        matches
    }

    fn finish(&mut self, next: Layout) -> Option<LayoutChange> {
        let old = match self.active.take() {
            Some(active) => active.old_layout,
            None => self.layout.clone(),
        };
        self.layout = next;
        LayoutChange::between(old, self.layout.clone())
    }

    fn update_placeholder(&mut self, id: &str) {
        let rect = self.layout.get(id).map(LayoutItem::rect);
        if let Some(active) = self.active.as_mut() {
            active.placeholder = rect;
        }
    }

    fn drag_to(&self, id: &str, top: f64, left: f64) -> Option<Layout> {
        let item = self.layout.get(id)?;
        let (x, y) = calc_xy(&self.position_params(), top, left, item.w, item.h);
        Some(self.moved(id, x, y))
    }

    /// Move, then compact with the moved item held where it was dropped.
    ///
    /// The held item may float above a gap; the next full compaction
    /// (a resize, a column change) lets it settle.
    fn moved(&self, id: &str, x: u32, y: u32) -> Layout {
        // Targets past the right edge are pulled back inside the grid.
        let x = self
            .layout
            .get(id)
            .map_or(x, |item| x.min(self.config.cols.saturating_sub(item.w)));
        let options = MoveOptions::from_config(&self.config);
        let report = move_element_report(&self.layout, id, x, y, &options);
        if !report.displaced.is_empty() {
            tracing::debug!(id, displaced = report.displaced.len(), "move displaced items");
        }

        match self.compaction() {
            Some(compact_type) => {
                compact_around(&report.layout, compact_type, self.config.cols, id)
            }
            None => report.layout,
        }
    }

    fn resized(&self, id: &str, w: u32, h: u32) -> Layout {
        let options = ResizeOptions::from_config(&self.config);
        self.settle(resize_element(&self.layout, id, w, h, &options))
    }

    fn settle(&self, layout: Layout) -> Layout {
        match self.compaction() {
            Some(compact_type) => compact(&layout, compact_type, self.config.cols),
            None => layout,
        }
    }

    fn compaction(&self) -> Option<CompactType> {
        if self.config.compacts() {
            self.config.compact_type
        } else {
            None
        }
    }

    fn commit(&mut self, next: Layout) -> Option<LayoutChange> {
        let old = std::mem::replace(&mut self.layout, next);
        LayoutChange::between(old, self.layout.clone())
    }
}
