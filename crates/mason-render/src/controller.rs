//! Two-phase masonry rendering lifecycle.
//!
//! The controller owns all layout pass state and sequences the skeleton →
//! positioned transition. It is driven entirely by host calls on the UI
//! thread: attach/detach, item collection changes, resize notifications,
//! and a deferred settle callback the host schedules after each pass.

use std::time::Duration;

use tracing::{debug, trace};

use mason_core::{ColumnBreakpoints, Gutter};
use mason_layout::{compute_layout, ItemSize, Layout, LayoutParams, Position};

use crate::viewport::Viewport;

/// Wait after a layout pass before revealing positioned content, so the
/// host's transition styling is initialized before items become visible.
pub const SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Component-level configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MasonryOptions {
    /// Spacing between items and columns. Defaults to `"1rem"`.
    pub gutter: Gutter,
    /// Column configuration. Defaults to a fixed 3 columns.
    pub columns: ColumnBreakpoints,
}

impl MasonryOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gutter.
    pub fn with_gutter(mut self, gutter: impl Into<Gutter>) -> Self {
        self.gutter = gutter.into();
        self
    }

    /// Set the column configuration.
    pub fn with_columns(mut self, columns: impl Into<ColumnBreakpoints>) -> Self {
        self.columns = columns.into();
        self
    }
}

/// Rendering phase of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Host has not attached; nothing is rendered.
    Unmounted,
    /// Placeholder rendering before measurements have settled: the first
    /// `min(columns, items)` items in simple inline flow.
    Skeleton,
    /// Every item absolutely positioned per its position record, container
    /// at a fixed pixel height.
    Positioned,
}

/// Measurement provider injected by the host.
///
/// Implemented for measurement slices and for plain closures, so tests and
/// hosts can supply measurements without extra machinery.
pub trait MeasureSource {
    /// Natural size of the item at `index`, or `None` while its element is
    /// not yet attached.
    fn measure(&self, index: usize) -> Option<ItemSize>;
}

impl MeasureSource for [Option<ItemSize>] {
    fn measure(&self, index: usize) -> Option<ItemSize> {
        self.get(index).copied().flatten()
    }
}

impl<F> MeasureSource for F
where
    F: Fn(usize) -> Option<ItemSize>,
{
    fn measure(&self, index: usize) -> Option<ItemSize> {
        self(index)
    }
}

/// Handle for the deferred loading-flag flip. Redeem it via
/// [`MasonryController::settle`] once [`SETTLE_DELAY`] has elapsed; a token
/// from a superseded pass or a detached controller is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleToken {
    generation: u64,
}

/// Snapshot of what the host should draw.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Current phase.
    pub phase: Phase,
    /// Fixed container height in pixels, or `None` for automatic height
    /// (skeleton phase).
    pub container_height: Option<f64>,
    /// Number of leading items to render as skeleton placeholders. Zero
    /// outside the skeleton phase.
    pub skeleton_items: usize,
    /// Per-item positions from the last pass, in item order.
    pub positions: Vec<Option<Position>>,
}

/// Orchestrates the two-phase rendering lifecycle.
///
/// All state is owned here and mutated only through host calls; the layout
/// engine itself is pure. Any change in the re-layout trigger set (item
/// identity, column count, viewport width, gutter, mount state) marks the
/// controller dirty, and the host runs [`relayout`](Self::relayout) in its
/// next commit-phase callback.
pub struct MasonryController {
    options: MasonryOptions,
    viewport: Viewport,
    container_width: f64,
    item_count: usize,
    loading: bool,
    dirty: bool,
    generation: u64,
    layout: Layout,
}

impl MasonryController {
    /// Create an unmounted controller.
    pub fn new(options: MasonryOptions) -> Self {
        Self {
            options,
            viewport: Viewport::new(),
            container_width: 0.0,
            item_count: 0,
            loading: true,
            dirty: false,
            generation: 0,
            layout: Layout::default(),
        }
    }

    /// Host attached: record initial viewport and container geometry and
    /// enter the skeleton phase.
    pub fn attach(&mut self, viewport_width: f64, container_width: f64) {
        self.viewport.attach(viewport_width);
        self.container_width = container_width;
        self.generation += 1;
        self.dirty = true;
        debug!(viewport_width, container_width, "masonry attached");
    }

    /// Host detached: tear down viewport listening and discard pass state.
    /// Any pending settle callback becomes a no-op.
    pub fn detach(&mut self) {
        self.viewport.detach();
        self.layout = Layout::default();
        self.loading = true;
        self.generation += 1;
        self.dirty = false;
        debug!("masonry detached");
    }

    /// The item collection's identity changed. Positions from the previous
    /// collection are discarded wholesale and the skeleton returns until
    /// the next pass settles.
    pub fn set_items(&mut self, count: usize) {
        self.item_count = count;
        self.layout = Layout::default();
        self.loading = true;
        self.dirty = true;
    }

    /// Host resize notification. Ignored while unmounted.
    pub fn handle_resize(&mut self, viewport_width: f64) {
        if !self.viewport.is_mounted() {
            return;
        }
        if (self.viewport.width() - viewport_width).abs() > f64::EPSILON {
            self.dirty = true;
        }
        self.viewport.handle_resize(viewport_width);
    }

    /// Update the measured inner width of the container.
    pub fn set_container_width(&mut self, container_width: f64) {
        if (self.container_width - container_width).abs() > f64::EPSILON {
            self.container_width = container_width;
            self.dirty = true;
        }
    }

    /// Replace the gutter and column configuration.
    pub fn set_options(&mut self, options: MasonryOptions) {
        if self.options != options {
            self.options = options;
            self.dirty = true;
        }
    }

    /// Column count resolved for the current viewport width.
    pub fn columns(&self) -> usize {
        self.options.columns.resolve(self.viewport.width())
    }

    /// Gutter resolved to pixels.
    pub fn gutter_px(&self) -> f64 {
        self.options.gutter.resolve_px()
    }

    /// Whether an input in the re-layout trigger set changed since the
    /// last pass.
    pub fn needs_layout(&self) -> bool {
        self.dirty
    }

    /// Run a layout pass against the host's current measurements.
    ///
    /// Returns a [`SettleToken`] the host should redeem after
    /// [`SETTLE_DELAY`]. Returns `None` while unmounted. Items without a
    /// measurement are skipped and pick up a position on a later pass.
    pub fn relayout<M: MeasureSource + ?Sized>(&mut self, source: &M) -> Option<SettleToken> {
        if !self.viewport.is_mounted() {
            trace!("relayout skipped while unmounted");
            return None;
        }

        let params = LayoutParams {
            columns: self.columns(),
            container_width: self.container_width,
            gutter_px: self.gutter_px(),
        };
        let measurements: Vec<Option<ItemSize>> =
            (0..self.item_count).map(|index| source.measure(index)).collect();

        self.layout = compute_layout(&measurements, &params);
        self.dirty = false;
        self.generation += 1;
        debug!(
            columns = params.columns,
            gutter_px = params.gutter_px,
            placed = self.layout.positioned().count(),
            total = self.item_count,
            container_height = self.layout.container_height,
            "layout pass"
        );

        Some(SettleToken {
            generation: self.generation,
        })
    }

    /// Deferred callback after [`SETTLE_DELAY`]: reveal positioned content.
    ///
    /// A no-op unless the controller is still mounted and the token belongs
    /// to the most recent pass, so callbacks that outlive a teardown or get
    /// superseded by a newer pass cannot mutate state.
    pub fn settle(&mut self, token: SettleToken) {
        if self.viewport.is_mounted() && token.generation == self.generation {
            self.loading = false;
        } else {
            trace!(token = token.generation, current = self.generation, "stale settle ignored");
        }
    }

    /// Current rendering phase.
    pub fn phase(&self) -> Phase {
        if !self.viewport.is_mounted() {
            Phase::Unmounted
        } else if self.loading {
            Phase::Skeleton
        } else {
            Phase::Positioned
        }
    }

    /// Whether positioned content is still hidden.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Container height from the last pass.
    pub fn container_height(&self) -> f64 {
        self.layout.container_height
    }

    /// Position of the item at `index`, if it was placed last pass.
    pub fn position(&self, index: usize) -> Option<Position> {
        self.layout.positions.get(index).copied().flatten()
    }

    /// Number of items in the current collection.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The observed viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Number of placeholder items rendered during the skeleton phase.
    pub fn skeleton_count(&self) -> usize {
        self.item_count.min(self.columns())
    }

    /// Width of each skeleton placeholder as a percentage of the container.
    pub fn skeleton_item_width_percent(&self) -> f64 {
        100.0 / self.columns().max(1) as f64
    }

    /// Horizontal padding inside each skeleton placeholder, half a gutter
    /// per side so placeholder spacing approximates the positioned layout.
    pub fn skeleton_item_padding_px(&self) -> f64 {
        self.gutter_px() / 2.0
    }

    /// Snapshot the current render state for the host.
    pub fn frame(&self) -> RenderFrame {
        let phase = self.phase();
        RenderFrame {
            phase,
            container_height: match phase {
                Phase::Positioned => Some(self.layout.container_height),
                Phase::Unmounted | Phase::Skeleton => None,
            },
            skeleton_items: if phase == Phase::Skeleton {
                self.skeleton_count()
            } else {
                0
            },
            positions: self.layout.positions.clone(),
        }
    }
}

impl Default for MasonryController {
    fn default() -> Self {
        Self::new(MasonryOptions::default())
    }
}
