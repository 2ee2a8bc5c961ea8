// ABOUTME: Host-facing resizable grid component.
// ABOUTME: Bundles props, layout cache, container rect and drag resizer behind event handlers.

use std::time::Instant;

use grid_core::{ContainerRect, GridConfig, HandleStyle, LayoutPreset};
use grid_layout::{GridLayout, LayoutCache, SplitKey, SplitSpec};

use crate::resizer::{DragResizer, PointerDelta, TrackUpdate};

/// Inputs supplied by the host on every render
#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    pub rows: Vec<f64>,
    pub cols: Vec<f64>,
    pub splits: Vec<SplitSpec>,
    pub width: String,
    pub height: String,
}

impl From<&LayoutPreset> for GridProps {
    fn from(preset: &LayoutPreset) -> Self {
        Self {
            rows: preset.rows.clone(),
            cols: preset.cols.clone(),
            splits: preset.splits.iter().copied().map(SplitSpec::from).collect(),
            width: preset.width.clone(),
            height: preset.height.clone(),
        }
    }
}

/// One rendered frame: container sizing plus derived layout
#[derive(Debug, Clone, Copy)]
pub struct GridFrame<'a> {
    pub width: &'a str,
    pub height: &'a str,
    pub layout: &'a GridLayout,
}

/// A grid whose tracks can be resized by dragging its splits.
///
/// The host owns the track vectors: every accepted pointer-move is reported
/// through `on_change`, and the host hands the merged tracks back with
/// [`ResizableGrid::set_tracks`] before the next render.
pub struct ResizableGrid<F>
where
    F: FnMut(TrackUpdate),
{
    props: GridProps,
    style: HandleStyle,
    cache: LayoutCache,
    resizer: DragResizer,
    mounted: bool,
    on_change: F,
}

impl<F> ResizableGrid<F>
where
    F: FnMut(TrackUpdate),
{
    pub fn new(props: GridProps, config: &GridConfig, on_change: F) -> Self {
        Self {
            props,
            style: config.handle.clone(),
            cache: LayoutCache::new(),
            resizer: DragResizer::new(ContainerRect::default(), &config.resize),
            mounted: false,
            on_change,
        }
    }

    pub fn props(&self) -> &GridProps {
        &self.props
    }

    pub fn rows(&self) -> &[f64] {
        &self.props.rows
    }

    pub fn cols(&self) -> &[f64] {
        &self.props.cols
    }

    /// Replace the track vectors with the host's current state
    pub fn set_tracks(&mut self, rows: Vec<f64>, cols: Vec<f64>) {
        self.props.rows = rows;
        self.props.cols = cols;
    }

    pub fn set_splits(&mut self, splits: Vec<SplitSpec>) {
        self.props.splits = splits;
    }

    /// Attach to a container, capturing its rect once.
    ///
    /// Later layout changes of the container are not picked up; call
    /// [`ResizableGrid::recompute_rect`] for that.
    pub fn mount(&mut self, rect: ContainerRect) {
        if self.mounted {
            tracing::debug!("Grid already mounted, keeping rect {:?}", self.resizer.rect());
            return;
        }
        tracing::debug!("Grid mounted at {:?}", rect);
        self.resizer.set_rect(rect);
        self.mounted = true;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn recompute_rect(&mut self, rect: ContainerRect) {
        self.resizer.set_rect(rect);
    }

    pub fn rect(&self) -> ContainerRect {
        self.resizer.rect()
    }

    /// Detach from the container and cancel any drag in progress
    pub fn unmount(&mut self) {
        self.resizer.reset();
        self.mounted = false;
    }

    pub fn render(&mut self) -> GridFrame<'_> {
        let layout = self.cache.get_or_derive(
            &self.props.rows,
            &self.props.cols,
            &self.props.splits,
            &self.style,
        );
        GridFrame {
            width: &self.props.width,
            height: &self.props.height,
            layout,
        }
    }

    /// Pointer pressed on a handle. Returns false if no rendered handle has this key.
    pub fn pointer_down(&mut self, key: SplitKey) -> bool {
        let layout = self.cache.get_or_derive(
            &self.props.rows,
            &self.props.cols,
            &self.props.splits,
            &self.style,
        );
        match layout.descriptor(key) {
            Some(descriptor) => {
                self.resizer.pointer_down(descriptor);
                true
            }
            None => {
                tracing::debug!("Ignoring pointer-down on unknown split {}", key);
                false
            }
        }
    }

    /// Pointer moved by `delta`. Returns true if `on_change` was invoked.
    pub fn pointer_move(&mut self, delta: PointerDelta, now: Instant) -> bool {
        match self
            .resizer
            .pointer_move(delta, &self.props.rows, &self.props.cols, now)
        {
            Some(update) => {
                (self.on_change)(update);
                true
            }
            None => false,
        }
    }

    /// Pointer released; ends the drag gesture if one is active
    pub fn pointer_up(&mut self) -> bool {
        self.resizer.pointer_up()
    }

    pub fn active_split(&self) -> Option<SplitKey> {
        self.resizer.active_split()
    }

    pub fn is_dragging(&self) -> bool {
        self.resizer.is_dragging()
    }
}

impl<F> std::fmt::Debug for ResizableGrid<F>
where
    F: FnMut(TrackUpdate),
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizableGrid")
            .field("props", &self.props)
            .field("resizer", &self.resizer)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
