// ABOUTME: Drag state machine that turns pointer movement into track resizes.
// ABOUTME: Redistributes size between the two tracks adjacent to the active split.

use std::time::Instant;

use grid_core::{ContainerRect, ResizeSettings};
use grid_layout::{Orientation, SplitDescriptor, SplitKey};
use serde::{Deserialize, Serialize};

use crate::throttle::Throttle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(SplitKey),
}

/// Relative pointer movement since the previous event, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerDelta {
    pub dx: f64,
    pub dy: f64,
}

impl PointerDelta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

/// Replacement for one axis of the grid; the other axis is left to the caller
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<Vec<f64>>,
}

impl TrackUpdate {
    pub fn rows(rows: Vec<f64>) -> Self {
        Self {
            rows: Some(rows),
            cols: None,
        }
    }

    pub fn cols(cols: Vec<f64>) -> Self {
        Self {
            rows: None,
            cols: Some(cols),
        }
    }

    /// Replace whichever axes this update names
    pub fn merge_into(self, rows: &mut Vec<f64>, cols: &mut Vec<f64>) {
        if let Some(new_rows) = self.rows {
            *rows = new_rows;
        }
        if let Some(new_cols) = self.cols {
            *cols = new_cols;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResizeStep {
    /// Both adjacent tracks stayed above the minimum
    Applied(Vec<f64>),
    /// The step would have shrunk a track too far; tracks are unchanged
    Rejected(Vec<f64>),
}

impl ResizeStep {
    pub fn is_applied(&self) -> bool {
        matches!(self, ResizeStep::Applied(_))
    }

    pub fn into_tracks(self) -> Vec<f64> {
        match self {
            ResizeStep::Applied(tracks) | ResizeStep::Rejected(tracks) => tracks,
        }
    }
}

/// Rounds halves toward positive infinity
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Convert pixel movement along one axis into a percentage of the container,
/// quantized to hundredths of a percent.
///
/// The rect origin is subtracted from the movement before scaling.
pub fn move_percent(movement: f64, origin: f64, extent: f64) -> f64 {
    round_half_up((movement - origin) / extent * 10000.0) / 100.0
}

/// Move boundary `boundary` (1-based) by `percent`.
///
/// The track after the boundary loses `percent` and the track before it gains
/// the same amount. Returns `None` if the boundary has no track on either side.
pub fn resize_tracks(tracks: &[f64], boundary: usize, percent: f64, min_track: f64) -> Option<ResizeStep> {
    let decrease = boundary.checked_sub(1)?;
    let increase = boundary.checked_sub(2)?;
    let shrunk = tracks.get(decrease)? - percent;
    let grown = tracks.get(increase)? + percent;

    let mut next = tracks.to_vec();
    if shrunk > min_track && grown > min_track {
        next[decrease] = shrunk;
        next[increase] = grown;
        Some(ResizeStep::Applied(next))
    } else {
        Some(ResizeStep::Rejected(next))
    }
}

#[derive(Debug, Clone)]
pub struct DragResizer {
    state: DragState,
    rect: ContainerRect,
    throttle: Throttle,
    min_track: f64,
}

impl DragResizer {
    pub fn new(rect: ContainerRect, settings: &ResizeSettings) -> Self {
        Self {
            state: DragState::Idle,
            rect,
            throttle: Throttle::new(settings.throttle_window()),
            min_track: settings.min_track,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn active_split(&self) -> Option<SplitKey> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(key) => Some(key),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.active_split().is_some()
    }

    pub fn rect(&self) -> ContainerRect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: ContainerRect) {
        self.rect = rect;
    }

    /// Start dragging the given split, replacing any active one
    pub fn begin(&mut self, key: SplitKey) {
        tracing::debug!("Drag started on {}", key);
        self.state = DragState::Dragging(key);
        self.throttle.reset();
    }

    pub fn pointer_down(&mut self, descriptor: &SplitDescriptor) {
        self.begin(descriptor.key());
    }

    /// Handle one pointer-move sample.
    ///
    /// Returns the replacement track vector for the dragged axis, or `None`
    /// when idle or when the sample falls inside the throttle window. A step
    /// that would violate the minimum track size still yields the unchanged
    /// vector.
    pub fn pointer_move(
        &mut self,
        delta: PointerDelta,
        rows: &[f64],
        cols: &[f64],
        now: Instant,
    ) -> Option<TrackUpdate> {
        let key = self.active_split()?;
        if !self.throttle.admit(now) {
            return None;
        }

        let (tracks, percent) = match key.orientation {
            Orientation::Horizontal => (rows, move_percent(delta.dy, self.rect.top, self.rect.height)),
            Orientation::Vertical => (cols, move_percent(delta.dx, self.rect.left, self.rect.width)),
        };

        let Some(step) = resize_tracks(tracks, key.index, percent, self.min_track) else {
            tracing::warn!(
                "Split {} has no adjacent tracks among {} {}s",
                key,
                tracks.len(),
                match key.orientation {
                    Orientation::Horizontal => "row",
                    Orientation::Vertical => "column",
                }
            );
            return None;
        };

        if !step.is_applied() {
            tracing::debug!("Rejected {}% step on {}: track would fall to minimum", percent, key);
        }

        let tracks = step.into_tracks();
        Some(match key.orientation {
            Orientation::Horizontal => TrackUpdate::rows(tracks),
            Orientation::Vertical => TrackUpdate::cols(tracks),
        })
    }

    /// End the gesture; returns whether a drag was active
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            tracing::debug!("Drag ended");
        }
        self.state = DragState::Idle;
        was_dragging
    }

    /// Drop any gesture in progress, e.g. when the grid goes away
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
        self.throttle.reset();
    }
}
