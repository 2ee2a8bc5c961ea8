// ABOUTME: Drag-to-resize handling for resizable-grid.
// ABOUTME: Explicit drag state machine, move throttling, and the host-facing grid component.

mod component;
mod resizer;
mod throttle;

pub use component::{GridFrame, GridProps, ResizableGrid};
pub use resizer::{move_percent, resize_tracks, DragResizer, DragState, PointerDelta, ResizeStep, TrackUpdate};
pub use throttle::Throttle;
