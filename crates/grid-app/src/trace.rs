// ABOUTME: Scripted pointer traces for the demo host.
// ABOUTME: Parses JSON event lists that stand in for native pointer events.

use std::path::Path;

use grid_core::ContainerRect;
use grid_layout::{Orientation, SplitKey};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraceEvent {
    /// Attach the grid to a container of this size
    Mount(ContainerRect),
    /// Re-measure the container without remounting
    Rect(ContainerRect),
    /// Pointer pressed on the handle with this key
    Down { orientation: Orientation, index: usize },
    /// Pointer moved by (dx, dy) pixels, `at_ms` after the trace started
    Move {
        dx: f64,
        dy: f64,
        #[serde(default)]
        at_ms: u64,
    },
    Up,
    Unmount,
}

impl TraceEvent {
    pub fn down(key: SplitKey) -> Self {
        TraceEvent::Down {
            orientation: key.orientation,
            index: key.index,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("Failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse trace: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Move at {at_ms}ms comes before the previous event at {previous_ms}ms")]
    OutOfOrder { at_ms: u64, previous_ms: u64 },
}

pub fn parse(json: &str) -> Result<Vec<TraceEvent>, TraceError> {
    let events: Vec<TraceEvent> = serde_json::from_str(json)?;

    let mut previous_ms = 0;
    for event in &events {
        if let TraceEvent::Move { at_ms, .. } = *event {
            if at_ms < previous_ms {
                return Err(TraceError::OutOfOrder { at_ms, previous_ms });
            }
            previous_ms = at_ms;
        }
    }

    Ok(events)
}

pub fn load(path: &Path) -> Result<Vec<TraceEvent>, TraceError> {
    let json = std::fs::read_to_string(path)?;
    parse(&json)
}

/// Drag the split at `key` in `steps` moves of (dx, dy), spaced `spacing_ms` apart
pub fn drag(key: SplitKey, dx: f64, dy: f64, steps: u64, spacing_ms: u64) -> Vec<TraceEvent> {
    let mut events = vec![TraceEvent::down(key)];
    events.extend((0..steps).map(|step| TraceEvent::Move {
        dx,
        dy,
        at_ms: step * spacing_ms,
    }));
    events.push(TraceEvent::Up);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_must_be_in_time_order() {
        let events = parse(
            r#"[
                {"type": "mount", "top": 0, "left": 0, "width": 800, "height": 600},
                {"type": "down", "orientation": "vertical", "index": 2},
                {"type": "move", "dx": 8, "dy": 0, "at_ms": 30},
                {"type": "move", "dx": 8, "dy": 0},
                {"type": "rect", "top": 10, "left": 10, "width": 400, "height": 300},
                {"type": "up"},
                {"type": "unmount"}
            ]"#,
        );

        // The second move defaults to 0ms, which is before 30ms
        assert!(matches!(
            events,
            Err(TraceError::OutOfOrder {
                at_ms: 0,
                previous_ms: 30
            })
        ));
    }

    #[test]
    fn parses_ordered_trace() {
        let events = parse(
            r#"[
                {"type": "mount", "top": 0, "left": 0, "width": 800, "height": 600},
                {"type": "down", "orientation": "horizontal", "index": 3},
                {"type": "move", "dx": 0, "dy": -4, "at_ms": 0},
                {"type": "up"}
            ]"#,
        )
        .unwrap();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0], TraceEvent::Mount(ContainerRect::sized(800.0, 600.0)));
        assert_eq!(
            events[1],
            TraceEvent::Down {
                orientation: Orientation::Horizontal,
                index: 3
            }
        );
    }

    #[test]
    fn unknown_event_is_an_error() {
        assert!(matches!(parse(r#"[{"type": "wheel"}]"#), Err(TraceError::Json(_))));
    }

    #[test]
    fn drag_helper_brackets_moves() {
        let key = SplitKey {
            orientation: Orientation::Vertical,
            index: 2,
        };
        let events = drag(key, 5.0, 0.0, 3, 25);

        assert_eq!(events.len(), 5);
        assert_eq!(events[0], TraceEvent::down(key));
        assert_eq!(
            events[3],
            TraceEvent::Move {
                dx: 5.0,
                dy: 0.0,
                at_ms: 50
            }
        );
        assert_eq!(events[4], TraceEvent::Up);
    }
}
