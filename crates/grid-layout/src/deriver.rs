// ABOUTME: Pure derivation of grid templates and split handle geometry.
// ABOUTME: Maps (rows, cols, splits) to render-ready descriptors in input order.

use grid_core::{Color, HandleStyle};
use serde::{Deserialize, Serialize};

use crate::split::{Orientation, SplitKey, SplitSpec};
use crate::template::TrackTemplate;

/// Pointer affordance shown over a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    ColResize,
    RowResize,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::ColResize => "col-resize",
            Cursor::RowResize => "row-resize",
        }
    }
}

/// Placement of a handle bar, offsets in percent of the container
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleGeometry {
    pub top: f64,
    pub left: f64,
    /// Distance from the bottom edge (vertical bars) or right edge
    /// (horizontal bars) at which the bar stops
    pub inset: f64,
    /// Bar thickness in pixels, centered on the boundary
    pub thickness: f64,
    pub cursor: Cursor,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitDescriptor {
    pub orientation: Orientation,
    /// 1-based boundary the handle sits on
    pub index: usize,
    pub geometry: HandleGeometry,
}

impl SplitDescriptor {
    pub fn key(&self) -> SplitKey {
        SplitKey {
            orientation: self.orientation,
            index: self.index,
        }
    }

    /// Offset of the boundary line along the resized axis
    pub fn position(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.geometry.top,
            Orientation::Vertical => self.geometry.left,
        }
    }

    /// Start and end of the bar along the perpendicular axis
    pub fn span(&self) -> (f64, f64) {
        let start = match self.orientation {
            Orientation::Horizontal => self.geometry.left,
            Orientation::Vertical => self.geometry.top,
        };
        (start, 100.0 - self.geometry.inset)
    }

    /// Inline style declarations for an absolutely positioned handle
    pub fn css(&self) -> String {
        let g = &self.geometry;
        let (far_edge, size, transform) = match self.orientation {
            Orientation::Vertical => ("bottom", "width", "translateX(-50%)"),
            Orientation::Horizontal => ("right", "height", "translateY(-50%)"),
        };
        format!(
            "position: absolute; background: {}; top: {}%; left: {}%; {}: {}%; {}: {}px; transform: {}; cursor: {};",
            g.color.to_css(),
            g.top,
            g.left,
            far_edge,
            g.inset,
            size,
            g.thickness,
            transform,
            g.cursor.as_css(),
        )
    }
}

/// Everything a renderer needs for one frame of the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub template: TrackTemplate,
    pub descriptors: Vec<SplitDescriptor>,
}

impl GridLayout {
    pub fn descriptor(&self, key: SplitKey) -> Option<&SplitDescriptor> {
        self.descriptors.iter().find(|d| d.key() == key)
    }
}

/// Derive the track template and the handle of every draggable split.
///
/// Invalid specs (ambiguous orientation, outer edge, outside the grid) are
/// skipped; the remaining descriptors keep the order of `splits`.
pub fn derive_layout(
    rows: &[f64],
    cols: &[f64],
    splits: &[SplitSpec],
    style: &HandleStyle,
) -> GridLayout {
    let descriptors = splits
        .iter()
        .filter_map(|spec| {
            let descriptor = describe(spec, rows, cols, style);
            if descriptor.is_none() {
                tracing::trace!(?spec, "Skipping split without a draggable boundary");
            }
            descriptor
        })
        .collect();

    GridLayout {
        template: TrackTemplate::new(rows, cols),
        descriptors,
    }
}

fn describe(
    spec: &SplitSpec,
    rows: &[f64],
    cols: &[f64],
    style: &HandleStyle,
) -> Option<SplitDescriptor> {
    let key = spec.key(rows.len(), cols.len())?;

    let top = offset_before(rows, spec.start_row);
    let left = offset_before(cols, spec.start_col);
    let (inset, cursor) = match key.orientation {
        Orientation::Vertical => (100.0 - offset_before(rows, spec.end_row), Cursor::ColResize),
        Orientation::Horizontal => (100.0 - offset_before(cols, spec.end_col), Cursor::RowResize),
    };

    Some(SplitDescriptor {
        orientation: key.orientation,
        index: key.index,
        geometry: HandleGeometry {
            top,
            left,
            inset,
            thickness: style.thickness,
            cursor,
            color: style.color,
        },
    })
}

/// Percent offset of a 1-based boundary: the sum of all tracks before it
fn offset_before(tracks: &[f64], boundary: usize) -> f64 {
    tracks.iter().take(boundary.saturating_sub(1)).sum()
}
