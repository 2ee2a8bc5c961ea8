// ABOUTME: Split specifications and their classification.
// ABOUTME: Decides orientation and whether a split may be dragged at all.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Lies on a row boundary; dragging it resizes rows
    Horizontal,
    /// Lies on a column boundary; dragging it resizes columns
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Identifies a split handle: its orientation plus the 1-based boundary it sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitKey {
    pub orientation: Orientation,
    pub index: usize,
}

impl std::fmt::Display for SplitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.orientation.as_str(), self.index)
    }
}

/// A separator line between grid boundaries, using 1-based coordinates.
///
/// Boundary `i` sits before track `i`, so a grid with `n` tracks has
/// boundaries `1..=n + 1`. Exactly one axis must be degenerate: equal rows
/// make a horizontal split, equal columns a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitSpec {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl SplitSpec {
    pub const fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Orientation implied by the coordinates, `None` when both or neither axis is degenerate
    pub fn orientation(&self) -> Option<Orientation> {
        match (self.start_row == self.end_row, self.start_col == self.end_col) {
            (true, false) => Some(Orientation::Horizontal),
            (false, true) => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Key of the draggable handle for this split, if it has one.
    ///
    /// Splits on the outer edge of the grid, or beyond it, are never draggable.
    pub fn key(&self, row_count: usize, col_count: usize) -> Option<SplitKey> {
        let orientation = self.orientation()?;
        let (index, track_count) = match orientation {
            Orientation::Horizontal => (self.start_row, row_count),
            Orientation::Vertical => (self.start_col, col_count),
        };
        if index < 2 || index > track_count {
            return None;
        }
        Some(SplitKey { orientation, index })
    }
}

impl From<[usize; 4]> for SplitSpec {
    fn from([start_row, start_col, end_row, end_col]: [usize; 4]) -> Self {
        Self::new(start_row, start_col, end_row, end_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_rows_make_horizontal_split() {
        let spec = SplitSpec::new(2, 2, 2, 3);
        assert_eq!(spec.orientation(), Some(Orientation::Horizontal));
    }

    #[test]
    fn equal_cols_make_vertical_split() {
        let spec = SplitSpec::new(1, 2, 4, 2);
        assert_eq!(spec.orientation(), Some(Orientation::Vertical));
    }

    #[test]
    fn degenerate_specs_have_no_orientation() {
        assert_eq!(SplitSpec::new(2, 2, 2, 2).orientation(), None);
        assert_eq!(SplitSpec::new(1, 2, 3, 4).orientation(), None);
    }

    #[test]
    fn outer_boundaries_are_not_draggable() {
        let kept: Vec<usize> = (1..=4)
            .filter_map(|col| SplitSpec::new(1, col, 4, col).key(3, 3))
            .map(|key| key.index)
            .collect();
        assert_eq!(kept, vec![2, 3]);
    }

    #[test]
    fn boundaries_past_the_grid_are_rejected() {
        assert_eq!(SplitSpec::new(0, 1, 0, 3).key(3, 3), None);
        assert_eq!(SplitSpec::new(7, 1, 7, 3).key(3, 3), None);
    }

    #[test]
    fn key_formats_as_render_key() {
        let key = SplitSpec::new(2, 2, 2, 3).key(3, 3).unwrap();
        assert_eq!(key.to_string(), "horizontal-2");
    }
}
