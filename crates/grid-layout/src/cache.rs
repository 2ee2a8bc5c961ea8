// ABOUTME: Memoization of derived grid layouts.
// ABOUTME: Reuses the last layout while rows, cols, splits and style are unchanged.

use grid_core::HandleStyle;

use crate::deriver::{derive_layout, GridLayout};
use crate::split::SplitSpec;

#[derive(Debug)]
struct CachedLayout {
    rows: Vec<f64>,
    cols: Vec<f64>,
    splits: Vec<SplitSpec>,
    style: HandleStyle,
    layout: GridLayout,
}

/// Single-entry cache keyed on structural equality of the inputs.
///
/// A render cycle normally derives the same layout many times between drag
/// steps, so one entry is enough.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entry: Option<CachedLayout>,
    pub hits: u64,
    pub misses: u64,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_derive(
        &mut self,
        rows: &[f64],
        cols: &[f64],
        splits: &[SplitSpec],
        style: &HandleStyle,
    ) -> &GridLayout {
        let entry = match self.entry.take() {
            Some(entry)
                if entry.rows == rows
                    && entry.cols == cols
                    && entry.splits == splits
                    && entry.style == *style =>
            {
                self.hits += 1;
                entry
            }
            _ => {
                self.misses += 1;
                CachedLayout {
                    rows: rows.to_vec(),
                    cols: cols.to_vec(),
                    splits: splits.to_vec(),
                    style: style.clone(),
                    layout: derive_layout(rows, cols, splits, style),
                }
            }
        };

        &self.entry.insert(entry).layout
    }

    /// Drop the cached layout so the next lookup derives again
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
