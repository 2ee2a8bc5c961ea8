// ABOUTME: Grid track template strings.
// ABOUTME: Renders row and column percentages as `rows / cols` sizing templates.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTemplate {
    pub rows: String,
    pub columns: String,
}

impl TrackTemplate {
    pub fn new(rows: &[f64], cols: &[f64]) -> Self {
        Self {
            rows: join_percentages(rows),
            columns: join_percentages(cols),
        }
    }
}

impl std::fmt::Display for TrackTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.rows, self.columns)
    }
}

fn join_percentages(tracks: &[f64]) -> String {
    tracks
        .iter()
        .map(|track| format!("{track}%"))
        .collect::<Vec<_>>()
        .join(" ")
}
