// ABOUTME: ASCII preview of a derived grid layout.
// ABOUTME: Draws track boundaries and split handles onto a character canvas.

use grid_layout::{GridLayout, Orientation};

const BOUNDARY: char = '.';
const VERTICAL_HANDLE: char = '║';
const HORIZONTAL_HANDLE: char = '═';
const CROSSING: char = '╬';

struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    fn get(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    fn set(&mut self, x: usize, y: usize, c: char) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = c;
        }
    }

    /// Column for a horizontal percentage
    fn x(&self, percent: f64) -> usize {
        scale(percent, self.width)
    }

    /// Line for a vertical percentage
    fn y(&self, percent: f64) -> usize {
        scale(percent, self.height)
    }

    fn border(&mut self) {
        let (right, bottom) = (self.width - 1, self.height - 1);
        for x in 0..self.width {
            self.set(x, 0, '-');
            self.set(x, bottom, '-');
        }
        for y in 0..self.height {
            self.set(0, y, '|');
            self.set(right, y, '|');
        }
        for (x, y) in [(0, 0), (right, 0), (0, bottom), (right, bottom)] {
            self.set(x, y, '+');
        }
    }

    fn into_string(self) -> String {
        self.cells
            .chunks(self.width)
            .map(|line| line.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn scale(percent: f64, size: usize) -> usize {
    let max = size.saturating_sub(1) as f64;
    (percent / 100.0 * max).round().clamp(0.0, max) as usize
}

/// Inner boundary offsets of a track vector, in percent
fn boundaries(tracks: &[f64]) -> Vec<f64> {
    tracks
        .iter()
        .take(tracks.len().saturating_sub(1))
        .scan(0.0, |offset, track| {
            *offset += track;
            Some(*offset)
        })
        .collect()
}

/// Render `layout` into a `width` x `height` block of text.
///
/// Returns an empty string when the canvas is too small to hold a border.
pub fn render_ascii(layout: &GridLayout, rows: &[f64], cols: &[f64], width: usize, height: usize) -> String {
    if width < 2 || height < 2 {
        return String::new();
    }

    let mut canvas = Canvas::new(width, height);
    canvas.border();

    for offset in boundaries(rows) {
        let y = canvas.y(offset);
        for x in 1..width - 1 {
            canvas.set(x, y, BOUNDARY);
        }
    }
    for offset in boundaries(cols) {
        let x = canvas.x(offset);
        for y in 1..height - 1 {
            canvas.set(x, y, BOUNDARY);
        }
    }

    for descriptor in &layout.descriptors {
        let (start, end) = descriptor.span();
        match descriptor.orientation {
            Orientation::Horizontal => {
                let y = canvas.y(descriptor.position());
                for x in canvas.x(start)..=canvas.x(end) {
                    let c = if canvas.get(x, y) == VERTICAL_HANDLE { CROSSING } else { HORIZONTAL_HANDLE };
                    canvas.set(x, y, c);
                }
            }
            Orientation::Vertical => {
                let x = canvas.x(descriptor.position());
                for y in canvas.y(start)..=canvas.y(end) {
                    let c = if canvas.get(x, y) == HORIZONTAL_HANDLE { CROSSING } else { VERTICAL_HANDLE };
                    canvas.set(x, y, c);
                }
            }
        }
    }

    canvas.into_string()
}
