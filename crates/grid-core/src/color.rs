// ABOUTME: Color representation for split handles.
// ABOUTME: Stores linear RGBA and renders CSS color strings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Salmon handle color (#ff9988)
    pub const SALMON: Self = Self::rgb(1.0, 0.6, 0.533);

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Format as `#rrggbb`, or `rgba(..)` when not fully opaque
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a.clamp(0.0, 1.0)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::SALMON
    }
}
