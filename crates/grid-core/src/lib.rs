// ABOUTME: Shared types and configuration for resizable-grid.
// ABOUTME: Defines colors, container geometry, and config file handling.

pub mod color;
pub mod config;
pub mod rect;

pub use color::Color;
pub use config::{ConfigError, GridConfig, HandleStyle, LayoutPreset, ResizeSettings};
pub use rect::ContainerRect;
