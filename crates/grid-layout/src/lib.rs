// ABOUTME: Grid layout derivation for resizable-grid.
// ABOUTME: Turns track percentages and split specs into templates and handle geometry.

mod cache;
mod deriver;
mod split;
mod template;

pub use cache::LayoutCache;
pub use deriver::{derive_layout, Cursor, GridLayout, HandleGeometry, SplitDescriptor};
pub use split::{Orientation, SplitKey, SplitSpec};
pub use template::TrackTemplate;
