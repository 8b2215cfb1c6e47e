//! Wall extraction from color-coded floor plan images
//!
//! Stages run strictly forward: mask, scan, merge, filter.

/// Claimed-pixel grid and claim policy shared by the scan passes
pub mod claims;
/// Size-based wall filtering
pub mod filter;
/// Color mask construction
pub mod mask;
/// Merging of stacked stripes into thick walls
pub mod merger;
/// Pure image-to-room pipeline
pub mod pipeline;
/// Row and column run scanning
pub mod scanner;

pub use claims::{ClaimGrid, ClaimPolicy};
pub use mask::ColorMask;
pub use pipeline::{WallExtraction, build_room, extract_walls};
