//! Extraction of rectangular wall primitives from color-coded floor plan images
//!
//! Each room image is masked against a wall color, scanned into one-pixel
//! runs along rows and then columns, merged into thick rectangles and filtered
//! by size. The resulting room records are written as JSON together with a
//! debug raster, and gathered into a single world file.

#![forbid(unsafe_code)]

/// Mask, scan, merge and filter stages of wall extraction
pub mod extraction;
/// Input/output operations, configuration and error handling
pub mod io;
/// Serializable wall, room and world records
pub mod model;

pub use io::configuration::ExtractionConfig;
pub use io::error::{ExtractionError, Result};
