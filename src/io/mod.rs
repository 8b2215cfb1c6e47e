//! Input/output glue around the extraction pipeline
//!
//! This module contains everything that touches the outside world:
//! - Command-line parsing and the batch driver
//! - Configuration defaults and loading
//! - Image decoding, debug rendering and JSON output
//! - Progress display and error types

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types and path context
pub mod error;
/// Room image loading and debug raster rendering
pub mod image;
/// JSON output for room and world records
pub mod json;
/// Batch progress display
pub mod progress;
