//! Extraction constants and runtime configuration defaults

use crate::extraction::claims::ClaimPolicy;
use crate::io::error::{ExtractionError, Result, WithPath, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;

// Scan noise cutoff; shorter runs are never emitted
/// Shortest run the scanner turns into a wall segment
pub const MIN_RUN_LENGTH: usize = 3;

// Default values for configurable parameters
/// Wall color used by the source floor plans
pub const DEFAULT_TARGET_COLOR: [u8; 3] = [37, 54, 68];
/// Allowed per-channel deviation from the target color
pub const DEFAULT_TOLERANCE: u8 = 10;
/// Shortest wall kept after merging
pub const DEFAULT_MIN_WALL_LENGTH: usize = 30;
/// Thinnest wall kept after merging
pub const DEFAULT_MIN_WALL_THICKNESS: usize = 10;

// Directory conventions
/// Directory scanned for room images
pub const DEFAULT_SOURCE_DIR: &str = "rooms";
/// Directory receiving room JSON, debug rasters and the world file
pub const DEFAULT_OUTPUT_DIR: &str = "result";

// Output settings
/// Suffix added to debug raster file names
pub const DEBUG_SUFFIX: &str = "_debug";
/// File name of the aggregate world record
pub const WORLD_FILE_NAME: &str = "world.json";
/// Background of debug rasters
pub const DEBUG_BACKGROUND: [u8; 3] = [255, 255, 255];
/// Indentation used for every JSON file
pub const JSON_INDENT: &[u8] = b"    ";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Parameters of the wall extraction pipeline
///
/// Missing keys in a configuration file fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Wall color as RGB
    pub target_color: [u8; 3],
    /// Maximum absolute difference allowed on each channel
    pub tolerance: u8,
    /// Minimum wall length in pixels
    pub min_wall_length: usize,
    /// Minimum wall thickness in pixels
    pub min_wall_thickness: usize,
    /// Which scanned pixels are consumed by the first pass
    pub claim_policy: ClaimPolicy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            target_color: DEFAULT_TARGET_COLOR,
            tolerance: DEFAULT_TOLERANCE,
            min_wall_length: DEFAULT_MIN_WALL_LENGTH,
            min_wall_thickness: DEFAULT_MIN_WALL_THICKNESS,
            claim_policy: ClaimPolicy::default(),
        }
    }
}

impl ExtractionConfig {
    /// Load a configuration file, filling absent keys with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).with_path(path, "read configuration")?;
        serde_json::from_str(&contents).map_err(|source| ExtractionError::ConfigLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject thresholds that would keep nothing meaningful
    ///
    /// # Errors
    ///
    /// Returns an error if either wall threshold is zero
    pub fn validate(&self) -> Result<()> {
        if self.min_wall_length == 0 {
            return Err(invalid_parameter(
                "min_wall_length",
                &self.min_wall_length,
                &"must be at least 1",
            ));
        }
        if self.min_wall_thickness == 0 {
            return Err(invalid_parameter(
                "min_wall_thickness",
                &self.min_wall_thickness,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Parse `R,G,B` or `#RRGGBB` into a color triple
///
/// # Errors
///
/// Returns a description of the problem if the text is not a valid color
pub fn parse_color(text: &str) -> std::result::Result<[u8; 3], String> {
    let text = text.trim();

    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("'{text}' is not a #RRGGBB color"));
        }
        let mut color = [0u8; 3];
        for (index, channel) in color.iter_mut().enumerate() {
            let digits = hex
                .get(index * 2..index * 2 + 2)
                .ok_or_else(|| format!("'{text}' is not a #RRGGBB color"))?;
            *channel = u8::from_str_radix(digits, 16)
                .map_err(|e| format!("'{text}' has an invalid channel '{digits}': {e}"))?;
        }
        return Ok(color);
    }

    let channels: Vec<&str> = text.split(',').map(str::trim).collect();
    if channels.len() != 3 {
        return Err(format!("'{text}' must have exactly three channels"));
    }
    let mut color = [0u8; 3];
    for (channel, digits) in color.iter_mut().zip(channels) {
        *channel = digits
            .parse()
            .map_err(|e| format!("'{text}' has an invalid channel '{digits}': {e}"))?;
    }
    Ok(color)
}
