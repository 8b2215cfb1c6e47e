//! Error types and path context for wall extraction and batch I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all extraction and batch operations
#[derive(Debug)]
pub enum ExtractionError {
    /// Failed to load a room image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a debug raster to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Failed to serialize a room or world record
    JsonExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    ConfigLoad {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying deserialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl ExtractionError {
    /// File the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ImageLoad { path, .. }
            | Self::ImageExport { path, .. }
            | Self::JsonExport { path, .. }
            | Self::ConfigLoad { path, .. }
            | Self::FileSystem { path, .. } => Some(path),
            Self::InvalidParameter { .. } => None,
        }
    }

    /// Whether the error stems from configuration rather than a room file
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::ConfigLoad { .. } | Self::InvalidParameter { .. })
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export debug image to '{}': {source}",
                    path.display()
                )
            }
            Self::JsonExport { path, source } => {
                write!(f, "Failed to write JSON to '{}': {source}", path.display())
            }
            Self::ConfigLoad { path, source } => {
                write!(
                    f,
                    "Failed to read configuration '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::JsonExport { source, .. } | Self::ConfigLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for extraction results
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Attaches the offending path to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`ExtractionError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| ExtractionError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ExtractionError {
    ExtractionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
