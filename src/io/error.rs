//! Error types and context management for grid operations

use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use crate::io::configuration::MAX_TILE_SIZE;

/// Main error type for all tile grid operations
///
/// Only construction, tile-size changes and file I/O can fail. Tile queries
/// report out-of-bounds access through sentinel values instead.
#[derive(Debug)]
pub enum FieldError {
    /// Tile pixel size must lie in `1..=MAX_TILE_SIZE` on both axes
    InvalidTileSize {
        /// Requested tile width in pixels
        width: i32,
        /// Requested tile height in pixels
        height: i32,
    },

    /// Tile array doesn't describe a rectangular, non-empty grid
    InvalidMapData {
        /// Description of what's wrong with the tile data
        reason: String,
    },

    /// A map file token could not be read as a tile code
    MapParse {
        /// One-based line number of the offending token
        line: usize,
        /// The token as it appeared in the file
        token: String,
        /// Underlying integer parse error
        source: ParseIntError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile code has no entry in a color palette
    InvalidTileIndex {
        /// The tile code without a palette entry
        index: i32,
        /// Number of palette entries available
        max_tiles: usize,
    },

    /// Failed to save a grid snapshot to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileSize { width, height } => {
                write!(
                    f,
                    "Invalid tile size {width}x{height}: both sides must be between 1 and {MAX_TILE_SIZE}"
                )
            }
            Self::InvalidMapData { reason } => {
                write!(f, "Invalid map data: {reason}")
            }
            Self::MapParse { line, token, .. } => {
                write!(f, "Invalid tile code '{token}' on line {line}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(
                    f,
                    "Tile code {index} has no palette entry (palette size: {max_tiles})"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
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
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::MapParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, FieldError>;

/// Attaches a path and operation to file system failures
pub trait WithContext<T> {
    /// Record which path and operation produced an I/O error
    ///
    /// # Errors
    ///
    /// Propagates the original error, with `path` and `operation` filled in
    /// when it is a file system error
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<FieldError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            FieldError::FileSystem { source, .. } => FieldError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            FieldError::ImageExport { source, .. } => FieldError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<image::ImageError> for FieldError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FieldError {
    FieldError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid map data error
pub fn invalid_map_data(reason: &impl ToString) -> FieldError {
    FieldError::InvalidMapData {
        reason: reason.to_string(),
    }
}
