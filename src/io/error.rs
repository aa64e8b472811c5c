//! Error types for board generation and persistence

use crate::spatial::tiles::Coordinate;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all board operations
#[derive(Debug)]
pub enum BoardError {
    /// A record was inserted at an already-occupied coordinate
    ///
    /// Always a caller logic error: the generator checks occupancy before
    /// placing, so this never arises from generation itself.
    DuplicateCoordinate {
        /// Coordinate that was already occupied
        coordinate: Coordinate,
    },

    /// The legal-category set for a cell came out empty
    ///
    /// The default category is legal everywhere, so this denotes a broken
    /// internal invariant rather than a recoverable condition.
    NoLegalCategory {
        /// Cell whose legal set was empty
        coordinate: Coordinate,
    },

    /// A snapshot held two cells with the same coordinate
    ///
    /// Denotes a corrupted or hand-edited persisted snapshot; restore aborts
    /// with the target board left empty.
    DuplicateSnapshotKey {
        /// Persisted position that occurred more than once
        position: [i32; 3],
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

    /// An operation needing placed tiles ran against an empty board
    EmptyBoard {
        /// Description of the operation that was attempted
        operation: &'static str,
    },

    /// Failed to read a snapshot file from disk
    SnapshotRead {
        /// Path to the snapshot file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write a snapshot file to disk
    SnapshotWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A snapshot file held malformed JSON
    SnapshotParse {
        /// Path to the snapshot file
        path: PathBuf,
        /// Underlying decode error
        source: serde_json::Error,
    },

    /// A snapshot could not be encoded to JSON
    SnapshotEncode {
        /// Underlying encode error
        source: serde_json::Error,
    },

    /// Failed to save the preview image to disk
    PreviewExport {
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

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCoordinate { coordinate } => {
                write!(f, "Coordinate {coordinate} is already occupied")
            }
            Self::NoLegalCategory { coordinate } => {
                write!(f, "No legal category at {coordinate}; the default category invariant is broken")
            }
            Self::DuplicateSnapshotKey { position } => {
                write!(
                    f,
                    "Snapshot contains duplicate entries for position [{}, {}, {}]",
                    position[0], position[1], position[2]
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyBoard { operation } => {
                write!(f, "Cannot {operation}: the board has no placed tiles")
            }
            Self::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot '{}': {source}", path.display())
            }
            Self::SnapshotWrite { path, source } => {
                write!(f, "Failed to write snapshot '{}': {source}", path.display())
            }
            Self::SnapshotParse { path, source } => {
                write!(f, "Failed to parse snapshot '{}': {source}", path.display())
            }
            Self::SnapshotEncode { source } => {
                write!(f, "Failed to encode snapshot: {source}")
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
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

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SnapshotRead { source, .. }
            | Self::SnapshotWrite { source, .. }
            | Self::FileSystem { source, .. } => Some(source),
            Self::SnapshotParse { source, .. } | Self::SnapshotEncode { source } => Some(source),
            Self::PreviewExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for board operation results
pub type Result<T> = std::result::Result<T, BoardError>;

impl From<std::io::Error> for BoardError {
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
) -> BoardError {
    BoardError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_coordinate_display() {
        let err = BoardError::DuplicateCoordinate {
            coordinate: Coordinate::new(3, 7),
        };
        assert_eq!(err.to_string(), "Coordinate (3, 7) is already occupied");
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("width", &0, &"board dimensions must be positive");
        match err {
            BoardError::InvalidParameter {
                parameter, value, ..
            } => {
                assert_eq!(parameter, "width");
                assert_eq!(value, "0");
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }
}
