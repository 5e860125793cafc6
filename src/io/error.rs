//! Error types for maze operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::location::Location;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Requested dimensions cannot back a maze
    InvalidDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },

    /// A location fell outside the maze bounds
    OutOfBounds {
        /// The offending location
        location: Location,
        /// Width of the maze that was accessed
        width: usize,
        /// Height of the maze that was accessed
        height: usize,
    },

    /// A row in the textual input differs in length from the first row
    RaggedRow {
        /// Zero-based row index of the offending line
        row: usize,
        /// Length of the first row, which fixes the maze width
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// The textual input contains a character with no block mapping
    UnknownGlyph {
        /// The unrecognized character
        glyph: char,
        /// Zero-based row index where it appeared
        row: usize,
        /// Zero-based column index where it appeared
        column: usize,
    },

    /// The textual input contains no rows
    EmptyInput,

    /// No maze target was given on the command line
    NoTarget,

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Writing a rendering to the output stream failed
    Render {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid maze dimensions {width}x{height}")
            }
            Self::OutOfBounds {
                location,
                width,
                height,
            } => {
                write!(
                    f,
                    "Location {location} is outside the {width}x{height} maze"
                )
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {row} has {found} cells but the maze is {expected} cells wide"
                )
            }
            Self::UnknownGlyph { glyph, row, column } => {
                write!(f, "Unknown glyph {glyph:?} at row {row}, column {column}")
            }
            Self::EmptyInput => {
                write!(f, "Maze text contains no rows")
            }
            Self::NoTarget => {
                write!(f, "No maze target given; pass a file, a directory, or --blank")
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
            Self::Render { source } => {
                write!(f, "Failed to write rendering: {source}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } | Self::Render { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::Render { source: err }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;
