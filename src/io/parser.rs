//! Maze construction from line-delimited text
//!
//! Each line of the input is one row of the maze; the first row fixes the
//! width and every character must map to a block. Nothing is returned unless
//! the whole input validates, so a parse failure never yields a partial maze.

use std::path::Path;
use std::str::FromStr;

use ndarray::Array2;

use crate::io::configuration::MAX_MAZE_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::block::Block;
use crate::spatial::grid::Maze;
use crate::spatial::location::Location;

/// Parse a maze from its textual representation
///
/// The number of lines becomes the maze height and the length of the first
/// line its width. A trailing newline is tolerated. Player and exit markers
/// are recorded as the maze start and exit; when a marker appears more than
/// once, the last occurrence wins.
///
/// # Errors
///
/// Returns [`MazeError::UnknownGlyph`] for a character with no block mapping,
/// [`MazeError::RaggedRow`] when a row's length differs from the first row's,
/// [`MazeError::EmptyInput`] when the text contains no rows, and
/// [`MazeError::InvalidDimensions`] when a dimension exceeds
/// [`MAX_MAZE_DIMENSION`].
pub fn parse_maze(text: &str) -> Result<Maze> {
    let mut blocks = Vec::new();
    let mut width = 0;
    let mut height = 0;
    let mut start = None;
    let mut exit = None;

    for (row, line) in text.lines().enumerate() {
        let mut row_length = 0;

        for (column, glyph) in line.chars().enumerate() {
            let block = Block::from_glyph(glyph).ok_or(MazeError::UnknownGlyph {
                glyph,
                row,
                column,
            })?;

            match block {
                Block::Player => start = Some(Location::new(row as i32, column as i32)),
                Block::Exit => exit = Some(Location::new(row as i32, column as i32)),
                _ => {}
            }

            blocks.push(block);
            row_length += 1;
        }

        if row == 0 {
            width = row_length;
        } else if row_length != width {
            return Err(MazeError::RaggedRow {
                row,
                expected: width,
                found: row_length,
            });
        }

        height += 1;
    }

    if width == 0 || height == 0 {
        return Err(MazeError::EmptyInput);
    }

    if width > MAX_MAZE_DIMENSION || height > MAX_MAZE_DIMENSION {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    // Shape mismatch is unreachable here; every row was length-checked above
    let blocks = Array2::from_shape_vec((height, width), blocks)
        .map_err(|_shape| MazeError::InvalidDimensions { width, height })?;

    Ok(Maze {
        blocks,
        start,
        exit,
    })
}

/// Load and parse a maze from a text file
///
/// # Errors
///
/// Returns [`MazeError::FileSystem`] when the file cannot be read, or any
/// error [`parse_maze`] reports for its contents.
pub fn load_maze(path: &Path) -> Result<Maze> {
    let text = std::fs::read_to_string(path).map_err(|e| MazeError::FileSystem {
        path: path.to_path_buf(),
        operation: "read maze file",
        source: e,
    })?;

    parse_maze(&text)
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_maze(s)
    }
}
