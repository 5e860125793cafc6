//! Bounded grid maze representation with text parsing and terminal rendering
//!
//! The crate models a maze as a rectangular grid of blocks with four-directional
//! movement, parses mazes from line-delimited text, and renders them back as
//! plain or colored terminal output.

#![forbid(unsafe_code)]

/// Input/output operations, rendering, and error handling
pub mod io;
/// Maze storage, locations, and movement
pub mod spatial;

pub use io::error::{MazeError, Result};
