//! Plain and colored text rendering of mazes
//!
//! The plain rendering reproduces the parse format exactly, one
//! newline-terminated line per row. The colored rendering wraps each glyph in
//! an xterm-256 foreground sequence without changing the character mapping,
//! so both renderings show the same characters.

use std::fmt;
use std::io::Write;

use crate::io::configuration::{
    COLOR_COIN, COLOR_DANGER, COLOR_DRILL, COLOR_PLAYER, COLOR_STRUCTURE,
};
use crate::io::error::Result;
use crate::spatial::block::Block;
use crate::spatial::grid::Maze;

/// Foreground color index used for a block in the colored rendering
///
/// Floors, walls, and the exit share the muted structural color; the player
/// and its trail share the highlight color.
pub const fn color_index(block: Block) -> u8 {
    match block {
        Block::Coin => COLOR_COIN,
        Block::Danger => COLOR_DANGER,
        Block::Drill => COLOR_DRILL,
        Block::Empty | Block::Wall | Block::Exit => COLOR_STRUCTURE,
        Block::Player | Block::Body => COLOR_PLAYER,
    }
}

/// Write the maze as plain rows of glyphs
///
/// # Errors
///
/// Returns [`MazeError::Render`](crate::MazeError::Render) when the writer
/// fails.
pub fn write_plain(maze: &Maze, writer: &mut impl Write) -> Result<()> {
    write!(writer, "{maze}")?;
    Ok(())
}

/// Write the maze with every glyph styled by its block category
///
/// # Errors
///
/// Returns [`MazeError::Render`](crate::MazeError::Render) when the writer
/// fails.
pub fn write_colored(maze: &Maze, writer: &mut impl Write) -> Result<()> {
    for row in maze.blocks.outer_iter() {
        for block in row.iter() {
            write!(
                writer,
                "\x1b[38;5;{}m{}\x1b[0m",
                color_index(*block),
                block.glyph()
            )?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocks.outer_iter() {
            for block in row.iter() {
                write!(f, "{}", block.glyph())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::parser::parse_maze;

    #[test]
    fn plain_rendering_matches_display() {
        let maze = parse_maze("#o#\n._.\n").expect("well-formed maze");
        let mut rendered = Vec::new();
        write_plain(&maze, &mut rendered).expect("write to memory");
        assert_eq!(rendered, maze.to_string().into_bytes());
    }

    #[test]
    fn colored_rendering_keeps_the_glyphs() {
        let maze = parse_maze("#$\n!.\n").expect("well-formed maze");
        let mut rendered = Vec::new();
        write_colored(&maze, &mut rendered).expect("write to memory");
        let text = String::from_utf8(rendered).expect("valid utf-8");

        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("\x1b[38;5;34m$\x1b[0m"));
        assert!(text.contains("\x1b[38;5;245m#\x1b[0m"));
        assert!(text.contains("\x1b[38;5;196m!\x1b[0m"));
    }
}
