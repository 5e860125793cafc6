//! Cell values and their canonical glyph mapping
//!
//! Every block kind corresponds to exactly one character in the text format,
//! keeping parsing and rendering symmetric.

use std::fmt;

/// A single cell value in a [`Maze`](crate::spatial::grid::Maze)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Block {
    /// Open floor
    #[default]
    Empty,
    /// Impassable wall
    Wall,
    /// Collectible coin
    Coin,
    /// Hazard cell
    Danger,
    /// Drill power-up
    Drill,
    /// Player starting marker
    Player,
    /// Goal marker
    Exit,
    /// Trail left behind by the player
    Body,
}

/// All block kinds in canonical order
pub const ALL_BLOCKS: [Block; 8] = [
    Block::Empty,
    Block::Wall,
    Block::Coin,
    Block::Danger,
    Block::Drill,
    Block::Player,
    Block::Exit,
    Block::Body,
];

impl Block {
    /// Canonical character for this block in the text format
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Coin => '$',
            Self::Danger => '!',
            Self::Drill => 'T',
            Self::Player => 'o',
            Self::Exit => '_',
            Self::Body => '*',
        }
    }

    /// Decode a character from the text format
    ///
    /// A space is accepted as an alias for [`Block::Empty`] so that mazes
    /// drawn with whitespace floors parse unchanged; rendering always emits
    /// the canonical glyph. Returns `None` for any unrecognized character.
    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | ' ' => Some(Self::Empty),
            '#' => Some(Self::Wall),
            '$' => Some(Self::Coin),
            '!' => Some(Self::Danger),
            'T' => Some(Self::Drill),
            'o' => Some(Self::Player),
            '_' => Some(Self::Exit),
            '*' => Some(Self::Body),
            _ => None,
        }
    }

    /// Whether the player can occupy this block
    pub const fn traversable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_decode_to_their_block() {
        for block in ALL_BLOCKS {
            assert_eq!(Block::from_glyph(block.glyph()), Some(block));
        }
    }

    #[test]
    fn space_is_an_empty_alias() {
        assert_eq!(Block::from_glyph(' '), Some(Block::Empty));
        assert_eq!(Block::Empty.glyph(), '.');
    }

    #[test]
    fn unknown_glyphs_are_rejected() {
        assert_eq!(Block::from_glyph('?'), None);
        assert_eq!(Block::from_glyph('\t'), None);
    }

    #[test]
    fn only_walls_block_traversal() {
        for block in ALL_BLOCKS {
            assert_eq!(block.traversable(), block != Block::Wall);
        }
    }
}
