//! Locations and four-directional movement
//!
//! Coordinates are signed so that a neighbor can always be computed without
//! bounds knowledge; validity against a particular maze is a separate check
//! performed by [`Maze::contains`](crate::spatial::grid::Maze::contains).

use std::fmt;

/// A (row, column) coordinate pair identifying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Row index, increasing downward
    pub row: i32,
    /// Column index, increasing rightward
    pub col: i32,
}

impl Location {
    /// Create a location from row and column indices
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The location one step in the given direction
    ///
    /// No bounds are consulted; validate the result against a maze before
    /// using it as a cell index.
    pub const fn neighbor(self, direction: Move) -> Self {
        self.neighbor_at(direction, 1)
    }

    /// The location `steps` cells away in the given direction
    ///
    /// Zero steps or [`Move::Stay`] return the location unchanged.
    pub const fn neighbor_at(self, direction: Move, steps: i32) -> Self {
        let (row_delta, col_delta) = direction.offsets();
        Self {
            row: self.row + row_delta * steps,
            col: self.col + col_delta * steps,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A movement direction between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Move {
    /// No movement
    #[default]
    Stay,
    /// One column leftward
    Left,
    /// One row upward
    Up,
    /// One column rightward
    Right,
    /// One row downward
    Down,
}

impl Move {
    /// The four cardinal directions, excluding [`Move::Stay`]
    pub const CARDINAL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// The direction that undoes this one
    ///
    /// Applying it twice returns the original direction; [`Move::Stay`] maps
    /// to itself.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Stay => Self::Stay,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Row and column deltas of a single step in this direction
    pub const fn offsets(self) -> (i32, i32) {
        match self {
            Self::Stay => (0, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// The cardinal move that takes `from` to `to`
    ///
    /// Returns [`Move::Stay`] when the locations coincide or do not share a
    /// row or column, since no single cardinal move links them. The distance
    /// between the locations is not considered, only the axis and sign.
    pub const fn between(from: Location, to: Location) -> Self {
        let row_delta = to.row - from.row;
        let col_delta = to.col - from.col;

        if col_delta == 0 {
            if row_delta == 0 {
                Self::Stay
            } else if row_delta > 0 {
                Self::Down
            } else {
                Self::Up
            }
        } else if row_delta == 0 {
            if col_delta > 0 { Self::Right } else { Self::Left }
        } else {
            Self::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_an_involution() {
        for direction in Move::CARDINAL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Move::Stay.opposite(), Move::Stay);
    }

    #[test]
    fn moving_and_returning_restores_the_location() {
        let origin = Location::new(4, 7);
        for direction in Move::CARDINAL {
            let there = origin.neighbor(direction);
            assert_ne!(there, origin);
            assert_eq!(there.neighbor(direction.opposite()), origin);
        }
    }

    #[test]
    fn stay_has_no_effect() {
        let origin = Location::new(2, 3);
        assert_eq!(origin.neighbor(Move::Stay), origin);
        assert_eq!(origin.neighbor_at(Move::Right, 0), origin);
    }

    #[test]
    fn multi_step_neighbors_scale_the_offset() {
        let origin = Location::new(5, 5);
        assert_eq!(origin.neighbor_at(Move::Up, 3), Location::new(2, 5));
        assert_eq!(origin.neighbor_at(Move::Right, 2), Location::new(5, 7));
    }

    #[test]
    fn between_recovers_the_axis_and_sign() {
        let origin = Location::new(3, 3);
        for direction in Move::CARDINAL {
            assert_eq!(Move::between(origin, origin.neighbor(direction)), direction);
            assert_eq!(
                Move::between(origin, origin.neighbor_at(direction, 4)),
                direction
            );
        }
        assert_eq!(Move::between(origin, origin), Move::Stay);
        // Diagonal pairs are not linked by a single cardinal move
        assert_eq!(Move::between(origin, Location::new(4, 4)), Move::Stay);
    }
}
