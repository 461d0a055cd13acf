//! Steps between cells of a rectangular board.

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A single move between edge-adjacent cells of a rectangular board.
///
/// Diagonal moves do not exist, and a step off the edge of the board lands on a [`Location`] the board will not recognize.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward row 0.
    Up,
    /// Away from row 0.
    Down,
    /// Toward column 0.
    Left,
    /// Away from column 0.
    Right,
    // switch it up like nintendo
}

impl SquareStep {
    /// Attempt the step from `location` in the direction specified by `self` and return the resultant [`Location`].
    ///
    /// Stepping up from row 0 or left from column 0 wraps around to a huge coordinate, which is never in bounds.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((-1, 0)),
            Self::Down => location.offset_by((1, 0)),
            Self::Left => location.offset_by((0, -1)),
            Self::Right => location.offset_by((0, 1)),
        }
    }

    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in order.
    ///
    /// Nothing here knows about board bounds; see [`Board::neighbors`](crate::Board::neighbors) for that.
    pub fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    /// Determine the direction from `a` to `b`, or [`None`] if they are not edge-adjacent.
    pub fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).copied()
    }
}
