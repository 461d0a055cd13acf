use std::collections::HashSet;
use std::slice::Iter;

use thiserror::Error;

use crate::board::Board;
use crate::location::Location;
use crate::shape::SquareStep;

/// Ways a sequence of locations can fail to be a path the search is allowed to produce.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum PathDefect {
    /// The location is not on the board.
    #[error("{0:?} is out of bounds")]
    OutOfBounds(Location),
    /// The location is on the board but blocked.
    #[error("{0:?} is blocked")]
    Blocked(Location),
    /// The location appears more than once.
    #[error("{0:?} is visited twice")]
    Repeated(Location),
    /// Two consecutive locations do not share an edge.
    #[error("{0:?} and {1:?} are not adjacent")]
    NotAdjacent(Location, Location),
    /// When added, the location touched more than one location already on the path.
    #[error("{0:?} touches more than one earlier cell of the path")]
    Branching(Location),
}

/// An ordered sequence of locations, from the start of a path to its end.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Path(pub(crate) Vec<Location>);

impl Path {
    /// The number of cells on this path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this path has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The cell the path starts at.
    pub fn first(&self) -> Option<&Location> {
        self.0.first()
    }

    /// The cell the path ends at.
    pub fn last(&self) -> Option<&Location> {
        self.0.last()
    }

    /// Iterate over the cells from start to end.
    pub fn iter(&self) -> Iter<'_, Location> {
        self.0.iter()
    }

    /// The cells from start to end.
    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }

    /// Unwrap into the underlying [`Vec`].
    pub fn into_inner(self) -> Vec<Location> {
        self.0
    }

    /// Check that this path could have been produced by a search of `board`.
    ///
    /// Every cell must be free and distinct, consecutive cells must share an edge, and no cell may touch more than one
    /// cell which came before it on the path.
    pub fn check(&self, board: &Board) -> Result<(), PathDefect> {
        let mut earlier: HashSet<Location> = HashSet::with_capacity(self.len());
        let mut previous: Option<Location> = None;

        for location in self.iter().copied() {
            if board.status(location).is_none() {
                return Err(PathDefect::OutOfBounds(location));
            }
            if !board.is_free(location) {
                return Err(PathDefect::Blocked(location));
            }
            if earlier.contains(&location) {
                return Err(PathDefect::Repeated(location));
            }
            if let Some(previous) = previous {
                if SquareStep::direction_to(previous, location).is_none() {
                    return Err(PathDefect::NotAdjacent(previous, location));
                }
            }
            if board.neighbors(location).iter().filter(|n| earlier.contains(*n)).count() > 1 {
                return Err(PathDefect::Branching(location));
            }

            earlier.insert(location);
            previous = Some(location);
        }

        Ok(())
    }
}

impl From<Vec<Location>> for Path {
    fn from(value: Vec<Location>) -> Self {
        Self(value)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Location;
    type IntoIter = Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
