use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::num::NonZero;

use log::{debug, info, trace};
use ndarray::Array2;
use strum::VariantArray;
use thiserror::Error;

use crate::board::Board;
use crate::location::{Coord, Location};
use crate::path::Path;
use crate::shape::SquareStep;

/// Reasons a search may fail. A failed search leaves the board untouched.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum SearchFailure {
    /// The board has zero rows or zero columns.
    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    InvalidDimensions {
        /// Rows the board has.
        rows: Coord,
        /// Columns the board has.
        cols: Coord,
    },
    /// The visitation state and the live path disagree.
    /// This should probably never happen.
    #[error("search state corrupted: {0}")]
    InternalInvariantViolation(&'static str),
}

/// Knobs for [`find_longest_path_with`].
/// The [`Default`] has no node limit and stops only once no longer path can exist.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchOptions {
    node_limit: Option<NonZero<u64>>,
    stop_at_bound: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            node_limit: None,
            stop_at_bound: true,
        }
    }
}

impl SearchOptions {
    /// Stop after accepting `limit` cells onto the path in total, keeping the best path seen so far.
    /// [`None`] removes the limit.
    pub fn with_node_limit(mut self, limit: Option<NonZero<u64>>) -> Self {
        self.node_limit = limit;
        self
    }

    /// Whether to stop trying start cells once the best path covers the largest connected group of free cells.
    ///
    /// No strictly longer path can exist at that point, so the result is the same either way.
    pub fn with_stop_at_bound(mut self, stop_at_bound: bool) -> Self {
        self.stop_at_bound = stop_at_bound;
        self
    }

    /// The node limit, if any.
    pub fn node_limit(&self) -> Option<NonZero<u64>> {
        self.node_limit
    }

    /// Whether the search stops once no longer path can exist.
    pub fn stop_at_bound(&self) -> bool {
        self.stop_at_bound
    }
}

/// What a search found.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchOutcome {
    /// The longest path seen. Empty if and only if the board has no free cells.
    pub path: Path,
    /// How many times a cell was accepted onto the live path.
    pub nodes: u64,
    /// False if a node limit cut the search short.
    pub complete: bool,
}

/// Exploration order: a lower score is explored first.
/// The score of a cell is its negated Manhattan distance to the center cell, so cells far from the center come first.
fn heuristic_map(dims: (Coord, Coord)) -> Array2<isize> {
    let center = Location(dims.0 / 2, dims.1 / 2);
    Array2::from_shape_fn(dims, |index| {
        -(Location::from(index).distance_to(center) as isize)
    })
}

/// State shared by every branch of one search. Everything here is mutated in place and restored on backtrack.
struct Search<'a> {
    board: &'a Board,
    heuristic: Array2<isize>,
    visited: Array2<bool>,
    path: Vec<Location>,
    best: Vec<Location>,
    nodes: u64,
    // path[..shared] == best[..shared]
    shared: usize,
    node_limit: Option<NonZero<u64>>,
    halted: bool,
}

/// One cell of the live path, with the neighbors not yet explored from it.
struct Frame {
    location: Location,
    queue: BinaryHeap<Reverse<(isize, Location)>>,
}

impl<'a> Search<'a> {
    fn new(board: &'a Board, options: &SearchOptions) -> Self {
        let dims = board.dims();

        Self {
            board,
            heuristic: heuristic_map(dims),
            visited: Array2::from_elem(dims, false),
            path: Vec::with_capacity(board.free_count()),
            best: Vec::new(),
            nodes: 0,
            shared: 0,
            node_limit: options.node_limit,
            halted: false,
        }
    }

    #[inline]
    fn is_visited(&self, location: Location) -> bool {
        self.visited.get(location.as_index()).copied().unwrap_or(false)
    }

    /// A cell may join the path if it is free, not yet on the path, and touches at most one cell already on the path.
    ///
    /// The last condition keeps the path from looping back on or branching off itself.
    /// It also rejects some simple paths which merely run alongside an earlier stretch of themselves.
    fn is_valid(&self, location: Location) -> bool {
        if !self.board.is_free(location) || self.is_visited(location) {
            return false;
        }

        SquareStep::VARIANTS.iter()
            .filter(|step| self.is_visited(step.attempt_from(location)))
            .count() <= 1
    }

    fn mark(&mut self, location: Location) -> Result<(), SearchFailure> {
        match self.visited.get_mut(location.as_index()) {
            Some(cell) if !*cell => {
                *cell = true;
                Ok(())
            }
            _ => Err(SearchFailure::InternalInvariantViolation("marked a cell already on the path")),
        }
    }

    fn unmark(&mut self, location: Location) -> Result<(), SearchFailure> {
        match self.visited.get_mut(location.as_index()) {
            Some(cell) if *cell => {
                *cell = false;
                Ok(())
            }
            _ => Err(SearchFailure::InternalInvariantViolation("unmarked a cell not on the path")),
        }
    }

    /// Try to put `location` onto the end of the path.
    /// If it may join, mark it and return a frame holding the neighbors left to explore from it.
    fn enter(&mut self, location: Location) -> Result<Option<Frame>, SearchFailure> {
        if self.halted || !self.is_valid(location) {
            return Ok(None);
        }

        if let Some(limit) = self.node_limit {
            if self.nodes >= limit.get() {
                debug!("node limit of {} reached, best path so far has length {}", limit, self.best.len());
                self.halted = true;
                return Ok(None);
            }
        }
        self.nodes += 1;

        self.mark(location)?;
        self.path.push(location);

        if self.path.len() > self.best.len() {
            // only the part of the path which changed since the last snapshot is copied
            self.best.truncate(self.shared);
            self.best.extend_from_slice(&self.path[self.shared..]);
            self.shared = self.path.len();
            debug!("new best path of length {} starting at {:?}", self.best.len(), self.best.first());
        }

        // min-heap on (score, location); ties go to the lower row, then the lower column
        let mut queue = BinaryHeap::with_capacity(SquareStep::VARIANTS.len());
        for step in SquareStep::VARIANTS {
            let next = step.attempt_from(location);
            if self.is_valid(next) {
                queue.push(Reverse((self.heuristic[next.as_index()], next)));
            }
        }

        Ok(Some(Frame { location, queue }))
    }

    /// Take `location` back off the end of the path.
    fn leave(&mut self, location: Location) -> Result<(), SearchFailure> {
        self.unmark(location)?;
        match self.path.pop() {
            Some(top) if top == location => {
                self.shared = self.shared.min(self.path.len());
                Ok(())
            }
            Some(_) => Err(SearchFailure::InternalInvariantViolation("path tail does not match the cell backtracked from")),
            None => Err(SearchFailure::InternalInvariantViolation("backtracked past the start of the path")),
        }
    }

    /// Explore every path starting at `start`, depth first, restoring all state before returning.
    ///
    /// Frames live on the heap, so the depth of the search is limited by memory rather than the thread's stack.
    fn extend(&mut self, start: Location) -> Result<(), SearchFailure> {
        let mut stack: Vec<Frame> = Vec::new();
        if let Some(frame) = self.enter(start)? {
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            let next = match self.halted {
                true => None,
                false => frame.queue.pop().map(|Reverse((_, next))| next),
            };

            match next {
                Some(next) => {
                    if let Some(child) = self.enter(next)? {
                        stack.push(child);
                    }
                }
                None => {
                    let location = frame.location;
                    stack.pop();
                    self.leave(location)?;
                }
            }
        }

        Ok(())
    }
}

/// Find the longest path on `board` that [`find_longest_path_with`] can find, using [`SearchOptions::default`].
///
/// Returns an empty path if the board has no free cells.
pub fn find_longest_path(board: &Board) -> Result<Path, SearchFailure> {
    find_longest_path_with(board, &SearchOptions::default()).map(|outcome| outcome.path)
}

/// Exhaustive backtracking search for a long path over the free cells of `board`.
///
/// Every free cell is tried as a start, in row-major order.
/// From each cell, every neighbor which may join the path (see below) is explored in turn, farthest from the board's center first.
/// The first path of each new best length is kept and returned at the end.
///
/// A cell may only join the path if it touches at most one cell already on the path.
/// This keeps the path from closing loops, but it also discards some valid simple paths that pass next to themselves,
/// so the result is not guaranteed to be the longest simple path on the board.
///
/// The running time is exponential in the number of free cells; use [`SearchOptions::with_node_limit`] to bound it.
pub fn find_longest_path_with(board: &Board, options: &SearchOptions) -> Result<SearchOutcome, SearchFailure> {
    let (rows, cols) = board.dims();
    if rows == 0 || cols == 0 {
        return Err(SearchFailure::InvalidDimensions { rows, cols });
    }

    let bound = options.stop_at_bound.then(|| board.largest_component());
    let mut search = Search::new(board, options);

    for start in board.free_cells() {
        if let Some(bound) = bound {
            if search.best.len() >= bound {
                debug!("best path covers the largest group of {} free cells, stopping before {:?}", bound, start);
                break;
            }
        }
        if search.halted {
            break;
        }

        trace!("trying start cell {:?}", start);
        search.extend(start)?;

        if !search.path.is_empty() {
            return Err(SearchFailure::InternalInvariantViolation("path not empty after backtracking to the start"));
        }
    }

    info!("best path has length {} after {} nodes on a {}x{} board", search.best.len(), search.nodes, rows, cols);

    Ok(SearchOutcome {
        path: Path::from(search.best),
        nodes: search.nodes,
        complete: !search.halted,
    })
}
