use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::ops::IndexMut;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use petgraph::graphmap::UnGraphMap;
use petgraph::visit::Dfs;
use thiserror::Error;

use crate::cell::{CellStatus, FrozenCell};
use crate::location::{Coord, Location};
use crate::path::Path;
use crate::shape::SquareStep;
use crate::solver::{self, SearchFailure, SearchOptions, SearchOutcome};

/// Reasons the board text format may fail to parse.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ParseFailure {
    /// The text contained no rows at all.
    #[error("board has no rows")]
    Empty,
    /// A row was not as wide as the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// The offending row, counting from 0.
        row: Coord,
        /// Width of the first row.
        expected: Coord,
        /// Width of this row.
        found: Coord,
    },
    /// A character which does not describe any cell status.
    #[error("unknown cell {found:?} at row {row}, column {column}")]
    UnknownCell {
        /// Row of the character, counting from 0.
        row: Coord,
        /// Column of the character, counting from 0.
        column: Coord,
        /// The character itself.
        found: char,
    },
}

/// A rectangular board of free and blocked cells.
/// Cells are connected to their (up to four) neighbors sharing an edge.
///
/// [`Board`]s should be built using a [`SquareBoardBuilder`](crate::builder::SquareBoardBuilder) or parsed from text.
/// A board is never modified by a search.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) cells: Array2<CellStatus>,
}

impl Board {
    /// The dimensions of this board, in `(rows, columns)` order.
    pub fn dims(&self) -> (Coord, Coord) {
        self.cells.dim()
    }

    /// The status of the cell at `location`, or [`None`] if `location` is out of bounds.
    pub fn status(&self, location: Location) -> Option<CellStatus> {
        self.cells.get(location.as_index()).copied()
    }

    pub(crate) fn is_free(&self, location: Location) -> bool {
        self.status(location).is_some_and(|status| status.is_free())
    }

    /// In-bounds locations sharing an edge with `location`, in up, down, left, right order.
    /// The status of the neighbors is not considered.
    pub fn neighbors(&self, location: Location) -> Vec<Location> {
        SquareStep::neighbors_of(location).into_iter()
            .map(|(_, neighbor)| neighbor)
            .filter(|neighbor| self.status(*neighbor).is_some())
            .collect_vec()
    }

    /// All free locations, in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item=Location> + '_ {
        self.cells.indexed_iter()
            .filter(|(_, status)| status.is_free())
            .map(|(index, _)| Location::from(index))
    }

    /// The number of free cells on this board.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|status| status.is_free()).count()
    }

    /// The graph of free cells, with an edge between every pair of free neighbors.
    pub fn graph(&self) -> UnGraphMap<Location, ()> {
        let (rows, cols) = self.dims();
        let mut graph = UnGraphMap::with_capacity(
            self.free_count(),
            // "vertical" and "horizontal" edges of a complete grid
            rows.saturating_sub(1) * cols + cols.saturating_sub(1) * rows,
        );

        for location in self.free_cells() {
            graph.add_node(location);
            // add edges down and to the right, if possible
            for step in [SquareStep::Down, SquareStep::Right] {
                let other = step.attempt_from(location);
                if self.is_free(other) {
                    graph.add_edge(location, other, ());
                }
            }
        }

        graph
    }

    /// The number of cells in the largest connected group of free cells.
    ///
    /// No path on this board can be longer than this.
    pub fn largest_component(&self) -> usize {
        let graph = self.graph();
        let mut seen = HashSet::with_capacity(graph.node_count());
        let mut largest = 0;

        for start in graph.nodes() {
            if seen.contains(&start) {
                continue;
            }

            let mut size = 0;
            let mut dfs = Dfs::new(&graph, start);
            while let Some(node) = dfs.next(&graph) {
                seen.insert(node);
                size += 1;
            }
            largest = largest.max(size);
        }

        largest
    }

    /// Search this board for a long path, see [`find_longest_path_with`](crate::find_longest_path_with).
    ///
    /// The board is borrowed, not consumed; the returned [`Solution`] displays the path drawn over it.
    pub fn solve(&self, options: &SearchOptions) -> Result<Solution<'_>, SearchFailure> {
        Ok(Solution {
            board: self,
            outcome: solver::find_longest_path_with(self, options)?,
        })
    }
}

impl From<Array2<CellStatus>> for Board {
    /// Wrap an array of cells as-is. Dimensions are only checked once the board is searched.
    fn from(cells: Array2<CellStatus>) -> Self {
        Self { cells }
    }
}

impl FromStr for Board {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines()
            .map(str::trim_end)
            .collect_vec();
        // blank trailing lines are not rows
        let rows = match lines.iter().rposition(|line| !line.is_empty()) {
            None => return Err(ParseFailure::Empty),
            Some(last) => &lines[..=last],
        };

        let width = rows[0].chars().count();
        let mut cells = Array2::from_elem((rows.len(), width), CellStatus::default());

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ParseFailure::RaggedRow { row, expected: width, found });
            }

            for (column, c) in line.chars().enumerate() {
                let status = CellStatus::from_char(c).ok_or(ParseFailure::UnknownCell { row, column, found: c })?;
                cells.index_mut((row, column)).assign_elem(status);
            }
        }

        Ok(Self { cells })
    }
}

fn print(board: Array2<char>) -> String {
    let mut out = String::with_capacity(board.nrows() * (board.ncols() + 1));

    for row in board.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(self.cells.map(CellStatus::display)))
    }
}

/// A [`Board`] together with the result of searching it.
pub struct Solution<'a> {
    board: &'a Board,
    outcome: SearchOutcome,
}

impl Solution<'_> {
    /// The board which was searched.
    pub fn board(&self) -> &Board {
        self.board
    }

    /// The best path found.
    pub fn path(&self) -> &Path {
        &self.outcome.path
    }

    /// Everything else the search reported.
    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub(crate) fn freeze(&self) -> Array2<FrozenCell> {
        let mut frozen = self.board.cells.map(|status| FrozenCell::from(*status));
        let last = self.path().len().saturating_sub(1);

        for (index, location) in self.path().iter().enumerate() {
            let cell = match index {
                0 => FrozenCell::PathStart,
                i if i == last => FrozenCell::PathEnd,
                _ => FrozenCell::PathInterior,
            };
            if let Some(ptr) = frozen.get_mut(location.as_index()) {
                ptr.assign_elem(cell);
            }
        }

        frozen
    }
}

impl Display for Solution<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print(self.freeze().map(FrozenCell::display)))
    }
}
