#![warn(missing_docs)]

//! # `gridwalk`
//!
//! A search for long [simple paths](https://en.wikipedia.org/wiki/Path_(graph_theory)) on rectangular grid graphs,
//! where every free cell is connected to its free neighbors above, below, left and right.
//! Begin by building a board with [`SquareBoardBuilder`](builder::SquareBoardBuilder) or parsing one from text,
//! then call [`find_longest_path`] or [`Board::solve`] to get a [`Path`] and a printable [`Solution`].
//!
//! # Internals
//! The search is a plain exhaustive backtracking search. Every free cell is tried as a start.
//! From the end of the live path, each neighbor which may join the path is explored in turn, and every change is undone on the way back out.
//! One visitation array and one path buffer are shared by the whole search.
//!
//! A cell may only join the path if it touches at most one cell already on it.
//! This stops the path from closing loops, but it also throws away some simple paths which run alongside themselves,
//! so the path found is long but not guaranteed to be the longest.
//!
//! Neighbors are explored farthest from the center of the board first, which changes which path of a given length is found but never whether one is.
//! Running time is exponential in the number of free cells.
//! [`SearchOptions`] can cap it, and by default the search stops early once no longer path can exist.

pub use board::{Board, ParseFailure, Solution};
pub use builder::BuilderInvalidReason;
pub use cell::CellStatus;
pub use location::Location;
pub use path::{Path, PathDefect};
pub use solver::{find_longest_path, find_longest_path_with, SearchFailure, SearchOptions, SearchOutcome};

pub(crate) mod board;
mod tests;
pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod path;
pub mod shape;
pub mod builder;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
