//! Construction of [`Board`]s.

use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::board::Board;
use crate::cell::CellStatus;
use crate::location::{Coord, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// The builder was given zero rows or zero columns.
    #[error("a board needs at least one row and one column")]
    InvalidDimensions,
    /// A cell outside the bounds specified by `dims` was referenced.
    #[error("{0:?} is outside the board")]
    FeatureOutOfBounds(Location),
}

/// A builder for rectangular boards of square cells.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct SquareBoardBuilder {
    // rows, columns
    dims: (Coord, Coord),
    cells: Array2<CellStatus>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for SquareBoardBuilder {
    fn default() -> Self {
        Self::with_dims((5, 5))
    }
}

impl SquareBoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, columns)` order.
    /// Every cell starts out free.
    ///
    /// Enters an [`InvalidDimensions`](BuilderInvalidReason::InvalidDimensions) invalid state if either dimension is zero.
    pub fn with_dims(dims: (Coord, Coord)) -> Self {
        let mut invalid_reasons = Vec::new();
        if dims.0 == 0 || dims.1 == 0 {
            invalid_reasons.push(BuilderInvalidReason::InvalidDimensions);
        }

        Self {
            dims,
            cells: Array2::from_elem(dims, CellStatus::Free),
            invalid_reasons,
        }
    }

    fn set(&mut self, location: Location, status: CellStatus) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0 || location.1 >= self.dims.1 {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds(location));
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(status);
        self
    }

    /// Block the cell at `location`, so no path may pass through it.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn block(&mut self, location: Location) -> &mut Self {
        self.set(location, CellStatus::Blocked)
    }

    /// Free the cell at `location` again. Same conditions as [`Self::block`].
    pub fn unblock(&mut self, location: Location) -> &mut Self {
        self.set(location, CellStatus::Free)
    }

    /// Block every cell, for boards which are mostly walls.
    /// If the builder is in an invalid state, this function does nothing.
    pub fn block_all(&mut self) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.cells.fill(CellStatus::Blocked);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board::from(self.cells.clone()))
    }
}
