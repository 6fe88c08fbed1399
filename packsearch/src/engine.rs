use thiserror::Error;

use crate::{
    id::Id,
    types::{Placement, Rectangle},
};

/// Assigns positions to rectangles, in the order it is given them.
///
/// The search calls `place` once per heuristic with a differently ordered copy
/// of the same rectangles. Implementations must be deterministic for a fixed
/// input order, otherwise comparing the results of different orders is
/// meaningless.
///
/// Any `Fn(&[Rectangle]) -> Result<Placement, PlacementError>` is also a
/// placement engine.
pub trait PlacementEngine {
    fn place(&self, ordered: &[Rectangle]) -> Result<Placement, PlacementError>;
}

impl<F> PlacementEngine for F
where
    F: Fn(&[Rectangle]) -> Result<Placement, PlacementError>,
{
    fn place(&self, ordered: &[Rectangle]) -> Result<Placement, PlacementError> {
        self(ordered)
    }
}

/// Why a placement engine could not place a given ordering of rectangles.
///
/// These errors are expected during a search and only fail the search if every
/// heuristic runs into one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(
        "Rectangle {id} ({}x{}) is larger than the maximum bin size {}x{}",
        .size.0, .size.1, .max_size.0, .max_size.1
    )]
    RectangleTooLarge {
        id: Id,
        size: (u32, u32),
        max_size: (u32, u32),
    },

    #[error(
        "{unplaced} rectangles did not fit into a bin of the maximum size {}x{}",
        .max_size.0, .max_size.1
    )]
    ExceedsMaxSize { unplaced: usize, max_size: (u32, u32) },

    #[error("{0}")]
    Other(String),
}
