use thiserror::Error;

use crate::grid::CellId;


/// Malformed height map - surfaced before any search runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid: no rows")]
    Empty,
    #[error("invalid grid: line {line} has {found} columns, expected {expected}")]
    RaggedRow { line: usize, expected: usize, found: usize },
    #[error("invalid grid: unexpected character {found:?} at line {line}, column {column}")]
    InvalidCharacter { line: usize, column: usize, found: char },
    #[error("invalid grid: elevation {elevation} at cell {cell} is outside 0..=25")]
    ElevationOutOfRange { cell: CellId, elevation: u8 },
    #[error("invalid grid: second start marker at line {line}, column {column}")]
    DuplicateStart { line: usize, column: usize },
    #[error("invalid grid: second target marker at line {line}, column {column}")]
    DuplicateTarget { line: usize, column: usize },
    #[error("invalid grid: no start cell")]
    MissingStart, // also covers "no elevation-0 cell"
    #[error("invalid grid: no target cell")]
    MissingTarget,
    #[error("invalid grid: start cell {cell} must have elevation 0, found {elevation}")]
    StartElevation { cell: CellId, elevation: u8 },
    #[error("invalid grid: target cell {cell} must have elevation 25, found {elevation}")]
    TargetElevation { cell: CellId, elevation: u8 },
    #[error("invalid grid: cell {cell} is outside a grid of {len} cells")]
    CellOutOfBounds { cell: CellId, len: usize },
}


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Frontier exhausted without reaching the target
    #[error("cell {target} is not reachable from cell {origin}")]
    NotReachable { origin: CellId, target: CellId },
    /// Every candidate of a batch query was unreachable
    #[error("none of the {candidates} candidate sources reach cell {target}")]
    NoPath { candidates: usize, target: CellId },
    #[error("cell {cell} is outside a grid of {len} cells")]
    CellOutOfBounds { cell: CellId, len: usize },
}
