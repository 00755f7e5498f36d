//! Immutable height map and its climb-constrained adjacency.
//!
//! Cells are addressed by a dense row-major [`CellId`] so that per-query
//! score tables can be flat vectors. Edges are never stored: `u -> v` exists
//! when `v` is one of the four axis neighbors of `u` and
//! `elevation(v) <= elevation(u) + 1`. Descents of any size are allowed.

mod parse;

use std::fmt;

use crate::errors::GridError;
use crate::geometry::Coord;

/// Dense linear id of a cell, `y * width + x`
pub type CellId = usize;

/// Highest elevation, carried by the target cell
pub const MAX_ELEVATION: u8 = 25;


/// A single square of the height map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub id: CellId,
    pub coord: Coord,
    pub elevation: u8,
    pub is_start: bool,
    pub is_target: bool,
}


/// Row-major height map with one designated start and one designated target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    width: usize,
    height: usize,
    elevations: Vec<u8>,
    start: CellId,
    target: CellId,
}

impl HeightMap {

    /// Build a height map from raw elevations.
    /// `start` must sit at elevation 0 and `target` at elevation 25.
    pub fn from_elevations(width: usize, elevations: Vec<u8>, start: CellId, target: CellId) -> Result<Self, GridError> {
        if width == 0 || elevations.is_empty() {
            return Err(GridError::Empty);
        }
        let len = elevations.len();
        if len % width != 0 {
            // last row is short
            return Err(GridError::RaggedRow {
                line: len / width + 1,
                expected: width,
                found: len % width,
            });
        }
        if let Some((cell, &elevation)) = elevations.iter().enumerate().find(|(_, e)| **e > MAX_ELEVATION) {
            return Err(GridError::ElevationOutOfRange { cell, elevation });
        }
        for cell in [start, target] {
            if cell >= len {
                return Err(GridError::CellOutOfBounds { cell, len });
            }
        }
        if elevations[start] != 0 {
            return Err(GridError::StartElevation { cell: start, elevation: elevations[start] });
        }
        if elevations[target] != MAX_ELEVATION {
            return Err(GridError::TargetElevation { cell: target, elevation: elevations[target] });
        }

        Ok(Self {
            width,
            height: len / width,
            elevations,
            start,
            target,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    /// Always false for a constructed grid, kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn target(&self) -> CellId {
        self.target
    }

    pub fn is_start(&self, id: CellId) -> bool {
        id == self.start
    }

    pub fn is_target(&self, id: CellId) -> bool {
        id == self.target
    }

    pub fn contains(&self, id: CellId) -> bool {
        id < self.elevations.len()
    }

    /// Dense id of the cell at column `x`, row `y`
    pub fn id_of(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn coord(&self, id: CellId) -> Coord {
        Coord::new(id % self.width, id / self.width)
    }

    pub fn elevation(&self, id: CellId) -> u8 {
        self.elevations[id]
    }

    /// Full view of a cell. Panics when `id` is out of range.
    pub fn cell(&self, id: CellId) -> Cell {
        Cell {
            id,
            coord: self.coord(id),
            elevation: self.elevations[id],
            is_start: self.is_start(id),
            is_target: self.is_target(id),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(|id| self.cell(id))
    }

    /// Every elevation-0 cell, row-major
    pub fn lowest_cells(&self) -> Vec<CellId> {
        self.elevations
            .iter()
            .enumerate()
            .filter_map(|(id, &e)| (e == 0).then_some(id))
            .collect()
    }

    /// Axis neighbors of `id` regardless of elevation, in order up, left, down, right
    pub fn adjacent(&self, id: CellId) -> impl Iterator<Item = CellId> + use<> {
        let w = self.width;
        let x = id % w;
        let up = (id >= w).then(|| id - w);
        let left = (x > 0).then(|| id - 1);
        let down = (id + w < self.elevations.len()).then(|| id + w);
        let right = (x + 1 < w).then(|| id + 1);
        [up, left, down, right].into_iter().flatten()
    }

    /// Cells reachable from `id` in one step: climb at most one, descend any amount
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        let ceiling = self.elevations[id] + 1;
        self.adjacent(id).filter(move |&n| self.elevations[n] <= ceiling)
    }

    /// Whether the directed edge `from -> to` exists
    pub fn has_edge(&self, from: CellId, to: CellId) -> bool {
        self.contains(from)
            && self.contains(to)
            && self.coord(from).is_adjacent(&self.coord(to))
            && self.elevations[to] <= self.elevations[from] + 1
    }

    /// Admissible and consistent estimate of the steps from `from` to `to`
    pub fn heuristic(&self, from: CellId, to: CellId) -> usize {
        self.coord(from).manhattan(&self.coord(to))
    }
}

impl fmt::Display for HeightMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elevations.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (x, &e) in row.iter().enumerate() {
                let id = i * self.width + x;
                let c = if id == self.start {
                    'S'
                } else if id == self.target {
                    'E'
                } else {
                    char::from(b'a' + e)
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi";

    fn example() -> HeightMap {
        EXAMPLE.parse().unwrap()
    }

    #[test]
    fn test_dimensions_and_markers() {
        let grid = example();
        assert_eq!((grid.width(), grid.height(), grid.len()), (8, 5, 40));
        assert_eq!(grid.start(), 0);
        assert_eq!(grid.target(), grid.id_of(5, 2).unwrap());
        assert!(grid.cell(grid.target()).is_target);
        assert_eq!(grid.elevation(grid.target()), MAX_ELEVATION);
        assert_eq!(grid.id_of(8, 0), None);
    }

    #[test]
    fn test_neighbors_respect_climb_limit() {
        let grid = example();
        // 'c' at (2,1): up 'b', left 'b', down 'c', right 'r'
        let id = grid.id_of(2, 1).unwrap();
        let n: Vec<_> = grid.neighbors(id).collect();
        assert_eq!(n, vec![
            grid.id_of(2, 0).unwrap(),
            grid.id_of(1, 1).unwrap(),
            grid.id_of(2, 2).unwrap(),
        ]);
    }

    #[test]
    fn test_descent_is_unrestricted() {
        let grid = HeightMap::from_elevations(2, vec![0, 25], 0, 1).unwrap();
        assert_eq!(grid.neighbors(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(grid.neighbors(0).count(), 0);
        assert!(grid.has_edge(1, 0));
        assert!(!grid.has_edge(0, 1));
    }

    #[test]
    fn test_corner_and_edge_adjacency() {
        let grid = example();
        // up, left, down, right
        assert_eq!(grid.adjacent(0).collect::<Vec<_>>(), vec![8, 1]);
        let last = grid.len() - 1;
        assert_eq!(grid.adjacent(last).collect::<Vec<_>>(), vec![last - 8, last - 1]);
    }

    #[test]
    fn test_lowest_cells() {
        let grid = example();
        // S plus the 'a' column on the left
        assert_eq!(grid.lowest_cells(), vec![0, 1, 8, 16, 24, 32]);
    }

    #[test]
    fn test_from_elevations_validation() {
        assert_eq!(HeightMap::from_elevations(0, vec![], 0, 0), Err(GridError::Empty));
        assert!(matches!(
            HeightMap::from_elevations(2, vec![0, 1, 25], 0, 2),
            Err(GridError::RaggedRow { expected: 2, found: 1, .. })
        ));
        assert_eq!(
            HeightMap::from_elevations(2, vec![0, 26], 0, 1),
            Err(GridError::ElevationOutOfRange { cell: 1, elevation: 26 })
        );
        assert_eq!(
            HeightMap::from_elevations(2, vec![1, 25], 0, 1),
            Err(GridError::StartElevation { cell: 0, elevation: 1 })
        );
        assert_eq!(
            HeightMap::from_elevations(2, vec![0, 24], 0, 1),
            Err(GridError::TargetElevation { cell: 1, elevation: 24 })
        );
        assert_eq!(
            HeightMap::from_elevations(2, vec![0, 25], 0, 7),
            Err(GridError::CellOutOfBounds { cell: 7, len: 2 })
        );
    }

    #[test]
    fn test_display_round_trips_text() {
        assert_eq!(example().to_string(), EXAMPLE);
    }
}
