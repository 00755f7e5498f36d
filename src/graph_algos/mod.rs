pub mod a_star;
pub mod frontier;
pub mod path_cache;
mod shortest_path;

use shortest_path::{shortest_path, NO_PARENT};

use crate::collections::FxIndexSet;
use crate::grid::{CellId, HeightMap};


/// Ordered cells from source to target, both included
/// Consecutive cells are joined by a climb-constrained edge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    cells: Vec<CellId>,
}

#[allow(clippy::len_without_is_empty)]
impl Path {

    /// `cells` must hold at least the source
    pub(crate) fn new(cells: Vec<CellId>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<CellId> {
        self.cells
    }

    /// Number of edges (steps), one less than the number of cells
    pub fn len(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn source(&self) -> CellId {
        self.cells[0]
    }

    pub fn target(&self) -> CellId {
        self.cells[self.cells.len() - 1]
    }

    /// True when every step is a grid edge and no cell repeats
    pub fn is_valid_on(&self, grid: &HeightMap) -> bool {
        let mut seen: FxIndexSet<CellId> = FxIndexSet::default();
        self.cells.iter().all(|&c| grid.contains(c) && seen.insert(c))
            && self.cells.windows(2).all(|w| grid.has_edge(w[0], w[1]))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_validity() {
        let grid: HeightMap = "Sab\nzyE".parse().unwrap();
        // S -> a -> b -> E? b(2) to E(25) is a climb of 23
        assert!(!Path::new(vec![0, 1, 2, 5]).is_valid_on(&grid));
        // descending from E is fine
        assert!(Path::new(vec![5, 2, 1, 0]).is_valid_on(&grid));
        // diagonal step
        assert!(!Path::new(vec![0, 4]).is_valid_on(&grid));
        // repeated cell
        assert!(!Path::new(vec![0, 1, 0]).is_valid_on(&grid));

        let p = Path::new(vec![5, 2, 1]);
        assert_eq!((p.len(), p.source(), p.target()), (2, 5, 1));
    }
}
