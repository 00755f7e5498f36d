//! Reuse of proven shortest paths.
//!
//! Any suffix of a shortest path `A -> T` is itself a shortest path from its
//! first cell to `T` (non-negative edge costs). Once one query to `T` has
//! succeeded, later queries to the same `T` can stop a branch as soon as it
//! touches that path and complete it with the stored suffix.

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::set::Slice;
use tracing::trace;

use super::Path;
use crate::collections::{FxIndexMap, FxIndexSet};
use crate::grid::CellId;


/// A proven shortest path, indexed by cell for O(1) suffix lookup
#[derive(Debug, Clone)]
pub struct CachedPath {
    cells: FxIndexSet<CellId>, // insertion order == path order
}

/// Tail of a cached path, from some cell on it to the target
#[derive(Debug, Clone, Copy)]
pub struct Suffix<'a> {
    /// Steps left to the target
    pub remaining: usize,
    cells: &'a Slice<CellId>,
}

impl Suffix<'_> {
    /// Cells from the lookup cell to the target, both included
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}

#[allow(clippy::len_without_is_empty)]
impl CachedPath {

    pub fn new(path: &Path) -> Self {
        Self {
            cells: path.cells().iter().copied().collect(),
        }
    }

    pub fn target(&self) -> CellId {
        // a Path is never empty
        self.cells[self.cells.len() - 1]
    }

    pub fn source(&self) -> CellId {
        self.cells[0]
    }

    /// Steps from the path's own source to the target
    pub fn len(&self) -> usize {
        self.cells.len() - 1
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }

    /// Remaining shortest path from `cell` when it lies on this path
    pub fn lookup_suffix(&self, cell: CellId) -> Option<Suffix<'_>> {
        let position = self.cells.get_index_of(&cell)?;
        Some(Suffix {
            remaining: self.cells.len() - 1 - position,
            cells: &self.cells.as_slice()[position..],
        })
    }
}


/// Proven paths keyed by target cell
///
/// Each target is written once, by whichever query completes first, and is
/// read-only afterwards. Entries are fully built before they are published,
/// so readers never see a partial index.
#[derive(Debug, Default)]
pub struct PathCache {
    entries: RwLock<FxIndexMap<CellId, Arc<CachedPath>>>,
}

impl PathCache {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target: CellId) -> Option<Arc<CachedPath>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(&target).cloned()
    }

    /// Store `path` for its target unless one is already present.
    /// Returns whichever entry ends up cached for that target.
    pub fn install(&self, path: &Path) -> Arc<CachedPath> {
        let target = path.target();
        if let Some(existing) = self.get(target) {
            return existing;
        }

        let built = Arc::new(CachedPath::new(path));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(target).or_insert_with(|| {
            trace!(goal = target, source = path.source(), len = path.len(), "installing cached path");
            built
        });
        Arc::clone(entry)
    }

    /// Targets with a cached path, in installation order
    pub fn targets(&self) -> Vec<CellId> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
