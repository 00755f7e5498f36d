//! Multi-query driver.
//!
//! Runs source-to-target queries over one height map and shares proven paths
//! between queries to the same target through a [`PathCache`]. Each query owns
//! its own search state; only the cache outlives a query.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::errors::SearchError;
use crate::graph_algos::a_star::{AStar, SearchOutcome};
use crate::graph_algos::path_cache::PathCache;
use crate::grid::{CellId, HeightMap};


/// Knobs for a [`QueryOrchestrator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Splice cached suffixes into later queries to the same target
    pub reuse_paths: bool,
    /// Fan candidate queries out over the rayon pool
    pub parallel: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            reuse_paths: true,
            parallel: false,
        }
    }
}


/// The two answers for a loaded height map
/// Each is computed on its own, an unreachable start does not hide the second
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Steps from the designated start to the target
    pub fixed: Result<usize, SearchError>,
    /// Fewest steps from any elevation-0 cell to the target
    pub best: Result<usize, SearchError>,
}


pub struct QueryOrchestrator<'g> {
    grid: &'g HeightMap,
    cache: PathCache,
    options: QueryOptions,
}

impl<'g> QueryOrchestrator<'g> {

    pub fn new(grid: &'g HeightMap, options: QueryOptions) -> Self {
        Self {
            grid,
            cache: PathCache::new(),
            options,
        }
    }

    pub fn grid(&self) -> &'g HeightMap {
        self.grid
    }

    pub fn options(&self) -> QueryOptions {
        self.options
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// One query. The first successful query to a target seeds the cache for it.
    pub fn query(&self, source: CellId, target: CellId) -> Result<SearchOutcome, SearchError> {
        let a_star = AStar::new(self.grid);
        if !self.options.reuse_paths {
            return a_star.search(source, target, None);
        }

        let cached = self.cache.get(target);
        let outcome = a_star.search(source, target, cached.as_deref())?;
        if cached.is_none() {
            self.cache.install(&outcome.path);
        }
        Ok(outcome)
    }

    /// Steps from `start` to `target`
    pub fn solve_fixed(&self, start: CellId, target: CellId) -> Result<usize, SearchError> {
        self.query(start, target).map(|outcome| outcome.path.len())
    }

    /// Fewest steps from any of `candidates` to `target`
    /// Unreachable candidates are skipped, `NoPath` when none reaches the target
    pub fn solve_best_of_candidates<I>(&self, candidates: I, target: CellId) -> Result<usize, SearchError>
    where
        I: IntoIterator<Item = CellId>,
    {
        let candidates: Vec<CellId> = candidates.into_iter().collect();

        let lengths: Vec<Option<usize>> = if self.options.parallel {
            candidates
                .par_iter()
                .map(|&source| self.candidate_len(source, target))
                .collect::<Result<_, _>>()?
        } else {
            candidates
                .iter()
                .map(|&source| self.candidate_len(source, target))
                .collect::<Result<_, _>>()?
        };

        let reachable = lengths.iter().flatten().count();
        let best = lengths.into_iter().flatten().min();
        info!(candidates = candidates.len(), reachable, best = ?best, goal = target, "candidate batch done");

        best.ok_or(SearchError::NoPath { candidates: candidates.len(), target })
    }

    /// Fewest steps from any elevation-0 cell to `target`
    pub fn solve_lowest(&self, target: CellId) -> Result<usize, SearchError> {
        self.solve_best_of_candidates(self.grid.lowest_cells(), target)
    }

    /// Both answers for the grid's own start and target
    pub fn report(&self) -> Report {
        let target = self.grid.target();
        Report {
            fixed: self.solve_fixed(self.grid.start(), target),
            best: self.solve_lowest(target),
        }
    }

    /// `None` for a candidate that cannot reach the target
    fn candidate_len(&self, source: CellId, target: CellId) -> Result<Option<usize>, SearchError> {
        match self.query(source, target) {
            Ok(outcome) => Ok(Some(outcome.path.len())),
            Err(SearchError::NotReachable { .. }) => {
                debug!(source, goal = target, "skipping unreachable candidate");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
