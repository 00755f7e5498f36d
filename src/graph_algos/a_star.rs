use crate::errors::SearchError;
use crate::grid::{CellId, HeightMap};
use super::frontier::{Entry, Frontier};
use super::path_cache::CachedPath;
use super::{shortest_path, Path, NO_PARENT};

use tracing::{debug, trace};


/// Result of one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Path,
    /// Cells popped from the frontier and expanded
    pub expanded: usize,
    /// The path ends in a cached suffix
    pub spliced: bool,
}

/// Best completion through the cache seen so far
#[derive(Debug, Clone, Copy)]
struct Splice {
    cost: usize, // cost to `via` + 1 + suffix from `entry`
    via: CellId,
    entry: CellId,
}


/// A* Algorithm over a height map, unit edge cost
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The Manhattan heuristic is admissible and consistent for 4-directional unit steps,
/// so the first pop of the target is optimal and no cell is expanded twice.
pub struct AStar<'g> {
    grid: &'g HeightMap,
}

impl<'g> AStar<'g> {

    pub fn new(grid: &'g HeightMap) -> Self {
        Self { grid }
    }

    /// Shortest path from `source` to `target` without any path reuse
    pub fn plan(&self, source: CellId, target: CellId) -> Result<Path, SearchError> {
        self.search(source, target, None).map(|outcome| outcome.path)
    }

    /// Shortest path from `source` to `target`
    ///
    /// When `cache` holds a proven path to the same target, any branch that
    /// reaches a cell on it becomes a candidate completion
    /// `cost-so-far + remaining suffix` instead of being expanded further.
    /// The best candidate is returned once the frontier can no longer beat it.
    /// A cache for another target is ignored.
    pub fn search(&self, source: CellId, target: CellId, cache: Option<&CachedPath>) -> Result<SearchOutcome, SearchError> {
        let len = self.grid.len();
        for cell in [source, target] {
            if cell >= len {
                return Err(SearchError::CellOutOfBounds { cell, len });
            }
        }

        let cache = cache.filter(|c| c.target() == target);

        // Source already on a proven path: its suffix is optimal as is
        if let Some(suffix) = cache.and_then(|c| c.lookup_suffix(source)) {
            debug!(source, goal = target, len = suffix.remaining, "source lies on cached path");
            return Ok(SearchOutcome {
                path: Path::new(suffix.cells().collect()),
                expanded: 0,
                spliced: true,
            });
        }

        // best known cost from the source, usize::MAX when unseen
        let mut g_score = vec![usize::MAX; len];
        // predecessor on the best known path, NO_PARENT for the source
        let mut came_from = vec![NO_PARENT; len];
        let mut frontier: Frontier<usize> = Frontier::new(len);

        g_score[source] = 0;
        frontier.push(source, 0, self.grid.heuristic(source, target));

        let mut best: Option<Splice> = None;
        let mut expanded = 0;

        while let Some(Entry { cell: current, g, f, .. }) = frontier.pop_min() {

            // Nothing left on the frontier can beat the cached completion
            if best.is_some_and(|s| f >= s.cost) {
                break;
            }

            if current == target {
                let path = Path::new(shortest_path(&came_from, current));
                debug!(source, goal = target, len = path.len(), expanded, "path found");
                return Ok(SearchOutcome { path, expanded, spliced: false });
            }

            expanded += 1;

            for neighbor in self.grid.neighbors(current) {
                let tentative_g = g + 1;

                if let Some(suffix) = cache.and_then(|c| c.lookup_suffix(neighbor)) {
                    let cost = tentative_g + suffix.remaining;
                    if best.is_none_or(|s| cost < s.cost) {
                        trace!(via = current, entry = neighbor, cost, "cached suffix candidate");
                        best = Some(Splice { cost, via: current, entry: neighbor });
                    }
                    continue;
                }

                if tentative_g < g_score[neighbor] {
                    g_score[neighbor] = tentative_g;
                    came_from[neighbor] = current;
                    frontier.push(neighbor, tentative_g, tentative_g + self.grid.heuristic(neighbor, target));
                }
            }
        }

        match (best, cache) {
            (Some(splice), Some(cache)) => {
                // splice.entry came from a lookup on this same cache
                let Some(suffix) = cache.lookup_suffix(splice.entry) else {
                    unreachable!("splice entry {} is not on the cached path", splice.entry);
                };
                let mut cells = shortest_path(&came_from, splice.via);
                cells.extend(suffix.cells());
                let path = Path::new(cells);
                debug!(source, goal = target, len = path.len(), expanded, "path found through cache");
                Ok(SearchOutcome { path, expanded, spliced: true })
            }
            _ => {
                debug!(source, goal = target, expanded, "target not reachable");
                Err(SearchError::NotReachable { origin: source, target })
            }
        }
    }
}
