//! Shortest paths over height-constrained grids.
//!
//! A height map allows a step to any of the four axis neighbors that is at
//! most one unit higher. [`AStar`] answers single queries with a Manhattan
//! heuristic; [`QueryOrchestrator`] answers many queries to the same target
//! and reuses the first proven path to that target through a [`PathCache`].
//!
//! ```
//! use heightpath::{HeightMap, QueryOptions, QueryOrchestrator};
//!
//! let grid: HeightMap = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi".parse()?;
//! let report = QueryOrchestrator::new(&grid, QueryOptions::default()).report();
//! assert_eq!((report.fixed, report.best), (Ok(31), Ok(29)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph_algos;
pub mod grid;
pub mod query;

pub use errors::{GridError, SearchError};
pub use graph_algos::Path;
pub use graph_algos::a_star::{AStar, SearchOutcome};
pub use graph_algos::frontier::Frontier;
pub use graph_algos::path_cache::{CachedPath, PathCache, Suffix};
pub use grid::{Cell, CellId, HeightMap, MAX_ELEVATION};
pub use query::{QueryOptions, QueryOrchestrator, Report};
