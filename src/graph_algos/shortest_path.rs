use crate::grid::CellId;

/// Marks a cell without predecessor (the source, or an unvisited cell)
pub(crate) const NO_PARENT: usize = usize::MAX;


/// Construct the path from the source to `end` by walking the predecessor table back
/// Returns the ordered cells from source to `end`, both included
/// came_from: flat table indexed by cell id, NO_PARENT for the source
pub(crate) fn shortest_path(came_from: &[CellId], end: CellId) -> Vec<CellId> {

    let mut path = Vec::new();
    let mut current = end;

    // Trace back to the source
    // predecessors form a tree rooted at the source, so this always terminates
    while current != NO_PARENT {
        path.push(current);
        current = came_from[current];
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
