#![allow(dead_code)]

use std::collections::VecDeque;

use heightpath::{CellId, HeightMap};

pub const EXAMPLE: &str = "Sabqponm\nabcryxxl\naccszExk\nacctuvwj\nabdefghi";

/// Breadth-first step count, independent of the A* machinery
pub fn bfs_len(grid: &HeightMap, source: CellId, target: CellId) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    let mut queue = VecDeque::from([source]);
    dist[source] = 0;
    while let Some(cell) = queue.pop_front() {
        if cell == target {
            return Some(dist[cell]);
        }
        for next in grid.neighbors(cell) {
            if dist[next] == usize::MAX {
                dist[next] = dist[cell] + 1;
                queue.push_back(next);
            }
        }
    }
    None
}

/// Height map with the given elevations; `start` is forced to 0 and `target` to 25
pub fn grid_with(width: usize, mut elevations: Vec<u8>, start: CellId, target: CellId) -> HeightMap {
    elevations[start] = 0;
    elevations[target] = 25;
    HeightMap::from_elevations(width, elevations, start, target).unwrap()
}
