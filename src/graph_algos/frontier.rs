use std::{cmp::Ordering, collections::BinaryHeap};

use num_traits::Bounded;

use crate::grid::CellId;


/// Entry on the open list
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest f first,
/// ties go to the smaller g, then to the earlier insertion
#[derive(Debug, Clone, Copy)]
pub struct Entry<C> {
    pub cell: CellId,
    pub g: C, // cost from the source
    pub f: C, // g + heuristic
    seq: u64,
}

impl<C: Ord> Ord for Entry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Ord> PartialOrd for Entry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for Entry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Ord> Eq for Entry<C> {}


/// Open set for best-first search over dense cell ids
///
/// A binary heap paired with a table of the best f pushed per cell.
/// Pushing a better f for a cell already on the heap acts as decrease-key:
/// the old entry stays behind and is discarded when it surfaces.
#[derive(Debug)]
pub struct Frontier<C> {
    heap: BinaryHeap<Entry<C>>,
    best: Vec<C>, // C::max_value() until the cell is first pushed
    open: Vec<bool>,
    live: usize,
    seq: u64,
}

impl<C> Frontier<C>
where
    C: Ord + Copy + Bounded,
{

    /// Frontier able to hold cell ids `0..cells`
    pub fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            best: vec![C::max_value(); cells],
            open: vec![false; cells],
            live: 0,
            seq: 0,
        }
    }

    /// Insert `cell`, or lower its priority if it is already present.
    /// Returns false when the cell already holds an equal or better f.
    pub fn push(&mut self, cell: CellId, g: C, f: C) -> bool {
        if f >= self.best[cell] {
            return false;
        }
        self.best[cell] = f;
        if !self.open[cell] {
            self.open[cell] = true;
            self.live += 1;
        }
        self.heap.push(Entry { cell, g, f, seq: self.seq });
        self.seq += 1;
        true
    }

    /// Remove and return the entry with the smallest f
    pub fn pop_min(&mut self) -> Option<Entry<C>> {
        while let Some(entry) = self.heap.pop() {
            // superseded by a later, cheaper push
            if !self.open[entry.cell] || entry.f != self.best[entry.cell] {
                continue;
            }
            self.open[entry.cell] = false;
            self.live -= 1;
            return Some(entry);
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of distinct open cells
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn contains(&self, cell: CellId) -> bool {
        self.open[cell]
    }

    /// Best f ever pushed for `cell`
    pub fn best_f(&self, cell: CellId) -> Option<C> {
        let f = self.best[cell];
        (f != C::max_value()).then_some(f)
    }
}
