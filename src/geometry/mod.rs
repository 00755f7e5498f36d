use num_traits::Num;


/// Manhattan distance
/// Works for unsigned coordinates as well, the difference is taken from the larger side
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    abs_diff(x1, x2) + abs_diff(y1, y2)
}

fn abs_diff<T>(a: T, b: T) -> T
where
    T: Num + Copy + PartialOrd,
    {
    if a > b { a - b } else { b - a }
}


/// 2D grid coordinate, x is the column and y the row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Minimum number of axis-aligned unit steps between two coordinates
    pub fn manhattan(&self, other: &Coord) -> usize {
        manhattan_distance(self.x, self.y, other.x, other.y)
    }

    /// True when the two coordinates share an edge (4-neighborhood)
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.manhattan(other) == 1
    }
}
