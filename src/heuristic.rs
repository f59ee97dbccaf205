use num_traits::{Signed, Zero};


/// Heuristic that estimates nothing
/// Turns A* into Dijkstra and greedy best-first into insertion order search
pub fn zero<N, C: Zero>(_node: &N) -> C {
    C::zero()
}

/// Manhattan distance
/// Admissible for 4-connected grids with unit steps
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Signed + Copy,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Chebyshev distance
/// Admissible for 8-connected grids with unit steps
pub fn chebyshev_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Signed + Copy + Ord,
    {
    (x1 - x2).abs().max((y1 - y2).abs())
}
