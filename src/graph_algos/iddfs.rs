use crate::errors::SearchError;
use crate::collections::FxHashSet;

use std::{hash::Hash, fmt::Debug};


/// Iterative-Deepening Depth-First Search
/// https://en.wikipedia.org/wiki/Iterative_deepening_depth-first_search
/// Runs a depth-limited DFS for every limit in 0..=max_depth and returns the
/// first path found at the smallest limit
/// max_depth bounds the number of edges in the path, so the search always
/// terminates, even on infinite graphs
pub fn iddfs<N, IT, NN, G>(start: N, neighbors: NN, goal: G, max_depth: usize) -> Result<Vec<N>, SearchError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    for limit in 0..=max_depth {
        let (path, visited) = depth_limited(&start, &neighbors, &goal, limit);
        log::trace!("iddfs: limit {limit} visited {visited} nodes");

        if let Some(path) = path {
            log::debug!("iddfs: path of {} nodes at limit {limit}", path.len());
            return Ok(path);
        }
    }

    log::debug!("iddfs: no path within depth {max_depth}");
    Err(SearchError::NoPathFound)
}


/// Depth-limited DFS from start
/// A node is visited at most once per call, even when reachable along a
/// different branch with more depth remaining
/// Returns the path (if any) and the number of nodes visited
fn depth_limited<N, IT, NN, G>(start: &N, neighbors: &NN, goal_fn: &G, limit: usize) -> (Option<Vec<N>>, usize)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = N>,
    G: Fn(&N) -> bool,
{
    let mut visited: FxHashSet<N> = FxHashSet::default();
    visited.insert(start.clone());

    if goal_fn(start) {
        return (Some(vec![start.clone()]), visited.len());
    }
    if limit == 0 {
        return (None, visited.len());
    }

    // path[i] is the node at depth i; stack[i] holds its untried neighbors
    // The node at depth i has limit - i steps left
    let mut path: Vec<N> = vec![start.clone()];
    let mut stack: Vec<IT::IntoIter> = vec![neighbors(start).into_iter()];

    while let Some(children) = stack.last_mut() {

        let Some(child) = children.next() else {
            stack.pop();
            path.pop();
            continue;
        };

        if !visited.insert(child.clone()) {
            continue;
        }

        if goal_fn(&child) {
            path.push(child);
            return (Some(path), visited.len());
        }

        // Child sits at depth path.len() and has no steps left
        if path.len() == limit {
            continue;
        }

        stack.push(neighbors(&child).into_iter());
        path.push(child);
    }

    (None, visited.len())
}
